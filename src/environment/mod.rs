pub mod platform;
pub mod repository;
pub mod source;
pub mod types;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use navicula::types::EnvironmentType;

pub use repository::Repository;
use source::{ArticleSource, RandomArticleSource};
use types::PageConfig;

use crate::view_model::{Article, AuthorViewModel, Viewer};

#[derive(Clone)]
pub struct Environment {
    pub repository: Repository,
    pub source: Arc<dyn ArticleSource>,
    pub author: AuthorViewModel,
    pub viewer: Viewer,
    /// The one clock every timestamp and relative time is taken from
    clock: fn() -> DateTime<Utc>,
}

impl EnvironmentType for Environment {
    type AppEvent = ();
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("config", self.repository.config())
            .field("viewer", &self.viewer.name)
            .finish()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Repository::new(), Arc::new(RandomArticleSource))
    }
}

impl Environment {
    pub fn new(repository: Repository, source: Arc<dyn ArticleSource>) -> Self {
        Self {
            repository,
            source,
            author: AuthorViewModel::default(),
            viewer: Viewer::default(),
            clock: Utc::now,
        }
    }

    pub fn config(&self) -> &PageConfig {
        self.repository.config()
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn generate_articles(&self) -> Vec<Article> {
        let total = self.config().total_articles;
        let articles = self.source.articles(total, self.now());
        log::debug!("generated {} articles", articles.len());
        articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use source::FixtureArticleSource;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap()
    }

    fn environment() -> Environment {
        Environment::new(Repository::default(), Arc::new(FixtureArticleSource)).with_clock(noon)
    }

    #[test]
    fn articles_are_dated_by_the_environment_clock() {
        let articles = environment().generate_articles();
        assert_eq!(articles.len(), PageConfig::default().total_articles);
        assert_eq!(articles[0].date, noon());
    }

    #[test]
    fn comments_are_stamped_by_the_environment_clock() {
        use crate::components::article_card::State;
        use crate::view_model::ArticleId;

        let environment = environment();
        let mut card = State::new(ArticleId(0));
        card.comment_text = "first".to_string();
        let id = card
            .submit_comment(&environment.viewer, environment.now())
            .unwrap();
        assert_eq!(card.thread.comment(id).unwrap().created, noon());
    }
}
