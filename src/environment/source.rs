//! Where articles come from. The page only ever sees the `ArticleSource`
//! trait; the random one backs the app, the fixture one backs tests.
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::reactions::Reactions;
use crate::view_model::{Article, ArticleId};

const TITLES: [&str; 10] = [
    "Understanding React Hooks: A Comprehensive Guide",
    "The Future of Web Development in 2023",
    "CSS Grid vs Flexbox: When to Use Each",
    "TypeScript Best Practices for Large Applications",
    "Building Accessible Web Applications: A11y Fundamentals",
    "State Management Solutions Compared",
    "The Art of Code Review: Best Practices",
    "Microservices Architecture: Pros and Cons",
    "JavaScript Performance Optimization Techniques",
    "Responsive Design Patterns for Modern Web",
];

const EXCERPT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam in dui mauris. Vivamus hendrerit arcu sed erat molestie vehicula. Sed auctor neque eu tellus rhoncus ut eleifend nibh porttitor. Ut in nulla enim. Phasellus molestie magna non est bibendum non venenatis nisl tempor. Suspendisse dictum feugiat nisl ut dapibus. Mauris iaculis porttitor posuere. Praesent id metus massa, ut blandit odio.";

const MAX_AGE_DAYS: i64 = 30;
const MAX_SEED_REACTIONS: u32 = 50;

pub trait ArticleSource: Send + Sync {
    /// `total` articles with ids `0..total`
    fn articles(&self, total: usize, now: DateTime<Utc>) -> Vec<Article>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomArticleSource;

impl ArticleSource for RandomArticleSource {
    fn articles(&self, total: usize, now: DateTime<Utc>) -> Vec<Article> {
        let mut rng = rand::thread_rng();
        let max_age = Duration::days(MAX_AGE_DAYS).num_seconds();
        (0..total)
            .map(|index| {
                let title = TITLES[rng.gen_range(0..TITLES.len())];
                let age = Duration::seconds(rng.gen_range(0..max_age));
                Article {
                    id: ArticleId(index as u32),
                    title: title.to_string(),
                    excerpt: EXCERPT.to_string(),
                    date: now - age,
                    reactions: Reactions::from_fn(|_| rng.gen_range(0..MAX_SEED_REACTIONS)),
                }
            })
            .collect()
    }
}

/// Same input, same articles: titles cycle through the list, each article
/// is one day older than the previous, and nobody has reacted yet.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureArticleSource;

#[cfg(test)]
impl ArticleSource for FixtureArticleSource {
    fn articles(&self, total: usize, now: DateTime<Utc>) -> Vec<Article> {
        (0..total)
            .map(|index| Article {
                id: ArticleId(index as u32),
                title: TITLES[index % TITLES.len()].to_string(),
                excerpt: EXCERPT.to_string(),
                date: now - Duration::days(index as i64),
                reactions: Reactions::default(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactions::ReactionKind;
    use strum::IntoEnumIterator;

    #[test]
    fn random_articles_stay_in_range() {
        let now = Utc::now();
        let articles = RandomArticleSource.articles(23, now);
        assert_eq!(articles.len(), 23);
        for (index, article) in articles.iter().enumerate() {
            assert_eq!(article.id, ArticleId(index as u32));
            assert!(TITLES.contains(&article.title.as_str()));
            assert!(article.date <= now);
            assert!(now - article.date < Duration::days(MAX_AGE_DAYS));
            for kind in ReactionKind::iter() {
                assert!(article.reactions.count(kind) < MAX_SEED_REACTIONS);
            }
        }
    }

    #[test]
    fn fixtures_are_deterministic() {
        let now = Utc::now();
        let first = FixtureArticleSource.articles(12, now);
        assert_eq!(first, FixtureArticleSource.articles(12, now));
        assert_eq!(first[10].title, TITLES[0]);
        assert!(first.iter().all(|a| a.reactions.total() == 0));
    }

    #[test]
    fn the_excerpt_is_long_enough_to_collapse() {
        assert!(EXCERPT.chars().count() > 150);
    }
}
