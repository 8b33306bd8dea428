use navicula::Effect;

use super::loading::{simulated_load, LoadTicket, LoadingGate};
use crate::behaviours::{Behaviour, ThemeAction, ThemeBehaviour};
use crate::components::pagination::{total_pages, PageWindow};
use crate::environment::types::{PageConfig, Theme};
use crate::environment::Environment;
use crate::reactions::{ActiveReactions, ReactionKind};
use crate::view_model::{Article, ArticleId, AuthorViewModel};

const SCROLL_TO_TOP: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

#[derive(Clone, Debug)]
pub enum Action {
    Initial,
    ChangePage(usize),
    LoadingFinished(LoadTicket),
    React(ArticleId, ReactionKind),
    Theme(ThemeAction),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub author: AuthorViewModel,
    /// Everything the author wrote. Pages are slices of this.
    pub articles: Vec<Article>,
    /// 1-based
    pub current_page: usize,
    pub page_size: usize,
    pub max_visible_pages: usize,
    pub excerpt_threshold: usize,
    pub user_reactions: ActiveReactions<ArticleId>,
    pub loading: LoadingGate,
    pub theme: Theme,
}

impl State {
    pub fn new(author: AuthorViewModel, config: &PageConfig) -> Self {
        Self {
            author,
            articles: Vec::new(),
            current_page: 1,
            page_size: config.page_size.max(1),
            max_visible_pages: config.max_visible_pages,
            excerpt_threshold: config.excerpt_threshold,
            user_reactions: ActiveReactions::default(),
            loading: LoadingGate::default(),
            theme: config.theme,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_pending()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.articles.len(), self.page_size)
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::with_max_visible(
            self.current_page,
            self.total_pages(),
            self.max_visible_pages,
        )
    }

    pub fn visible_articles(&self) -> &[Article] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= self.articles.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.articles.len());
        &self.articles[start..end]
    }

    /// Move to `page` (clamped). Returns the new page, or `None` if
    /// nothing changed.
    pub fn change_page(&mut self, page: usize) -> Option<usize> {
        let page = self.window().request(page)?;
        self.current_page = page;
        Some(page)
    }

    /// Toggle the viewer's reaction on an article. `false` if there is no
    /// such article.
    pub fn react(&mut self, id: ArticleId, kind: ReactionKind) -> bool {
        let Some(article) = self.articles.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        self.user_reactions.toggle(id, kind, &mut article.reactions);
        true
    }
}

pub fn reduce<'a>(
    _context: &'a impl navicula::types::MessageContext<Action, Action, Action>,
    action: Action,
    state: &'a mut State,
    environment: &'a Environment,
) -> Effect<'static, Action> {
    log::trace!("{action:?}");
    match action {
        Action::Initial => {
            state.articles = environment.generate_articles();
            state.current_page = 1;
            return begin_loading(state, environment);
        }
        Action::ChangePage(page) => {
            let Some(page) = state.change_page(page) else {
                log::debug!("already on page {}", state.current_page);
                return Effect::NONE;
            };
            log::debug!("show page {page} of {}", state.total_pages());
            return Effect::merge2(
                begin_loading(state, environment),
                Effect::ui(SCROLL_TO_TOP.to_string()),
            );
        }
        Action::LoadingFinished(ticket) => {
            if !state.loading.finish(ticket) {
                log::debug!("ignoring superseded load {ticket:?}");
            }
        }
        Action::React(id, kind) => {
            if !state.react(id, kind) {
                log::warn!("reaction for unknown article {id}");
            }
        }
        Action::Theme(action) => {
            return ThemeBehaviour::handle(action, &mut state.theme, environment);
        }
    }
    Effect::NONE
}

fn begin_loading(state: &mut State, environment: &Environment) -> Effect<'static, Action> {
    let ticket = state.loading.begin();
    let delay = environment.config().loading_delay();
    Effect::future(simulated_load(ticket, delay), Action::LoadingFinished)
}
