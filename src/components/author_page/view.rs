use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use navicula::reducer::{ChildReducer, Reducer};
use navicula::root;

use super::reducer::{Action, State};
use super::{AuthorPageReducer, ViewStore};
use crate::behaviours::{Behaviour, ThemeAction, ThemeBehaviour};
use crate::components::article_card::{
    ArticleCard, ArticleCardReducer, DelegateMessage, State as ArticleCardState,
};
use crate::components::author_profile::AuthorProfile;
use crate::components::pagination::PaginationComponent;
use crate::components::theme_toggle::ThemeToggle;
use crate::environment::Environment;
use crate::loc;
use crate::widgets::*;

#[inline_props]
pub fn AuthorPageApp<'a>(cx: Scope<'a>, environment: &'a UseState<Environment>) -> Element<'a> {
    log::trace!("rerender author-page");
    let (_sender, receiver) = cx.use_hook(flume::unbounded);

    ThemeBehaviour::setup(cx, environment.get());

    let view_store: ViewStore = root(cx, &[receiver.clone()], environment.get(), || {
        State::new(environment.author.clone(), environment.config())
    });
    let content_store = view_store.clone();
    let now = environment.now();

    render! {
        div { class: "author-page vstack gap-2",
            HStack { class: "page-header", centered: true,
                h1 { class: "grow", loc!("Author Profile") }
                ThemeToggle {
                    theme: view_store.theme,
                    ontoggle: move |_| view_store.send(Action::Theme(ThemeAction::Toggle)),
                }
            }
            PageContent { store: content_store, now: now }
        }
    }
}

impl ChildReducer<AuthorPageReducer> for ArticleCardReducer {
    fn to_child(
        _message: <AuthorPageReducer as Reducer>::Message,
    ) -> Option<<Self as Reducer>::Action> {
        None
    }

    fn from_child(
        message: <Self as Reducer>::DelegateMessage,
    ) -> Option<<AuthorPageReducer as Reducer>::Action> {
        match message {
            DelegateMessage::React(id, kind) => Some(Action::React(id, kind)),
        }
    }
}

#[inline_props]
fn PageContent<'a>(
    cx: Scope<'a>,
    store: ViewStore<'a>,
    now: DateTime<Utc>,
) -> Element<'a> {
    log::trace!("rerender page content {}", store.current_page);
    if store.is_loading() {
        return render! {
            LoadingSkeletons { count: store.page_size }
        };
    }

    let threshold = store.excerpt_threshold;
    render! {
        AuthorProfile { author: &store.author }
        VStack { class: "articles", spaced: true,
            h2 { loc!("Recent Articles") }
            store.visible_articles().iter().map(|article| rsx!(
                ArticleCard {
                    key: "{article.id}",
                    store: store.host_with(cx, &article.id, ArticleCardState::new),
                    article: article,
                    active: store.user_reactions.active(&article.id),
                    excerpt_threshold: threshold,
                    now: *now,
                }
            ))
        }
        PaginationComponent {
            window: store.window(),
            onchange: move |page| store.send(Action::ChangePage(page)),
        }
    }
}
