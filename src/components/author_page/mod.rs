//! The page itself: author header, the current page of articles and the
//! pagination below them
mod loading;
pub mod reducer;
pub mod view;

use crate::environment::Environment;
use reducer::State;

pub use loading::{LoadTicket, LoadingGate};
pub use reducer::Action;
pub use view::AuthorPageApp;

type ViewStore<'a> = navicula::ViewStore<'a, AuthorPageReducer>;

pub struct AuthorPageReducer;
use navicula::reducer::Reducer;

impl Reducer for AuthorPageReducer {
    type Message = Action;

    type DelegateMessage = Action;

    type Action = Action;

    type State = State;

    type Environment = Environment;

    fn reduce<'a, 'b>(
        context: &'a impl navicula::types::MessageContext<
            Self::Action,
            Self::DelegateMessage,
            Self::Message,
        >,
        action: Self::Action,
        state: &'a mut Self::State,
        environment: &'a Self::Environment,
    ) -> navicula::effect::Effect<'b, Self::Action> {
        reducer::reduce(context, action, state, environment)
    }

    fn initial_action() -> Option<Self::Action> {
        Some(Action::Initial)
    }
}
