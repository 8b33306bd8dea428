//! One article: excerpt, reactions and the comment thread below it
mod reducer;
mod thread;
mod view;

pub use reducer::{Action, DelegateMessage, State, ViewStore};
pub use thread::CommentThread;
pub use view::ArticleCard;

pub struct ArticleCardReducer;
use navicula::reducer::Reducer;

impl Reducer for ArticleCardReducer {
    type Message = ();

    type DelegateMessage = reducer::DelegateMessage;

    type Action = reducer::Action;

    type State = reducer::State;

    type Environment = crate::environment::Environment;

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
        None
    }
}
