use dioxus::prelude::*;
use navicula::Effect;

mod theme;
pub use theme::{ThemeAction, ThemeBehaviour};

/// Cross-cutting UI behaviour that a reducer delegates a slice of its
/// actions and state to
pub trait Behaviour {
    type InputAction;
    type Environment;
    type InputState;
    fn setup<T>(cx: Scope<'_, T>, environment: &Self::Environment);
    fn handle<'b, OutputAction>(
        action: Self::InputAction,
        state: &mut Self::InputState,
        environment: &Self::Environment,
    ) -> Effect<'b, OutputAction>;
}
