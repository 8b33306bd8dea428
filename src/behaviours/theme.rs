use dioxus::prelude::*;

use crate::environment::types::Theme;
use navicula::Effect;

use super::Behaviour;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Toggle,
}

pub struct ThemeBehaviour {}

impl Behaviour for ThemeBehaviour {
    type InputAction = ThemeAction;
    type InputState = Theme;
    type Environment = crate::environment::Environment;

    fn setup<T>(cx: Scope<'_, T>, environment: &Self::Environment) {
        let theme = environment.config().theme;
        log::debug!("startup theme {theme}");
        crate::environment::platform::execute_js_once(&cx, &apply_script(None, theme));
    }

    fn handle<'b, OutputAction>(
        action: ThemeAction,
        state: &mut Theme,
        _environment: &Self::Environment,
    ) -> Effect<'b, OutputAction> {
        let new = match action {
            ThemeAction::Toggle => state.toggled(),
        };
        log::debug!("change theme: {state} -> {new}");
        let current = *state;
        *state = new;
        Effect::ui(apply_script(Some(current), new))
    }
}

fn apply_script(current: Option<Theme>, new: Theme) -> String {
    let remove = current
        .map(|theme| {
            format!(
                "document.documentElement.classList.remove(\"{}\");",
                theme.css_class()
            )
        })
        .unwrap_or_default();
    format!(
        r#"
        {remove}
        document.documentElement.classList.add("{}");
    "#,
        new.css_class()
    )
}
