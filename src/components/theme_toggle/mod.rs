use dioxus::prelude::*;

use crate::environment::types::Theme;
use crate::icons::{THEME_DARK, THEME_LIGHT};
use crate::loc;

/// Asks to switch between the light and the dark theme. The handle sits
/// on the side of the active theme.
#[inline_props]
pub fn ThemeToggle<'a>(cx: Scope<'a>, theme: Theme, ontoggle: EventHandler<'a, ()>) -> Element<'a> {
    let state = theme.css_class();
    let label = if theme.is_light() {
        loc!("Switch to dark mode")
    } else {
        loc!("Switch to light mode")
    };
    render! {
        button {
            r#type: "button",
            class: "theme-toggle {state}",
            title: "{label}",
            onclick: move |_| ontoggle.call(()),
            div { class: "toggle-handle" }
            span { class: "sun", "{THEME_LIGHT}" }
            span { class: "moon", "{THEME_DARK}" }
        }
    }
}
