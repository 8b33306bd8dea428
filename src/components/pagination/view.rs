use dioxus::prelude::*;

use super::PageWindow;
use crate::loc;
use crate::widgets::*;

#[inline_props]
pub fn PaginationComponent<'a>(
    cx: Scope<'a>,
    window: PageWindow,
    onchange: EventHandler<'a, usize>,
) -> Element<'a> {
    let current = window.current();
    let total = window.total();
    let prev_disabled = if window.has_previous() { "false" } else { "true" };
    let next_disabled = if window.has_next() { "false" } else { "true" };

    render! {
        HStack { class: "pagination",
            button {
                r#type: "button",
                disabled: prev_disabled,
                onclick: move |_| onchange.call(current.saturating_sub(1)),
                loc!("« Prev")
            }
            window.shows_first().then(|| rsx!(
                button {
                    r#type: "button",
                    onclick: move |_| onchange.call(1),
                    "1"
                }
            )),
            window.leading_ellipsis().then(|| rsx!(
                span { class: "ellipsis", "..." }
            )),
            window.pages().map(|page| {
                let active = if page == current { "active" } else { "" };
                rsx!(
                    button {
                        key: "{page}",
                        r#type: "button",
                        class: "{active}",
                        onclick: move |_| onchange.call(page),
                        "{page}"
                    }
                )
            }),
            window.trailing_ellipsis().then(|| rsx!(
                span { class: "ellipsis", "..." }
            )),
            window.shows_last().then(|| rsx!(
                button {
                    r#type: "button",
                    onclick: move |_| onchange.call(total),
                    "{total}"
                }
            )),
            button {
                r#type: "button",
                disabled: next_disabled,
                onclick: move |_| onchange.call(current + 1),
                loc!("Next »")
            }
        }
    }
}
