use super::{Label, PointerStyle};
use dioxus::prelude::*;

/// Clickable text without button chrome, e.g. "Read more" or "Reply"
#[derive(Props)]
pub struct TextButtonProps<'a, S: AsRef<str>, ST: AsRef<str>> {
    pub text: S,
    pub title: ST,
    #[props(optional)]
    pub class: Option<&'a str>,
    pub onclick: EventHandler<'a, MouseEvent>,
}

pub fn TextButton<'a, S: AsRef<str>, ST: AsRef<str>>(
    cx: Scope<'a, TextButtonProps<'a, S, ST>>,
) -> Element {
    let class = cx.props.class.unwrap_or("");
    let rule = PointerStyle::Pointer.rule();
    cx.render(rsx!(
        div {
            style: "{rule}",
            class: "text-button {class}",
            title: "{cx.props.title.as_ref()}",
            onclick: move |e| cx.props.onclick.call(e),
            Label { pointer_style: PointerStyle::Pointer, "{cx.props.text.as_ref()}" }
        }
    ))
}

/// A plain `button` element carrying a label; `primary` ones stand out
#[inline_props]
pub fn ActionButton<'a>(
    cx: Scope<'a>,
    text: &'a str,
    primary: Option<bool>,
    onclick: EventHandler<'a, MouseEvent>,
) -> Element<'a> {
    let highlighted = if primary.unwrap_or_default() {
        "highlighted"
    } else {
        ""
    };
    cx.render(rsx!(
        button {
            r#type: "button",
            class: "button {highlighted}",
            onclick: move |e| onclick.call(e),
            "{text}"
        }
    ))
}
