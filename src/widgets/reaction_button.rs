use dioxus::prelude::*;

use crate::reactions::{ReactionKind, Reactions};

#[inline_props]
pub fn ReactionButton<'a>(
    cx: Scope<'a>,
    kind: ReactionKind,
    count: u32,
    active: bool,
    compact: Option<bool>,
    onclick: EventHandler<'a, ReactionKind>,
) -> Element<'a> {
    let compact = compact.unwrap_or_default();
    let active_class = if *active { "active" } else { "" };
    let compact_class = if compact { "compact" } else { "" };
    let label = kind.as_ref();
    let emoji = kind.emoji();
    // compact rows leave unused kinds without a number
    let show_count = !compact || *count > 0;
    cx.render(rsx!(
        button {
            r#type: "button",
            class: "reaction-button {active_class} {compact_class}",
            title: "{label}",
            onclick: move |_| onclick.call(*kind),
            span { class: "emoji", "{emoji}" }
            show_count.then(|| rsx!(span { class: "count", "{count}" }))
        }
    ))
}

#[derive(Props)]
pub struct ReactionRowProps<'a> {
    pub reactions: Reactions,
    #[props(!optional)]
    pub active: Option<ReactionKind>,
    #[props(optional)]
    pub compact: Option<bool>,
    pub onreact: EventHandler<'a, ReactionKind>,
}

/// One button per reaction kind, in display order
pub fn ReactionRow<'a>(cx: Scope<'a, ReactionRowProps<'a>>) -> Element<'a> {
    let compact = cx.props.compact.unwrap_or_default();
    let active = cx.props.active;
    cx.render(rsx!(
        div { class: "hstack reactions",
            cx.props.reactions.iter().map(|(kind, count)| rsx!(
                ReactionButton {
                    key: "{kind.as_ref()}",
                    kind: kind,
                    count: count,
                    active: active == Some(kind),
                    compact: compact,
                    onclick: move |kind| cx.props.onreact.call(kind),
                }
            ))
        }
    ))
}
