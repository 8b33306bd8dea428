use dioxus::prelude::*;

/// Placeholder cards shown while a page is "loading"
#[inline_props]
pub fn LoadingSkeletons(cx: Scope, count: usize) -> Element {
    cx.render(rsx!(
        div { class: "loading-skeletons vstack gap-2",
            (0..*count).map(|index| rsx!(div { key: "{index}", class: "loader" }))
        }
    ))
}
