use dioxus::prelude::*;

mod labels;
pub use labels::*;

mod stacks;
pub use stacks::*;

mod spinner;
pub use spinner::*;

mod buttons;
pub use buttons::*;

mod reaction_button;
pub use reaction_button::*;

#[inline_props]
pub fn FormattedTime<'a>(
    cx: Scope<'a>,
    human_time: &'a str,
    full_time: &'a str,
) -> Element<'a> {
    cx.render(rsx!(
        Label {
            class: "time",
            style: TextStyle::Tertiary,
            title: "{full_time}",
            "{human_time}"
        }
    ))
}
