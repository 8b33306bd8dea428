use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

/// Flex container props shared by [`VStack`] and [`HStack`]
#[derive(Props)]
pub struct StackProps<'a> {
    #[props(optional)]
    pub class: Option<&'a str>,
    /// Leave a small gap between the children
    #[props(optional)]
    pub spaced: Option<bool>,
    /// Center the children on the cross axis
    #[props(optional)]
    pub centered: Option<bool>,
    pub children: Element<'a>,
}

fn stack_class(axis: Axis, props: &StackProps<'_>) -> String {
    let mut classes = vec![match axis {
        Axis::Vertical => "vstack",
        Axis::Horizontal => "hstack",
    }];
    if props.spaced.unwrap_or_default() {
        classes.push("gap-2");
    }
    if props.centered.unwrap_or_default() {
        classes.push("align-items-center");
    }
    if let Some(class) = props.class.filter(|class| !class.is_empty()) {
        classes.push(class);
    }
    classes.join(" ")
}

pub fn VStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element {
    let class = stack_class(Axis::Vertical, cx.props);
    cx.render(rsx!(
        div { class: "{class}", &cx.props.children }
    ))
}

pub fn HStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element {
    let class = stack_class(Axis::Horizontal, cx.props);
    cx.render(rsx!(
        div { class: "{class}", &cx.props.children }
    ))
}
