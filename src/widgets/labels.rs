use dioxus::prelude::*;

/// Text colour roles; each maps onto a theme variable in the stylesheet
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub enum TextStyle {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

impl TextStyle {
    fn as_css(&self) -> &'static str {
        match self {
            TextStyle::Primary => "label-primary",
            TextStyle::Secondary => "label-secondary",
            TextStyle::Tertiary => "label-tertiary",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PointerStyle {
    #[default]
    Default,
    Pointer,
}

impl PointerStyle {
    pub fn rule(&self) -> &'static str {
        match self {
            PointerStyle::Default => "cursor: default;",
            PointerStyle::Pointer => "cursor: pointer;",
        }
    }
}

/// A block of running text, e.g. an excerpt, a bio or a comment body
#[inline_props]
pub fn Paragraph<'a>(
    cx: Scope<'a>,
    style: Option<TextStyle>,
    class: Option<&'static str>,
    children: Element<'a>,
) -> Element<'a> {
    let style_class = style.unwrap_or_default().as_css();
    let class = class.unwrap_or_default();

    cx.render(rsx!(p {
        class: "{style_class} {class}",
        children
    }))
}

/// Short inline text: names, dates, counters
#[derive(Props)]
pub struct LabelProps<'a> {
    #[props(optional)]
    pub style: Option<TextStyle>,
    #[props(optional)]
    pub class: Option<&'static str>,
    /// Hover text
    #[props(optional)]
    pub title: Option<&'a str>,
    #[props(optional)]
    pub pointer_style: Option<PointerStyle>,
    pub children: Element<'a>,
}

pub fn Label<'a>(cx: Scope<'a, LabelProps<'a>>) -> Element<'a> {
    let style_class = cx.props.style.unwrap_or_default().as_css();
    let class = cx.props.class.unwrap_or_default();
    let pointer_style = cx.props.pointer_style.unwrap_or_default().rule();

    cx.render(rsx!(
        span {
            class: "{style_class} no-selection {class}",
            style: "{pointer_style}",
            title: cx.props.title,
            &cx.props.children
        }
    ))
}
