use dioxus::prelude::Scope;
use dioxus_desktop::{LogicalSize, WindowBuilder};

pub fn default_window() -> WindowBuilder {
    let builder = WindowBuilder::new();
    let s = LogicalSize::new(900., 1000.);

    builder.with_title("Author Profile").with_inner_size(s)
}

pub fn execute_js_once<T>(cx: &Scope<'_, T>, js: &str) {
    let js = js.to_string();
    let single = dioxus::prelude::use_state(cx, || false);
    let ev = dioxus_desktop::use_eval(cx).clone();
    if !(*single.get()) {
        cx.push_future(async move {
            ev(js);
        });
        single.set(true);
    }
}
