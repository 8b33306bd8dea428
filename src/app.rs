#![allow(non_snake_case)]

use crate::environment::Environment;
use dioxus::prelude::*;

use crate::environment::platform::default_window;

use crate::style::STYLE;

use dioxus_desktop::Config;

pub fn run() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();

    let style = STYLE;
    let config = Config::new()
        .with_custom_head(format!(
            r#"
        <title>Author Profile</title>
        <style>{style}</style>
        "#
        ))
        .with_window(default_window());

    dioxus_desktop::launch_with_props(RootApp, RootAppProps {}, config);
}

pub struct RootAppProps {}

pub fn RootApp(cx: Scope<'_, RootAppProps>) -> Element<'_> {
    log::trace!("rerender root-app");
    let environment_state = use_state(cx, Environment::default);
    cx.use_hook(|| log::info!("starting with {:?}", environment_state.get()));

    cx.render(rsx! {
        crate::components::author_page::AuthorPageApp {
            environment: environment_state,
        }
    })
}
