//! toast web - Reference app for the toast widget
//!
//! Three buttons that raise Success, Danger and Info toasts. The auto-close
//! delay can be overridden with `?delay=<ms>`.

mod pages;

use dioxus::prelude::*;
use pages::Home;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:delay")]
    Home { delay: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

fn main() {
    dioxus::launch(App);
}
