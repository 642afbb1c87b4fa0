use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod api;
mod components;
mod state;

use components::{Chat, Style};

fn main() {
    dioxus_logger::init(Level::INFO).unwrap();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Style {}
        Chat {}
    }
}
