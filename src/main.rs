use dioxus::prelude::*;

mod api;
mod components;
mod player;
mod settings;

use components::AppRoot;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#121212" }
        document::Title { "Songshelf" }
        document::Stylesheet { href: APP_CSS }

        AppRoot {}
    }
}
