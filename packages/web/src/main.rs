use dioxus::prelude::*;

use ui::views::UsersView;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "User Management System" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        UsersView {}
    }
}
