use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use ui::views::UsersView;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dioxus installs its own logger if none is set yet
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    tracing::info!("starting user management desktop app");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        UsersView {}
    }
}
