//! Root application component

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Praja Console" }
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Session context wraps the router so every page can gate on it
        AuthProvider {
            Router::<Route> {}
        }
    }
}
