//! Admin layout wrapper with auth protection

use dioxus::prelude::*;

use super::{AdminNav, LoadingSpinner};
use crate::auth::use_auth;
use crate::routes::Route;

/// Admin layout component that provides navigation and auth protection
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();

    if auth.loading.read().clone() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-100",
                LoadingSpinner {}
            }
        };
    }

    // Redirect if not authenticated or not an admin
    if !auth.is_authenticated() {
        navigator().replace(Route::AdminLogin {});
        return rsx! {};
    }

    if !auth.is_admin() {
        navigator().replace(Route::Home {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            AdminNav {}

            main {
                class: "p-6",
                Outlet::<Route> {}
            }
        }
    }
}
