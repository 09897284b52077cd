//! Public landing page

use dioxus::prelude::*;

use crate::routes::Route;

/// Minimal landing page; the console proper lives under /admin
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-emerald-50 to-white flex items-center justify-center px-4",
            div {
                class: "text-center",
                h1 {
                    class: "text-4xl font-bold text-gray-900 mb-3",
                    "Praja Console"
                }
                p {
                    class: "text-gray-600 mb-8",
                    "Administrative console for organization staff."
                }
                Link {
                    to: Route::AdminLogin {},
                    class: "px-6 py-3 bg-emerald-700 text-white rounded-lg hover:bg-emerald-800 transition-colors font-medium",
                    "Staff Login"
                }
            }
        }
    }
}
