//! Loading indicator

use dioxus::prelude::*;

/// Full-page loading spinner
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center",
            div {
                class: "w-8 h-8 border-4 border-emerald-200 border-t-emerald-600 rounded-full animate-spin"
            }
            p { class: "mt-4 text-sm text-gray-500", "Loading..." }
        }
    }
}
