//! Admin regions page: read-only browser for the geographic reference data
//!
//! Reference data itself is maintained server-side; this page only inspects
//! what the selector will offer.

use dioxus::prelude::*;

use praja_api_client::regions::{AssemblyConstituency, Mandal};

use crate::geo::server_fns::{
    fetch_assembly_constituencies, fetch_districts, fetch_mandals,
    fetch_parliamentary_constituencies,
};

/// Reference-region browser
#[component]
pub fn AdminRegions() -> Element {
    let districts = use_server_future(fetch_districts)?;
    let parliamentary = use_server_future(fetch_parliamentary_constituencies)?;

    let mut selected_district = use_signal(|| None::<i64>);
    let mut mandals = use_signal(Vec::<Mandal>::new);
    let mut mandals_loading = use_signal(|| false);

    let mut selected_parliamentary = use_signal(|| None::<i64>);
    let mut assemblies = use_signal(Vec::<AssemblyConstituency>::new);
    let mut assemblies_loading = use_signal(|| false);

    let mut handle_pick_district = move |district_id: i64| {
        selected_district.set(Some(district_id));
        mandals_loading.set(true);
        spawn(async move {
            match fetch_mandals(district_id).await {
                Ok(list) => mandals.set(list),
                Err(e) => tracing::warn!("failed to load mandals for district {district_id}: {e}"),
            }
            mandals_loading.set(false);
        });
    };

    let mut handle_pick_parliamentary = move |parliamentary_id: i64| {
        selected_parliamentary.set(Some(parliamentary_id));
        assemblies_loading.set(true);
        spawn(async move {
            match fetch_assembly_constituencies(parliamentary_id).await {
                Ok(list) => assemblies.set(list),
                Err(e) => {
                    tracing::warn!("failed to load assembly constituencies for {parliamentary_id}: {e}")
                }
            }
            assemblies_loading.set(false);
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Regions" }

            div {
                class: "grid grid-cols-1 lg:grid-cols-2 gap-6",

                // District hierarchy
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",
                    h2 { class: "text-lg font-semibold text-gray-900 mb-3", "Districts & Mandals" }
                    match districts.value().as_ref().as_deref() {
                        Some(Ok(districts)) => rsx! {
                            div {
                                class: "space-y-1 max-h-96 overflow-y-auto",
                                for district in districts.iter() {
                                    button {
                                        key: "{district.id}",
                                        class: if selected_district() == Some(district.id) {
                                            "w-full text-left px-3 py-1.5 rounded text-sm bg-emerald-100 text-emerald-800"
                                        } else {
                                            "w-full text-left px-3 py-1.5 rounded text-sm text-gray-700 hover:bg-gray-100"
                                        },
                                        onclick: {
                                            let id = district.id;
                                            move |_| handle_pick_district(id)
                                        },
                                        "{district.name}"
                                    }
                                }
                            }
                        },
                        Some(Err(e)) => rsx! {
                            p { class: "text-sm text-red-600", "Error: {e}" }
                        },
                        None => rsx! {
                            p { class: "text-sm text-gray-500", "Loading..." }
                        }
                    }

                    if selected_district().is_some() {
                        div {
                            class: "mt-4 border-t border-gray-100 pt-3",
                            h3 { class: "text-sm font-medium text-gray-700 mb-2", "Mandals" }
                            if mandals_loading() {
                                p { class: "text-sm text-gray-500", "Loading..." }
                            } else if mandals().is_empty() {
                                p { class: "text-sm text-gray-400", "No options available" }
                            } else {
                                ul {
                                    class: "text-sm text-gray-600 space-y-1 max-h-48 overflow-y-auto",
                                    for mandal in mandals().iter() {
                                        li { key: "{mandal.id}", "{mandal.name}" }
                                    }
                                }
                            }
                        }
                    }
                }

                // Constituency hierarchy
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4",
                    h2 { class: "text-lg font-semibold text-gray-900 mb-3", "Constituencies" }
                    match parliamentary.value().as_ref().as_deref() {
                        Some(Ok(list)) => rsx! {
                            div {
                                class: "space-y-1 max-h-96 overflow-y-auto",
                                for constituency in list.iter() {
                                    button {
                                        key: "{constituency.id}",
                                        class: if selected_parliamentary() == Some(constituency.id) {
                                            "w-full text-left px-3 py-1.5 rounded text-sm bg-emerald-100 text-emerald-800"
                                        } else {
                                            "w-full text-left px-3 py-1.5 rounded text-sm text-gray-700 hover:bg-gray-100"
                                        },
                                        onclick: {
                                            let id = constituency.id;
                                            move |_| handle_pick_parliamentary(id)
                                        },
                                        "{constituency.name}"
                                    }
                                }
                            }
                        },
                        Some(Err(e)) => rsx! {
                            p { class: "text-sm text-red-600", "Error: {e}" }
                        },
                        None => rsx! {
                            p { class: "text-sm text-gray-500", "Loading..." }
                        }
                    }

                    if selected_parliamentary().is_some() {
                        div {
                            class: "mt-4 border-t border-gray-100 pt-3",
                            h3 { class: "text-sm font-medium text-gray-700 mb-2", "Assembly constituencies" }
                            if assemblies_loading() {
                                p { class: "text-sm text-gray-500", "Loading..." }
                            } else if assemblies().is_empty() {
                                p { class: "text-sm text-gray-400", "No options available" }
                            } else {
                                ul {
                                    class: "text-sm text-gray-600 space-y-1 max-h-48 overflow-y-auto",
                                    for assembly in assemblies().iter() {
                                        li { key: "{assembly.id}", "{assembly.name}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
