//! Geographic access selector component
//!
//! Controlled component: the host form owns the `GeoAccess` value and passes
//! it in together with an `on_change` callback; every user action goes
//! through a pure model transition and the result is reported back up.
//!
//! Reference lists are loaded here: districts and parliamentary
//! constituencies once on mount, mandal and assembly options whenever their
//! parent selection changes (one request per selected parent, merged and
//! deduplicated). Each dependent refetch is tagged with an epoch; responses
//! arriving for a stale epoch are discarded, so a slow request can never
//! overwrite options for a newer selection.
//!
//! A failed lookup leaves its list as-is and logs; the picker just shows
//! "No options available". Nothing here surfaces an error to the host.

use dioxus::prelude::*;

use praja_api_client::regions::{AssemblyConstituency, District, Mandal, ParliamentaryConstituency};

use super::model::GeoAccess;
use super::options::{dedup_assemblies, dedup_mandals};
use super::server_fns::{
    fetch_assembly_constituencies, fetch_districts, fetch_mandals,
    fetch_parliamentary_constituencies,
};

#[component]
pub fn GeoAccessSelector(
    value: ReadOnlySignal<GeoAccess>,
    on_change: EventHandler<GeoAccess>,
    #[props(default = false)] disabled: bool,
) -> Element {
    // ------------------------------------------------------------------
    // Option lists, one loading flag each
    // ------------------------------------------------------------------

    let mut district_options = use_signal(Vec::<District>::new);
    let mut districts_loading = use_signal(|| true);

    let mut parliamentary_options = use_signal(Vec::<ParliamentaryConstituency>::new);
    let mut parliamentary_loading = use_signal(|| true);

    let mut mandal_options = use_signal(Vec::<Mandal>::new);
    let mut mandals_loading = use_signal(|| false);
    let mut mandal_epoch = use_signal(|| 0u64);

    let mut assembly_options = use_signal(Vec::<AssemblyConstituency>::new);
    let mut assemblies_loading = use_signal(|| false);
    let mut assembly_epoch = use_signal(|| 0u64);

    // Top-level lists are loaded once on mount.
    use_future(move || async move {
        match fetch_districts().await {
            Ok(list) => district_options.set(list),
            Err(e) => tracing::warn!("failed to load districts: {e}"),
        }
        districts_loading.set(false);
    });

    use_future(move || async move {
        match fetch_parliamentary_constituencies().await {
            Ok(list) => parliamentary_options.set(list),
            Err(e) => tracing::warn!("failed to load parliamentary constituencies: {e}"),
        }
        parliamentary_loading.set(false);
    });

    // Mandal options follow the district selection.
    let district_selection = use_memo(move || value().district_ids.clone());
    use_effect(move || {
        let district_ids = district_selection();
        let epoch = mandal_epoch.peek().wrapping_add(1);
        mandal_epoch.set(epoch);

        if district_ids.is_empty() {
            mandal_options.set(Vec::new());
            mandals_loading.set(false);
            return;
        }

        mandals_loading.set(true);
        spawn(async move {
            let mut merged = Vec::new();
            for district_id in district_ids {
                match fetch_mandals(district_id).await {
                    Ok(list) => merged.extend(list),
                    Err(e) => {
                        tracing::warn!("failed to load mandals for district {district_id}: {e}")
                    }
                }
            }
            // A newer selection superseded this fetch while it was in flight.
            if *mandal_epoch.peek() != epoch {
                return;
            }
            mandal_options.set(dedup_mandals(merged));
            mandals_loading.set(false);
        });
    });

    // Assembly options follow the parliamentary selection, same shape.
    let parliamentary_selection = use_memo(move || value().parliamentary_ids.clone());
    use_effect(move || {
        let parliamentary_ids = parliamentary_selection();
        let epoch = assembly_epoch.peek().wrapping_add(1);
        assembly_epoch.set(epoch);

        if parliamentary_ids.is_empty() {
            assembly_options.set(Vec::new());
            assemblies_loading.set(false);
            return;
        }

        assemblies_loading.set(true);
        spawn(async move {
            let mut merged = Vec::new();
            for parliamentary_id in parliamentary_ids {
                match fetch_assembly_constituencies(parliamentary_id).await {
                    Ok(list) => merged.extend(list),
                    Err(e) => tracing::warn!(
                        "failed to load assembly constituencies for {parliamentary_id}: {e}"
                    ),
                }
            }
            if *assembly_epoch.peek() != epoch {
                return;
            }
            assembly_options.set(dedup_assemblies(merged));
            assemblies_loading.set(false);
        });
    });

    // ------------------------------------------------------------------
    // Render
    // ------------------------------------------------------------------

    let current = value();

    let district_entries: Vec<(i64, String)> = district_options()
        .iter()
        .map(|d| (d.id, region_label(&d.name, d.local_name.as_deref())))
        .collect();
    let mandal_entries: Vec<(i64, String)> = mandal_options()
        .iter()
        .map(|m| (m.id, region_label(&m.name, m.local_name.as_deref())))
        .collect();
    let parliamentary_entries: Vec<(i64, String)> = parliamentary_options()
        .iter()
        .map(|p| (p.id, region_label(&p.name, p.local_name.as_deref())))
        .collect();
    let assembly_entries: Vec<(i64, String)> = assembly_options()
        .iter()
        .map(|a| (a.id, region_label(&a.name, a.local_name.as_deref())))
        .collect();

    rsx! {
        div {
            class: "border border-gray-200 rounded-lg p-4 space-y-4",

            // Post-to-all switch
            label {
                class: "flex items-center gap-2 text-sm font-medium text-gray-900",
                input {
                    r#type: "checkbox",
                    checked: current.post_to_all,
                    disabled,
                    onchange: move |e: FormEvent| {
                        on_change.call(value().set_post_to_all(e.checked()));
                    }
                }
                "Post to all of Telangana"
            }

            if !current.post_to_all {
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",

                    div {
                        class: "space-y-4",
                        p { class: "text-xs font-semibold text-gray-500 uppercase", "By district" }
                        RegionPicker {
                            title: "Districts",
                            entries: district_entries,
                            selected: current.district_ids.clone(),
                            loading: districts_loading(),
                            disabled: disabled || districts_loading(),
                            on_toggle: move |district_id| {
                                on_change.call(value().toggle_district(district_id, &mandal_options()));
                            }
                        }
                        RegionPicker {
                            title: "Mandals",
                            entries: mandal_entries,
                            selected: current.mandal_ids.clone(),
                            loading: mandals_loading(),
                            disabled: disabled
                                || mandals_loading()
                                || current.district_ids.is_empty(),
                            on_toggle: move |mandal_id| {
                                on_change.call(value().toggle_mandal(mandal_id));
                            }
                        }
                    }

                    div {
                        class: "space-y-4",
                        p { class: "text-xs font-semibold text-gray-500 uppercase", "By constituency" }
                        RegionPicker {
                            title: "Parliamentary constituencies",
                            entries: parliamentary_entries,
                            selected: current.parliamentary_ids.clone(),
                            loading: parliamentary_loading(),
                            disabled: disabled || parliamentary_loading(),
                            on_toggle: move |parliamentary_id| {
                                on_change.call(
                                    value().toggle_parliamentary(parliamentary_id, &assembly_options()),
                                );
                            }
                        }
                        RegionPicker {
                            title: "Assembly constituencies",
                            entries: assembly_entries,
                            selected: current.assembly_ids.clone(),
                            loading: assemblies_loading(),
                            disabled: disabled
                                || assemblies_loading()
                                || current.parliamentary_ids.is_empty(),
                            on_toggle: move |assembly_id| {
                                on_change.call(value().toggle_assembly(assembly_id));
                            }
                        }
                    }
                }

                p {
                    class: "text-xs text-gray-500",
                    "Selecting districts or mandals clears any constituency selection, and vice versa."
                }
            }
        }
    }
}

fn region_label(name: &str, local_name: Option<&str>) -> String {
    match local_name {
        Some(local) => format!("{} ({})", name, local),
        None => name.to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
struct RegionPickerProps {
    title: &'static str,
    entries: Vec<(i64, String)>,
    selected: Vec<i64>,
    loading: bool,
    disabled: bool,
    on_toggle: EventHandler<i64>,
}

/// One scrollable multi-select checkbox list.
#[component]
fn RegionPicker(props: RegionPickerProps) -> Element {
    rsx! {
        div {
            p { class: "text-sm font-medium text-gray-700 mb-1", "{props.title}" }
            div {
                class: "border border-gray-300 rounded-md max-h-48 overflow-y-auto divide-y divide-gray-100",

                if props.loading {
                    div {
                        class: "p-3 text-sm text-gray-500",
                        "Loading..."
                    }
                } else if props.entries.is_empty() {
                    div {
                        class: "p-3 text-sm text-gray-400",
                        "No options available"
                    }
                } else {
                    for (id, label) in props.entries.iter() {
                        label {
                            key: "{id}",
                            class: "flex items-center gap-2 px-3 py-1.5 text-sm text-gray-700 hover:bg-gray-50",
                            input {
                                r#type: "checkbox",
                                checked: props.selected.contains(id),
                                disabled: props.disabled,
                                onchange: {
                                    let id = *id;
                                    move |_| props.on_toggle.call(id)
                                }
                            }
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
