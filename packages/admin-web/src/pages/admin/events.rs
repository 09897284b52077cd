//! Admin events page: list plus create/edit form

use dioxus::prelude::*;

use praja_api_client::types::{EventItem, NewEventItem};

use crate::geo::{audience_summary, GeoAccess, GeoAccessSelector};
use crate::types::format_date;

/// Admin events list page with inline create/edit form
#[component]
pub fn AdminEvents() -> Element {
    let mut events = use_server_future(fetch_all_events)?;

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<EventItem>);

    let form_key = match editing() {
        Some(event) => format!("edit-{}", event.id),
        None => "new".to_string(),
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Events" }
                button {
                    class: "px-4 py-2 bg-emerald-700 text-white text-sm rounded-lg hover:bg-emerald-800",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "New Event"
                }
            }

            if show_form() {
                EventForm {
                    key: "{form_key}",
                    event: editing(),
                    on_saved: move |_| {
                        show_form.set(false);
                        editing.set(None);
                        events.restart();
                    },
                    on_cancel: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    }
                }
            }

            match events.value().as_ref().as_deref() {
                Some(Ok(events)) if !events.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                        for event in events.iter() {
                            div {
                                class: "p-4 hover:bg-gray-50 flex items-start justify-between",
                                div {
                                    class: "flex-1 min-w-0",
                                    h3 { class: "text-sm font-medium text-gray-900 truncate", "{event.title}" }
                                    if let Some(venue) = &event.venue {
                                        p { class: "text-sm text-gray-500", "{venue}" }
                                    }
                                    p {
                                        class: "text-xs text-gray-500 mt-1",
                                        "Starts {format_date(&event.starts_at)} \u{00b7} Audience: {audience_summary(&event.geo)}"
                                    }
                                }
                                button {
                                    class: "ml-4 px-3 py-1.5 bg-gray-100 text-gray-700 text-sm rounded hover:bg-gray-200",
                                    onclick: {
                                        let event = event.clone();
                                        move |_| {
                                            editing.set(Some(event.clone()));
                                            show_form.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No events scheduled." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading events: {e}"
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", "Loading..." }
                }
            }
        }
    }
}

#[component]
fn EventForm(
    event: Option<EventItem>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing_id = event.as_ref().map(|e| e.id);

    let initial_title = event.as_ref().map(|e| e.title.clone()).unwrap_or_default();
    let initial_description = event
        .as_ref()
        .and_then(|e| e.description.clone())
        .unwrap_or_default();
    let initial_venue = event
        .as_ref()
        .and_then(|e| e.venue.clone())
        .unwrap_or_default();
    let initial_starts_at = event
        .as_ref()
        .map(|e| e.starts_at.clone())
        .unwrap_or_default();
    let initial_ends_at = event
        .as_ref()
        .and_then(|e| e.ends_at.clone())
        .unwrap_or_default();
    let initial_geo = event
        .as_ref()
        .map(|e| GeoAccess::from_fields(&e.geo))
        .unwrap_or_else(GeoAccess::unrestricted);

    let mut title = use_signal(move || initial_title);
    let mut description = use_signal(move || initial_description);
    let mut venue = use_signal(move || initial_venue);
    let mut starts_at = use_signal(move || initial_starts_at);
    let mut ends_at = use_signal(move || initial_ends_at);
    let mut geo = use_signal(move || initial_geo);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |_: FormEvent| {
        if is_submitting() {
            return;
        }

        let description_value = description().trim().to_string();
        let venue_value = venue().trim().to_string();
        let ends_at_value = ends_at().trim().to_string();
        let payload = NewEventItem {
            title: title().trim().to_string(),
            description: if description_value.is_empty() {
                None
            } else {
                Some(description_value)
            },
            venue: if venue_value.is_empty() {
                None
            } else {
                Some(venue_value)
            },
            starts_at: starts_at().trim().to_string(),
            ends_at: if ends_at_value.is_empty() {
                None
            } else {
                Some(ends_at_value)
            },
            geo: geo().to_fields(),
        };

        if payload.title.is_empty() || payload.starts_at.is_empty() {
            error.set(Some("Title and start time are required".to_string()));
            return;
        }

        spawn(async move {
            is_submitting.set(true);
            error.set(None);

            let result = match editing_id {
                Some(id) => update_event_item(id, payload).await,
                None => create_event_item(payload).await,
            };

            match result {
                Ok(_) => on_saved.call(()),
                Err(e) => error.set(Some(e.to_string())),
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4 mb-6",
            onsubmit: handle_submit,

            h2 {
                class: "text-lg font-semibold text-gray-900",
                if editing_id.is_some() { "Edit Event" } else { "New Event" }
            }

            if let Some(err) = error() {
                div {
                    class: "bg-red-50 border border-red-200 text-red-700 p-3 rounded-lg text-sm",
                    "{err}"
                }
            }

            div {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "Title "
                    span { class: "text-red-500", "*" }
                }
                input {
                    r#type: "text",
                    value: "{title}",
                    oninput: move |e| title.set(e.value()),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                }
            }

            div {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "Description"
                }
                textarea {
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                    rows: "3",
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                div {
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-1",
                        "Venue"
                    }
                    input {
                        r#type: "text",
                        value: "{venue}",
                        oninput: move |e| venue.set(e.value()),
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                    }
                }
                div {
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-1",
                        "Starts "
                        span { class: "text-red-500", "*" }
                    }
                    input {
                        r#type: "datetime-local",
                        value: "{starts_at}",
                        oninput: move |e| starts_at.set(e.value()),
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                    }
                }
                div {
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-1",
                        "Ends"
                    }
                    input {
                        r#type: "datetime-local",
                        value: "{ends_at}",
                        oninput: move |e| ends_at.set(e.value()),
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                    }
                }
            }

            div {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "Audience"
                }
                GeoAccessSelector {
                    value: geo(),
                    on_change: move |next| geo.set(next),
                    disabled: is_submitting()
                }
            }

            div {
                class: "flex items-center gap-2",
                button {
                    r#type: "submit",
                    class: "px-4 py-2 bg-emerald-700 text-white text-sm rounded-lg hover:bg-emerald-800 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: is_submitting(),
                    if is_submitting() { "Saving..." } else { "Save Event" }
                }
                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-gray-100 text-gray-700 text-sm rounded-lg hover:bg-gray-200",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[server]
async fn fetch_all_events() -> Result<Vec<EventItem>, ServerFnError> {
    crate::api::backend_client()
        .list_events()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn create_event_item(event: NewEventItem) -> Result<EventItem, ServerFnError> {
    crate::api::backend_client()
        .create_event(&event)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn update_event_item(id: i64, event: NewEventItem) -> Result<EventItem, ServerFnError> {
    crate::api::backend_client()
        .update_event(id, &event)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
