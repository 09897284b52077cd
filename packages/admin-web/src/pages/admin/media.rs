//! Admin media page: list plus create/edit form

use dioxus::prelude::*;

use praja_api_client::types::{MediaItem, MediaKind, NewMediaItem};

use crate::geo::{audience_summary, GeoAccess, GeoAccessSelector};
use crate::types::format_date;

/// Admin media list page with inline create/edit form
#[component]
pub fn AdminMedia() -> Element {
    let mut items = use_server_future(fetch_all_media)?;

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<MediaItem>);

    let form_key = match editing() {
        Some(item) => format!("edit-{}", item.id),
        None => "new".to_string(),
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Media" }
                button {
                    class: "px-4 py-2 bg-emerald-700 text-white text-sm rounded-lg hover:bg-emerald-800",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "New Media Item"
                }
            }

            if show_form() {
                MediaForm {
                    key: "{form_key}",
                    item: editing(),
                    on_saved: move |_| {
                        show_form.set(false);
                        editing.set(None);
                        items.restart();
                    },
                    on_cancel: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    }
                }
            }

            match items.value().as_ref().as_deref() {
                Some(Ok(items)) if !items.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                        for item in items.iter() {
                            div {
                                class: "p-4 hover:bg-gray-50 flex items-start justify-between",
                                div {
                                    class: "flex-1 min-w-0",
                                    div {
                                        class: "flex items-center gap-2",
                                        span {
                                            class: "px-2 py-0.5 rounded text-xs font-medium bg-gray-100 text-gray-600",
                                            "{item.kind.label()}"
                                        }
                                        h3 { class: "text-sm font-medium text-gray-900 truncate", "{item.title}" }
                                    }
                                    p {
                                        class: "text-xs text-gray-500 mt-1",
                                        "{format_date(&item.created_at)} \u{00b7} Audience: {audience_summary(&item.geo)}"
                                    }
                                }
                                button {
                                    class: "ml-4 px-3 py-1.5 bg-gray-100 text-gray-700 text-sm rounded hover:bg-gray-200",
                                    onclick: {
                                        let item = item.clone();
                                        move |_| {
                                            editing.set(Some(item.clone()));
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
                        p { class: "text-gray-500", "No media yet." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading media: {e}"
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
fn MediaForm(
    item: Option<MediaItem>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing_id = item.as_ref().map(|i| i.id);

    let initial_kind = item.as_ref().map(|i| i.kind).unwrap_or(MediaKind::Photo);
    let initial_title = item.as_ref().map(|i| i.title.clone()).unwrap_or_default();
    let initial_url = item.as_ref().map(|i| i.url.clone()).unwrap_or_default();
    let initial_thumbnail = item
        .as_ref()
        .and_then(|i| i.thumbnail_url.clone())
        .unwrap_or_default();
    let initial_geo = item
        .as_ref()
        .map(|i| GeoAccess::from_fields(&i.geo))
        .unwrap_or_else(GeoAccess::unrestricted);

    let mut kind = use_signal(move || initial_kind);
    let mut title = use_signal(move || initial_title);
    let mut url = use_signal(move || initial_url);
    let mut thumbnail_url = use_signal(move || initial_thumbnail);
    let mut geo = use_signal(move || initial_geo);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |_: FormEvent| {
        if is_submitting() {
            return;
        }

        let thumbnail_value = thumbnail_url().trim().to_string();
        let payload = NewMediaItem {
            kind: kind(),
            title: title().trim().to_string(),
            url: url().trim().to_string(),
            thumbnail_url: if thumbnail_value.is_empty() {
                None
            } else {
                Some(thumbnail_value)
            },
            geo: geo().to_fields(),
        };

        if payload.title.is_empty() || payload.url.is_empty() {
            error.set(Some("Title and URL are required".to_string()));
            return;
        }

        spawn(async move {
            is_submitting.set(true);
            error.set(None);

            let result = match editing_id {
                Some(id) => update_media_item(id, payload).await,
                None => create_media_item(payload).await,
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
                if editing_id.is_some() { "Edit Media Item" } else { "New Media Item" }
            }

            if let Some(err) = error() {
                div {
                    class: "bg-red-50 border border-red-200 text-red-700 p-3 rounded-lg text-sm",
                    "{err}"
                }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                div {
                    label {
                        class: "block text-sm font-medium text-gray-700 mb-1",
                        "Kind"
                    }
                    select {
                        value: if kind() == MediaKind::Photo { "photo" } else { "video" },
                        onchange: move |e: FormEvent| {
                            kind.set(if e.value() == "video" {
                                MediaKind::Video
                            } else {
                                MediaKind::Photo
                            });
                        },
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500",
                        option { value: "photo", "Photo" }
                        option { value: "video", "Video" }
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
            }

            div {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "URL "
                    span { class: "text-red-500", "*" }
                }
                input {
                    r#type: "url",
                    value: "{url}",
                    oninput: move |e| url.set(e.value()),
                    placeholder: "https://storage.example.org/media/rally.jpg",
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                }
            }

            div {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "Thumbnail URL"
                }
                input {
                    r#type: "url",
                    value: "{thumbnail_url}",
                    oninput: move |e| thumbnail_url.set(e.value()),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
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
                    if is_submitting() { "Saving..." } else { "Save Media Item" }
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
async fn fetch_all_media() -> Result<Vec<MediaItem>, ServerFnError> {
    crate::api::backend_client()
        .list_media()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn create_media_item(item: NewMediaItem) -> Result<MediaItem, ServerFnError> {
    crate::api::backend_client()
        .create_media(&item)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn update_media_item(id: i64, item: NewMediaItem) -> Result<MediaItem, ServerFnError> {
    crate::api::backend_client()
        .update_media(id, &item)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
