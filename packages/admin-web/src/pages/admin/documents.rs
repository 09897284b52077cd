//! Admin documents page: list plus create/edit form

use dioxus::prelude::*;

use praja_api_client::types::{DocumentItem, NewDocumentItem};

use crate::geo::{audience_summary, GeoAccess, GeoAccessSelector};
use crate::types::format_date;

/// Admin documents list page with inline create/edit form
#[component]
pub fn AdminDocuments() -> Element {
    let mut documents = use_server_future(fetch_all_documents)?;

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<DocumentItem>);

    let form_key = match editing() {
        Some(document) => format!("edit-{}", document.id),
        None => "new".to_string(),
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Documents" }
                button {
                    class: "px-4 py-2 bg-emerald-700 text-white text-sm rounded-lg hover:bg-emerald-800",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "New Document"
                }
            }

            if show_form() {
                DocumentForm {
                    key: "{form_key}",
                    document: editing(),
                    on_saved: move |_| {
                        show_form.set(false);
                        editing.set(None);
                        documents.restart();
                    },
                    on_cancel: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    }
                }
            }

            match documents.value().as_ref().as_deref() {
                Some(Ok(documents)) if !documents.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                        for document in documents.iter() {
                            div {
                                class: "p-4 hover:bg-gray-50 flex items-start justify-between",
                                div {
                                    class: "flex-1 min-w-0",
                                    a {
                                        href: "{document.file_url}",
                                        target: "_blank",
                                        class: "text-sm font-medium text-emerald-700 hover:text-emerald-800",
                                        "{document.title}"
                                    }
                                    p {
                                        class: "text-xs text-gray-500 mt-1",
                                        "{format_date(&document.created_at)} \u{00b7} Audience: {audience_summary(&document.geo)}"
                                    }
                                }
                                button {
                                    class: "ml-4 px-3 py-1.5 bg-gray-100 text-gray-700 text-sm rounded hover:bg-gray-200",
                                    onclick: {
                                        let document = document.clone();
                                        move |_| {
                                            editing.set(Some(document.clone()));
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
                        p { class: "text-gray-500", "No documents yet." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading documents: {e}"
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
fn DocumentForm(
    document: Option<DocumentItem>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing_id = document.as_ref().map(|d| d.id);

    let initial_title = document.as_ref().map(|d| d.title.clone()).unwrap_or_default();
    let initial_description = document
        .as_ref()
        .and_then(|d| d.description.clone())
        .unwrap_or_default();
    let initial_file_url = document
        .as_ref()
        .map(|d| d.file_url.clone())
        .unwrap_or_default();
    let initial_geo = document
        .as_ref()
        .map(|d| GeoAccess::from_fields(&d.geo))
        .unwrap_or_else(GeoAccess::unrestricted);

    let mut title = use_signal(move || initial_title);
    let mut description = use_signal(move || initial_description);
    let mut file_url = use_signal(move || initial_file_url);
    let mut geo = use_signal(move || initial_geo);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |_: FormEvent| {
        if is_submitting() {
            return;
        }

        let description_value = description().trim().to_string();
        let payload = NewDocumentItem {
            title: title().trim().to_string(),
            description: if description_value.is_empty() {
                None
            } else {
                Some(description_value)
            },
            file_url: file_url().trim().to_string(),
            geo: geo().to_fields(),
        };

        if payload.title.is_empty() || payload.file_url.is_empty() {
            error.set(Some("Title and file URL are required".to_string()));
            return;
        }

        spawn(async move {
            is_submitting.set(true);
            error.set(None);

            let result = match editing_id {
                Some(id) => update_document_item(id, payload).await,
                None => create_document_item(payload).await,
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
                if editing_id.is_some() { "Edit Document" } else { "New Document" }
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
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "File URL "
                    span { class: "text-red-500", "*" }
                }
                input {
                    r#type: "url",
                    value: "{file_url}",
                    oninput: move |e| file_url.set(e.value()),
                    placeholder: "https://storage.example.org/docs/manifesto.pdf",
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
                    if is_submitting() { "Saving..." } else { "Save Document" }
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
async fn fetch_all_documents() -> Result<Vec<DocumentItem>, ServerFnError> {
    crate::api::backend_client()
        .list_documents()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn create_document_item(document: NewDocumentItem) -> Result<DocumentItem, ServerFnError> {
    crate::api::backend_client()
        .create_document(&document)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn update_document_item(
    id: i64,
    document: NewDocumentItem,
) -> Result<DocumentItem, ServerFnError> {
    crate::api::backend_client()
        .update_document(id, &document)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
