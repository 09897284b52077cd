//! Admin news pages: list plus create/edit form

use dioxus::prelude::*;

use praja_api_client::types::{NewNewsArticle, NewsArticle};

use crate::geo::{audience_summary, GeoAccess, GeoAccessSelector};
use crate::types::format_date;

/// Admin news list page with inline create/edit form
#[component]
pub fn AdminNews() -> Element {
    let mut articles = use_server_future(fetch_all_news)?;

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<NewsArticle>);

    let form_key = match editing() {
        Some(article) => format!("edit-{}", article.id),
        None => "new".to_string(),
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "News" }
                button {
                    class: "px-4 py-2 bg-emerald-700 text-white text-sm rounded-lg hover:bg-emerald-800",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "New Article"
                }
            }

            if show_form() {
                NewsForm {
                    key: "{form_key}",
                    article: editing(),
                    on_saved: move |_| {
                        show_form.set(false);
                        editing.set(None);
                        articles.restart();
                    },
                    on_cancel: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    }
                }
            }

            match articles.value().as_ref().as_deref() {
                Some(Ok(articles)) if !articles.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                        for article in articles.iter() {
                            NewsRow {
                                article: article.clone(),
                                on_edit: move |article: NewsArticle| {
                                    editing.set(Some(article));
                                    show_form.set(true);
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No articles yet." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading news: {e}"
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", "Loading..." }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NewsRowProps {
    article: NewsArticle,
    on_edit: EventHandler<NewsArticle>,
}

#[component]
fn NewsRow(props: NewsRowProps) -> Element {
    let article = &props.article;
    let audience = audience_summary(&article.geo);

    rsx! {
        div {
            class: "p-4 hover:bg-gray-50",
            div {
                class: "flex items-start justify-between",
                div {
                    class: "flex-1 min-w-0",
                    h3 { class: "text-sm font-medium text-gray-900 truncate", "{article.title}" }
                    if let Some(summary) = &article.summary {
                        p { class: "text-sm text-gray-600 mt-1 line-clamp-2", "{summary}" }
                    }
                    p {
                        class: "text-xs text-gray-500 mt-1",
                        "{format_date(&article.created_at)} \u{00b7} Audience: {audience}"
                    }
                }
                div {
                    class: "flex items-center gap-2 ml-4",
                    if article.published {
                        span {
                            class: "px-2 py-1 rounded text-xs font-medium bg-green-100 text-green-700",
                            "Published"
                        }
                    } else {
                        span {
                            class: "px-2 py-1 rounded text-xs font-medium bg-yellow-100 text-yellow-700",
                            "Draft"
                        }
                    }
                    button {
                        class: "px-3 py-1.5 bg-gray-100 text-gray-700 text-sm rounded hover:bg-gray-200",
                        onclick: {
                            let article = props.article.clone();
                            move |_| props.on_edit.call(article.clone())
                        },
                        "Edit"
                    }
                }
            }
        }
    }
}

/// Create/edit form; owns one `GeoAccess` value for the session and
/// serializes it into the payload at submit time.
#[component]
fn NewsForm(
    article: Option<NewsArticle>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing_id = article.as_ref().map(|a| a.id);

    let initial_title = article.as_ref().map(|a| a.title.clone()).unwrap_or_default();
    let initial_title_te = article
        .as_ref()
        .and_then(|a| a.title_te.clone())
        .unwrap_or_default();
    let initial_body = article.as_ref().map(|a| a.body.clone()).unwrap_or_default();
    let initial_summary = article
        .as_ref()
        .and_then(|a| a.summary.clone())
        .unwrap_or_default();
    let initial_image_url = article
        .as_ref()
        .and_then(|a| a.image_url.clone())
        .unwrap_or_default();
    let initial_published = article.as_ref().map(|a| a.published).unwrap_or(false);
    let initial_geo = article
        .as_ref()
        .map(|a| GeoAccess::from_fields(&a.geo))
        .unwrap_or_else(GeoAccess::unrestricted);

    let mut title = use_signal(move || initial_title);
    let mut title_te = use_signal(move || initial_title_te);
    let mut body = use_signal(move || initial_body);
    let mut summary = use_signal(move || initial_summary);
    let mut image_url = use_signal(move || initial_image_url);
    let mut published = use_signal(move || initial_published);
    let mut geo = use_signal(move || initial_geo);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |_: FormEvent| {
        if is_submitting() {
            return;
        }

        let payload = NewNewsArticle {
            title: title().trim().to_string(),
            title_te: non_empty(title_te()),
            body: body().trim().to_string(),
            summary: non_empty(summary()),
            image_url: non_empty(image_url()),
            published: published(),
            geo: geo().to_fields(),
        };

        if payload.title.is_empty() || payload.body.is_empty() {
            error.set(Some("Title and body are required".to_string()));
            return;
        }

        spawn(async move {
            is_submitting.set(true);
            error.set(None);

            let result = match editing_id {
                Some(id) => update_news_article(id, payload).await,
                None => create_news_article(payload).await,
            };

            match result {
                Ok(_) => on_saved.call(()),
                Err(e) => error.set(Some(e.to_string())),
            }

            is_submitting.set(false);
        });
    };

    let heading = if editing_id.is_some() {
        "Edit Article"
    } else {
        "New Article"
    };

    rsx! {
        form {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4 mb-6",
            onsubmit: handle_submit,

            h2 { class: "text-lg font-semibold text-gray-900", "{heading}" }

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
                        "Title (Telugu)"
                    }
                    input {
                        r#type: "text",
                        value: "{title_te}",
                        oninput: move |e| title_te.set(e.value()),
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                    }
                }
            }

            div {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "Summary"
                }
                input {
                    r#type: "text",
                    value: "{summary}",
                    oninput: move |e| summary.set(e.value()),
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                }
            }

            div {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "Body "
                    span { class: "text-red-500", "*" }
                }
                textarea {
                    value: "{body}",
                    oninput: move |e| body.set(e.value()),
                    rows: "6",
                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                }
            }

            div {
                label {
                    class: "block text-sm font-medium text-gray-700 mb-1",
                    "Image URL"
                }
                input {
                    r#type: "url",
                    value: "{image_url}",
                    oninput: move |e| image_url.set(e.value()),
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

            label {
                class: "flex items-center gap-2 text-sm text-gray-700",
                input {
                    r#type: "checkbox",
                    checked: published(),
                    onchange: move |e: FormEvent| published.set(e.checked())
                }
                "Publish immediately"
            }

            div {
                class: "flex items-center gap-2",
                button {
                    r#type: "submit",
                    class: "px-4 py-2 bg-emerald-700 text-white text-sm rounded-lg hover:bg-emerald-800 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: is_submitting(),
                    if is_submitting() { "Saving..." } else { "Save Article" }
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

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[server]
async fn fetch_all_news() -> Result<Vec<NewsArticle>, ServerFnError> {
    crate::api::backend_client()
        .list_news()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn create_news_article(article: NewNewsArticle) -> Result<NewsArticle, ServerFnError> {
    crate::api::backend_client()
        .create_news(&article)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn update_news_article(
    id: i64,
    article: NewNewsArticle,
) -> Result<NewsArticle, ServerFnError> {
    crate::api::backend_client()
        .update_news(id, &article)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
