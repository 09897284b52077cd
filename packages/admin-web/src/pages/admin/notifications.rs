//! Admin notifications page: push a message to a geographic audience

use dioxus::prelude::*;

use praja_api_client::types::NotificationPush;

use crate::geo::{GeoAccess, GeoAccessSelector};

/// Notification push form
#[component]
pub fn AdminNotifications() -> Element {
    let mut title = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut geo = use_signal(GeoAccess::unrestricted);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut sent_count = use_signal(|| None::<Option<i64>>);

    let handle_submit = move |_: FormEvent| {
        if is_submitting() {
            return;
        }

        let payload = NotificationPush {
            title: title().trim().to_string(),
            message: message().trim().to_string(),
            geo: geo().to_fields(),
        };

        if payload.title.is_empty() || payload.message.is_empty() {
            error.set(Some("Title and message are required".to_string()));
            return;
        }

        spawn(async move {
            is_submitting.set(true);
            error.set(None);
            sent_count.set(None);

            match push_notification_to_audience(payload).await {
                Ok(receipt) => {
                    sent_count.set(Some(receipt));
                    title.set(String::new());
                    message.set(String::new());
                    geo.set(GeoAccess::unrestricted());
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Notifications" }

            if let Some(recipients) = sent_count() {
                div {
                    class: "bg-green-50 border border-green-200 text-green-700 p-4 rounded-lg mb-6",
                    match recipients {
                        Some(n) => rsx! { "Notification queued for {n} recipients." },
                        None => rsx! { "Notification queued." },
                    }
                }
            }

            form {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4",
                onsubmit: handle_submit,

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
                        "Message "
                        span { class: "text-red-500", "*" }
                    }
                    textarea {
                        value: "{message}",
                        oninput: move |e| message.set(e.value()),
                        rows: "4",
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

                button {
                    r#type: "submit",
                    class: "px-4 py-2 bg-emerald-700 text-white text-sm rounded-lg hover:bg-emerald-800 disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: is_submitting(),
                    if is_submitting() { "Sending..." } else { "Send Notification" }
                }
            }
        }
    }
}

#[server]
async fn push_notification_to_audience(
    push: NotificationPush,
) -> Result<Option<i64>, ServerFnError> {
    let receipt = crate::api::backend_client()
        .push_notification(&push)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(receipt.recipient_count)
}
