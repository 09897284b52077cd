//! Admin dashboard page

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::routes::Route;

/// Admin dashboard with stats overview
#[component]
pub fn AdminDashboard() -> Element {
    let stats = use_server_future(fetch_console_stats)?;

    let stats_value = match stats.value().as_ref().as_deref() {
        Some(Ok(s)) => s.clone(),
        _ => ConsoleStats::default(),
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Dashboard" }

            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8",

                StatCard {
                    title: "News Articles",
                    value: stats_value.news,
                    color: "blue"
                }
                StatCard {
                    title: "Upcoming Events",
                    value: stats_value.events,
                    color: "amber"
                }
                StatCard {
                    title: "Media Items",
                    value: stats_value.media,
                    color: "green"
                }
                StatCard {
                    title: "Active Members",
                    value: stats_value.active_members,
                    color: "orange"
                }
            }

            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Actions" }
                div {
                    class: "flex flex-wrap gap-3",
                    QuickActionLink { to: Route::AdminNews {}, label: "Publish News" }
                    QuickActionLink { to: Route::AdminEvents {}, label: "Schedule Event" }
                    QuickActionLink { to: Route::AdminNotifications {}, label: "Send Notification" }
                    QuickActionLink { to: Route::AdminMembers {}, label: "Manage Members" }
                }
            }
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ConsoleStats {
    news: i32,
    events: i32,
    media: i32,
    active_members: i32,
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: i32,
    color: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let accent_class = match props.color {
        "blue" => "border-l-4 border-blue-400",
        "amber" => "border-l-4 border-amber-400",
        "green" => "border-l-4 border-green-400",
        "orange" => "border-l-4 border-orange-400",
        _ => "border-l-4 border-gray-300",
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 {accent_class}",
            p { class: "text-sm text-gray-500", "{props.title}" }
            p { class: "text-3xl font-bold text-gray-900 mt-1", "{props.value}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct QuickActionLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn QuickActionLink(props: QuickActionLinkProps) -> Element {
    rsx! {
        Link {
            to: props.to.clone(),
            class: "inline-flex items-center gap-2 px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
            "{props.label}"
        }
    }
}

#[server]
async fn fetch_console_stats() -> Result<ConsoleStats, ServerFnError> {
    let client = crate::api::backend_client();

    // Counts are derived from the list endpoints; each failure degrades to
    // zero rather than failing the whole dashboard.
    let news = client.list_news().await.map(|l| l.len()).unwrap_or(0);
    let events = client.list_events().await.map(|l| l.len()).unwrap_or(0);
    let media = client.list_media().await.map(|l| l.len()).unwrap_or(0);
    let active_members = client
        .list_members()
        .await
        .map(|l| l.iter().filter(|m| m.active).count())
        .unwrap_or(0);

    Ok(ConsoleStats {
        news: news as i32,
        events: events as i32,
        media: media as i32,
        active_members: active_members as i32,
    })
}
