//! Admin members page

use dioxus::prelude::*;

use praja_api_client::types::Member;

use crate::types::format_date;

/// Member directory with activate/deactivate actions
#[component]
pub fn AdminMembers() -> Element {
    let mut members = use_server_future(fetch_members)?;

    let handle_toggle = move |(member_id, active): (i64, bool)| {
        spawn(async move {
            match set_member_active(member_id, active).await {
                Ok(_) => members.restart(),
                Err(e) => tracing::warn!("failed to update member {member_id}: {e}"),
            }
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Members" }

            match members.value().as_ref().as_deref() {
                Some(Ok(members)) if !members.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                        for member in members.iter() {
                            MemberRow {
                                member: member.clone(),
                                on_toggle: handle_toggle
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No members found." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading members: {e}"
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
struct MemberRowProps {
    member: Member,
    on_toggle: EventHandler<(i64, bool)>,
}

#[component]
fn MemberRow(props: MemberRowProps) -> Element {
    let member = &props.member;

    rsx! {
        div {
            class: "p-4 hover:bg-gray-50 flex items-start justify-between",
            div {
                class: "flex-1 min-w-0",
                h3 { class: "text-sm font-medium text-gray-900", "{member.full_name}" }
                p { class: "text-sm text-gray-500", "{member.phone_number}" }
                p {
                    class: "text-xs text-gray-500 mt-1",
                    if let Some(role) = &member.role {
                        "{role} \u{00b7} joined {format_date(&member.created_at)}"
                    } else {
                        "joined {format_date(&member.created_at)}"
                    }
                }
            }
            div {
                class: "flex items-center gap-2 ml-4",
                if member.active {
                    span {
                        class: "px-2 py-1 rounded text-xs font-medium bg-green-100 text-green-700",
                        "Active"
                    }
                    button {
                        class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                        onclick: {
                            let id = member.id;
                            move |_| props.on_toggle.call((id, false))
                        },
                        "Deactivate"
                    }
                } else {
                    span {
                        class: "px-2 py-1 rounded text-xs font-medium bg-gray-100 text-gray-600",
                        "Inactive"
                    }
                    button {
                        class: "px-3 py-1.5 bg-green-100 text-green-700 text-sm rounded hover:bg-green-200",
                        onclick: {
                            let id = member.id;
                            move |_| props.on_toggle.call((id, true))
                        },
                        "Activate"
                    }
                }
            }
        }
    }
}

#[server]
async fn fetch_members() -> Result<Vec<Member>, ServerFnError> {
    crate::api::backend_client()
        .list_members()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
async fn set_member_active(id: i64, active: bool) -> Result<(), ServerFnError> {
    crate::api::backend_client()
        .set_member_active(id, active)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}
