//! Staff session context

use dioxus::prelude::*;

use super::server_fns::get_current_user;
use crate::types::StaffUser;

/// Staff session state shared through context.
///
/// `loading` stays true until the first session lookup settles so the admin
/// layout can hold its redirect decision.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: Signal<Option<StaffUser>>,
    pub loading: Signal<bool>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn is_admin(&self) -> bool {
        matches!(&*self.user.read(), Some(user) if user.is_admin)
    }

    /// Re-read the session from the server; a failed lookup reads as
    /// signed-out.
    pub async fn refresh(mut self) {
        let user = get_current_user().await.ok().flatten();
        self.user.set(user);
        self.loading.set(false);
    }

    /// Drop the client-side session state after logout.
    pub fn clear(mut self) {
        self.user.set(None);
    }
}

#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth = use_context_provider(|| AuthContext {
        user: Signal::new(None),
        loading: Signal::new(true),
    });

    use_future(move || async move {
        auth.refresh().await;
    });

    children
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
