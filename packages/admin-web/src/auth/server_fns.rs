//! Server functions for authentication
//!
//! These run on the server and handle session management against the
//! backend's OTP login endpoints.

use dioxus::prelude::*;
use serde::Deserialize;

use crate::types::StaffUser;

/// Send a one-time code to a staff phone number
#[server]
pub async fn send_verification_code(phone_number: String) -> Result<bool, ServerFnError> {
    let client = crate::api::backend_client();

    client
        .send_otp(&phone_number)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Verify a code and establish a session
#[server]
pub async fn verify_code(
    phone_number: String,
    code: String,
) -> Result<Option<String>, ServerFnError> {
    let client = crate::api::backend_client();

    let token = client
        .verify_otp(&phone_number, &code)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // If we got a token, store its claims in the session
    if let Some(ref token) = token {
        if let Ok(user) = decode_jwt_to_user(token) {
            set_session_user(&user).await?;
        }
    }

    Ok(token)
}

/// Get the current authenticated staff user from the session
#[server]
pub async fn get_current_user() -> Result<Option<StaffUser>, ServerFnError> {
    get_session_user().await
}

/// Logout - clear the session
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
fn decode_jwt_to_user(token: &str) -> Result<StaffUser, ServerFnError> {
    // Simple JWT decoding (just base64 decode the payload); the backend
    // verified the signature before issuing the token.
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ServerFnError::new("Invalid JWT format"));
    }

    use base64::Engine;
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| ServerFnError::new(format!("Failed to decode JWT: {}", e)))?;

    #[derive(Deserialize)]
    struct JwtClaims {
        staff_id: uuid::Uuid,
        phone_number: String,
        is_admin: bool,
    }

    let claims: JwtClaims = serde_json::from_slice(&payload)
        .map_err(|e| ServerFnError::new(format!("Failed to parse JWT claims: {}", e)))?;

    Ok(StaffUser {
        staff_id: claims.staff_id,
        phone_number: claims.phone_number,
        is_admin: claims.is_admin,
    })
}

#[cfg(feature = "server")]
async fn set_session_user(user: &StaffUser) -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .insert("user", user)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    Ok(())
}

#[cfg(feature = "server")]
async fn get_session_user() -> Result<Option<StaffUser>, ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .get("user")
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get user from session: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))?;

    Ok(())
}
