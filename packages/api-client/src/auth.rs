//! Staff login endpoints (phone OTP flow)

use serde::{Deserialize, Serialize};

use crate::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendOtpRequest<'a> {
    phone_number: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendOtpResponse {
    sent: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyOtpRequest<'a> {
    phone_number: &'a str,
    code: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyOtpResponse {
    token: Option<String>,
}

impl ApiClient {
    /// Send a one-time code to a staff phone number
    pub async fn send_otp(&self, phone_number: &str) -> Result<bool, ApiError> {
        let response: SendOtpResponse = self
            .post_json("/api/v1/auth/send-otp", &SendOtpRequest { phone_number })
            .await?;
        Ok(response.sent)
    }

    /// Verify a one-time code; returns a session JWT on success
    pub async fn verify_otp(
        &self,
        phone_number: &str,
        code: &str,
    ) -> Result<Option<String>, ApiError> {
        let response: VerifyOtpResponse = self
            .post_json(
                "/api/v1/auth/verify-otp",
                &VerifyOtpRequest { phone_number, code },
            )
            .await?;
        Ok(response.token)
    }
}
