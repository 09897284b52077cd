//! Console-side types and small display helpers
//!
//! Wire types for API entities live in `praja-api-client`; this module only
//! holds what the console itself owns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated staff session, decoded from the backend's JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffUser {
    pub staff_id: Uuid,
    pub phone_number: String,
    pub is_admin: bool,
}

/// Render a backend RFC 3339 timestamp as a short date, falling back to the
/// raw string when it does not parse.
pub fn format_date(raw: &str) -> String {
    raw.parse::<DateTime<Utc>>()
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_parses_rfc3339() {
        assert_eq!(format_date("2026-08-01T10:30:00Z"), "01 Aug 2026");
    }

    #[test]
    fn test_format_date_passes_through_garbage() {
        assert_eq!(format_date("not a date"), "not a date");
    }
}
