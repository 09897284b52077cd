//! Geographic access selection
//!
//! The value model, the option-list helpers, and the selector component that
//! the content forms (news, documents, events, media, notifications) embed.

pub mod model;
pub mod options;
pub mod selector;
pub mod server_fns;

pub use model::GeoAccess;
pub use selector::GeoAccessSelector;

use praja_api_client::types::GeoAccessFields;

/// One-line audience description for list rows.
pub fn audience_summary(fields: &GeoAccessFields) -> String {
    let value = GeoAccess::from_fields(fields);
    if value.post_to_all {
        return "Everywhere".to_string();
    }

    let mut parts = Vec::new();
    let mut push = |count: usize, singular: &str, plural: &str| {
        if count > 0 {
            let noun = if count == 1 { singular } else { plural };
            parts.push(format!("{} {}", count, noun));
        }
    };
    push(value.district_ids.len(), "district", "districts");
    push(value.mandal_ids.len(), "mandal", "mandals");
    push(
        value.parliamentary_ids.len(),
        "parliamentary constituency",
        "parliamentary constituencies",
    );
    push(
        value.assembly_ids.len(),
        "assembly constituency",
        "assembly constituencies",
    );
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audience_summary_everywhere() {
        assert_eq!(audience_summary(&GeoAccessFields::default()), "Everywhere");
    }

    #[test]
    fn test_audience_summary_counts() {
        let fields = GeoAccessFields {
            district_ids: Some(vec![5, 6]),
            mandal_ids: Some(vec![101]),
            ..GeoAccessFields::default()
        };
        assert_eq!(audience_summary(&fields), "2 districts, 1 mandal");
    }
}
