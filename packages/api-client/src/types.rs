//! Wire types shared with the backend API
//!
//! Content entities carry their geographic-restriction fields inline
//! (flattened `GeoAccessFields`); the backend echoes the same fields back on
//! create/update so edit forms can rehydrate from them.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Geographic restriction fields
// ============================================================================

/// Geographic-restriction fields as they appear on the wire.
///
/// Each id list is omitted from outgoing JSON when `None`. Absence means "no
/// restriction on this axis" to the backend; an explicit empty array is never
/// sent. `postToAll` is the authoritative flag and is always serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoAccessFields {
    #[serde(
        default,
        deserialize_with = "lenient_id_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub district_ids: Option<Vec<i64>>,

    #[serde(
        default,
        deserialize_with = "lenient_id_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub mandal_ids: Option<Vec<i64>>,

    #[serde(
        default,
        deserialize_with = "lenient_id_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub parliamentary_constituency_ids: Option<Vec<i64>>,

    #[serde(
        default,
        deserialize_with = "lenient_id_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub assembly_constituency_ids: Option<Vec<i64>>,

    #[serde(default)]
    pub post_to_all: bool,
}

/// Stored id arrays can be null and have been observed to contain stray
/// non-numeric entries; filter those out instead of failing the whole entity.
fn lenient_id_list<'de, D>(deserializer: D) -> Result<Option<Vec<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|values| values.iter().filter_map(|v| v.as_i64()).collect()))
}

// ============================================================================
// Content entities
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: i64,
    pub title: String,
    pub title_te: Option<String>,
    pub body: String,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub published: bool,
    #[serde(flatten)]
    pub geo: GeoAccessFields,
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsArticle {
    pub title: String,
    pub title_te: Option<String>,
    pub body: String,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub published: bool,
    #[serde(flatten)]
    pub geo: GeoAccessFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentItem {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    #[serde(flatten)]
    pub geo: GeoAccessFields,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocumentItem {
    pub title: String,
    pub description: Option<String>,
    pub file_url: String,
    #[serde(flatten)]
    pub geo: GeoAccessFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub starts_at: String,
    pub ends_at: Option<String>,
    #[serde(flatten)]
    pub geo: GeoAccessFields,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventItem {
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub starts_at: String,
    pub ends_at: Option<String>,
    #[serde(flatten)]
    pub geo: GeoAccessFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Photo => "Photo",
            MediaKind::Video => "Video",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: i64,
    pub kind: MediaKind,
    pub title: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    #[serde(flatten)]
    pub geo: GeoAccessFields,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMediaItem {
    pub kind: MediaKind,
    pub title: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    #[serde(flatten)]
    pub geo: GeoAccessFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPush {
    pub title: String,
    pub message: String,
    #[serde(flatten)]
    pub geo: GeoAccessFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationReceipt {
    pub id: i64,
    pub recipient_count: Option<i64>,
}

// ============================================================================
// Members
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub role: Option<String>,
    pub active: bool,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_fields_omit_absent_lists() {
        let fields = GeoAccessFields {
            district_ids: Some(vec![5]),
            ..Default::default()
        };

        let json = serde_json::to_value(&fields).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.get("districtIds").unwrap(), &serde_json::json!([5]));
        assert!(!obj.contains_key("mandalIds"));
        assert!(!obj.contains_key("parliamentaryConstituencyIds"));
        assert!(!obj.contains_key("assemblyConstituencyIds"));
        assert_eq!(obj.get("postToAll").unwrap(), &serde_json::json!(false));
    }

    #[test]
    fn test_geo_fields_never_send_empty_arrays() {
        let fields = GeoAccessFields {
            post_to_all: true,
            ..Default::default()
        };

        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"postToAll":true}"#);
    }

    #[test]
    fn test_geo_fields_null_lists_hydrate_to_none() {
        let fields: GeoAccessFields = serde_json::from_str(
            r#"{"districtIds":null,"mandalIds":null,"postToAll":false}"#,
        )
        .unwrap();

        assert_eq!(fields.district_ids, None);
        assert_eq!(fields.mandal_ids, None);
        assert_eq!(fields.parliamentary_constituency_ids, None);
    }

    #[test]
    fn test_geo_fields_filter_non_numeric_entries() {
        let fields: GeoAccessFields =
            serde_json::from_str(r#"{"districtIds":[5,"junk",6,null,7.5]}"#).unwrap();

        assert_eq!(fields.district_ids, Some(vec![5, 6]));
    }

    #[test]
    fn test_content_payload_flattens_geo_fields() {
        let payload = NewNewsArticle {
            title: "Ward meeting schedule".to_string(),
            body: "Details inside".to_string(),
            geo: GeoAccessFields {
                mandal_ids: Some(vec![101, 102]),
                district_ids: Some(vec![5]),
                ..Default::default()
            },
            ..Default::default()
        };

        let json = serde_json::to_value(&payload).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.get("districtIds").unwrap(), &serde_json::json!([5]));
        assert_eq!(obj.get("mandalIds").unwrap(), &serde_json::json!([101, 102]));
        assert!(!obj.contains_key("assemblyConstituencyIds"));
        assert!(!obj.contains_key("geo"));
    }
}
