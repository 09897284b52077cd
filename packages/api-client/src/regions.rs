//! Geographic reference-data endpoints
//!
//! Reference regions are maintained by separate administrative screens and
//! are read-only here. Upstream records are duck-typed (`name` vs
//! `name_en`/`name_te`, assembly constituencies keyed by `id` or a fallback
//! `constituencyNumber`); they are normalized into strict entity shapes at
//! this boundary so the rest of the console never sees the raw variants.

use serde::{Deserialize, Serialize};

use crate::{ApiClient, ApiError};

/// Fixed top-level administrative scope for all reference lookups
pub const JURISDICTION: &str = "Telangana";

// ============================================================================
// Normalized reference entities
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: i64,
    pub name: String,
    pub local_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mandal {
    pub id: i64,
    pub district_id: i64,
    pub name: String,
    pub local_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParliamentaryConstituency {
    pub id: i64,
    pub name: String,
    pub local_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyConstituency {
    pub id: i64,
    pub parliamentary_constituency_id: i64,
    pub name: String,
    pub local_name: Option<String>,
}

// ============================================================================
// Raw upstream records
// ============================================================================

/// One duck-typed upstream record; the union of every field shape the
/// reference endpoints have been observed to return.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegionRecord {
    id: Option<i64>,
    constituency_number: Option<i64>,
    name: Option<String>,
    name_en: Option<String>,
    name_te: Option<String>,
    district_id: Option<i64>,
    parliamentary_constituency_id: Option<i64>,
}

impl RawRegionRecord {
    fn display_name(&self) -> Option<String> {
        self.name_en.clone().or_else(|| self.name.clone())
    }
}

fn normalize_district(raw: RawRegionRecord) -> Option<District> {
    let id = raw.id?;
    let name = raw.display_name()?;
    Some(District {
        id,
        name,
        local_name: raw.name_te,
    })
}

fn normalize_mandal(raw: RawRegionRecord) -> Option<Mandal> {
    let id = raw.id?;
    let district_id = raw.district_id?;
    let name = raw.display_name()?;
    Some(Mandal {
        id,
        district_id,
        name,
        local_name: raw.name_te,
    })
}

fn normalize_parliamentary(raw: RawRegionRecord) -> Option<ParliamentaryConstituency> {
    // Parliamentary records also come keyed either way
    let id = raw.id.or(raw.constituency_number)?;
    let name = raw.display_name()?;
    Some(ParliamentaryConstituency {
        id,
        name,
        local_name: raw.name_te,
    })
}

fn normalize_assembly(raw: RawRegionRecord) -> Option<AssemblyConstituency> {
    // Some sources omit the id and only carry the constituency number
    let id = raw.id.or(raw.constituency_number)?;
    let parliamentary_constituency_id = raw.parliamentary_constituency_id?;
    let name = raw.display_name()?;
    Some(AssemblyConstituency {
        id,
        parliamentary_constituency_id,
        name,
        local_name: raw.name_te,
    })
}

fn normalize_all<T>(
    raw: Vec<RawRegionRecord>,
    kind: &'static str,
    normalize: impl Fn(RawRegionRecord) -> Option<T>,
) -> Vec<T> {
    let total = raw.len();
    let normalized: Vec<T> = raw.into_iter().filter_map(normalize).collect();
    if normalized.len() < total {
        tracing::debug!(
            "dropped {} unkeyed {} record(s) during normalization",
            total - normalized.len(),
            kind
        );
    }
    normalized
}

// ============================================================================
// Endpoints
// ============================================================================

impl ApiClient {
    /// List districts for the jurisdiction
    pub async fn list_districts(&self, active_only: bool) -> Result<Vec<District>, ApiError> {
        let raw: Vec<RawRegionRecord> = self
            .get_json(
                "/api/v1/districts",
                &[
                    ("state", JURISDICTION.to_string()),
                    ("activeOnly", active_only.to_string()),
                ],
            )
            .await?;
        Ok(normalize_all(raw, "district", normalize_district))
    }

    /// List mandals belonging to one district
    pub async fn list_mandals(
        &self,
        district_id: i64,
        active_only: bool,
    ) -> Result<Vec<Mandal>, ApiError> {
        let raw: Vec<RawRegionRecord> = self
            .get_json(
                "/api/v1/mandals",
                &[
                    ("districtId", district_id.to_string()),
                    ("activeOnly", active_only.to_string()),
                ],
            )
            .await?;
        Ok(normalize_all(raw, "mandal", normalize_mandal))
    }

    /// List parliamentary constituencies for the jurisdiction
    pub async fn list_parliamentary_constituencies(
        &self,
        active_only: bool,
    ) -> Result<Vec<ParliamentaryConstituency>, ApiError> {
        let raw: Vec<RawRegionRecord> = self
            .get_json(
                "/api/v1/parliamentary-constituencies",
                &[
                    ("state", JURISDICTION.to_string()),
                    ("activeOnly", active_only.to_string()),
                ],
            )
            .await?;
        Ok(normalize_all(raw, "parliamentary", normalize_parliamentary))
    }

    /// List assembly constituencies under one parliamentary constituency
    pub async fn list_assembly_constituencies(
        &self,
        parliamentary_constituency_id: i64,
        active_only: bool,
    ) -> Result<Vec<AssemblyConstituency>, ApiError> {
        let raw: Vec<RawRegionRecord> = self
            .get_json(
                "/api/v1/assembly-constituencies",
                &[
                    (
                        "parliamentaryConstituencyId",
                        parliamentary_constituency_id.to_string(),
                    ),
                    ("state", JURISDICTION.to_string()),
                    ("activeOnly", active_only.to_string()),
                ],
            )
            .await?;
        Ok(normalize_all(raw, "assembly", normalize_assembly))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_prefers_english_name() {
        let raw: RawRegionRecord = serde_json::from_str(
            r#"{"id":5,"name":"legacy","nameEn":"Warangal","nameTe":"వరంగల్"}"#,
        )
        .unwrap();

        let district = normalize_district(raw).unwrap();
        assert_eq!(district.name, "Warangal");
        assert_eq!(district.local_name.as_deref(), Some("వరంగల్"));
    }

    #[test]
    fn test_district_falls_back_to_plain_name() {
        let raw: RawRegionRecord = serde_json::from_str(r#"{"id":5,"name":"Warangal"}"#).unwrap();

        let district = normalize_district(raw).unwrap();
        assert_eq!(district.name, "Warangal");
        assert_eq!(district.local_name, None);
    }

    #[test]
    fn test_assembly_falls_back_to_constituency_number() {
        let raw: RawRegionRecord = serde_json::from_str(
            r#"{"constituencyNumber":30,"parliamentaryConstituencyId":3,"nameEn":"Station Ghanpur"}"#,
        )
        .unwrap();

        let assembly = normalize_assembly(raw).unwrap();
        assert_eq!(assembly.id, 30);
        assert_eq!(assembly.parliamentary_constituency_id, 3);
    }

    #[test]
    fn test_unkeyed_records_are_dropped() {
        let raw = vec![
            RawRegionRecord {
                id: Some(30),
                parliamentary_constituency_id: Some(3),
                name: Some("Keyed".to_string()),
                ..Default::default()
            },
            RawRegionRecord {
                parliamentary_constituency_id: Some(3),
                name: Some("No id at all".to_string()),
                ..Default::default()
            },
        ];

        let normalized = normalize_all(raw, "assembly", normalize_assembly);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].id, 30);
    }

    #[test]
    fn test_mandal_requires_parent_district() {
        let raw: RawRegionRecord =
            serde_json::from_str(r#"{"id":101,"nameEn":"Hasanparthy"}"#).unwrap();

        assert!(normalize_mandal(raw).is_none());
    }
}
