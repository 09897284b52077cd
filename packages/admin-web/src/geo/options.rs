//! Merging helpers for cascaded option lists
//!
//! Mandal and assembly options are fetched per selected parent and
//! concatenated; a child that shows up under more than one parent (a known
//! upstream data anomaly) must appear exactly once. Ids are already
//! normalized to a single key by the api-client boundary, so first-occurrence
//! dedup by id is sufficient here.

use std::collections::HashSet;

use praja_api_client::regions::{AssemblyConstituency, Mandal};

/// Deduplicate a merged mandal list by id, keeping the first occurrence.
pub fn dedup_mandals(merged: Vec<Mandal>) -> Vec<Mandal> {
    let mut seen = HashSet::new();
    merged.into_iter().filter(|m| seen.insert(m.id)).collect()
}

/// Deduplicate a merged assembly-constituency list by id, keeping the first
/// occurrence.
pub fn dedup_assemblies(merged: Vec<AssemblyConstituency>) -> Vec<AssemblyConstituency> {
    let mut seen = HashSet::new();
    merged.into_iter().filter(|a| seen.insert(a.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mandal(id: i64, district_id: i64) -> Mandal {
        Mandal {
            id,
            district_id,
            name: format!("Mandal {}", id),
            local_name: None,
        }
    }

    #[test]
    fn test_duplicate_mandal_across_districts_kept_once() {
        let merged = vec![mandal(101, 5), mandal(150, 5), mandal(101, 6)];

        let deduped = dedup_mandals(merged);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].id, 101);
        // first occurrence wins, including its parent attribution
        assert_eq!(deduped[0].district_id, 5);
        assert_eq!(deduped[1].id, 150);
    }

    #[test]
    fn test_assembly_dedup_preserves_order() {
        let merged = vec![
            AssemblyConstituency {
                id: 30,
                parliamentary_constituency_id: 3,
                name: "First".to_string(),
                local_name: None,
            },
            AssemblyConstituency {
                id: 31,
                parliamentary_constituency_id: 3,
                name: "Second".to_string(),
                local_name: None,
            },
            AssemblyConstituency {
                id: 30,
                parliamentary_constituency_id: 4,
                name: "Duplicate".to_string(),
                local_name: None,
            },
        ];

        let deduped = dedup_assemblies(merged);

        assert_eq!(
            deduped.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![30, 31]
        );
        assert_eq!(deduped[0].name, "First");
    }
}
