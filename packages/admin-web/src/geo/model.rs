//! Geographic access value model
//!
//! `GeoAccess` is the value a host form owns for one create/edit session: the
//! set of regions a piece of content is restricted to, or `post_to_all` for
//! no restriction. Every transition is a pure function that returns the next
//! valid value; there is no error channel. Two invariants are maintained on
//! every toggle:
//!
//! - the district/mandal group and the constituency group are mutually
//!   exclusive (selecting in one clears the other);
//! - a child selection never outlives its parent (deselecting a district
//!   prunes its mandals, deselecting a parliamentary constituency prunes its
//!   assembly constituencies).
//!
//! The model deliberately does not validate ids against reference data, and
//! `toggle_mandal`/`toggle_assembly` do not check that the parent is
//! selected — the selector UI is the enforcement point for that (child
//! pickers stay disabled until a parent is chosen).

use praja_api_client::regions::{AssemblyConstituency, Mandal};
use praja_api_client::types::GeoAccessFields;

/// Geographic visibility restriction for one piece of content.
///
/// The id lists have set semantics; order is never meaningful.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoAccess {
    pub district_ids: Vec<i64>,
    pub mandal_ids: Vec<i64>,
    pub parliamentary_ids: Vec<i64>,
    pub assembly_ids: Vec<i64>,
    pub post_to_all: bool,
}

impl GeoAccess {
    /// Value for brand-new content: visible everywhere.
    pub fn unrestricted() -> Self {
        Self {
            post_to_all: true,
            ..Self::default()
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.post_to_all
    }

    pub fn has_district_selection(&self) -> bool {
        !self.district_ids.is_empty() || !self.mandal_ids.is_empty()
    }

    pub fn has_constituency_selection(&self) -> bool {
        !self.parliamentary_ids.is_empty() || !self.assembly_ids.is_empty()
    }

    /// Set or clear the "post to all" flag.
    ///
    /// Enabling discards any prior selection; there is no way back except
    /// re-selecting. Disabling only flips the flag and leaves the (empty)
    /// selection for the operator to fill in.
    pub fn set_post_to_all(&self, enabled: bool) -> Self {
        if enabled {
            Self::unrestricted()
        } else {
            Self {
                post_to_all: false,
                ..self.clone()
            }
        }
    }

    /// Flip membership of one district.
    ///
    /// Removing a district prunes every selected mandal whose known parent is
    /// that district. Any selection in this group clears the constituency
    /// group and the `post_to_all` flag.
    pub fn toggle_district(&self, district_id: i64, known_mandals: &[Mandal]) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.district_ids.iter().position(|&id| id == district_id) {
            next.district_ids.remove(pos);
            next.mandal_ids.retain(|&mandal_id| {
                known_mandals
                    .iter()
                    .find(|m| m.id == mandal_id)
                    .map(|m| m.district_id != district_id)
                    .unwrap_or(true)
            });
        } else {
            next.district_ids.push(district_id);
        }
        next.parliamentary_ids.clear();
        next.assembly_ids.clear();
        next.post_to_all = false;
        next
    }

    /// Flip membership of one mandal. Parent-district consistency is not
    /// checked here; see the module docs.
    pub fn toggle_mandal(&self, mandal_id: i64) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.mandal_ids.iter().position(|&id| id == mandal_id) {
            next.mandal_ids.remove(pos);
        } else {
            next.mandal_ids.push(mandal_id);
        }
        next.parliamentary_ids.clear();
        next.assembly_ids.clear();
        next.post_to_all = false;
        next
    }

    /// Flip membership of one parliamentary constituency, pruning assembly
    /// constituencies whose known parent was removed.
    pub fn toggle_parliamentary(
        &self,
        parliamentary_id: i64,
        known_assemblies: &[AssemblyConstituency],
    ) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next
            .parliamentary_ids
            .iter()
            .position(|&id| id == parliamentary_id)
        {
            next.parliamentary_ids.remove(pos);
            next.assembly_ids.retain(|&assembly_id| {
                known_assemblies
                    .iter()
                    .find(|a| a.id == assembly_id)
                    .map(|a| a.parliamentary_constituency_id != parliamentary_id)
                    .unwrap_or(true)
            });
        } else {
            next.parliamentary_ids.push(parliamentary_id);
        }
        next.district_ids.clear();
        next.mandal_ids.clear();
        next.post_to_all = false;
        next
    }

    /// Flip membership of one assembly constituency.
    pub fn toggle_assembly(&self, assembly_id: i64) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.assembly_ids.iter().position(|&id| id == assembly_id) {
            next.assembly_ids.remove(pos);
        } else {
            next.assembly_ids.push(assembly_id);
        }
        next.district_ids.clear();
        next.mandal_ids.clear();
        next.post_to_all = false;
        next
    }

    /// Serialize for transport.
    ///
    /// When `post_to_all` is set, every id field is absent (the backend's
    /// absence-means-unrestricted convention). Otherwise a field is present
    /// only when non-empty; an explicit empty array is never produced.
    pub fn to_fields(&self) -> GeoAccessFields {
        if self.post_to_all {
            return GeoAccessFields {
                post_to_all: true,
                ..GeoAccessFields::default()
            };
        }

        fn non_empty(ids: &[i64]) -> Option<Vec<i64>> {
            if ids.is_empty() {
                None
            } else {
                Some(ids.to_vec())
            }
        }

        GeoAccessFields {
            district_ids: non_empty(&self.district_ids),
            mandal_ids: non_empty(&self.mandal_ids),
            parliamentary_constituency_ids: non_empty(&self.parliamentary_ids),
            assembly_constituency_ids: non_empty(&self.assembly_ids),
            post_to_all: false,
        }
    }

    /// Hydrate from a stored entity's fields.
    ///
    /// An entity with all four arrays empty or null reads as unrestricted,
    /// whatever its stored flag says.
    pub fn from_fields(fields: &GeoAccessFields) -> Self {
        let district_ids = fields.district_ids.clone().unwrap_or_default();
        let mandal_ids = fields.mandal_ids.clone().unwrap_or_default();
        let parliamentary_ids = fields.parliamentary_constituency_ids.clone().unwrap_or_default();
        let assembly_ids = fields.assembly_constituency_ids.clone().unwrap_or_default();

        let post_to_all = district_ids.is_empty()
            && mandal_ids.is_empty()
            && parliamentary_ids.is_empty()
            && assembly_ids.is_empty();

        Self {
            district_ids,
            mandal_ids,
            parliamentary_ids,
            assembly_ids,
            post_to_all,
        }
    }
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

    fn assembly(id: i64, parliamentary_constituency_id: i64) -> AssemblyConstituency {
        AssemblyConstituency {
            id,
            parliamentary_constituency_id,
            name: format!("AC {}", id),
            local_name: None,
        }
    }

    fn assert_valid(value: &GeoAccess) {
        if value.post_to_all {
            assert!(value.district_ids.is_empty());
            assert!(value.mandal_ids.is_empty());
            assert!(value.parliamentary_ids.is_empty());
            assert!(value.assembly_ids.is_empty());
        }
        assert!(!(value.has_district_selection() && value.has_constituency_selection()));
    }

    #[test]
    fn test_toggle_district_from_unrestricted() {
        let next = GeoAccess::unrestricted().toggle_district(5, &[]);

        assert!(!next.post_to_all);
        assert_eq!(next.district_ids, vec![5]);
        assert!(next.mandal_ids.is_empty());
        assert!(next.parliamentary_ids.is_empty());
        assert!(next.assembly_ids.is_empty());
        assert_valid(&next);
    }

    #[test]
    fn test_district_removal_prunes_its_mandals_only() {
        let known = [mandal(101, 5), mandal(202, 6)];
        let current = GeoAccess {
            district_ids: vec![5, 6],
            mandal_ids: vec![101, 202],
            ..GeoAccess::default()
        };

        let next = current.toggle_district(5, &known);

        assert_eq!(next.district_ids, vec![6]);
        assert_eq!(next.mandal_ids, vec![202]);
        assert_valid(&next);
    }

    #[test]
    fn test_district_removal_keeps_mandals_with_unknown_parent() {
        // 303 is not in the loaded reference list, so it cannot be proven an
        // orphan and must survive.
        let known = [mandal(101, 5)];
        let current = GeoAccess {
            district_ids: vec![5, 6],
            mandal_ids: vec![101, 303],
            ..GeoAccess::default()
        };

        let next = current.toggle_district(5, &known);

        assert_eq!(next.mandal_ids, vec![303]);
    }

    #[test]
    fn test_parliamentary_toggle_clears_district_group() {
        let current = GeoAccess {
            district_ids: vec![5],
            mandal_ids: vec![101],
            ..GeoAccess::default()
        };

        let next = current.toggle_parliamentary(3, &[]);

        assert!(next.district_ids.is_empty());
        assert!(next.mandal_ids.is_empty());
        assert_eq!(next.parliamentary_ids, vec![3]);
        assert!(!next.post_to_all);
        assert_valid(&next);
    }

    #[test]
    fn test_parliamentary_removal_prunes_its_assemblies_only() {
        let known = [assembly(30, 3), assembly(40, 4)];
        let current = GeoAccess {
            parliamentary_ids: vec![3, 4],
            assembly_ids: vec![30, 40],
            ..GeoAccess::default()
        };

        let next = current.toggle_parliamentary(3, &known);

        assert_eq!(next.parliamentary_ids, vec![4]);
        assert_eq!(next.assembly_ids, vec![40]);
        assert_valid(&next);
    }

    #[test]
    fn test_post_to_all_discards_any_selection() {
        let current = GeoAccess {
            parliamentary_ids: vec![3],
            assembly_ids: vec![30],
            ..GeoAccess::default()
        };

        let next = current.set_post_to_all(true);

        assert!(next.post_to_all);
        assert!(next.district_ids.is_empty());
        assert!(next.mandal_ids.is_empty());
        assert!(next.parliamentary_ids.is_empty());
        assert!(next.assembly_ids.is_empty());
        assert_valid(&next);
    }

    #[test]
    fn test_disabling_post_to_all_keeps_empty_selection() {
        let next = GeoAccess::unrestricted().set_post_to_all(false);

        assert!(!next.post_to_all);
        assert!(!next.has_district_selection());
        assert!(!next.has_constituency_selection());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let known_mandals = [mandal(101, 5)];
        let start = GeoAccess {
            district_ids: vec![5, 6],
            mandal_ids: vec![101],
            ..GeoAccess::default()
        };

        assert_eq!(
            start
                .toggle_district(6, &known_mandals)
                .toggle_district(6, &known_mandals),
            start
        );
        assert_eq!(start.toggle_mandal(101).toggle_mandal(101), start);

        let constituency_start = GeoAccess {
            parliamentary_ids: vec![3],
            assembly_ids: vec![30],
            ..GeoAccess::default()
        };
        assert_eq!(
            constituency_start
                .toggle_parliamentary(4, &[])
                .toggle_parliamentary(4, &[]),
            constituency_start
        );
        assert_eq!(
            constituency_start.toggle_assembly(31).toggle_assembly(31),
            constituency_start
        );
    }

    #[test]
    fn test_groups_stay_mutually_exclusive_over_any_sequence() {
        let known_mandals = [mandal(101, 5), mandal(102, 5)];
        let known_assemblies = [assembly(30, 3)];

        let mut value = GeoAccess::unrestricted();
        let steps: Vec<Box<dyn Fn(&GeoAccess) -> GeoAccess>> = vec![
            Box::new(|v| v.toggle_district(5, &[])),
            Box::new(|v| v.toggle_mandal(101)),
            Box::new(|v| v.toggle_parliamentary(3, &[])),
            Box::new(|v| v.toggle_assembly(30)),
            Box::new(|v| v.toggle_district(6, &[])),
            Box::new(|v| v.toggle_mandal(102)),
            Box::new(move |v| v.toggle_parliamentary(3, &known_assemblies)),
            Box::new(|v| v.set_post_to_all(true)),
            Box::new(move |v| v.toggle_district(5, &known_mandals)),
        ];

        for step in steps {
            value = step(&value);
            assert_valid(&value);
        }
    }

    #[test]
    fn test_serialize_omits_inactive_groups() {
        let value = GeoAccess {
            district_ids: vec![5],
            ..GeoAccess::default()
        };

        let fields = value.to_fields();

        assert_eq!(fields.district_ids, Some(vec![5]));
        assert_eq!(fields.mandal_ids, None);
        assert_eq!(fields.parliamentary_constituency_ids, None);
        assert_eq!(fields.assembly_constituency_ids, None);
        assert!(!fields.post_to_all);
    }

    #[test]
    fn test_serialize_post_to_all_omits_everything() {
        let fields = GeoAccess::unrestricted().to_fields();

        assert!(fields.post_to_all);
        assert_eq!(fields.district_ids, None);
        assert_eq!(fields.mandal_ids, None);
        assert_eq!(fields.parliamentary_constituency_ids, None);
        assert_eq!(fields.assembly_constituency_ids, None);
    }

    #[test]
    fn test_round_trip_preserves_restricted_value() {
        let value = GeoAccess {
            district_ids: vec![5, 6],
            mandal_ids: vec![101, 202],
            ..GeoAccess::default()
        };

        assert_eq!(GeoAccess::from_fields(&value.to_fields()), value);

        let constituency_value = GeoAccess {
            parliamentary_ids: vec![3],
            assembly_ids: vec![30, 31],
            ..GeoAccess::default()
        };
        assert_eq!(
            GeoAccess::from_fields(&constituency_value.to_fields()),
            constituency_value
        );
    }

    #[test]
    fn test_hydrating_all_null_fields_reads_as_post_to_all() {
        let fields: GeoAccessFields = serde_json::from_str(
            r#"{"districtIds":null,"mandalIds":null,"assemblyConstituencyIds":null,"parliamentaryConstituencyIds":null}"#,
        )
        .unwrap();

        let value = GeoAccess::from_fields(&fields);

        assert!(value.post_to_all);
        assert!(!value.has_district_selection());
        assert!(!value.has_constituency_selection());
    }

    #[test]
    fn test_hydrating_empty_arrays_reads_as_post_to_all() {
        let fields = GeoAccessFields {
            district_ids: Some(vec![]),
            mandal_ids: Some(vec![]),
            ..GeoAccessFields::default()
        };

        assert!(GeoAccess::from_fields(&fields).post_to_all);
    }
}
