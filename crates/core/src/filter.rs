//! Visible-subset projection over the loaded record list.
//!
//! Filtering is a pure function of `(records, search text, specialty
//! selection)` and is recomputed by callers on every input change. A record
//! is visible when the search predicate AND the specialty predicate both
//! hold. The search predicate ORs two sub-conditions: the display name
//! contains the search text ignoring case, or the identifier contains the
//! search text with case respected. The specialty predicate is exact equality
//! against the discriminant-appropriate specialty field; an absent selection
//! matches every record.

use crate::records::ActiveRecord;
use board_types::Specialty;

/// Whether `record` matches the free-text search.
///
/// The empty search text matches everything. Name matching is
/// case-insensitive; identifier matching is case-sensitive.
pub fn matches_search(record: &ActiveRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let name_matches = record
        .name()
        .to_lowercase()
        .contains(&search.to_lowercase());
    let mrn_matches = record.mrn().contains(search);

    name_matches || mrn_matches
}

/// Whether `record` matches the specialty selection.
///
/// `None` is the "All" position of the dropdown and matches every record.
pub fn matches_specialty(record: &ActiveRecord, selection: Option<Specialty>) -> bool {
    match selection {
        None => true,
        Some(specialty) => record.specialty() == specialty.as_str(),
    }
}

/// Project the visible subset of `records` for the given inputs.
pub fn visible_records(
    records: &[ActiveRecord],
    search: &str,
    selection: Option<Specialty>,
) -> Vec<ActiveRecord> {
    records
        .iter()
        .filter(|record| matches_search(record, search) && matches_specialty(record, selection))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::tests::{consultation, patient};

    fn sample_board() -> Vec<ActiveRecord> {
        vec![
            patient("MRN100", "Jane Doe", "Neurology"),
            consultation("MRN200", "John Roe", "Haematology"),
            patient("MRN300", "Ada Coe", "Haematology"),
        ]
    }

    #[test]
    fn empty_search_matches_every_record() {
        let records = sample_board();
        assert_eq!(visible_records(&records, "", None), records);
    }

    #[test]
    fn no_specialty_selection_matches_every_record() {
        let records = sample_board();
        for record in &records {
            assert!(matches_specialty(record, None));
        }
    }

    #[test]
    fn name_match_ignores_case() {
        let records = sample_board();
        let visible = visible_records(&records, "jane", None);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].mrn(), "MRN100");
    }

    #[test]
    fn identifier_match_respects_case() {
        let records = sample_board();
        assert_eq!(visible_records(&records, "MRN200", None).len(), 1);
        // "mrn200" matches neither the names nor the case-sensitive identifiers.
        assert!(visible_records(&records, "mrn200", None).is_empty());
    }

    #[test]
    fn specialty_selection_is_exact_per_discriminant() {
        let records = sample_board();
        let visible = visible_records(&records, "", Some(Specialty::Haematology));
        let mrns: Vec<&str> = visible.iter().map(|r| r.mrn()).collect();
        assert_eq!(mrns, ["MRN200", "MRN300"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample_board();
        let once = visible_records(&records, "oe", Some(Specialty::Haematology));
        let twice = visible_records(&once, "oe", Some(Specialty::Haematology));
        assert_eq!(once, twice);
    }

    #[test]
    fn predicates_commute() {
        let records = sample_board();
        let search_then_specialty = visible_records(
            &visible_records(&records, "oe", None),
            "",
            Some(Specialty::Haematology),
        );
        let specialty_then_search = visible_records(
            &visible_records(&records, "", Some(Specialty::Haematology)),
            "oe",
            None,
        );
        assert_eq!(search_then_specialty, specialty_then_search);
    }

    #[test]
    fn worked_example_scenario() {
        let records = vec![
            patient("MRN100", "Jane Doe", "Neurology"),
            consultation("MRN200", "John Roe", "Haematology"),
        ];

        let by_name = visible_records(&records, "jane", None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].mrn(), "MRN100");

        let by_specialty = visible_records(&records, "", Some(Specialty::Haematology));
        assert_eq!(by_specialty.len(), 1);
        assert_eq!(by_specialty[0].mrn(), "MRN200");
    }
}
