//! The symptom matcher.
//!
//! Given a selection of symptom labels and a reference table, returns the
//! de-duplicated union of medicines for every record whose symptom set
//! intersects the selection. This is the entire reusable algorithmic surface
//! of the system: a total function with no error taxonomy, running to
//! completion on the calling thread.

use crate::dataset::ReferenceRecord;
use crate::selection::SelectionSet;
use std::collections::HashSet;

/// Predicts medicines for the selected symptoms.
///
/// 1. Records whose symptom set shares at least one label with `selection`
///    (exact string match) are kept, in table order.
/// 2. Their medicine lists are concatenated, preserving table order and
///    within-record order.
/// 3. Duplicates are removed, keeping each medicine's first occurrence
///    position.
///
/// An empty selection matches no record and yields an empty result. A label
/// appearing in no record contributes nothing and is not an error.
///
/// # Arguments
///
/// * `selection` - The symptom labels chosen by the caller
/// * `table` - The reference records to match against
///
/// # Returns
///
/// The predicted medicines in stable order, possibly empty. Never fails.
pub fn predict_medicines(selection: &SelectionSet, table: &[ReferenceRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut medicines = Vec::new();

    for record in table {
        let matches = record
            .symptoms
            .iter()
            .any(|symptom| selection.contains(symptom));
        if !matches {
            continue;
        }

        for medicine in &record.medicines {
            if seen.insert(medicine.as_str()) {
                medicines.push(medicine.clone());
            }
        }
    }

    medicines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::reference_table;

    fn record(condition: &str, symptoms: &[&str], medicines: &[&str]) -> ReferenceRecord {
        ReferenceRecord {
            condition: condition.to_owned(),
            symptoms: symptoms.iter().map(|s| (*s).to_owned()).collect(),
            medicines: medicines.iter().map(|m| (*m).to_owned()).collect(),
        }
    }

    #[test]
    fn test_fever_and_body_aches_match_only_influenza() {
        let selection = SelectionSet::from_labels(["fever", "body aches"]);
        let medicines = predict_medicines(&selection, reference_table());

        assert_eq!(medicines, ["Oseltamivir", "Zanamivir", "Peramivir"]);
    }

    #[test]
    fn test_severe_headache_matches_only_migraine() {
        // Exact-match semantics: "severe headache" is not "headache"
        let selection = SelectionSet::from_labels(["severe headache"]);
        let medicines = predict_medicines(&selection, reference_table());

        assert_eq!(medicines, ["Sumatriptan", "Rizatriptan", "Almotriptan"]);
    }

    #[test]
    fn test_headache_matches_hypertension_but_not_migraine() {
        // Only Hypertension lists the bare label "headache"
        let selection = SelectionSet::from_labels(["headache"]);
        let medicines = predict_medicines(&selection, reference_table());

        assert_eq!(medicines, ["Lisinopril", "Amlodipine", "Metoprolol"]);
    }

    #[test]
    fn test_empty_selection_yields_empty_result() {
        let selection = SelectionSet::new();
        assert!(predict_medicines(&selection, reference_table()).is_empty());
    }

    #[test]
    fn test_unknown_symptom_yields_empty_result() {
        let selection = SelectionSet::from_labels(["nonexistent symptom"]);
        assert!(predict_medicines(&selection, reference_table()).is_empty());
    }

    #[test]
    fn test_unknown_symptom_alongside_known_is_harmless() {
        let selection = SelectionSet::from_labels(["nonexistent symptom", "fever"]);
        let medicines = predict_medicines(&selection, reference_table());

        assert_eq!(medicines, ["Oseltamivir", "Zanamivir", "Peramivir"]);
    }

    #[test]
    fn test_result_preserves_table_order_across_records() {
        let selection = SelectionSet::from_labels(["cough", "fever"]);
        let medicines = predict_medicines(&selection, reference_table());

        // Common Cold precedes Influenza in the table
        assert_eq!(
            medicines,
            [
                "Acetaminophen",
                "Dextromethorphan",
                "Pseudoephedrine",
                "Oseltamivir",
                "Zanamivir",
                "Peramivir"
            ]
        );
    }

    #[test]
    fn test_shared_medicine_keeps_first_occurrence_position() {
        let table = vec![
            record("A", &["fever"], &["Shared", "OnlyA"]),
            record("B", &["cough"], &["OnlyB", "Shared"]),
        ];
        let selection = SelectionSet::from_labels(["fever", "cough"]);
        let medicines = predict_medicines(&selection, &table);

        assert_eq!(medicines, ["Shared", "OnlyA", "OnlyB"]);
    }

    #[test]
    fn test_no_duplicates_in_result() {
        let table = vec![
            record("A", &["fever"], &["M", "M", "N"]),
            record("B", &["fever"], &["M", "N"]),
        ];
        let selection = SelectionSet::from_labels(["fever"]);
        let medicines = predict_medicines(&selection, &table);

        assert_eq!(medicines, ["M", "N"]);
    }

    #[test]
    fn test_deterministic_over_repeated_calls() {
        let selection = SelectionSet::from_labels(["headache", "fever", "sneezing"]);
        let first = predict_medicines(&selection, reference_table());
        let second = predict_medicines(&selection, reference_table());

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_table_yields_empty_result() {
        let selection = SelectionSet::from_labels(["fever"]);
        assert!(predict_medicines(&selection, &[]).is_empty());
    }
}
