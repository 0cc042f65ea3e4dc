//! The hardcoded reference table.
//!
//! Five (condition, symptoms, medicines) records, loaded once at first access
//! and immutable thereafter. This is deliberately an in-memory constant
//! collection: no external data source is implied anywhere in the system,
//! and the record order is fixed because matcher output ordering depends on
//! it.

use std::sync::OnceLock;

/// A static lookup record pairing a condition with its symptoms and the
/// medicines suggested for it.
///
/// Records are reference data only. They are never created, modified, or
/// deleted at runtime.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReferenceRecord {
    /// Condition name, e.g. "Influenza"
    pub condition: String,
    /// Symptom labels matched exactly against a caller's selection
    pub symptoms: Vec<String>,
    /// Medicines suggested when any symptom matches, in presentation order
    pub medicines: Vec<String>,
}

impl ReferenceRecord {
    fn new(condition: &str, symptoms: &[&str], medicines: &[&str]) -> Self {
        Self {
            condition: condition.to_owned(),
            symptoms: symptoms.iter().map(|s| (*s).to_owned()).collect(),
            medicines: medicines.iter().map(|m| (*m).to_owned()).collect(),
        }
    }
}

/// Returns the reference table used for medicine prediction.
///
/// The table is built on first access and shared for the lifetime of the
/// process. Order is significant: matcher results concatenate medicines in
/// the order records appear here.
pub fn reference_table() -> &'static [ReferenceRecord] {
    static TABLE: OnceLock<Vec<ReferenceRecord>> = OnceLock::new();
    TABLE.get_or_init(|| {
        vec![
            ReferenceRecord::new(
                "Common Cold",
                &["runny nose", "sore throat", "cough"],
                &["Acetaminophen", "Dextromethorphan", "Pseudoephedrine"],
            ),
            ReferenceRecord::new(
                "Influenza",
                &["fever", "body aches", "fatigue"],
                &["Oseltamivir", "Zanamivir", "Peramivir"],
            ),
            ReferenceRecord::new(
                "Allergies",
                &["sneezing", "itchy eyes", "congestion"],
                &["Loratadine", "Cetirizine", "Fexofenadine"],
            ),
            ReferenceRecord::new(
                "Migraine",
                &["severe headache", "nausea", "light sensitivity"],
                &["Sumatriptan", "Rizatriptan", "Almotriptan"],
            ),
            ReferenceRecord::new(
                "Hypertension",
                &["high blood pressure", "headache", "shortness of breath"],
                &["Lisinopril", "Amlodipine", "Metoprolol"],
            ),
        ]
    })
}

/// Returns every symptom label appearing in `table`, de-duplicated while
/// preserving the position of each label's first occurrence.
///
/// This is the listing a rendering layer offers as selectable labels.
pub fn all_symptoms(table: &[ReferenceRecord]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut symptoms = Vec::new();
    for record in table {
        for symptom in &record.symptoms {
            if seen.insert(symptom.as_str()) {
                symptoms.push(symptom.clone());
            }
        }
    }
    symptoms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table_has_five_records() {
        let table = reference_table();
        assert_eq!(table.len(), 5);
        assert_eq!(table[0].condition, "Common Cold");
        assert_eq!(table[4].condition, "Hypertension");
    }

    #[test]
    fn test_reference_table_is_shared() {
        let first = reference_table();
        let second = reference_table();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_all_symptoms_preserves_first_occurrence_order() {
        let table = reference_table();
        let symptoms = all_symptoms(table);

        assert_eq!(symptoms.first().map(String::as_str), Some("runny nose"));
        assert_eq!(
            symptoms.last().map(String::as_str),
            Some("shortness of breath")
        );
        // 5 records x 3 symptoms, no label repeats in the shipped table
        assert_eq!(symptoms.len(), 15);
    }

    #[test]
    fn test_all_symptoms_deduplicates() {
        let table = vec![
            ReferenceRecord::new("A", &["cough", "fever"], &["M1"]),
            ReferenceRecord::new("B", &["fever", "chills"], &["M2"]),
        ];
        let symptoms = all_symptoms(&table);
        assert_eq!(symptoms, vec!["cough", "fever", "chills"]);
    }
}
