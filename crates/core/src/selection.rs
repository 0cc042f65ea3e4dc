//! Symptom selection with toggle semantics.

/// The set of symptom labels currently chosen by a caller.
///
/// Labels are toggled one at a time: toggling a label adds it if absent and
/// removes it if present. Insertion order is preserved so repeated
/// predictions over the same selection are reproducible label-for-label.
///
/// Membership uses exact string comparison. "headache" and "severe headache"
/// are distinct labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    labels: Vec<String>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from an iterator of labels, dropping duplicates
    /// while keeping first-occurrence order.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for label in labels {
            let label = label.into();
            if !selection.contains(&label) {
                selection.labels.push(label);
            }
        }
        selection
    }

    /// Toggles a label: adds it if absent, removes it if present.
    pub fn toggle(&mut self, label: impl Into<String>) {
        let label = label.into();
        if let Some(position) = self.labels.iter().position(|l| *l == label) {
            self.labels.remove(position);
        } else {
            self.labels.push(label);
        }
    }

    /// True when `label` is currently selected (exact match).
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// The selected labels in insertion order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Removes every selected label.
    pub fn clear(&mut self) {
        self.labels.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_absent_label() {
        let mut selection = SelectionSet::new();
        selection.toggle("fever");

        assert!(selection.contains("fever"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_toggle_removes_present_label() {
        let mut selection = SelectionSet::new();
        selection.toggle("fever");
        selection.toggle("fever");

        assert!(!selection.contains("fever"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_preserves_order_of_others() {
        let mut selection = SelectionSet::new();
        selection.toggle("fever");
        selection.toggle("cough");
        selection.toggle("nausea");
        selection.toggle("cough");

        assert_eq!(selection.labels(), ["fever", "nausea"]);
    }

    #[test]
    fn test_from_labels_drops_duplicates() {
        let selection = SelectionSet::from_labels(["fever", "cough", "fever"]);
        assert_eq!(selection.labels(), ["fever", "cough"]);
    }

    #[test]
    fn test_exact_match_membership() {
        let selection = SelectionSet::from_labels(["severe headache"]);
        assert!(selection.contains("severe headache"));
        assert!(!selection.contains("headache"));
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionSet::from_labels(["fever", "cough"]);
        selection.clear();
        assert!(selection.is_empty());
    }
}
