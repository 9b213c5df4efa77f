use serde::{Deserialize, Serialize};

use crate::domain::product_analysis::entities::ProductAnalysis;

/// Scan history, most recent first, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<ProductAnalysis>,
}

impl History {
    /// Puts `analysis` first, dropping any earlier entry with the same id.
    pub fn insert(&mut self, analysis: ProductAnalysis) {
        self.entries.retain(|entry| entry.id != analysis.id);
        self.entries.insert(0, analysis);
    }

    pub fn find_by_barcode(&self, barcode: &str) -> Option<&ProductAnalysis> {
        self.entries
            .iter()
            .find(|entry| entry.barcode.as_deref() == Some(barcode))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[ProductAnalysis] {
        &self.entries
    }

    pub fn product_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.product_name.as_str())
            .collect()
    }
}

impl From<Vec<ProductAnalysis>> for History {
    fn from(entries: Vec<ProductAnalysis>) -> Self {
        let mut history = History::default();
        // Persisted order is newest first; replay oldest first so dedup keeps the newest.
        for entry in entries.into_iter().rev() {
            history.insert(entry);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn analysis(id: &str, name: &str) -> ProductAnalysis {
        ProductAnalysis {
            id: id.to_string(),
            barcode: Some(id.to_string()),
            product_name: name.to_string(),
            image_url: String::new(),
            score: 50,
            recommendation: String::new(),
            organized_data: BTreeMap::new(),
            sources: None,
        }
    }

    #[test]
    fn test_insert_puts_newest_first() {
        let mut history = History::default();
        history.insert(analysis("1", "Oats"));
        history.insert(analysis("2", "Milk"));

        assert_eq!(history.product_names(), vec!["Milk", "Oats"]);
    }

    #[test]
    fn test_insert_existing_id_moves_it_first_without_growing() {
        let mut history = History::default();
        history.insert(analysis("1", "Oats"));
        history.insert(analysis("2", "Milk"));
        history.insert(analysis("3", "Bread"));

        history.insert(analysis("1", "Oats v2"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.product_names(), vec!["Oats v2", "Bread", "Milk"]);
    }

    #[test]
    fn test_find_by_barcode() {
        let mut history = History::default();
        history.insert(analysis("3017620422003", "Nutella"));

        assert_eq!(
            history.find_by_barcode("3017620422003").map(|a| a.product_name.as_str()),
            Some("Nutella")
        );
        assert!(history.find_by_barcode("0000").is_none());
    }

    #[test]
    fn test_image_entries_are_not_matched_by_barcode() {
        let mut history = History::default();
        let mut image = analysis("image-1", "Apple");
        image.barcode = None;
        history.insert(image);

        assert!(history.find_by_barcode("image-1").is_none());
    }

    #[test]
    fn test_clear_empties_history() {
        let mut history = History::default();
        for i in 0..5 {
            history.insert(analysis(&i.to_string(), "item"));
        }

        history.clear();

        assert!(history.is_empty());
    }

    #[test]
    fn test_from_vec_removes_duplicates_keeping_first() {
        let history = History::from(vec![
            analysis("1", "newest"),
            analysis("2", "middle"),
            analysis("1", "stale"),
        ]);

        assert_eq!(history.product_names(), vec!["newest", "middle"]);
    }
}
