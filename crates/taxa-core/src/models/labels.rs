use serde::{Deserialize, Serialize};

use crate::errors::TrainingError;

/// Training labels: one boolean column per category, one row per text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelTable {
    categories: Vec<String>,
    rows: Vec<Vec<bool>>,
}

impl LabelTable {
    /// Build a label table, rejecting ragged rows.
    pub fn new(categories: Vec<String>, rows: Vec<Vec<bool>>) -> Result<Self, TrainingError> {
        let width = categories.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TrainingError::RaggedLabelRow {
                    row: i,
                    got: row.len(),
                    expected: width,
                });
            }
        }
        Ok(Self { categories, rows })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of label rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extract one category's boolean column, if present.
    pub fn column(&self, category_id: &str) -> Option<Vec<bool>> {
        let idx = self.categories.iter().position(|c| c == category_id)?;
        Some(self.rows.iter().map(|r| r[idx]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_columns() {
        let table = LabelTable::new(
            vec!["ai".into(), "quantum".into()],
            vec![vec![true, false], vec![false, true], vec![true, true]],
        )
        .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.column("ai"), Some(vec![true, false, true]));
        assert_eq!(table.column("quantum"), Some(vec![false, true, true]));
        assert_eq!(table.column("nope"), None);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = LabelTable::new(
            vec!["ai".into(), "quantum".into()],
            vec![vec![true, false], vec![true]],
        )
        .unwrap_err();
        assert!(matches!(err, TrainingError::RaggedLabelRow { row: 1, .. }));
    }
}
