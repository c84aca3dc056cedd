//! In-memory tabular dataset.

use crate::cell::CellValue;

/// One loaded row. Identity is the 1-based position in the source file;
/// records are never mutated after loading, only copied into result sets.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub index: usize,
    pub cells: Vec<CellValue>,
}

/// An ordered sequence of records sharing one column list.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, assigning the next 1-based index.
    pub fn push_cells(&mut self, cells: Vec<CellValue>) {
        let index = self.rows.len() + 1;
        self.rows.push(Record { index, cells });
    }

    /// Resolves a column label to its position, exact match on the header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
