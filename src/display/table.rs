//! Full result table: every header variable as a column, every cell formatted
//! independently.

use super::formatter::format_term;
use crate::sparql::SparqlResults;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Columns come from the header, or from the binding keys in first-seen
    /// order when the header lists no variables.
    pub fn from_results(results: &SparqlResults) -> Self {
        let mut columns = results.vars().to_vec();
        if columns.is_empty() {
            for binding in results.bindings() {
                for key in binding.keys() {
                    if !columns.iter().any(|c| c == key) {
                        columns.push(key.to_string());
                    }
                }
            }
        }
        let rows = results
            .bindings()
            .iter()
            .map(|binding| {
                columns
                    .iter()
                    .map(|var| format_term(binding.get(var)).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
