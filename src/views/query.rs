//! Result screen of a natural-language or SPARQL query.

use super::render::TextTable;
use crate::display::{interpret_all, DisplayResult, ResultTable};
use crate::sparql::SparqlResults;
use serde::Serialize;

pub const NO_RESULTS: &str = "Aucun résultat trouvé";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryView {
    pub results: Vec<DisplayResult>,
    pub table: ResultTable,
    /// Answer of an ASK query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QueryView {
    pub fn from_results(results: &SparqlResults) -> Self {
        let message = (results.is_empty() && results.boolean.is_none()).then(|| NO_RESULTS.to_string());
        Self {
            results: interpret_all(results.bindings()),
            table: ResultTable::from_results(results),
            boolean: results.boolean,
            message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.boolean.is_none()
    }

    fn render_answer(answer: bool) -> String {
        format!("Réponse: {}\n", if answer { "oui" } else { "non" })
    }

    /// One line per row: `label → object`.
    pub fn render(&self) -> String {
        if self.results.is_empty() {
            return match self.boolean {
                Some(answer) => Self::render_answer(answer),
                None => format!("{}\n", NO_RESULTS),
            };
        }
        let mut out = format!("{} résultat(s)\n", self.results.len());
        for result in &self.results {
            match &result.object {
                Some(object) => out.push_str(&format!("  • {} → {}\n", result.label, object)),
                None => out.push_str(&format!("  • {}\n", result.label)),
            }
        }
        out
    }

    /// Every column of the result set, formatted cell by cell.
    pub fn render_table(&self) -> String {
        if self.table.is_empty() {
            return match self.boolean {
                Some(answer) => Self::render_answer(answer),
                None => format!("{}\n", NO_RESULTS),
            };
        }
        let mut table = TextTable::new(self.table.columns.iter().cloned());
        for row in &self.table.rows {
            table.push_row(row.iter().cloned());
        }
        table.to_string()
    }
}
