//! Detail sheets built from `property`/`value` rows.

use super::render::TextTable;
use crate::display::{humanize, local_name};
use crate::sparql::SparqlResults;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertySheet {
    pub properties: Vec<Property>,
}

impl PropertySheet {
    /// Property names are reduced to their local name; `rdf:type` rows are
    /// kept with a humanized class.
    pub fn from_results(results: &SparqlResults) -> Self {
        let properties = results
            .bindings()
            .iter()
            .filter_map(|b| {
                let property = b.value("property")?;
                let value = b.value("value")?;
                Some(Property { name: local_name(property).to_string(), value: humanize(value) })
            })
            .collect();
        Self { properties }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.iter().find(|p| p.name == name).map(|p| p.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn render(&self) -> String {
        if self.is_empty() {
            return "Aucun détail disponible\n".to_string();
        }
        let mut table = TextTable::new(["Propriété", "Valeur"]);
        for p in &self.properties {
            table.push_row([p.name.as_str(), p.value.as_str()]);
        }
        table.to_string()
    }
}
