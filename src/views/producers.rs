//! Producers screen: list with type filter, details and per-producer wastes.

use super::labels::{count_labels, producer_type_label};
use super::render::TextTable;
use super::FILTER_ALL;
use crate::sparql::{Binding, SparqlResults};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerRow {
    pub uri: String,
    pub id: String,
    pub name: String,
    pub type_uri: String,
    pub type_label: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl ProducerRow {
    pub fn from_binding(binding: &Binding) -> Self {
        let type_uri = binding.value_string("type");
        Self {
            uri: binding.value_string("producer"),
            id: binding.value_string("id"),
            name: binding.value_string("name"),
            type_label: producer_type_label(&type_uri),
            type_uri,
            address: binding.value("address").map(str::to_string),
            city: binding.value("city").map(str::to_string),
            postal_code: binding.value("postalCode").map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducersView {
    pub producers: Vec<ProducerRow>,
    pub filter: String,
}

impl ProducersView {
    pub fn from_results(results: &SparqlResults) -> Self {
        Self {
            producers: results.bindings().iter().map(ProducerRow::from_binding).collect(),
            filter: FILTER_ALL.to_string(),
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Rows whose type URI contains the filter; every row for `all`.
    pub fn filtered(&self) -> Vec<&ProducerRow> {
        self.producers
            .iter()
            .filter(|p| self.filter == FILTER_ALL || p.type_uri.contains(&self.filter))
            .collect()
    }

    /// (type label, count) over all producers, in first-seen order.
    pub fn type_counts(&self) -> Vec<(String, usize)> {
        count_labels(self.producers.iter().map(|p| p.type_label.clone()))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut chips = vec![format!("Tous ({})", self.producers.len())];
        chips.extend(self.type_counts().into_iter().map(|(label, n)| format!("{} ({})", label, n)));
        out.push_str(&chips.join("  "));
        out.push_str("\n\n");

        let rows = self.filtered();
        if rows.is_empty() {
            out.push_str("Aucun producteur trouvé\n");
            return out;
        }

        let mut table = TextTable::new(["Nom", "Type", "ID", "Ville", "Adresse", "Code postal"]);
        for p in rows {
            table.push_row([
                p.name.clone(),
                p.type_label.clone(),
                p.id.clone(),
                p.city.clone().unwrap_or_default(),
                p.address.clone().unwrap_or_default(),
                p.postal_code.clone().unwrap_or_default(),
            ]);
        }
        out.push_str(&table.to_string());
        out
    }
}

/// Producer fields read from `property`/`value` rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerDetails {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
}

impl ProducerDetails {
    /// `idProducteur` is tested before `nom` so it is not mistaken for a name.
    pub fn from_results(results: &SparqlResults) -> Self {
        let mut details = Self::default();
        for binding in results.bindings() {
            let (Some(property), Some(value)) = (binding.value("property"), binding.value("value")) else {
                continue;
            };
            let value = value.to_string();
            if property.contains("idProducteur") {
                details.id = value;
            } else if property.contains("nom") {
                details.name = value;
            } else if property.contains("ville") {
                details.city = Some(value);
            } else if property.contains("adresse") {
                details.address = Some(value);
            } else if property.contains("codePostal") {
                details.postal_code = Some(value);
            }
        }
        details
    }

    pub fn render(&self) -> String {
        let mut table = TextTable::new(["Champ", "Valeur"]);
        table.push_row(["ID", self.id.as_str()]);
        table.push_row(["Nom", self.name.as_str()]);
        table.push_row(["Ville", self.city.as_deref().unwrap_or("")]);
        table.push_row(["Adresse", self.address.as_deref().unwrap_or("")]);
        table.push_row(["Code postal", self.postal_code.as_deref().unwrap_or("")]);
        table.to_string()
    }
}
