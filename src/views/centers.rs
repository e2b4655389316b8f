//! Centers screen.

use super::compost::OperationalStatus;
use super::labels::{center_badge, center_type_label, count_labels};
use super::render::TextTable;
use super::supervisors::label_matches;
use super::FILTER_ALL;
use crate::sparql::{Binding, SparqlResults};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterRow {
    pub uri: String,
    pub id: String,
    pub name: Option<String>,
    pub type_uri: String,
    pub type_label: String,
    pub badge: &'static str,
    pub center_kind: Option<String>,
    pub status: Option<String>,
    pub opening_hours: Option<String>,
    pub address: Option<String>,
}

impl CenterRow {
    pub fn from_binding(binding: &Binding) -> Self {
        let type_uri = binding.value_string("type");
        let type_label = center_type_label(&type_uri);
        let optional = |key: &str| binding.value(key).filter(|v| !v.is_empty()).map(str::to_string);
        Self {
            uri: binding.value_string("center"),
            id: binding.value_string("id"),
            name: optional("nomCentre"),
            badge: center_badge(&type_label),
            type_label,
            type_uri,
            center_kind: optional("typeCentre"),
            status: optional("statutOperationnel"),
            opening_hours: optional("horairesOuverture"),
            address: optional("adresse"),
        }
    }

    /// Center name, then id, then a generic title.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None if !self.id.is_empty() => &self.id,
            None => "Centre de tri",
        }
    }

    pub fn status_display(&self) -> String {
        match &self.status {
            Some(status) => format!("{} {}", OperationalStatus::parse(status).icon(), status),
            None => "Inconnu".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CentersView {
    pub centers: Vec<CenterRow>,
    pub filter: String,
}

impl CentersView {
    pub fn from_results(results: &SparqlResults) -> Self {
        Self {
            centers: results.bindings().iter().map(CenterRow::from_binding).collect(),
            filter: FILTER_ALL.to_string(),
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn filtered(&self) -> Vec<&CenterRow> {
        self.centers.iter().filter(|c| label_matches(&c.type_label, &self.filter)).collect()
    }

    pub fn type_counts(&self) -> Vec<(String, usize)> {
        count_labels(self.centers.iter().map(|c| c.type_label.clone()))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut chips = vec![format!("Tous ({})", self.centers.len())];
        chips.extend(self.type_counts().into_iter().map(|(label, n)| format!("{} ({})", label, n)));
        out.push_str(&chips.join("  "));
        out.push_str("\n\n");

        let rows = self.filtered();
        if rows.is_empty() {
            out.push_str("Aucun centre trouvé\n");
            return out;
        }
        let mut table = TextTable::new(["Nom", "Type", "ID", "Statut", "Horaires", "Adresse"]);
        for c in rows {
            table.push_row([
                c.display_name().to_string(),
                c.type_label.clone(),
                c.id.clone(),
                c.status_display(),
                c.opening_hours.clone().unwrap_or_default(),
                c.address.clone().unwrap_or_default(),
            ]);
        }
        out.push_str(&table.to_string());
        out
    }
}
