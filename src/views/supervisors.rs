//! Supervisors screen.

use super::labels::{count_labels, supervisor_badge, supervisor_type_label};
use super::render::TextTable;
use super::FILTER_ALL;
use crate::sparql::{Binding, SparqlResults};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorRow {
    pub uri: String,
    pub id: String,
    pub full_name: String,
    pub type_uri: String,
    pub type_label: String,
    pub badge: &'static str,
    pub function: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub zone: Option<String>,
    pub active: Option<String>,
}

impl SupervisorRow {
    pub fn from_binding(binding: &Binding) -> Self {
        let type_uri = binding.value_string("type");
        let type_label = supervisor_type_label(&type_uri);
        let optional = |key: &str| binding.value(key).map(str::to_string);
        Self {
            uri: binding.value_string("supervisor"),
            id: binding.value_string("id"),
            full_name: binding.value_string("nomComplet"),
            badge: supervisor_badge(&type_label),
            type_label,
            type_uri,
            function: optional("fonction"),
            email: optional("email"),
            phone: optional("telephone"),
            zone: optional("zoneAffectation"),
            active: optional("actif"),
        }
    }

    /// Display name, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.id
        } else {
            &self.full_name
        }
    }
}

/// Case-insensitive substring match on a type label; `all` matches everything.
pub(crate) fn label_matches(label: &str, filter: &str) -> bool {
    filter == FILTER_ALL || label.to_lowercase().contains(&filter.to_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SupervisorsView {
    pub supervisors: Vec<SupervisorRow>,
    pub filter: String,
}

impl SupervisorsView {
    pub fn from_results(results: &SparqlResults) -> Self {
        Self {
            supervisors: results.bindings().iter().map(SupervisorRow::from_binding).collect(),
            filter: FILTER_ALL.to_string(),
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn filtered(&self) -> Vec<&SupervisorRow> {
        self.supervisors.iter().filter(|s| label_matches(&s.type_label, &self.filter)).collect()
    }

    pub fn type_counts(&self) -> Vec<(String, usize)> {
        count_labels(self.supervisors.iter().map(|s| s.type_label.clone()))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut chips = vec![format!("Tous ({})", self.supervisors.len())];
        chips.extend(self.type_counts().into_iter().map(|(label, n)| format!("{} ({})", label, n)));
        out.push_str(&chips.join("  "));
        out.push_str("\n\n");

        let rows = self.filtered();
        if rows.is_empty() {
            out.push_str("Aucun superviseur trouvé\n");
            return out;
        }
        let mut table = TextTable::new(["Nom", "Type", "ID", "Fonction", "Email", "Téléphone", "Zone"]);
        for s in rows {
            table.push_row([
                s.display_name().to_string(),
                s.type_label.clone(),
                s.id.clone(),
                s.function.clone().unwrap_or_default(),
                s.email.clone().unwrap_or_default(),
                s.phone.clone().unwrap_or_default(),
                s.zone.clone().unwrap_or_default(),
            ]);
        }
        out.push_str(&table.to_string());
        out
    }
}
