//! Tri-compostage screen: sorting centres, composting centres and the wastes
//! they handle.

use super::render::TextTable;
use crate::display::humanize;
use crate::sparql::{Binding, SparqlResults};
use serde::Serialize;

/// Operating state of a centre, read from its `statut`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationalStatus {
    Active,
    Maintenance,
    Suspended,
    Unknown,
}

impl OperationalStatus {
    pub fn parse(statut: &str) -> Self {
        match statut.trim().to_lowercase().as_str() {
            "en_service" | "actif" | "true" => OperationalStatus::Active,
            "maintenance" => OperationalStatus::Maintenance,
            "suspendu" | "inactif" | "false" => OperationalStatus::Suspended,
            _ => OperationalStatus::Unknown,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            OperationalStatus::Active => "✅",
            OperationalStatus::Maintenance => "⚠️",
            OperationalStatus::Suspended => "🔴",
            OperationalStatus::Unknown => "ℹ️",
        }
    }
}

fn field(binding: &Binding, key: &str) -> String {
    binding.value_or(key, "").to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortingCentre {
    pub uri: String,
    pub name: String,
    pub type_uri: String,
    pub location: String,
    pub capacity: String,
    pub sorting_rate: String,
    pub purity_rate: String,
    pub status: String,
}

impl SortingCentre {
    pub fn from_binding(binding: &Binding) -> Self {
        Self {
            uri: field(binding, "centre"),
            name: field(binding, "nom"),
            type_uri: field(binding, "type"),
            location: field(binding, "localisation"),
            capacity: field(binding, "capacite"),
            sorting_rate: field(binding, "debit_tri"),
            purity_rate: field(binding, "taux_purete"),
            status: field(binding, "statut"),
        }
    }

    pub fn operational_status(&self) -> OperationalStatus {
        OperationalStatus::parse(&self.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompostCentre {
    pub uri: String,
    pub name: String,
    pub type_uri: String,
    pub location: String,
    pub temperature: String,
    pub composting_time: String,
    pub status: String,
}

impl CompostCentre {
    pub fn from_binding(binding: &Binding) -> Self {
        Self {
            uri: field(binding, "centre"),
            name: field(binding, "nom"),
            type_uri: field(binding, "type"),
            location: field(binding, "localisation"),
            temperature: field(binding, "temperature"),
            composting_time: field(binding, "temps_compostage"),
            status: field(binding, "statut"),
        }
    }

    pub fn operational_status(&self) -> OperationalStatus {
        OperationalStatus::parse(&self.status)
    }
}

/// A waste routed to a centre, as returned by the sorted and compostable
/// waste endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortedWaste {
    pub uri: String,
    pub waste_type: String,
    pub quantity: String,
}

impl SortedWaste {
    pub fn from_binding(binding: &Binding) -> Self {
        Self {
            uri: field(binding, "dechet"),
            waste_type: field(binding, "type_dechet"),
            quantity: field(binding, "quantite"),
        }
    }
}

fn status_cell(status: &str) -> String {
    format!("{} {}", OperationalStatus::parse(status).icon(), status)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompostView {
    pub sorting_centres: Vec<SortingCentre>,
    pub compost_centres: Vec<CompostCentre>,
}

impl CompostView {
    pub fn new(sorting: &SparqlResults, compost: &SparqlResults) -> Self {
        Self {
            sorting_centres: sorting.bindings().iter().map(SortingCentre::from_binding).collect(),
            compost_centres: compost.bindings().iter().map(CompostCentre::from_binding).collect(),
        }
    }

    pub fn render_sorting(&self) -> String {
        if self.sorting_centres.is_empty() {
            return "Aucun centre de tri\n".to_string();
        }
        let mut table =
            TextTable::new(["Nom", "Type", "Localisation", "Capacité", "Débit", "Pureté (%)", "Statut"]);
        for c in &self.sorting_centres {
            table.push_row([
                c.name.clone(),
                humanize(&c.type_uri),
                c.location.clone(),
                c.capacity.clone(),
                c.sorting_rate.clone(),
                c.purity_rate.clone(),
                status_cell(&c.status),
            ]);
        }
        table.to_string()
    }

    pub fn render_compost(&self) -> String {
        if self.compost_centres.is_empty() {
            return "Aucun centre de compostage\n".to_string();
        }
        let mut table =
            TextTable::new(["Nom", "Type", "Localisation", "Température", "Durée (jours)", "Statut"]);
        for c in &self.compost_centres {
            table.push_row([
                c.name.clone(),
                humanize(&c.type_uri),
                c.location.clone(),
                c.temperature.clone(),
                c.composting_time.clone(),
                status_cell(&c.status),
            ]);
        }
        table.to_string()
    }

    pub fn render(&self) -> String {
        format!(
            "Centres de tri ({})\n{}\nCentres de compostage ({})\n{}",
            self.sorting_centres.len(),
            self.render_sorting(),
            self.compost_centres.len(),
            self.render_compost()
        )
    }
}

pub fn sorted_wastes(results: &SparqlResults) -> Vec<SortedWaste> {
    results.bindings().iter().map(SortedWaste::from_binding).collect()
}

pub fn render_sorted_wastes(centre: &str, wastes: &[SortedWaste]) -> String {
    if wastes.is_empty() {
        return format!("Aucun déchet pour {}\n", centre);
    }
    let mut table = TextTable::new(["Déchet", "Type", "Quantité"]);
    for w in wastes {
        table.push_row([humanize(&w.uri), humanize(&w.waste_type), w.quantity.clone()]);
    }
    format!("Déchets de {}\n{}", centre, table)
}
