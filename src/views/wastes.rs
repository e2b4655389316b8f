//! Wastes screen.

use super::labels::waste_type_label;
use super::render::TextTable;
use crate::sparql::{Binding, SparqlResults};
use serde::Serialize;
use std::fmt;

pub const UNNAMED_WASTE: &str = "Déchet sans nom";

/// Danger band of a waste, from its 0 to 5 level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DangerClass {
    Low,
    Medium,
    High,
}

impl DangerClass {
    /// Reads the leading integer of `level`; anything unparseable is `Low`.
    pub fn from_level(level: &str) -> Self {
        match leading_int(level) {
            Some(n) if n >= 4 => DangerClass::High,
            Some(n) if n >= 2 => DangerClass::Medium,
            _ => DangerClass::Low,
        }
    }
}

impl fmt::Display for DangerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DangerClass::Low => "faible",
            DangerClass::Medium => "moyen",
            DangerClass::High => "élevé",
        })
    }
}

/// Integer prefix of `text` after leading whitespace and an optional sign.
pub(crate) fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteRow {
    pub uri: String,
    pub id: String,
    pub name: String,
    pub type_uri: String,
    pub type_label: String,
    pub weight: Option<String>,
    pub quantity: Option<String>,
    pub danger_level: Option<String>,
    pub creation_date: Option<String>,
    pub description: Option<String>,
}

impl WasteRow {
    pub fn from_binding(binding: &Binding) -> Self {
        let type_uri = binding.value_string("type");
        let name = match binding.value("name") {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNNAMED_WASTE.to_string(),
        };
        let optional = |key: &str| binding.value(key).map(str::to_string);
        Self {
            uri: binding.value_string("waste"),
            id: binding.value_string("id"),
            name,
            type_label: waste_type_label(&type_uri),
            type_uri,
            weight: optional("weight"),
            quantity: optional("quantity"),
            danger_level: optional("dangerLevel"),
            creation_date: optional("creationDate"),
            description: optional("description"),
        }
    }

    pub fn danger_class(&self) -> Option<DangerClass> {
        self.danger_level.as_deref().map(DangerClass::from_level)
    }

    /// `n/5 (band)`, or empty when the level is unknown.
    pub fn danger_display(&self) -> String {
        match (&self.danger_level, self.danger_class()) {
            (Some(level), Some(class)) => format!("{}/5 ({})", level, class),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WastesView {
    pub wastes: Vec<WasteRow>,
}

impl WastesView {
    pub fn from_results(results: &SparqlResults) -> Self {
        Self { wastes: results.bindings().iter().map(WasteRow::from_binding).collect() }
    }

    pub fn render(&self) -> String {
        if self.wastes.is_empty() {
            return "Aucun déchet trouvé\n".to_string();
        }
        let mut table = TextTable::new(["Nom", "Type", "ID", "Poids (kg)", "Quantité", "Danger"]);
        for w in &self.wastes {
            table.push_row([
                w.name.clone(),
                w.type_label.clone(),
                w.id.clone(),
                w.weight.clone().unwrap_or_default(),
                w.quantity.clone().unwrap_or_default(),
                w.danger_display(),
            ]);
        }
        format!("{} déchet(s)\n\n{}", self.wastes.len(), table)
    }
}
