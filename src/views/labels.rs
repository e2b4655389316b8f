//! Type labels and badges derived from ontology class URIs.

use regex::Regex;
use std::sync::OnceLock;

/// Text after the last `#` of a class URI (the whole string when there is none).
pub fn class_name(type_uri: &str) -> &str {
    type_uri.rsplit('#').next().unwrap_or(type_uri)
}

/// Class name with underscores turned into spaces, `remove` patterns deleted,
/// trimmed; `fallback` when nothing is left.
fn class_label(type_uri: &str, remove: &[&str], fallback: &str) -> String {
    let mut label = class_name(type_uri).replace('_', " ");
    for pattern in remove {
        label = label.replacen(pattern, "", 1);
    }
    match label.trim() {
        "" => fallback.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// `...#Producteur_Agricole` → `Agricole`; the base class → `Général`.
pub fn producer_type_label(type_uri: &str) -> String {
    class_label(type_uri, &["Producteur"], "Général")
}

/// `...#Dechets_Plastique` → `Plastique`; the base class → `Déchet`.
pub fn waste_type_label(type_uri: &str) -> String {
    class_label(type_uri, &["Dechets"], "Déchet")
}

/// `...#Superviseur_Municipal` → `Municipal`. The ontology also contains the
/// misspelled `Supervuseur` prefix.
pub fn supervisor_type_label(type_uri: &str) -> String {
    class_label(type_uri, &["Superviseur", "Supervuseur"], "Général")
}

fn center_rewrites() -> &'static [(Regex, &'static str)] {
    static REWRITES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    REWRITES.get_or_init(|| {
        [
            (r"(?i)^Centre Tri ", ""),
            (r"(?i)^Centre Compostage ", "Compostage "),
            (r"(?i)^Centre Compostage$", "Compostage"),
            (r"(?i)^Usine Recyclage ", "Recyclage "),
            (r"(?i)^Usine Recyclage$", "Recyclage"),
        ]
        .into_iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).expect("center label pattern is valid"), replacement))
        .collect()
    })
}

/// `...#Centre_Tri_Optique` → `Optique`, `...#Centre_Compostage_Industriel` →
/// `Compostage Industriel`, `...#Usine_recyclage` → `Recyclage`.
pub fn center_type_label(type_uri: &str) -> String {
    let mut label = class_name(type_uri).replace('_', " ");
    for (pattern, replacement) in center_rewrites() {
        label = pattern.replace(&label, *replacement).into_owned();
    }
    match label.trim() {
        "" => "Général".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Badge category of a supervisor label.
pub fn supervisor_badge(label: &str) -> &'static str {
    badge(
        label,
        &["environnemental", "municipal", "national", "regional", "securite", "qualite"],
    )
}

/// Badge category of a center label.
pub fn center_badge(label: &str) -> &'static str {
    badge(
        label,
        &["compostage", "recyclage", "automatise", "manuel", "optique", "magnetique", "densite", "mixte"],
    )
}

fn badge(label: &str, categories: &[&'static str]) -> &'static str {
    let lower = label.to_lowercase();
    categories.iter().find(|c| lower.contains(*c)).copied().unwrap_or("general")
}

/// (label, count) pairs in first-seen order.
pub fn count_labels<I, S>(labels: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels {
        let label = label.into();
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
}
