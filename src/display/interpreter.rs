//! Binding interpreter
//!
//! Guesses, for an arbitrary result row, which variable is the primary label and
//! which is a related value. The guess is an ordered table of rules; the first
//! rule that yields a non-empty label wins. Screens depend on which rule wins for
//! their query shapes, so the order below must not change.
//!
//! 1. product name (+ waste name as the related value)
//! 2. full name, kept raw (+ center name, or a generic object)
//! 3. generic subject (+ generic object), with their URIs kept for linking
//! 4. positional: first variable is the label, second the related value
//!
//! When nothing applies the label is [`UNKNOWN_RESULT`].

use super::formatter::{humanize, is_http_uri};
use crate::sparql::{Binding, Term};
use serde::Serialize;

/// Label used when no variable of a row can be displayed.
pub const UNKNOWN_RESULT: &str = "Résultat inconnu";

pub const PRODUCT_NAME: &[&str] = &["produitnom", "produit", "productname", "product"];
pub const WASTE_NAME: &[&str] = &["dechetnom", "dechet", "wastename", "waste"];
pub const FULL_NAME: &[&str] = &["nomcomplet", "nom_complet", "fullname"];
pub const CENTER_NAME: &[&str] = &["nomcentre", "nom_centre", "centrename"];
pub const SUBJECT: &[&str] = &["sujet", "subject"];
pub const OBJECT: &[&str] = &["objet", "object"];

/// What a screen shows for one result row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResult {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_uri: Option<String>,
}

impl DisplayResult {
    pub fn label_only(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Default::default() }
    }

    pub fn unknown() -> Self {
        Self::label_only(UNKNOWN_RESULT)
    }

    pub fn is_unknown(&self) -> bool {
        self.label == UNKNOWN_RESULT && self.object.is_none()
    }
}

/// Which value a rule starts from.
enum Trigger {
    /// The first synonym (in list order) bound in the row, compared case-insensitively.
    Synonyms(&'static [&'static str]),
    /// The first variable of the row.
    FirstVariable,
}

struct Rule {
    trigger: Trigger,
    extract: fn(&Term, &Binding) -> Option<DisplayResult>,
}

const RULES: &[Rule] = &[
    Rule { trigger: Trigger::Synonyms(PRODUCT_NAME), extract: product_and_waste },
    Rule { trigger: Trigger::Synonyms(FULL_NAME), extract: full_name },
    Rule { trigger: Trigger::Synonyms(SUBJECT), extract: subject_and_object },
    Rule { trigger: Trigger::FirstVariable, extract: positional },
];

/// Looks up the first synonym bound in `binding`, ignoring case.
pub fn lookup<'a>(binding: &'a Binding, synonyms: &[&str]) -> Option<&'a Term> {
    synonyms.iter().find_map(|name| binding.get_ignore_case(name))
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn uri_of(term: &Term) -> Option<String> {
    is_http_uri(&term.value).then(|| term.value.clone())
}

fn product_and_waste(product: &Term, binding: &Binding) -> Option<DisplayResult> {
    let label = non_empty(humanize(&product.value))?;
    let object = lookup(binding, WASTE_NAME).and_then(|w| non_empty(humanize(&w.value)));
    Some(DisplayResult { label, object, ..Default::default() })
}

fn full_name(full: &Term, binding: &Binding) -> Option<DisplayResult> {
    // the name is shown as sent, even when it looks like a URI
    let label = non_empty(full.value.clone())?;
    let subject_uri = lookup(binding, SUBJECT).and_then(uri_of);

    let center = lookup(binding, CENTER_NAME).and_then(|c| non_empty(c.value.clone()));
    let (object, object_uri) = match center {
        Some(center) => (Some(center), None),
        None => match lookup(binding, OBJECT) {
            Some(obj) => (non_empty(humanize(&obj.value)), uri_of(obj)),
            None => (None, None),
        },
    };

    Some(DisplayResult { label, object, subject_uri, object_uri })
}

fn subject_and_object(subject: &Term, binding: &Binding) -> Option<DisplayResult> {
    let label = non_empty(humanize(&subject.value))?;
    let object_term = lookup(binding, OBJECT);
    Some(DisplayResult {
        label,
        object: object_term.and_then(|o| non_empty(humanize(&o.value))),
        subject_uri: uri_of(subject),
        object_uri: object_term.and_then(uri_of),
    })
}

fn positional(first: &Term, binding: &Binding) -> Option<DisplayResult> {
    let label = non_empty(humanize(&first.value))?;
    let object = binding.iter().nth(1).and_then(|(_, second)| non_empty(humanize(&second.value)));
    Some(DisplayResult { label, object, ..Default::default() })
}

/// Interprets one result row. Never fails: rows with nothing displayable
/// produce [`DisplayResult::unknown`].
pub fn interpret(binding: &Binding) -> DisplayResult {
    RULES
        .iter()
        .find_map(|rule| {
            let term = match rule.trigger {
                Trigger::Synonyms(synonyms) => lookup(binding, synonyms)?,
                Trigger::FirstVariable => binding.iter().next()?.1,
            };
            (rule.extract)(term, binding)
        })
        .unwrap_or_else(DisplayResult::unknown)
}

/// Interprets every row of a result set, in order.
pub fn interpret_all<'a>(bindings: impl IntoIterator<Item = &'a Binding>) -> Vec<DisplayResult> {
    bindings.into_iter().map(interpret).collect()
}
