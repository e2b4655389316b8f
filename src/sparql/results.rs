//! SPARQL results JSON model
//!
//! Mirrors the `application/sparql-results+json` shape the backend wraps in its
//! envelope: `{ "head": { "vars": [...] }, "results": { "bindings": [...] } }`
//! for SELECT queries, `{ "head": {}, "boolean": true }` for ASK queries.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One bound value: `{ "type": "uri", "value": "http://..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl Term {
    pub fn literal(value: impl Into<String>) -> Self {
        Self { kind: Some("literal".to_string()), value: value.into(), datatype: None, lang: None }
    }

    pub fn uri(value: impl Into<String>) -> Self {
        Self { kind: Some("uri".to_string()), value: value.into(), datatype: None, lang: None }
    }

    pub fn is_uri(&self) -> bool {
        self.kind.as_deref() == Some("uri")
    }
}

/// One solution row. Variables keep the order in which the backend sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    entries: Vec<(String, Term)>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing an existing entry in place.
    pub fn insert(&mut self, name: impl Into<String>, term: Term) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = term,
            None => self.entries.push((name, term)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Term> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, t)| t)
    }

    /// Case-insensitive variable lookup; the first matching entry wins.
    pub fn get_ignore_case(&self, name: &str) -> Option<&Term> {
        self.entries.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, t)| t)
    }

    /// Raw value of `name`, if bound.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|t| t.value.as_str())
    }

    pub fn value_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.value(name).unwrap_or(default)
    }

    /// Owned copy of the value, empty when unbound.
    pub fn value_string(&self, name: &str) -> String {
        self.value_or(name, "").to_string()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Term)> for Binding {
    fn from_iter<I: IntoIterator<Item = (K, Term)>>(iter: I) -> Self {
        let mut binding = Binding::new();
        for (name, term) in iter {
            binding.insert(name, term);
        }
        binding
    }
}

impl Serialize for Binding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, term) in &self.entries {
            map.serialize_entry(name, term)?;
        }
        map.end()
    }
}

struct BindingVisitor;

impl<'de> Visitor<'de> for BindingVisitor {
    type Value = Binding;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of variable names to SPARQL terms")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Binding, A::Error> {
        let mut binding = Binding::new();
        while let Some((name, term)) = access.next_entry::<String, Option<Term>>()? {
            // unbound variables may be sent as null
            if let Some(term) = term {
                binding.insert(name, term);
            }
        }
        Ok(binding)
    }
}

impl<'de> Deserialize<'de> for Binding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BindingVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Head {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bindings {
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// A complete query answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub head: Head,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Bindings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean: Option<bool>,
}

impl SparqlResults {
    pub fn from_bindings(vars: Vec<String>, bindings: Vec<Binding>) -> Self {
        Self { head: Head { vars }, results: Some(Bindings { bindings }), boolean: None }
    }

    pub fn bindings(&self) -> &[Binding] {
        self.results.as_ref().map_or(&[], |r| r.bindings.as_slice())
    }

    pub fn into_bindings(self) -> Vec<Binding> {
        self.results.map(|r| r.bindings).unwrap_or_default()
    }

    pub fn vars(&self) -> &[String] {
        &self.head.vars
    }

    pub fn first(&self) -> Option<&Binding> {
        self.bindings().first()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings().is_empty()
    }
}
