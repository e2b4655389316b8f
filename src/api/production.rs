//! Producers and their wastes.

use super::client::{encode_segment, require, ConsoleClient};
use crate::error::{ConsoleError, Result};
use crate::sparql::SparqlResults;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Producer category accepted by the create and update forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProducerKind {
    Industriel,
    Agricole,
    Commercial,
    Hospitalier,
    Residentiel,
}

impl ProducerKind {
    pub const ALL: [ProducerKind; 5] = [
        ProducerKind::Industriel,
        ProducerKind::Agricole,
        ProducerKind::Commercial,
        ProducerKind::Hospitalier,
        ProducerKind::Residentiel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProducerKind::Industriel => "industriel",
            ProducerKind::Agricole => "agricole",
            ProducerKind::Commercial => "commercial",
            ProducerKind::Hospitalier => "hospitalier",
            ProducerKind::Residentiel => "residentiel",
        }
    }

    /// Ontology class of this category, e.g. `Producteur_Industriel`.
    pub fn class_name(self) -> &'static str {
        match self {
            ProducerKind::Industriel => "Producteur_Industriel",
            ProducerKind::Agricole => "Producteur_Agricole",
            ProducerKind::Commercial => "Producteur_Commercial",
            ProducerKind::Hospitalier => "Producteur_Hospitalier",
            ProducerKind::Residentiel => "Producteur_Residentiel",
        }
    }
}

impl fmt::Display for ProducerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProducerKind {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(['é', 'è'], "e");
        ProducerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted || kind.class_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConsoleError::validation(format!("Type de producteur invalide: {}", s)))
    }
}

/// Body of the create and update producer requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerForm {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProducerKind,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postal_code: String,
}

impl ProducerForm {
    pub fn validate(&self) -> Result<()> {
        require(&self.id, "Le champ 'id' est requis")?;
        require(&self.name, "Le champ 'name' est requis")?;
        if !self.postal_code.is_empty() && !self.postal_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConsoleError::validation("Le code postal doit être numérique"));
        }
        Ok(())
    }
}

impl ConsoleClient {
    pub async fn producers(&self) -> Result<SparqlResults> {
        self.get("/api/production/producers/").await?.into_results()
    }

    /// Producers of one ontology class, e.g. `Producteur_Agricole`.
    pub async fn producers_by_type(&self, producer_type: &str) -> Result<SparqlResults> {
        require(producer_type, "Le type de producteur est requis")?;
        let path = format!("/api/production/producers/type/{}/", encode_segment(producer_type));
        self.get(&path).await?.into_results()
    }

    pub async fn search_producers(&self, term: &str) -> Result<SparqlResults> {
        require(term, "Le paramètre de recherche 'q' est requis")?;
        self.get_query("/api/production/producers/search/", &[("q", term)]).await?.into_results()
    }

    pub async fn producers_by_city(&self, city: &str) -> Result<SparqlResults> {
        require(city, "Le paramètre 'city' est requis")?;
        self.get_query("/api/production/producers/city/", &[("city", city)]).await?.into_results()
    }

    /// `property`/`value` rows describing one producer.
    pub async fn producer_details(&self, producer_uri: &str) -> Result<SparqlResults> {
        require(producer_uri, "Le paramètre 'producer_uri' est requis")?;
        self.get_query("/api/production/producers/details/", &[("producer_uri", producer_uri)])
            .await?
            .into_results()
    }

    pub async fn producer_wastes(&self, producer_uri: &str) -> Result<SparqlResults> {
        require(producer_uri, "Le paramètre 'producer_uri' est requis")?;
        self.get_query("/api/production/producers/wastes/", &[("producer_uri", producer_uri)])
            .await?
            .into_results()
    }

    /// Single-row aggregate used by the statistics screen.
    pub async fn producer_statistics(&self) -> Result<SparqlResults> {
        self.get("/api/production/producers/statistics/").await?.into_results()
    }

    pub async fn create_producer(&self, form: &ProducerForm) -> Result<String> {
        form.validate()?;
        self.post_json("/api/production/producers/create/", form).await?.into_message()
    }

    pub async fn update_producer(&self, producer_uri: &str, form: &ProducerForm) -> Result<String> {
        require(producer_uri, "L'URI du producteur est requise")?;
        form.validate()?;
        let path = format!("/api/production/producers/update/{}/", encode_segment(producer_uri));
        self.put_json(&path, form).await?.into_message()
    }

    pub async fn delete_producer(&self, producer_uri: &str) -> Result<String> {
        require(producer_uri, "L'URI du producteur est requise")?;
        let path = format!("/api/production/producers/delete/{}", encode_segment(producer_uri));
        self.delete(&path, &[]).await?.into_message()
    }

    pub async fn wastes(&self) -> Result<SparqlResults> {
        self.get("/api/production/wastes/").await?.into_results()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing_accepts_label_and_class() {
        assert_eq!("Agricole".parse::<ProducerKind>().unwrap(), ProducerKind::Agricole);
        assert_eq!("résidentiel".parse::<ProducerKind>().unwrap(), ProducerKind::Residentiel);
        assert_eq!("Producteur_Hospitalier".parse::<ProducerKind>().unwrap(), ProducerKind::Hospitalier);
        assert!("minier".parse::<ProducerKind>().is_err());
    }

    #[test]
    fn test_form_serializes_with_backend_field_names() {
        let form = ProducerForm {
            id: "P42".to_string(),
            name: "Ferme du Lac".to_string(),
            kind: ProducerKind::Agricole,
            city: "Tunis".to_string(),
            address: String::new(),
            postal_code: "1000".to_string(),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["type"], "agricole");
        assert_eq!(json["postalCode"], "1000");
    }

    #[test]
    fn test_form_requires_id_and_name() {
        let form = ProducerForm {
            id: " ".to_string(),
            name: "X".to_string(),
            kind: ProducerKind::Industriel,
            city: String::new(),
            address: String::new(),
            postal_code: String::new(),
        };
        assert!(matches!(form.validate(), Err(ConsoleError::Validation(_))));
    }
}
