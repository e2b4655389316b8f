//! Sorting and composting centres (the `tri-compostage` endpoints).

use super::client::{require, ConsoleClient};
use crate::error::{ConsoleError, Result};
use crate::sparql::SparqlResults;
use futures_util::future::try_join;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// The backend writes `id` and `type_centre` straight into the ontology as
/// local names, so they must be plain identifiers.
fn local_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_\-]*$").expect("local name pattern is valid"))
}

fn require_local_name(value: &str, field: &str) -> Result<()> {
    if !local_name_pattern().is_match(value) {
        return Err(ConsoleError::validation(format!(
            "Le champ '{}' doit être un identifiant sans espaces, reçu '{}'",
            field, value
        )));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct CentreName<'a> {
    centre_nom: &'a str,
}

/// Body of the add-sorting-centre request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSortingCentre {
    pub id: String,
    pub type_centre: String,
    pub nom: String,
    pub localisation: String,
    pub capacite: f64,
    pub debit_tri: f64,
    pub taux_purete: f64,
    pub statut: bool,
}

impl NewSortingCentre {
    pub fn validate(&self) -> Result<()> {
        require_local_name(&self.id, "id")?;
        require_local_name(&self.type_centre, "type_centre")?;
        require(&self.nom, "Le champ 'nom' est requis")?;
        if !(0.0..=100.0).contains(&self.taux_purete) {
            return Err(ConsoleError::validation("Le taux de pureté doit être compris entre 0 et 100"));
        }
        if self.capacite < 0.0 || self.debit_tri < 0.0 {
            return Err(ConsoleError::validation("La capacité et le débit doivent être positifs"));
        }
        Ok(())
    }
}

/// Body of the add-composting-centre request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCompostCentre {
    pub id: String,
    pub type_centre: String,
    pub nom: String,
    pub localisation: String,
    pub capacite: f64,
    pub temperature: f64,
    pub temps_compostage: u32,
    pub statut: bool,
}

impl NewCompostCentre {
    pub fn validate(&self) -> Result<()> {
        require_local_name(&self.id, "id")?;
        require_local_name(&self.type_centre, "type_centre")?;
        require(&self.nom, "Le champ 'nom' est requis")?;
        if self.capacite < 0.0 {
            return Err(ConsoleError::validation("La capacité doit être positive"));
        }
        Ok(())
    }
}

impl ConsoleClient {
    pub async fn sorting_centres(&self) -> Result<SparqlResults> {
        self.get("/api/tri-compostage/centres-tri/").await?.into_results()
    }

    pub async fn compost_centres(&self) -> Result<SparqlResults> {
        self.get("/api/tri-compostage/centres-compostage/").await?.into_results()
    }

    /// Both centre lists, fetched together.
    pub async fn compost_overview(&self) -> Result<(SparqlResults, SparqlResults)> {
        try_join(self.sorting_centres(), self.compost_centres()).await
    }

    /// Wastes sorted by the centre named `centre_nom`.
    pub async fn sorted_wastes(&self, centre_nom: &str) -> Result<SparqlResults> {
        require(centre_nom, "Le nom du centre est requis")?;
        self.post_json("/api/tri-compostage/dechets-tries/", &CentreName { centre_nom })
            .await?
            .into_results()
    }

    /// Wastes composted by the centre named `centre_nom`.
    pub async fn compostable_wastes(&self, centre_nom: &str) -> Result<SparqlResults> {
        require(centre_nom, "Le nom du centre est requis")?;
        self.post_json("/api/tri-compostage/dechets-compostables/", &CentreName { centre_nom })
            .await?
            .into_results()
    }

    pub async fn add_sorting_centre(&self, centre: &NewSortingCentre) -> Result<String> {
        centre.validate()?;
        self.post_json("/api/tri-compostage/ajouter-tri/", centre).await?.into_message()
    }

    pub async fn add_compost_centre(&self, centre: &NewCompostCentre) -> Result<String> {
        centre.validate()?;
        self.post_json("/api/tri-compostage/ajouter-compostage/", centre).await?.into_message()
    }

    /// Sorted quantity per waste type.
    pub async fn sorting_statistics(&self) -> Result<SparqlResults> {
        self.get("/api/tri-compostage/stats-tri/").await?.into_results()
    }

    /// Composted quantity per centre.
    pub async fn compost_statistics(&self) -> Result<SparqlResults> {
        self.get("/api/tri-compostage/stats-compostage/").await?.into_results()
    }
}
