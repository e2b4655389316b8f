//! Supervisors and the treatment centers assigned to them.

use super::client::{encode_segment, require, ConsoleClient};
use crate::error::{ConsoleError, Result};
use crate::sparql::SparqlResults;
use futures_util::future::try_join;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The supervisor classes the backend accepts on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupervisorType {
    #[serde(rename = "Superviseur_Environnemental")]
    Environnemental,
    #[serde(rename = "Superviseur_Municipal")]
    Municipal,
    #[serde(rename = "Superviseur_National")]
    National,
    #[serde(rename = "Superviseur_Regional")]
    Regional,
    #[serde(rename = "Superviseur_Securite")]
    Securite,
    #[serde(rename = "Superviseur_Qualite")]
    Qualite,
}

impl SupervisorType {
    pub const ALL: [SupervisorType; 6] = [
        SupervisorType::Environnemental,
        SupervisorType::Municipal,
        SupervisorType::National,
        SupervisorType::Regional,
        SupervisorType::Securite,
        SupervisorType::Qualite,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            SupervisorType::Environnemental => "Superviseur_Environnemental",
            SupervisorType::Municipal => "Superviseur_Municipal",
            SupervisorType::National => "Superviseur_National",
            SupervisorType::Regional => "Superviseur_Regional",
            SupervisorType::Securite => "Superviseur_Securite",
            SupervisorType::Qualite => "Superviseur_Qualite",
        }
    }

    /// Label shown in forms and filters.
    pub fn label(self) -> &'static str {
        match self {
            SupervisorType::Environnemental => "Environnemental",
            SupervisorType::Municipal => "Municipal",
            SupervisorType::National => "National",
            SupervisorType::Regional => "Régional",
            SupervisorType::Securite => "Sécurité",
            SupervisorType::Qualite => "Qualité",
        }
    }
}

impl fmt::Display for SupervisorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for SupervisorType {
    type Err = ConsoleError;

    /// Accepts the class name (`Superviseur_Municipal`) or the bare suffix (`municipal`).
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        let suffix = wanted.strip_prefix("Superviseur_").unwrap_or(wanted);
        SupervisorType::ALL
            .into_iter()
            .find(|t| {
                t.class_name().eq_ignore_ascii_case(wanted)
                    || t.class_name()["Superviseur_".len()..].eq_ignore_ascii_case(suffix)
                    || t.label().eq_ignore_ascii_case(suffix)
            })
            .ok_or_else(|| {
                let valid: Vec<&str> = SupervisorType::ALL.iter().map(|t| t.class_name()).collect();
                ConsoleError::validation(format!("Type invalide. Types valides: {}", valid.join(", ")))
            })
    }
}

/// Body of the add-supervisor request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupervisor {
    pub nom_complet: String,
    #[serde(rename = "type")]
    pub kind: SupervisorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_affectation: Option<String>,
    pub actif: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_superviseur: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_uri: Option<String>,
}

impl NewSupervisor {
    pub fn new(nom_complet: impl Into<String>, kind: SupervisorType) -> Self {
        Self {
            nom_complet: nom_complet.into(),
            kind,
            email: None,
            telephone: None,
            fonction: None,
            zone_affectation: None,
            actif: true,
            id_superviseur: None,
            center_uri: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.nom_complet, "Le champ 'nomComplet' est requis")
    }
}

/// Body of the update-supervisor request; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorUpdate {
    pub supervisor_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom_complet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_affectation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actif: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_uri: Option<String>,
}

impl SupervisorUpdate {
    pub fn validate(&self) -> Result<()> {
        require(&self.supervisor_uri, "Le paramètre 'supervisorUri' est requis")?;
        if let Some(name) = &self.nom_complet {
            require(name, "Le champ 'nomComplet' ne peut pas être vide")?;
        }
        Ok(())
    }
}

impl ConsoleClient {
    pub async fn supervisors(&self) -> Result<SparqlResults> {
        self.get("/api/supervision/supervisors/").await?.into_results()
    }

    pub async fn supervisors_by_type(&self, kind: SupervisorType) -> Result<SparqlResults> {
        let path = format!("/api/supervision/supervisors/type/{}/", encode_segment(kind.class_name()));
        self.get(&path).await?.into_results()
    }

    pub async fn search_supervisors(&self, term: &str) -> Result<SparqlResults> {
        require(term, "Le paramètre de recherche 'q' est requis")?;
        self.get_query("/api/supervision/supervisors/search/", &[("q", term)]).await?.into_results()
    }

    pub async fn supervisor_details(&self, supervisor_uri: &str) -> Result<SparqlResults> {
        require(supervisor_uri, "Le paramètre 'supervisor_uri' est requis")?;
        self.get_query("/api/supervision/supervisors/details/", &[("supervisor_uri", supervisor_uri)])
            .await?
            .into_results()
    }

    pub async fn supervisor_centers(&self, supervisor_uri: &str) -> Result<SparqlResults> {
        require(supervisor_uri, "Le paramètre 'supervisor_uri' est requis")?;
        self.get_query("/api/supervision/supervisors/centers/", &[("supervisor_uri", supervisor_uri)])
            .await?
            .into_results()
    }

    pub async fn supervisor_statistics(&self) -> Result<SparqlResults> {
        self.get("/api/supervision/supervisors/statistics/").await?.into_results()
    }

    /// Supervisors plus the centers they can be assigned to, fetched together.
    pub async fn supervision_overview(&self) -> Result<(SparqlResults, SparqlResults)> {
        try_join(self.supervisors(), self.centers()).await
    }

    pub async fn add_supervisor(&self, supervisor: &NewSupervisor) -> Result<String> {
        supervisor.validate()?;
        self.post_json("/api/supervision/supervisors/add/", supervisor).await?.into_message()
    }

    pub async fn update_supervisor(&self, update: &SupervisorUpdate) -> Result<String> {
        update.validate()?;
        self.put_json("/api/supervision/supervisors/update/", update).await?.into_message()
    }

    pub async fn delete_supervisor(&self, supervisor_uri: &str) -> Result<String> {
        require(supervisor_uri, "Le paramètre 'supervisor_uri' est requis")?;
        self.delete("/api/supervision/supervisors/delete/", &[("supervisor_uri", supervisor_uri)])
            .await?
            .into_message()
    }
}
