//! Treatment centers (sorting, composting, recycling).

use super::client::{encode_segment, require, ConsoleClient};
use crate::error::Result;
use crate::sparql::SparqlResults;

impl ConsoleClient {
    pub async fn centers(&self) -> Result<SparqlResults> {
        self.get("/api/tri_compostage/centers/").await?.into_results()
    }

    /// Centers of one ontology class, e.g. `Centre_Tri_Optique`.
    pub async fn centers_by_type(&self, center_type: &str) -> Result<SparqlResults> {
        require(center_type, "Le type de centre est requis")?;
        let path = format!("/api/tri_compostage/centers/type/{}/", encode_segment(center_type));
        self.get(&path).await?.into_results()
    }

    pub async fn search_centers(&self, term: &str) -> Result<SparqlResults> {
        require(term, "Le paramètre de recherche 'q' est requis")?;
        self.get_query("/api/tri_compostage/centers/search/", &[("q", term)]).await?.into_results()
    }

    pub async fn center_details(&self, center_uri: &str) -> Result<SparqlResults> {
        require(center_uri, "Le paramètre 'center_uri' est requis")?;
        self.get_query("/api/tri_compostage/centers/details/", &[("center_uri", center_uri)])
            .await?
            .into_results()
    }

    /// Wastes sorted by one center.
    pub async fn center_wastes(&self, center_uri: &str) -> Result<SparqlResults> {
        require(center_uri, "Le paramètre 'center_uri' est requis")?;
        self.get_query("/api/tri_compostage/centers/wastes/", &[("center_uri", center_uri)])
            .await?
            .into_results()
    }

    pub async fn center_statistics(&self) -> Result<SparqlResults> {
        self.get("/api/tri_compostage/centers/statistics/").await?.into_results()
    }
}
