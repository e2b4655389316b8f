//! Knowledge-base queries: natural-language questions and raw SPARQL.

use super::client::{require, ConsoleClient};
use crate::error::Result;
use crate::sparql::SparqlResults;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct QuestionRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Serialize)]
struct SparqlRequest<'a> {
    sparql: &'a str,
}

impl ConsoleClient {
    /// Asks a question in French; the backend translates it to SPARQL.
    pub async fn ask(&self, question: &str) -> Result<SparqlResults> {
        require(question, "Question is required")?;
        self.post_json("/api/query/", &QuestionRequest { question: question.trim() })
            .await?
            .into_results()
    }

    /// Runs a SPARQL query as written.
    pub async fn run_sparql(&self, sparql: &str) -> Result<SparqlResults> {
        require(sparql, "SPARQL query is required")?;
        self.post_json("/api/sparql/", &SparqlRequest { sparql }).await?.into_results()
    }
}
