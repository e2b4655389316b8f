//! Mock backend shared by the integration tests.

#![allow(dead_code)]

use axum::Router;
use ecogestion::sparql::{Binding, SparqlResults, Term};
use ecogestion::{ConsoleClient, ConsoleConfig};
use serde_json::{json, Value};

pub const ONTO: &str = "http://www.semanticweb.org/wiemb/ontologies/2025/8/untitled-ontology-2#";

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn client(base_url: &str) -> ConsoleClient {
    let mut config = ConsoleConfig::new(base_url);
    config.timeout_secs = 5;
    ConsoleClient::new(config).unwrap()
}

pub fn uri(local: &str) -> Term {
    Term::uri(format!("{}{}", ONTO, local))
}

pub fn results(vars: &[&str], rows: Vec<Binding>) -> SparqlResults {
    SparqlResults::from_bindings(vars.iter().map(|v| v.to_string()).collect(), rows)
}

/// `{ "status": "success", "data": <results> }`
pub fn success(data: &SparqlResults) -> Value {
    json!({ "status": "success", "data": data })
}

pub fn message(text: &str) -> Value {
    json!({ "status": "success", "message": text })
}

pub fn error(text: &str) -> Value {
    json!({ "status": "error", "message": text })
}

pub fn producer_rows() -> SparqlResults {
    let row = |local: &str, id: &str, name: &str, class: &str, city: &str| -> Binding {
        [
            ("producer", uri(local)),
            ("id", Term::literal(id)),
            ("name", Term::literal(name)),
            ("type", uri(class)),
            ("city", Term::literal(city)),
        ]
        .into_iter()
        .collect()
    };
    results(
        &["producer", "id", "name", "type", "city"],
        vec![
            row("Usine_Peugeot", "P1", "Usine Peugeot", "Producteur_Industriel", "Sochaux"),
            row("Ferme_du_Lac", "P2", "Ferme du Lac", "Producteur_Agricole", "Béja"),
            row("Clinique_Nord", "P3", "Clinique Nord", "Producteur_Hospitalier", "Tunis"),
        ],
    )
}
