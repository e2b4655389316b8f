mod common;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use common::{client, producer_rows, results, spawn, success};
use ecogestion::http::create_server;
use ecogestion::sparql::{Binding, Term};
use serde_json::{json, Value};

async fn gateway(backend: Router) -> String {
    let backend_url = spawn(backend).await;
    spawn(create_server(client(&backend_url))).await
}

#[tokio::test]
async fn test_health() {
    let base = gateway(Router::new()).await;
    let body: Value = reqwest::get(format!("{}/health", base)).await.unwrap().json().await.unwrap();
    assert_eq!(body["message"], "Ecogestion display gateway is running");
}

#[tokio::test]
async fn test_ask_returns_interpreted_rows() {
    let backend = Router::new().route(
        "/api/query/",
        post(|| async {
            let row: Binding = [
                ("produit", Term::uri("http://ex.org/onto#Compost_Premium")),
                ("dechet", Term::uri("http://ex.org/onto#Dechet_Vert")),
            ]
            .into_iter()
            .collect();
            Json(success(&results(&["produit", "dechet"], vec![row])))
        }),
    );
    let base = gateway(backend).await;

    let response = reqwest::Client::new()
        .post(format!("{}/console/ask", base))
        .json(&json!({ "question": "Quels produits viennent des déchets verts ?" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["results"][0], json!({ "label": "Compost Premium", "object": "Dechet Vert" }));
    assert_eq!(body["table"]["columns"], json!(["produit", "dechet"]));
}

#[tokio::test]
async fn test_empty_answer_carries_message() {
    let backend = Router::new().route("/api/sparql/", post(|| async { Json(success(&results(&[], vec![]))) }));
    let base = gateway(backend).await;

    let body: Value = reqwest::Client::new()
        .post(format!("{}/console/sparql", base))
        .json(&json!({ "sparql": "SELECT * WHERE { ?s ?p ?o } LIMIT 0" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Aucun résultat trouvé");
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn test_ask_query_returns_answer() {
    let backend = Router::new().route(
        "/api/sparql/",
        post(|| async { Json(json!({ "status": "success", "data": { "head": {}, "boolean": true } })) }),
    );
    let base = gateway(backend).await;

    let body: Value = reqwest::Client::new()
        .post(format!("{}/console/sparql", base))
        .json(&json!({ "sparql": "ASK { ?s a ?o }" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["boolean"], true);
    assert!(body.get("message").is_none());
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn test_blank_question_is_bad_request() {
    let base = gateway(Router::new()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/console/ask", base))
        .json(&json!({ "question": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Question is required");
}

#[tokio::test]
async fn test_backend_error_is_bad_gateway() {
    let backend = Router::new().route(
        "/api/production/wastes/",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(common::error("Endpoint SPARQL indisponible"))) }),
    );
    let base = gateway(backend).await;

    let response = reqwest::get(format!("{}/console/wastes", base)).await.unwrap();
    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Endpoint SPARQL indisponible" }));
}

#[tokio::test]
async fn test_producers_filter() {
    let backend = Router::new().route(
        "/api/production/producers/",
        get(|| async { Json(success(&producer_rows())) }),
    );
    let base = gateway(backend).await;

    let body: Value = reqwest::get(format!("{}/console/producers?filter=Agricole", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["filter"], "Agricole");
    assert_eq!(body["total"], 3);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["name"], "Ferme du Lac");
    assert_eq!(body["typeCounts"][0], json!({ "label": "Industriel", "count": 1 }));

    let body: Value = reqwest::get(format!("{}/console/producers", base)).await.unwrap().json().await.unwrap();
    assert_eq!(body["filter"], "all");
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_statistics_endpoint() {
    let backend = Router::new().route(
        "/api/production/producers/statistics/",
        get(|| async {
            let row: Binding = [("totalProducers", Term::literal("7")), ("totalWeight", Term::literal("12"))]
                .into_iter()
                .collect();
            Json(success(&results(&["totalProducers", "totalWeight"], vec![row])))
        }),
    );
    let base = gateway(backend).await;

    let body: Value = reqwest::get(format!("{}/console/statistics", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["totalWeight"], "12.00");
    assert_eq!(body["systemMetrics"]["points"][0], json!({ "label": "Producteurs Totaux", "value": 7.0 }));
    assert_eq!(body["producerDistribution"]["points"][0]["value"], 0.0);
}
