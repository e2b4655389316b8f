//! Display gateway for the Ecogestion console
//!
//! Serves the screen models as JSON so a thin front end can render them
//! without re-implementing row interpretation or type labels.

use crate::{
    api::ConsoleClient,
    error::ConsoleError,
    views::{
        CenterRow, CentersView, ProducerRow, ProducerStatistics, ProducersView, QueryView,
        StatisticsView, SupervisorRow, SupervisorsView, WastesView, FILTER_ALL,
    },
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Natural-language question
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Raw SPARQL query
#[derive(Debug, Deserialize)]
pub struct SparqlRequest {
    pub sparql: String,
}

/// `?filter=` of the list screens
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub filter: Option<String>,
}

impl FilterParams {
    fn value(&self) -> &str {
        match self.filter.as_deref() {
            Some(filter) if !filter.trim().is_empty() => filter.trim(),
            _ => FILTER_ALL,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TypeCount {
    pub label: String,
    pub count: usize,
}

/// A filtered list screen: matching rows plus the per-type counts over all rows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub filter: String,
    pub total: usize,
    pub type_counts: Vec<TypeCount>,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    fn new(filter: &str, total: usize, counts: Vec<(String, usize)>, items: Vec<T>) -> Self {
        Self {
            filter: filter.to_string(),
            total,
            type_counts: counts.into_iter().map(|(label, count)| TypeCount { label, count }).collect(),
            items,
        }
    }
}

/// Generic success response
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Shared application state
pub struct AppState {
    pub client: ConsoleClient,
}

/// Gateway error, mapped from the client error
pub enum ApiError {
    BadRequest(String),
    BadGateway(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<ConsoleError> for ApiError {
    fn from(err: ConsoleError) -> Self {
        let message = err.user_message();
        match err {
            ConsoleError::Validation(_) => ApiError::BadRequest(message),
            ConsoleError::Http(_) | ConsoleError::Backend { .. } | ConsoleError::Decode(_) => {
                warn!(error = %err, "backend call failed");
                ApiError::BadGateway(message)
            }
            ConsoleError::Config(_) | ConsoleError::Io(_) => ApiError::InternalError(message),
        }
    }
}

/// Create the HTTP server with all routes
pub fn create_server(client: ConsoleClient) -> Router {
    let state = Arc::new(AppState { client });

    // Configure CORS
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/console/ask", post(ask))
        .route("/console/sparql", post(sparql))
        .route("/console/producers", get(producers))
        .route("/console/wastes", get(wastes))
        .route("/console/supervisors", get(supervisors))
        .route("/console/centers", get(centers))
        .route("/console/statistics", get(statistics))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(SuccessResponse { message: "Ecogestion display gateway is running".to_string() })
}

/// POST /console/ask - Ask the knowledge base a question
async fn ask(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<QueryView>, ApiError> {
    let results = state.client.ask(&payload.question).await?;
    Ok(Json(QueryView::from_results(&results)))
}

/// POST /console/sparql - Run a raw SPARQL query
async fn sparql(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SparqlRequest>,
) -> Result<Json<QueryView>, ApiError> {
    let results = state.client.run_sparql(&payload.sparql).await?;
    Ok(Json(QueryView::from_results(&results)))
}

/// GET /console/producers - Producers, filtered by type
async fn producers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<ListResponse<ProducerRow>>, ApiError> {
    let results = state.client.producers().await?;
    let view = ProducersView::from_results(&results).with_filter(params.value());
    let items = view.filtered().into_iter().cloned().collect();
    Ok(Json(ListResponse::new(params.value(), view.producers.len(), view.type_counts(), items)))
}

/// GET /console/wastes - All wastes
async fn wastes(State(state): State<Arc<AppState>>) -> Result<Json<WastesView>, ApiError> {
    let results = state.client.wastes().await?;
    Ok(Json(WastesView::from_results(&results)))
}

/// GET /console/supervisors - Supervisors, filtered by type label
async fn supervisors(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<ListResponse<SupervisorRow>>, ApiError> {
    let results = state.client.supervisors().await?;
    let view = SupervisorsView::from_results(&results).with_filter(params.value());
    let items = view.filtered().into_iter().cloned().collect();
    Ok(Json(ListResponse::new(params.value(), view.supervisors.len(), view.type_counts(), items)))
}

/// GET /console/centers - Centers, filtered by type label
async fn centers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<ListResponse<CenterRow>>, ApiError> {
    let results = state.client.centers().await?;
    let view = CentersView::from_results(&results).with_filter(params.value());
    let items = view.filtered().into_iter().cloned().collect();
    Ok(Json(ListResponse::new(params.value(), view.centers.len(), view.type_counts(), items)))
}

/// GET /console/statistics - Producer statistics with chart datasets
async fn statistics(State(state): State<Arc<AppState>>) -> Result<Json<StatisticsView>, ApiError> {
    let results = state.client.producer_statistics().await?;
    Ok(Json(StatisticsView::from(ProducerStatistics::from_results(&results))))
}

/// Start the HTTP server on the specified address
pub async fn start_server(addr: &str, client: ConsoleClient) -> Result<(), Box<dyn std::error::Error>> {
    let backend = client.config().api_url.clone();
    let app = create_server(client);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, %backend, "display gateway listening");
    println!("Ecogestion display gateway listening on http://{}", addr);
    println!();
    println!("Available endpoints:");
    println!("  POST   /console/ask              - Ask a natural-language question");
    println!("  POST   /console/sparql           - Run a raw SPARQL query");
    println!("  GET    /console/producers        - Producers (?filter=)");
    println!("  GET    /console/wastes           - Wastes");
    println!("  GET    /console/supervisors      - Supervisors (?filter=)");
    println!("  GET    /console/centers          - Centers (?filter=)");
    println!("  GET    /console/statistics       - Producer statistics and charts");
    println!("  GET    /health                   - Health check");
    println!();

    axum::serve(listener, app).await?;

    Ok(())
}
