//! HTTP display gateway
//!
//! Provides JSON endpoints for:
//! - natural-language and SPARQL queries, interpreted for display
//! - the producers, wastes, supervisors and centers list screens
//! - producer statistics with chart datasets

pub mod server;

pub use server::{
    create_server, start_server, AppState, AskRequest, ErrorResponse, FilterParams, ListResponse,
    SparqlRequest, SuccessResponse, TypeCount,
};
