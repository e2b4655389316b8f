//! # Ecogestion
//!
//! Ecogestion is an operator console for a waste-management knowledge base.
//!
//! The backend answers natural-language questions and raw SPARQL with
//! SPARQL-JSON result sets. This crate talks to that backend, decides for every
//! result row what an operator should see, and renders the producers, wastes,
//! supervisors, centers, tri-compostage and statistics screens either as
//! terminal text or as JSON from a small display gateway.
//!
//! ## Features
//!
//! - Typed client for every backend endpoint group
//! - Row interpretation that picks a label and a related value from any result shape
//! - Humanized ontology identifiers
//! - Screen models with text rendering and JSON serialization
//!
//! ## Example
//!
//! ```rust
//! use ecogestion::display::interpret;
//! use ecogestion::sparql::{Binding, Term};
//!
//! let row: Binding = [("sujet", Term::uri("http://ex.org/onto#Usine_Peugeot"))]
//!     .into_iter()
//!     .collect();
//! assert_eq!(interpret(&row).label, "Usine Peugeot");
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]

/// Backend client, one method per endpoint
pub mod api;

/// Console configuration
pub mod config;

/// Value formatting, row interpretation and result tables
pub mod display;

pub mod error;

/// Display gateway serving screen models over HTTP
pub mod http;

pub mod logging;

/// SPARQL-JSON result model
pub mod sparql;

/// Screen models and their text rendering
pub mod views;

// Re-export commonly used types
pub use api::ConsoleClient;
pub use config::ConsoleConfig;
pub use error::{ConsoleError as Error, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("test error".to_string());
        assert_eq!(format!("{}", err), "Configuration error: test error");
    }
}
