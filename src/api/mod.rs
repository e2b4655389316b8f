//! Backend API client
//!
//! One [`ConsoleClient`] covers every endpoint group of the backend:
//! - knowledge-base queries (natural language and raw SPARQL)
//! - production: producers and wastes
//! - supervision: supervisors and their centers
//! - centers and the tri-compostage sorting/composting centres
//! - authentication
//!
//! Read endpoints return [`SparqlResults`](crate::sparql::SparqlResults);
//! the [`views`](crate::views) module turns them into screen models.

pub mod auth;
pub mod centers;
pub mod client;
pub mod compost;
pub mod envelope;
pub mod production;
pub mod query;
pub mod supervision;

pub use auth::Registration;
pub use client::ConsoleClient;
pub use compost::{NewCompostCentre, NewSortingCentre};
pub use envelope::{ApiEnvelope, Status, UserProfile};
pub use production::{ProducerForm, ProducerKind};
pub use supervision::{NewSupervisor, SupervisorType, SupervisorUpdate};
