//! SPARQL result model shared by the client, the views and the gateway.

pub mod results;

pub use results::{Binding, Bindings, Head, SparqlResults, Term};
