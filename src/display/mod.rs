//! Display layer: turns raw SPARQL values and rows into operator-facing text.
//!
//! - [`formatter`] humanizes single values (ontology URIs to readable names)
//! - [`interpreter`] picks a label and a related value for an arbitrary row
//! - [`table`] lays out a whole result set column by column

pub mod formatter;
pub mod interpreter;
pub mod table;

pub use formatter::{format_term, humanize, is_http_uri, local_name};
pub use interpreter::{interpret, interpret_all, DisplayResult, UNKNOWN_RESULT};
pub use table::ResultTable;
