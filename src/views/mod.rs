//! Screen models
//!
//! Each screen is a pure function from backend results to a serializable view
//! model with a plain-text rendering. The terminal binary prints the text, the
//! gateway serves the models as JSON.

pub mod centers;
pub mod compost;
pub mod details;
pub mod labels;
pub mod producers;
pub mod query;
pub mod render;
pub mod statistics;
pub mod supervisors;
pub mod wastes;

/// Filter value that keeps every row of a list screen.
pub const FILTER_ALL: &str = "all";

pub use centers::{CenterRow, CentersView};
pub use compost::{CompostCentre, CompostView, OperationalStatus, SortedWaste, SortingCentre};
pub use details::PropertySheet;
pub use producers::{ProducerDetails, ProducerRow, ProducersView};
pub use query::{QueryView, NO_RESULTS};
pub use render::{BarChart, TextTable};
pub use statistics::{ProducerStatistics, Series, StatisticsView};
pub use supervisors::{SupervisorRow, SupervisorsView};
pub use wastes::{DangerClass, WasteRow, WastesView};
