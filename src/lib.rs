//! # realestate-graph
//!
//! Loads scraped real-estate listings into a Neo4j property graph.
//!
//! ## Architecture
//!
//! - **Normalization**: free-text prices, areas and `By X in Y` lines become integer ranges and names
//! - **Configuration rows**: one normalized row per unit configuration of a listing
//! - **Graph load**: projects, developers and locations are merged by name; property nodes are appended
//! - **Pipeline**: listings are processed one by one and a failing listing never stops the run

pub mod configuration;
pub mod edges;
pub mod errors;
pub mod listing;
pub mod nodes;
pub mod normalize;
pub mod types;

pub mod driver;
pub mod pipeline;

pub use errors::{IngestError, Result};
pub use pipeline::{IngestReport, Ingestor};
pub use types::IngestConfig;
