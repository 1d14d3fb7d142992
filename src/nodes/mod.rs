//! Node types for the listing graph.
//!
//! - [`ProjectNode`] — one listing, merged by name
//! - [`DeveloperNode`] — the builder, merged by name
//! - [`LocationNode`] — where the project is, merged by name
//! - [`PropertyNode`] — one unit configuration, created fresh on every ingestion

pub mod developer;
pub mod location;
pub mod project;
pub mod property;

pub use developer::DeveloperNode;
pub use location::LocationNode;
pub use project::ProjectNode;
pub use property::PropertyNode;
