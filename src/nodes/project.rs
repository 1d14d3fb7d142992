//! ProjectNode — `Project` nodes, unique by name.

use serde::{Deserialize, Serialize};

/// A real-estate project (one scraped listing).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectNode {
    pub name: String,
}

impl ProjectNode {
    /// Graph label used in Cypher.
    pub const LABEL: &'static str = "Project";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
