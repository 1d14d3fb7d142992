//! DeveloperNode — `Developer` nodes, unique by name.

use serde::{Deserialize, Serialize};

/// The developer (builder) of a project. `Unknown` when the listing did not name one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeveloperNode {
    pub name: String,
}

impl DeveloperNode {
    /// Graph label used in Cypher.
    pub const LABEL: &'static str = "Developer";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
