//! LocationNode — `Location` nodes, unique by name.

use serde::{Deserialize, Serialize};

/// The locality a project is situated in. `Unknown` when the listing did not name one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationNode {
    pub name: String,
}

impl LocationNode {
    /// Graph label used in Cypher.
    pub const LABEL: &'static str = "Location";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
