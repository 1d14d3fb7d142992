//! LocatedInEdge — LOCATED_IN relationship (Project → Location).

use serde::{Deserialize, Serialize};

/// Links a project to its location. Carries no attributes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocatedInEdge {
    pub project: String,
    pub location: String,
}

impl LocatedInEdge {
    pub const REL_TYPE: &'static str = "LOCATED_IN";
}
