//! DevelopedByEdge — DEVELOPED_BY relationship (Project → Developer).

use serde::{Deserialize, Serialize};

/// Links a project to its developer.
///
/// There is at most one such edge per (project, developer) pair; ingesting the
/// listing again overwrites `launched` and `possession`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopedByEdge {
    /// Name of the source Project.
    pub project: String,
    /// Name of the target Developer.
    pub developer: String,
    /// Launch date text with the `Launched:` label removed.
    pub launched: String,
    /// Possession date text with the `Possession:` label removed.
    pub possession: String,
}

impl DevelopedByEdge {
    /// Relationship type used in Cypher.
    pub const REL_TYPE: &'static str = "DEVELOPED_BY";
}
