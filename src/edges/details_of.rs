//! DetailsOfEdge — DETAILS_OF relationship (Property → Project).

use serde::{Deserialize, Serialize};

/// Attaches a property node to the project it describes.
///
/// The source side is the property node itself, which has no key, so only the
/// target project is named here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailsOfEdge {
    pub project: String,
}

impl DetailsOfEdge {
    pub const REL_TYPE: &'static str = "DETAILS_OF";
}
