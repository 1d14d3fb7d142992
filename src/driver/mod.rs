//! Graph database driver abstraction.
//!
//! Defines the [`GraphDriver`] trait the ingestion pipeline writes through,
//! the per-listing write payload [`ListingLoad`], and two backends:
//! - [`neo4j::Neo4jDriver`] — Bolt connection via `neo4rs`
//! - [`memory::MemoryGraph`] — in-process graph with the same merge semantics

pub mod memory;
pub mod neo4j;

use serde::{Deserialize, Serialize};

use crate::configuration::ConfigurationRow;
use crate::edges::{DetailsOfEdge, DevelopedByEdge, LocatedInEdge};
use crate::errors::Result;
use crate::nodes::{DeveloperNode, LocationNode, ProjectNode, PropertyNode};

/// Everything written to the graph for one listing, already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingLoad {
    pub project: String,
    pub builder: String,
    pub location: String,
    pub launched: String,
    pub possession: String,
    pub config: Vec<ConfigurationRow>,
}

impl ListingLoad {
    pub fn project_node(&self) -> ProjectNode {
        ProjectNode::new(&self.project)
    }

    pub fn developer_node(&self) -> DeveloperNode {
        DeveloperNode::new(&self.builder)
    }

    pub fn location_node(&self) -> LocationNode {
        LocationNode::new(&self.location)
    }

    pub fn developed_by(&self) -> DevelopedByEdge {
        DevelopedByEdge {
            project: self.project.clone(),
            developer: self.builder.clone(),
            launched: self.launched.clone(),
            possession: self.possession.clone(),
        }
    }

    pub fn located_in(&self) -> LocatedInEdge {
        LocatedInEdge {
            project: self.project.clone(),
            location: self.location.clone(),
        }
    }

    /// One new property node plus its DETAILS_OF edge per configuration row, in row order.
    pub fn properties(&self) -> impl Iterator<Item = (PropertyNode, DetailsOfEdge)> + '_ {
        self.config.iter().map(|row| {
            (
                PropertyNode::from(row),
                DetailsOfEdge {
                    project: self.project.clone(),
                },
            )
        })
    }
}

/// Trait representing a graph database backend.
///
/// `load_listing` is the only write: it merges the project, developer and
/// location by name, merges both project edges, and creates one property node
/// per configuration row. It is atomic per listing; nothing is promised across
/// listings.
#[allow(async_fn_in_trait)]
pub trait GraphDriver: Send + Sync {
    /// Health check — verify connectivity to the database.
    async fn ping(&self) -> Result<()>;

    /// Write one listing in a single transaction.
    async fn load_listing(&self, load: &ListingLoad) -> Result<()>;

    /// Release the connection. The driver cannot be used afterwards.
    async fn close(self) -> Result<()>;
}
