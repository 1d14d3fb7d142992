//! In-memory graph backend for testing and development.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{GraphDriver, ListingLoad};
use crate::edges::{DetailsOfEdge, DevelopedByEdge, LocatedInEdge};
use crate::errors::{IngestError, Result};
use crate::nodes::{DeveloperNode, LocationNode, ProjectNode, PropertyNode};

#[derive(Debug, Clone, Default)]
struct GraphState {
    projects: BTreeSet<ProjectNode>,
    developers: BTreeSet<DeveloperNode>,
    locations: BTreeSet<LocationNode>,
    /// Keyed by (project, developer).
    developed_by: BTreeMap<(String, String), DevelopedByEdge>,
    located_in: BTreeSet<LocatedInEdge>,
    properties: Vec<(PropertyNode, DetailsOfEdge)>,
}

/// A graph held in process memory.
///
/// Follows the same write rules as the Neo4j backend: projects, developers,
/// locations and their edges are merged by name, property nodes are always
/// appended. Each `load_listing` is applied to a staged copy and only swapped
/// in when every write succeeded. Data is lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    state: RwLock<GraphState>,
    failing_projects: RwLock<HashSet<String>>,
}

impl MemoryGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later write of `project` fail after its entities were staged.
    pub fn fail_writes_for(&self, project: impl Into<String>) {
        write_lock(&self.failing_projects).insert(project.into());
    }

    /// Number of nodes carrying `label` (`Project`, `Developer`, `Location`, `Property`).
    pub fn node_count(&self, label: &str) -> usize {
        let state = read_lock(&self.state);
        match label {
            ProjectNode::LABEL => state.projects.len(),
            DeveloperNode::LABEL => state.developers.len(),
            LocationNode::LABEL => state.locations.len(),
            PropertyNode::LABEL => state.properties.len(),
            _ => 0,
        }
    }

    /// Number of relationships of type `rel_type`.
    pub fn edge_count(&self, rel_type: &str) -> usize {
        let state = read_lock(&self.state);
        match rel_type {
            DevelopedByEdge::REL_TYPE => state.developed_by.len(),
            LocatedInEdge::REL_TYPE => state.located_in.len(),
            DetailsOfEdge::REL_TYPE => state.properties.len(),
            _ => 0,
        }
    }

    pub fn has_project(&self, name: &str) -> bool {
        read_lock(&self.state).projects.contains(&ProjectNode::new(name))
    }

    pub fn has_developer(&self, name: &str) -> bool {
        read_lock(&self.state).developers.contains(&DeveloperNode::new(name))
    }

    pub fn has_location(&self, name: &str) -> bool {
        read_lock(&self.state).locations.contains(&LocationNode::new(name))
    }

    /// Property nodes attached to `project`, in creation order.
    pub fn properties_of(&self, project: &str) -> Vec<PropertyNode> {
        read_lock(&self.state)
            .properties
            .iter()
            .filter(|(_, edge)| edge.project == project)
            .map(|(node, _)| node.clone())
            .collect()
    }

    /// The DEVELOPED_BY edges leaving `project`.
    pub fn developed_by(&self, project: &str) -> Vec<DevelopedByEdge> {
        read_lock(&self.state)
            .developed_by
            .values()
            .filter(|edge| edge.project == project)
            .cloned()
            .collect()
    }

    /// The LOCATED_IN edges leaving `project`.
    pub fn located_in(&self, project: &str) -> Vec<LocatedInEdge> {
        read_lock(&self.state)
            .located_in
            .iter()
            .filter(|edge| edge.project == project)
            .cloned()
            .collect()
    }
}

impl GraphDriver for MemoryGraph {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn load_listing(&self, load: &ListingLoad) -> Result<()> {
        let mut state = write_lock(&self.state);
        let mut staged = state.clone();

        staged.projects.insert(load.project_node());
        staged.developers.insert(load.developer_node());
        staged.locations.insert(load.location_node());
        staged.developed_by.insert(
            (load.project.clone(), load.builder.clone()),
            load.developed_by(),
        );
        staged.located_in.insert(load.located_in());

        if read_lock(&self.failing_projects).contains(&load.project) {
            return Err(IngestError::Driver(format!(
                "simulated write failure for project {:?}",
                load.project
            )));
        }

        staged.properties.extend(load.properties());
        *state = staged;
        Ok(())
    }

    async fn close(self) -> Result<()> {
        Ok(())
    }
}

// Writes go through a staged copy, so a poisoned lock never holds a half-applied listing.
fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}
