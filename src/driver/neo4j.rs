//! Neo4j graph driver implementation.
//!
//! Uses `neo4rs` 0.8 over Bolt. Each listing is written inside one explicit
//! transaction that is committed on success and rolled back on any failure.

use std::collections::HashMap;

use neo4rs::{query, BoltType, ConfigBuilder, Graph, Query, Txn};
use tracing::{debug, info, warn};

use super::{GraphDriver, ListingLoad};
use crate::configuration::ConfigurationRow;
use crate::errors::Result;
use crate::types::IngestConfig;

/// Merge the shared entities and both project edges, then create one property
/// node per `$config` row. Property nodes have no merge key; an empty
/// `$config` leaves only the merged part.
const LOAD_LISTING: &str = "\
MERGE (prj:Project {name: $project})
MERGE (dev:Developer {name: $developer})
MERGE (loc:Location {name: $location})
MERGE (prj)-[by:DEVELOPED_BY]->(dev)
SET by.launched = $launched, by.possession = $possession
MERGE (prj)-[:LOCATED_IN]->(loc)
WITH prj
UNWIND $config AS row
CREATE (prp:Property {
    bhk: row.bhk,
    min_price: row.min_price,
    max_price: row.max_price,
    min_builtup_area: row.min_builtup_area,
    max_builtup_area: row.max_builtup_area,
    min_carpet_area: row.min_carpet_area,
    max_carpet_area: row.max_carpet_area
})
CREATE (prp)-[:DETAILS_OF]->(prj)";

type BoltMap = HashMap<String, BoltType>;

fn row_to_map(row: &ConfigurationRow) -> BoltMap {
    let mut m: BoltMap = HashMap::new();
    m.insert("bhk".to_string(), row.bhk.clone().into());
    m.insert("min_price".to_string(), row.min_price.into());
    m.insert("max_price".to_string(), row.max_price.into());
    m.insert("min_builtup_area".to_string(), row.min_builtup_area.into());
    m.insert("max_builtup_area".to_string(), row.max_builtup_area.into());
    m.insert("min_carpet_area".to_string(), row.min_carpet_area.into());
    m.insert("max_carpet_area".to_string(), row.max_carpet_area.into());
    m
}

/// Neo4j-backed [`GraphDriver`].
pub struct Neo4jDriver {
    graph: Graph,
    database: String,
}

impl Neo4jDriver {
    /// Open a connection using the endpoint, credentials and database in `config`.
    pub async fn connect(config: &IngestConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(config.neo4j_uri.as_str())
            .user(config.neo4j_username.as_str())
            .password(config.neo4j_password.as_str())
            .db(config.neo4j_database.as_str())
            .build()?;
        let graph = Graph::connect(neo4j_config).await?;

        debug!(uri = %config.neo4j_uri, database = %config.neo4j_database, "neo4j driver created");
        Ok(Self {
            graph,
            database: config.neo4j_database.clone(),
        })
    }

    fn load_query(load: &ListingLoad) -> Query {
        let rows: Vec<BoltMap> = load.config.iter().map(row_to_map).collect();
        query(LOAD_LISTING)
            .param("project", load.project.as_str())
            .param("developer", load.builder.as_str())
            .param("location", load.location.as_str())
            .param("launched", load.launched.as_str())
            .param("possession", load.possession.as_str())
            .param("config", rows)
    }

    async fn write_listing(txn: &mut Txn, load: &ListingLoad) -> Result<()> {
        txn.run(Self::load_query(load)).await?;
        Ok(())
    }
}

impl GraphDriver for Neo4jDriver {
    async fn ping(&self) -> Result<()> {
        self.graph.run(query("RETURN 1")).await?;
        info!(database = %self.database, "connection established");
        Ok(())
    }

    async fn load_listing(&self, load: &ListingLoad) -> Result<()> {
        let mut txn = self.graph.start_txn().await?;

        match Self::write_listing(&mut txn, load).await {
            Ok(()) => {
                txn.commit().await?;
                debug!(project = %load.project, properties = load.config.len(), "transaction committed");
                Ok(())
            }
            Err(e) => {
                warn!(project = %load.project, error = %e, "write failed, rolling back");
                if let Err(rollback) = txn.rollback().await {
                    warn!(project = %load.project, error = %rollback, "rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn close(self) -> Result<()> {
        let Self { graph, database } = self;
        // Dropping the last Graph handle shuts down its connection pool.
        drop(graph);
        debug!(database = %database, "neo4j driver closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ConfigurationRow {
        ConfigurationRow {
            bhk: "2".to_string(),
            min_builtup_area: 1050,
            max_builtup_area: 1200,
            min_carpet_area: 720,
            max_carpet_area: 720,
            min_price: 9_500_000,
            max_price: 11_000_000,
        }
    }

    #[test]
    fn test_load_merges_shared_entities() {
        for (var, label) in [("prj", "Project"), ("dev", "Developer"), ("loc", "Location")] {
            assert!(LOAD_LISTING.contains(&format!("MERGE ({var}:{label} {{name: $")));
        }
        assert!(LOAD_LISTING.contains("MERGE (prj)-[by:DEVELOPED_BY]->(dev)"));
        assert!(LOAD_LISTING.contains("MERGE (prj)-[:LOCATED_IN]->(loc)"));
    }

    #[test]
    fn test_load_creates_properties_in_one_statement() {
        let unwind = LOAD_LISTING.find("WITH prj\nUNWIND $config AS row").expect("rows are unwound");
        let create = LOAD_LISTING.find("CREATE (prp:Property").expect("properties are created");
        assert!(unwind < create);
        assert!(LOAD_LISTING.contains("CREATE (prp)-[:DETAILS_OF]->(prj)"));
        assert!(!LOAD_LISTING.contains("MATCH"));
        assert_eq!(LOAD_LISTING.matches("CREATE").count(), 2);
    }

    #[test]
    fn test_row_map_carries_every_property_key() {
        let map = row_to_map(&row());
        assert_eq!(map.len(), 7);
        for key in [
            "bhk",
            "min_price",
            "max_price",
            "min_builtup_area",
            "max_builtup_area",
            "min_carpet_area",
            "max_carpet_area",
        ] {
            assert!(map.contains_key(key), "missing {key}");
            assert!(LOAD_LISTING.contains(&format!("{key}: row.{key}")), "unbound {key}");
        }
    }
}
