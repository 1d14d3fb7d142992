//! Edge types for the listing graph.
//!
//! - [`DevelopedByEdge`] — Project → Developer, carries launch / possession dates
//! - [`LocatedInEdge`] — Project → Location
//! - [`DetailsOfEdge`] — Property → Project

pub mod details_of;
pub mod developed_by;
pub mod located_in;

pub use details_of::DetailsOfEdge;
pub use developed_by::DevelopedByEdge;
pub use located_in::LocatedInEdge;
