//! Port contracts for the agent catalog.
//!
//! Ports define the storage-agnostic interface used by marketplace services
//! and adapters.

pub mod catalog;

pub use catalog::{AgentCatalog, CatalogError, CatalogResult};
