//! Agent marketplace catalog: publishing, search, reviews and leaderboards.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and validated construction in [`domain`]
//! - The catalog store contract in [`ports`]
//! - The in-memory store in [`adapters`]
//! - Boundary orchestration (validation, clock, logging) in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
