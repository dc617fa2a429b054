//! Adapter implementations for the agent catalog ports.

pub mod memory;
