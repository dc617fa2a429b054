//! Step definitions for marketplace catalog scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
