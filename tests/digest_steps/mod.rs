//! Step definitions for pending-task digest scenarios.

pub mod fixtures;
pub mod given;
pub mod then;
pub mod when;
pub mod world;
