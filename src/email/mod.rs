//! Digest email rendering and delivery.
//!
//! - Domain types in [`domain`]
//! - HTML rendering in [`render`]
//! - Port contracts in [`ports`]
//! - Transport adapters in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod render;
