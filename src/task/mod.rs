//! Pending task retrieval.
//!
//! Reads not-started tasks that are due from a Notion database and maps the
//! semi-structured page JSON into strict [`domain::TaskRecord`] values. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
