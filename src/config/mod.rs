//! Runtime configuration.
//!
//! Settings come from process environment variables, optionally seeded from
//! a `.env` file. They are read once at start-up and passed by value to the
//! components that need them.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{DEFAULT_ENVIRONMENT, DigestConfig};
