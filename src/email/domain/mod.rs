//! Domain types for the digest email.

mod error;
mod message;
mod recipients;

pub use error::EmailDomainError;
pub use message::{PLAIN_TEXT_FALLBACK, RenderedEmail};
pub use recipients::Recipients;
