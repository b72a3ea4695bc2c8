//! Email transport adapters.
//!
//! - [`ses::SesEmailSender`]: Amazon SES v2 delivery
//! - [`memory::InMemoryOutbox`]: captures messages for tests

pub mod memory;
pub mod ses;
