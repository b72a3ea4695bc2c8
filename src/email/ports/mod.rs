//! Port contracts for email delivery.

pub mod sender;

pub use sender::{EmailSender, EmailSenderError, EmailSenderResult};
