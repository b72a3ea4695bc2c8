//! Daily digest orchestration.
//!
//! [`DigestService`] reads pending tasks, renders them and hands the email to
//! the transport. An empty result is an expected outcome and sends nothing.

mod response;
mod service;

pub use response::{InvocationResponse, ResponseBody};
pub use service::{DeliverySettings, DigestError, DigestOutcome, DigestResult, DigestService};
