//! Invocation response returned to the Lambda runtime.

use super::DigestOutcome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON body of an invocation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    /// Human-readable summary of the run.
    pub message: String,
}

/// API-Gateway-style response describing a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    /// HTTP-style status code; always 200 for completed runs.
    pub status_code: u16,
    /// Response headers.
    pub headers: BTreeMap<String, String>,
    /// Response body.
    pub body: ResponseBody,
}

impl InvocationResponse {
    /// Describes `outcome` for the given environment label.
    #[must_use]
    pub fn from_outcome(outcome: &DigestOutcome, environment: &str) -> Self {
        let message = match outcome {
            DigestOutcome::Sent { task_count, .. } => format!(
                "Digest with {task_count} pending task(s) sent in {environment} environment."
            ),
            DigestOutcome::NothingPending => {
                format!("No pending tasks found in {environment} environment; no email sent.")
            }
        };

        Self {
            status_code: 200,
            headers: BTreeMap::from([(
                "Content-Type".to_owned(),
                "application/json".to_owned(),
            )]),
            body: ResponseBody { message },
        }
    }
}
