//! Result types returned by the verification service

use serde::Serialize;

/// Outcome of a successful SMS code issuance
#[derive(Debug, Clone, Serialize)]
pub struct SmsIssueResult {
    /// Gateway identifier of the delivered message
    pub message_id: String,

    /// Seconds until the issued code expires
    pub expires_in: u64,
}
