use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Fallback value recorded when the requester leaves an optional
/// field blank.
pub const UNSPECIFIED: &str = "unspecified";

/// An account/feedback deletion request, appended to a durable log at
/// intake time and processed out of band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionRequest {
    /// Intake time in Unix milliseconds, doubling as the request id.
    pub id: i64,
    /// Which game the request concerns.
    pub app: String,
    pub username: String,
    pub email: String,
    pub reason: String,
    pub request_date: Timestamp,
    /// Always "pending" at intake; updated manually during processing.
    pub status: String,
}

impl DeletionRequest {
    /// Builds a new pending request stamped with the current time.
    pub fn new(
        username: String,
        email: String,
        app: Option<String>,
        reason: Option<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: now.as_millisecond(),
            app: app.unwrap_or_else(|| UNSPECIFIED.to_string()),
            username,
            email,
            reason: reason.unwrap_or_else(|| UNSPECIFIED.to_string()),
            request_date: now,
            status: "pending".to_string(),
        }
    }
}
