use std::time::Duration;

use bytes::Bytes;
use http::StatusCode;

use crate::http_client::error::Error;

/// Outcome of one HTTP call.
///
/// Failures never surface as `Err`: they land in `error`, next to whatever
/// the call managed to collect before failing. `status` and `status_code`
/// stay empty when no response arrived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub status: String,
    pub status_code: u16,
    pub error: Option<Error>,
    pub total_time: Duration,
    pub body: Bytes,
}

impl Response {
    pub fn failed(error: Error, total_time: Duration) -> Self {
        Self {
            error: Some(error),
            total_time,
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none() && (200..300).contains(&self.status_code)
    }
}

/// Formats a status line such as `"200 OK"`.
pub fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
