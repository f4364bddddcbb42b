//! Remote analysis service shapes
//!
//! A shell around this library may forward advanced operations to an HTTP
//! service exposing `GET /health` and `POST /sequence/stats` (and
//! similarly-shaped endpoints). This module defines only the request and
//! response shapes those endpoints must match so remote results can be
//! consumed uniformly with local ones; no HTTP client lives here.

use serde::{Deserialize, Serialize};

/// Default base URL of the remote service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Liveness probe endpoint
pub const HEALTH_ENDPOINT: &str = "/health";

/// Statistics endpoint; analysis endpoints share its request shape
pub const STATS_ENDPOINT: &str = "/sequence/stats";

/// Request body accepted by the analysis endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub sequence: String,
    pub sequence_type: String,
}

impl AnalyzeRequest {
    /// Build a request with automatic type detection on the service side
    pub fn auto(sequence: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
            sequence_type: "auto".to_string(),
        }
    }
}

/// Error body returned by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    pub detail: String,
}
