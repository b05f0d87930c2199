/// API response type definitions
///
/// Standard response structures for REST API endpoints. The envelope shapes
/// are part of the front-end contract: successful analyses arrive as
/// `{success, data}`, failures as `{error, message}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::types::WalletAnalysis;

/// Successful analysis envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: WalletAnalysis,
}

impl AnalyzeResponse {
    pub fn new(data: WalletAnalysis) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Generic error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Simple health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}
