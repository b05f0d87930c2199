/// Structured error handling for SolPack
///
/// One top-level error type wrapping category-specific enums, so callers can
/// match on the failure class without string parsing.

// =============================================================================
// MAIN ERROR TYPE
// =============================================================================

#[derive(Debug, Clone)]
pub enum SolPackError {
    // Network connectivity errors
    Network(NetworkError),

    // Configuration errors
    Configuration(ConfigurationError),

    // Data parsing & validation errors
    Data(DataError),
}

impl std::fmt::Display for SolPackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolPackError::Network(e) => write!(f, "Network Error: {}", e),
            SolPackError::Configuration(e) => write!(f, "Configuration Error: {}", e),
            SolPackError::Data(e) => write!(f, "Data Error: {}", e),
        }
    }
}

impl std::error::Error for SolPackError {}

// =============================================================================
// NETWORK ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum NetworkError {
    ConnectionTimeout {
        endpoint: String,
        timeout_ms: u64,
    },
    HttpStatusError {
        endpoint: String,
        status: u16,
        body: Option<String>,
    },
    BindFailed {
        address: String,
        reason: String,
    },
    Generic {
        message: String,
    },
}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetworkError::ConnectionTimeout {
                endpoint,
                timeout_ms,
            } => {
                write!(
                    f,
                    "Connection timeout to {} after {}ms",
                    endpoint, timeout_ms
                )
            }
            NetworkError::HttpStatusError {
                endpoint,
                status,
                body,
            } => {
                write!(
                    f,
                    "HTTP {} from {}: {}",
                    status,
                    endpoint,
                    body.as_deref().unwrap_or("No body")
                )
            }
            NetworkError::BindFailed { address, reason } => {
                write!(f, "Failed to bind to {}: {}", address, reason)
            }
            NetworkError::Generic { message } => write!(f, "{}", message),
        }
    }
}

// =============================================================================
// CONFIGURATION ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum ConfigurationError {
    InvalidConfig { field: String, reason: String },
    MissingConfig { field: String },
    Generic { message: String },
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::InvalidConfig { field, reason } => {
                write!(f, "Invalid config field '{}': {}", field, reason)
            }
            ConfigurationError::MissingConfig { field } => {
                write!(f, "Missing config field '{}'", field)
            }
            ConfigurationError::Generic { message } => write!(f, "{}", message),
        }
    }
}

// =============================================================================
// DATA ERROR TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub enum DataError {
    ParseError {
        data_type: String,
        error: String,
    },
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
    Generic {
        message: String,
    },
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::ParseError { data_type, error } => {
                write!(f, "Failed to parse {}: {}", data_type, error)
            }
            DataError::ValidationError {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid {} '{}': {}", field, value, reason)
            }
            DataError::Generic { message } => write!(f, "{}", message),
        }
    }
}

// =============================================================================
// ERROR CONVERSIONS
// =============================================================================

impl From<String> for SolPackError {
    fn from(err: String) -> Self {
        SolPackError::Network(NetworkError::Generic { message: err })
    }
}

impl From<&str> for SolPackError {
    fn from(err: &str) -> Self {
        SolPackError::Network(NetworkError::Generic {
            message: err.to_string(),
        })
    }
}

impl From<reqwest::Error> for SolPackError {
    fn from(err: reqwest::Error) -> Self {
        SolPackError::Network(NetworkError::Generic {
            message: format!("HTTP request failed: {}", err),
        })
    }
}

impl From<serde_json::Error> for SolPackError {
    fn from(err: serde_json::Error) -> Self {
        SolPackError::Data(DataError::ParseError {
            data_type: "JSON".to_string(),
            error: err.to_string(),
        })
    }
}

// =============================================================================
// STRUCTURED ERROR BUILDERS
// =============================================================================

impl SolPackError {
    /// Create a network error
    pub fn network_error(message: impl Into<String>) -> Self {
        SolPackError::Network(NetworkError::Generic {
            message: message.into(),
        })
    }

    /// Create a configuration error
    pub fn configuration_error(message: impl Into<String>) -> Self {
        SolPackError::Configuration(ConfigurationError::Generic {
            message: message.into(),
        })
    }

    /// Create a parse error
    pub fn parse_error(data_type: impl Into<String>, error: impl Into<String>) -> Self {
        SolPackError::Data(DataError::ParseError {
            data_type: data_type.into(),
            error: error.into(),
        })
    }
}
