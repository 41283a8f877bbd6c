use thiserror::Error;

/// Result type for catalog and pricing operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while fetching or pricing catalog records
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// Caller supplied an out-of-domain value (negative price, bad percentage)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The catalog answered 404 for a specific id or category
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// The catalog answered with a failure status, or failed in an unexpected way
    #[error("{}", remote_message(.status, .message))]
    RemoteService {
        status: Option<u16>,
        message: String,
    },

    /// The request never reached the catalog
    #[error("Could not reach the catalog service: {0}")]
    Connectivity(String),
}

fn remote_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Catalog service error (status {code}): {message}"),
        None => format!("Catalog service error: {message}"),
    }
}

impl CatalogError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CatalogError::InvalidInput(message.into())
    }

    pub fn remote(status: Option<u16>, message: impl Into<String>) -> Self {
        CatalogError::RemoteService {
            status,
            message: message.into(),
        }
    }

    /// HTTP status associated with the error, if the catalog sent one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CatalogError::NotFound { .. } => Some(404),
            CatalogError::RemoteService { status, .. } => *status,
            CatalogError::InvalidInput(_) | CatalogError::Connectivity(_) => None,
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, CatalogError::Connectivity(_))
    }
}

/// Body-stage failures. JSON is decoded by `serde_json`, so a reqwest body or
/// decode error means the stream itself broke off.
impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_body() || err.is_decode() {
            CatalogError::Connectivity(err.to_string())
        } else {
            CatalogError::remote(err.status().map(|s| s.as_u16()), err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::remote(None, format!("malformed response body: {err}"))
    }
}
