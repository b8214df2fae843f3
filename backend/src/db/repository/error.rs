//! Error types for storage reads.
//!
//! Absence of data is never an error here: lookups that may legitimately
//! find nothing return `Option` or an empty `Vec`. `RepositoryError` is
//! reserved for transport and data-integrity failures.

use std::fmt;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Where a repository error happened.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Repository method (e.g. "fetch_wind_records")
    pub operation: Option<String>,
    /// Entity kind (e.g. "spot", "buoy")
    pub entity: Option<String>,
    pub entity_id: Option<String>,
    pub details: Option<String>,
    /// Whether the same call may succeed later
    pub retryable: bool,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("id={}", id));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        if self.retryable {
            parts.push("retryable=true".to_string());
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store could not be reached (or timed out).
    #[error("Store unavailable: {message} {context}")]
    Unavailable {
        message: String,
        context: ErrorContext,
    },

    /// An entity addressed by id does not exist.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },

    /// Stored data could not be decoded.
    #[error("Invalid data: {message} {context}")]
    InvalidData {
        message: String,
        context: ErrorContext,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    pub fn unavailable(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Unavailable {
            message: message.into(),
            context: context.retryable(),
        }
    }

    pub fn not_found(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::NotFound {
            message: message.into(),
            context,
        }
    }

    pub fn invalid_data(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::InvalidData {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        self.context().retryable
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The message without context.
    pub fn message(&self) -> &str {
        match self {
            Self::Unavailable { message, .. }
            | Self::NotFound { message, .. }
            | Self::InvalidData { message, .. }
            | Self::ConfigurationError { message, .. } => message,
        }
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Unavailable { context, .. }
            | Self::NotFound { context, .. }
            | Self::InvalidData { context, .. }
            | Self::ConfigurationError { context, .. } => context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_is_retryable() {
        let err = RepositoryError::unavailable(
            "analytics store down",
            ErrorContext::new("fetch_wind_records").with_entity("spot").with_entity_id(4),
        );
        assert!(err.is_retryable());
        let msg = err.to_string();
        assert!(msg.contains("analytics store down"));
        assert!(msg.contains("operation=fetch_wind_records"));
        assert!(msg.contains("id=4"));
    }

    #[test]
    fn test_not_found() {
        let err = RepositoryError::not_found("Spot not found", ErrorContext::new("get_spot"));
        assert!(err.is_not_found());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_context_display_empty() {
        assert_eq!(ErrorContext::default().to_string(), "[]");
    }
}
