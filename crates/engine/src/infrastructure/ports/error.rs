//! Error types for port operations.

/// Host collaborator errors with context for debugging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    /// The host no longer has the document - includes entity type and ID.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The host refused or failed the call - includes operation name for tracing.
    #[error("Host rejected {operation}: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },

    /// The collaborator is not installed or not reachable.
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),
}

impl PortError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Rejected error with operation context.
    pub fn rejected(operation: &'static str, message: impl ToString) -> Self {
        Self::Rejected {
            operation,
            message: message.to_string(),
        }
    }

    pub fn unavailable(message: impl ToString) -> Self {
        Self::Unavailable(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = PortError::rejected("toggle_status", "token is locked");
        assert_eq!(err.to_string(), "Host rejected toggle_status: token is locked");
        assert!(PortError::not_found("Item", "abc").is_not_found());
    }
}
