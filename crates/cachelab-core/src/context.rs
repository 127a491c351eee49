//! Per-request identity.

use uuid::Uuid;

/// Unique request identifier for tracing and on-page display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        let id = Uuid::new_v4().simple().to_string();
        // Twelve hex chars are plenty for correlating demo requests.
        Self(id[..12].to_string())
    }

    /// Create from an existing ID string (e.g. an inbound tracing header).
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 12);
    }

    #[test]
    fn test_from_string_roundtrip() {
        let id = RequestId::from_string("abc123");
        assert_eq!(id.to_string(), "abc123");
    }
}
