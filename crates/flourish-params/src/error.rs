//! Error types for parameter decoding.

use thiserror::Error;

/// Errors raised while decoding short parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A short-param value could not be decoded for its declared domain.
    #[error("cannot decode '{key}' = {value:?}: {reason}")]
    Parse {
        /// Full short key (instance name + spec key), e.g. `xaf`.
        key: String,
        /// The raw string that failed to decode.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A query string segment could not be split into a key and value.
    #[error("malformed query segment: {0:?}")]
    MalformedQuery(String),
}

impl ParamError {
    /// Creates a parse error for `key`.
    pub fn parse(key: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending key for parse errors.
    pub fn key(&self) -> Option<&str> {
        match self {
            ParamError::Parse { key, .. } => Some(key),
            ParamError::MalformedQuery(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_key() {
        let err = ParamError::parse("xaf", "abc", "not a number");
        assert_eq!(err.key(), Some("xaf"));
        let msg = err.to_string();
        assert!(msg.contains("xaf"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_malformed_query_has_no_key() {
        let err = ParamError::MalformedQuery("=5".to_string());
        assert!(err.key().is_none());
        assert!(err.to_string().contains("=5"));
    }
}
