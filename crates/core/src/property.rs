//! Free-form JSON "property" blobs attached to items.
//!
//! The blob is stored verbatim as text; it only has to parse as JSON.

use crate::error::CoreError;

/// Property text stored when the client sends none.
pub const EMPTY_PROPERTY: &str = "{}";

/// Message returned to the client for a malformed property blob.
pub const INVALID_PROPERTY_MESSAGE: &str = "Invalid JSON in properties";

/// Check that `raw` is well-formed JSON. Any JSON value is accepted.
pub fn validate_property(raw: &str) -> Result<(), CoreError> {
    serde_json::from_str::<serde::de::IgnoredAny>(raw)
        .map(|_| ())
        .map_err(|_| CoreError::Validation(INVALID_PROPERTY_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_objects_arrays_and_scalars() {
        for raw in [EMPTY_PROPERTY, r#"{"weight": 4.5}"#, "[1, 2]", "\"x\"", "null", "3"] {
            assert!(validate_property(raw).is_ok(), "{raw} should parse");
        }
    }

    #[test]
    fn rejects_malformed_text() {
        for raw in ["", "{", "{'a': 1}", "{\"a\": 1} trailing"] {
            assert_matches!(
                validate_property(raw),
                Err(CoreError::Validation(msg)) if msg == INVALID_PROPERTY_MESSAGE
            );
        }
    }
}
