//! Shared response envelope types for API handlers.
//!
//! The browser client only inspects the `success` flag, so every JSON
//! endpoint answers with a `{ "success": ... }` envelope.

use serde::Serialize;

/// Bare `{ "success": true }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
