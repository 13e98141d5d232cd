//! Authentication service for the shared admin bearer token.

use serde_json::json;
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Validates bearer tokens against the single configured admin token.
///
/// The presented and configured tokens are compared as SHA-256 digests:
/// the comparison always runs over 32 fixed bytes, so it reveals neither
/// the token length nor a matching prefix.
pub struct AuthService {
    admin_token: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// `admin_token` is the shared secret loaded from configuration.
    pub fn new(admin_token: String) -> Self {
        Self { admin_token }
    }

    /// Authenticates a presented bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not match the
    /// configured admin token.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let presented = Sha256::digest(token.as_bytes());
        let expected = Sha256::digest(self.admin_token.as_bytes());

        if presented == expected {
            Ok(())
        } else {
            Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid token"}),
            ))
        }
    }
}
