//! Idempotency keys for mutating requests.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ValidationError;

/// Longest key any endpoint accepts.
pub const MAX_IDEMPOTENCY_KEY_LEN: usize = 192;

/// A client-chosen key that makes a create/update request safe to retry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "7b0f3ec5-086a-4871-8f13-3c81b3875218")]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    /// Generates a fresh random key.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing key.
    ///
    /// # Validation
    /// - Cannot be empty or blank
    /// - At most 192 characters
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::InvalidIdempotencyKey(
                "key cannot be empty".into(),
            ));
        }
        if key.chars().count() > MAX_IDEMPOTENCY_KEY_LEN {
            return Err(ValidationError::InvalidIdempotencyKey(format!(
                "key longer than {} characters",
                MAX_IDEMPOTENCY_KEY_LEN
            )));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for IdempotencyKey {
    fn default() -> Self {
        Self::generate()
    }
}

impl std::fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for IdempotencyKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
