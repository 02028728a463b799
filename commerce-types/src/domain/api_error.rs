//! Error bodies returned by the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// High-level class of an API error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    ApiError,
    AuthenticationError,
    InvalidRequestError,
    RateLimitError,
    PaymentMethodError,
    RefundError,
    MerchantSubscriptionError,
    ExternalVendorError,
    /// A category this client does not know yet
    #[serde(other)]
    Unknown,
}

impl AsRef<str> for ErrorCategory {
    fn as_ref(&self) -> &str {
        match self {
            Self::ApiError => "API_ERROR",
            Self::AuthenticationError => "AUTHENTICATION_ERROR",
            Self::InvalidRequestError => "INVALID_REQUEST_ERROR",
            Self::RateLimitError => "RATE_LIMIT_ERROR",
            Self::PaymentMethodError => "PAYMENT_METHOD_ERROR",
            Self::RefundError => "REFUND_ERROR",
            Self::MerchantSubscriptionError => "MERCHANT_SUBSCRIPTION_ERROR",
            Self::ExternalVendorError => "EXTERNAL_VENDOR_ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// A single error reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub category: ErrorCategory,
    /// Machine-readable code, e.g. `CARD_DECLINED`. Kept as a string because
    /// the API adds codes over time.
    #[schema(example = "CARD_DECLINED")]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The request field the error refers to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.category, self.code)?;
        if let Some(field) = &self.field {
            write!(f, " ({})", field)?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

/// Body of a non-2xx response.
///
/// Successful responses may also carry `errors`; those are surfaced on each
/// response DTO instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, thiserror::Error)]
#[error("{}", summarize(.errors))]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

impl ErrorResponse {
    /// Returns true if any error has the given code.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    pub fn first(&self) -> Option<&ApiError> {
        self.errors.first()
    }
}

fn summarize(errors: &[ApiError]) -> String {
    match errors {
        [] => "API returned an error without details".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}
