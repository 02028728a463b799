//! Error types for the commerce models.

use crate::domain::Currency;

/// Client-side validation failures (bad input before anything reaches the wire).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    #[error("Amount overflow")]
    AmountOverflow,

    #[error("Refund amount must be positive, got {0}")]
    NonPositiveRefund(i64),

    #[error("Nothing left to refund")]
    NothingToRefund,

    #[error("Refund exceeds payment: remaining {remaining}, requested {requested}")]
    RefundExceedsPayment { remaining: i64, requested: i64 },

    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("Invalid idempotency key: {0}")]
    InvalidIdempotencyKey(String),
}

/// Errors raised while handling webhook notifications.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("Signature key cannot be empty")]
    EmptySignatureKey,

    #[error("Notification URL cannot be empty")]
    EmptyNotificationUrl,

    #[error("Signature key has an invalid length")]
    InvalidKeyLength,

    #[error("Malformed event payload: {0}")]
    Payload(#[from] serde_json::Error),
}
