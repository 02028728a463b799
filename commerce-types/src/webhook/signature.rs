//! Notification signatures.
//!
//! Each notification carries a base64 HMAC-SHA256 over the subscription's
//! notification URL followed by the raw request body, keyed with the
//! subscription's signature key.

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// Request header carrying the signature.
pub const SIGNATURE_HEADER: &str = "x-commerce-hmacsha256-signature";

/// Computes the signature for `body` delivered to `notification_url`.
pub fn sign_notification(
    notification_url: &str,
    body: &[u8],
    signature_key: &str,
) -> Result<String, WebhookError> {
    if signature_key.is_empty() {
        return Err(WebhookError::EmptySignatureKey);
    }
    if notification_url.is_empty() {
        return Err(WebhookError::EmptyNotificationUrl);
    }

    let mut mac = HmacSha256::new_from_slice(signature_key.as_bytes())
        .map_err(|_| WebhookError::InvalidKeyLength)?;
    mac.update(notification_url.as_bytes());
    mac.update(body);
    Ok(BASE64_STANDARD.encode(mac.finalize().into_bytes()))
}

/// Checks `signature` against the expected one in constant time.
///
/// An empty signature never matches.
pub fn verify_notification(
    notification_url: &str,
    body: &[u8],
    signature: &str,
    signature_key: &str,
) -> Result<bool, WebhookError> {
    let expected = sign_notification(notification_url, body, signature_key)?;
    if signature.is_empty() {
        tracing::debug!("Notification carries no signature");
        return Ok(false);
    }
    let matches: bool = expected.as_bytes().ct_eq(signature.as_bytes()).into();
    if !matches {
        tracing::debug!(notification_url, "Notification signature mismatch");
    }
    Ok(matches)
}
