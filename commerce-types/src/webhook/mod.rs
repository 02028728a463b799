//! Webhook notification envelope and signature helpers.

mod signature;

pub use signature::{SIGNATURE_HEADER, sign_notification, verify_notification};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::WebhookError;

/// Notification body posted to a subscriber's URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WebhookEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    /// Dotted event name, e.g. `payment.updated`
    #[serde(rename = "type")]
    #[schema(example = "payment.updated")]
    pub event_type: String,
    pub event_id: String,
    pub created_at: DateTime<Utc>,
    pub data: WebhookEventData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WebhookEventData {
    /// Name of the affected resource, e.g. `payment`
    #[serde(rename = "type")]
    pub data_type: String,
    pub id: String,
    /// Wraps the resource under a key equal to `type`
    #[serde(default)]
    #[schema(value_type = Object)]
    pub object: serde_json::Value,
}

impl WebhookEvent {
    /// Parses a raw notification body.
    pub fn from_slice(body: &[u8]) -> Result<Self, WebhookError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Resource part of the event name (`payment` for `payment.updated`).
    pub fn resource(&self) -> &str {
        self.event_type
            .split_once('.')
            .map_or(self.event_type.as_str(), |(resource, _)| resource)
    }

    /// Decodes the whole `data.object` as `T`.
    pub fn object_as<T: DeserializeOwned>(&self) -> Result<T, WebhookError> {
        Ok(T::deserialize(&self.data.object)?)
    }

    /// Decodes the resource wrapped inside `data.object` under `data.type`.
    ///
    /// Returns `Ok(None)` when the object carries no such key.
    pub fn resource_as<T: DeserializeOwned>(&self) -> Result<Option<T>, WebhookError> {
        match self.data.object.get(&self.data.data_type) {
            Some(value) => Ok(Some(T::deserialize(value)?)),
            None => Ok(None),
        }
    }
}
