//! Business location resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::address::Address;
use super::money::Currency;
use crate::builder::dto_builder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationStatus {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    Physical,
    Mobile,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationCapability {
    CreditCardProcessing,
    AutomaticTransfers,
    UnlinkedRefunds,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A place of business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    #[schema(example = "18YC4JDH91E1H")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// IANA timezone, e.g. `America/Los_Angeles`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<LocationCapability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LocationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,
}

impl Location {
    pub fn is_active(&self) -> bool {
        self.status == Some(LocationStatus::Active)
    }

    pub fn can_process_cards(&self) -> bool {
        self.capabilities
            .contains(&LocationCapability::CreditCardProcessing)
    }
}

dto_builder! {
    LocationBuilder => Location {
        required { id: String }
        optional {
            name: String,
            address: Address,
            timezone: String,
            status: LocationStatus,
            created_at: DateTime<Utc>,
            merchant_id: String,
            country: String,
            language_code: String,
            currency: Currency,
            phone_number: String,
            business_name: String,
            location_type: LocationType,
            website_url: String,
            business_email: String,
            description: String,
            coordinates: Coordinates,
            mcc: String,
        }
        defaulted {
            capabilities: Vec<LocationCapability>,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        let location = Location::builder("L1")
            .status(LocationStatus::Active)
            .capabilities(vec![LocationCapability::CreditCardProcessing])
            .build();
        assert!(location.is_active());
        assert!(location.can_process_cards());
        assert!(!Location::builder("L2").build().can_process_cards());
    }

    #[test]
    fn test_decode_unlisted_values() {
        let location: Location = serde_json::from_str(
            r#"{"id":"L1","currency":"ZAR","status":"PENDING_REVIEW","type":"POPUP",
                "capabilities":["CREDIT_CARD_PROCESSING","CRYPTO_PAYMENTS"]}"#,
        )
        .unwrap();
        assert_eq!(location.currency, Some(Currency::ZAR));
        assert_eq!(location.status, Some(LocationStatus::Unknown));
        assert!(!location.is_active());
        assert_eq!(location.location_type, Some(LocationType::Unknown));
        assert_eq!(
            location.capabilities,
            vec![
                LocationCapability::CreditCardProcessing,
                LocationCapability::Unknown
            ]
        );
        assert!(location.can_process_cards());
    }

    #[test]
    fn test_location_type_is_renamed() {
        let location = Location::builder("L1")
            .location_type(LocationType::Mobile)
            .build();
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["type"], "MOBILE");
        assert!(json.get("capabilities").is_none());
    }
}
