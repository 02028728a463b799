//! Postal address.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::builder::dto_builder;

/// A physical address.
///
/// `country` is an ISO 3166-1 alpha-2 code. The meaning of the administrative
/// fields depends on the country (state, province, prefecture...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "500 Electric Ave")]
    pub address_line_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "New York")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublocality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "NY")]
    pub administrative_district_level_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "10003")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "US")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

dto_builder! {
    AddressBuilder => Address {
        optional {
            address_line_1: String,
            address_line_2: String,
            address_line_3: String,
            locality: String,
            sublocality: String,
            administrative_district_level_1: String,
            postal_code: String,
            country: String,
            first_name: String,
            last_name: String,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_address_serializes_to_empty_object() {
        let address = Address::builder().build();
        assert_eq!(address, Address::default());
        assert_eq!(serde_json::to_string(&address).unwrap(), "{}");
    }

    #[test]
    fn test_address_builder() {
        let address = Address::builder()
            .address_line_1("500 Electric Ave")
            .locality("New York")
            .country("US")
            .build();

        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json["address_line_1"], "500 Electric Ave");
        assert_eq!(json["locality"], "New York");
        assert!(json.get("postal_code").is_none());
    }
}
