//! Customer profile resource.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::address::Address;
use crate::builder::dto_builder;

/// Marketing preferences attached to a customer profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_unsubscribed: Option<bool>,
}

/// How the profile was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerCreationSource {
    Appointments,
    Coupon,
    DeletionRecovery,
    Directory,
    Egifting,
    EmailCollection,
    Feedback,
    Import,
    Invoices,
    Loyalty,
    Marketing,
    Merge,
    OnlineStore,
    InstantProfile,
    Terminal,
    ThirdParty,
    ThirdPartyImport,
    UnmergeRecovery,
    #[serde(other)]
    Other,
}

/// A customer profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    /// Server-assigned identifier
    #[schema(example = "JDKYHBWT1D4F8MFH63DBMEN8Y4")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Birthday; the year may be `0000` when only month and day are known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<CustomerPreferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_source: Option<CustomerCreationSource>,
    /// Incremented on every update, used for optimistic concurrency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl Customer {
    /// Returns "given family", skipping whichever part is missing.
    pub fn display_name(&self) -> Option<String> {
        match (self.given_name.as_deref(), self.family_name.as_deref()) {
            (Some(given), Some(family)) => Some(format!("{} {}", given, family)),
            (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
            (None, None) => self.company_name.clone(),
        }
    }
}

dto_builder! {
    CustomerBuilder => Customer {
        required { id: String }
        optional {
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
            given_name: String,
            family_name: String,
            nickname: String,
            company_name: String,
            email_address: String,
            phone_number: String,
            address: Address,
            birthday: NaiveDate,
            reference_id: String,
            note: String,
            preferences: CustomerPreferences,
            creation_source: CustomerCreationSource,
            version: i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name() {
        let customer = Customer::builder("c_1")
            .given_name("Amelia")
            .family_name("Earhart")
            .build();
        assert_eq!(customer.display_name().as_deref(), Some("Amelia Earhart"));

        let company = Customer::builder("c_2").company_name("Acme").build();
        assert_eq!(company.display_name().as_deref(), Some("Acme"));
    }

    #[test]
    fn test_decode_customer() {
        let body = json!({
            "id": "JDKYHBWT1D4F8MFH63DBMEN8Y4",
            "created_at": "2016-03-23T20:21:54.859Z",
            "updated_at": "2016-03-23T20:21:55Z",
            "given_name": "Amelia",
            "birthday": "1897-07-24",
            "preferences": { "email_unsubscribed": false },
            "creation_source": "THIRD_PARTY",
            "version": 1
        });
        let customer: Customer = serde_json::from_value(body).unwrap();

        assert_eq!(customer.version, Some(1));
        assert_eq!(
            customer.birthday,
            NaiveDate::from_ymd_opt(1897, 7, 24)
        );
        assert_eq!(
            customer.creation_source,
            Some(CustomerCreationSource::ThirdParty)
        );
        assert!(customer.address.is_none());
    }
}
