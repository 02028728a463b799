//! Customer requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Nullable;
use crate::builder::dto_builder;
use crate::domain::{Address, ApiError, Customer, IdempotencyKey};

/// Request to create a customer profile.
///
/// At least one of given name, family name, company name, email address or
/// phone number must be set for the server to accept it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<IdempotencyKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Amelia")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

impl CreateCustomerRequest {
    /// Whether the request carries enough identity for the server to accept it.
    pub fn has_identity(&self) -> bool {
        [
            &self.given_name,
            &self.family_name,
            &self.company_name,
            &self.email_address,
            &self.phone_number,
        ]
        .iter()
        .any(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

dto_builder! {
    CreateCustomerRequestBuilder => CreateCustomerRequest {
        optional {
            idempotency_key: IdempotencyKey,
            given_name: String,
            family_name: String,
            company_name: String,
            nickname: String,
            email_address: String,
            address: Address,
            phone_number: String,
            reference_id: String,
            note: String,
            birthday: NaiveDate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomerResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

/// Partial update of a customer profile.
///
/// Unset fields are left alone by the server; fields explicitly set to null
/// are cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub given_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub family_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub company_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub nickname: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub email_address: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<Address>)]
    pub address: Nullable<Address>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub phone_number: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub reference_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub note: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>, format = Date)]
    pub birthday: Nullable<NaiveDate>,
    /// Current version of the profile; the update fails if it is stale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl UpdateCustomerRequest {
    /// Applies this update to a local copy of the profile the way the server
    /// would: unset fields are kept, null fields cleared, values replaced.
    ///
    /// The version is bumped when the request names one, mirroring the
    /// server's optimistic-concurrency increment. `updated_at` is left to the
    /// caller.
    pub fn apply_to(self, customer: &mut Customer) {
        self.given_name.apply_to(&mut customer.given_name);
        self.family_name.apply_to(&mut customer.family_name);
        self.company_name.apply_to(&mut customer.company_name);
        self.nickname.apply_to(&mut customer.nickname);
        self.email_address.apply_to(&mut customer.email_address);
        self.address.apply_to(&mut customer.address);
        self.phone_number.apply_to(&mut customer.phone_number);
        self.reference_id.apply_to(&mut customer.reference_id);
        self.note.apply_to(&mut customer.note);
        self.birthday.apply_to(&mut customer.birthday);
        if let Some(version) = self.version {
            customer.version = Some(version.saturating_add(1));
        }
    }

    /// True when the request would not change anything.
    pub fn is_empty(&self) -> bool {
        self == &Self {
            version: self.version,
            ..Self::default()
        }
    }
}

dto_builder! {
    UpdateCustomerRequestBuilder => UpdateCustomerRequest {
        optional { version: i64 }
        nullable {
            given_name: String,
            family_name: String,
            company_name: String,
            nickname: String,
            email_address: String,
            address: Address,
            phone_number: String,
            reference_id: String,
            note: String,
            birthday: NaiveDate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCustomerResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RetrieveCustomerResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteCustomerResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListCustomersResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customers: Vec<Customer>,
    /// Opaque pagination cursor, absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer() -> Customer {
        Customer::builder("c_1")
            .given_name("Amelia")
            .nickname("Meeley")
            .note("VIP")
            .version(3_i64)
            .build()
    }

    #[test]
    fn test_update_request_wire_shape() {
        let req = UpdateCustomerRequest::builder()
            .email_address("amelia@example.com")
            .nickname(Nullable::Null)
            .version(3_i64)
            .build();

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "email_address": "amelia@example.com",
                "nickname": null,
                "version": 3
            })
        );
    }

    #[test]
    fn test_apply_update() {
        let mut customer = customer();
        let req = UpdateCustomerRequest::builder()
            .email_address("amelia@example.com")
            .nickname(Nullable::Null)
            .version(3_i64)
            .build();

        req.apply_to(&mut customer);

        assert_eq!(customer.given_name.as_deref(), Some("Amelia"));
        assert_eq!(customer.note.as_deref(), Some("VIP"));
        assert!(customer.nickname.is_none());
        assert_eq!(
            customer.email_address.as_deref(),
            Some("amelia@example.com")
        );
        assert_eq!(customer.version, Some(4));
    }

    #[test]
    fn test_apply_update_at_max_version() {
        let mut customer = customer();
        let updated_at = customer.updated_at;
        UpdateCustomerRequest::builder()
            .version(i64::MAX)
            .build()
            .apply_to(&mut customer);
        assert_eq!(customer.version, Some(i64::MAX));
        assert_eq!(customer.updated_at, updated_at);
    }

    #[test]
    fn test_decoded_update_keeps_null_vs_absent() {
        let req: UpdateCustomerRequest =
            serde_json::from_value(json!({ "note": null, "given_name": "Amy" })).unwrap();
        assert!(req.note.is_null());
        assert!(req.family_name.is_unset());

        let mut customer = customer();
        req.apply_to(&mut customer);
        assert!(customer.note.is_none());
        assert_eq!(customer.given_name.as_deref(), Some("Amy"));
        assert_eq!(customer.version, Some(3));
    }

    #[test]
    fn test_is_empty() {
        assert!(UpdateCustomerRequest::builder().version(1_i64).build().is_empty());
        assert!(!UpdateCustomerRequest::builder()
            .note(Nullable::Null)
            .build()
            .is_empty());
    }

    #[test]
    fn test_create_request_identity() {
        let req = CreateCustomerRequest::builder()
            .idempotency_key(IdempotencyKey::generate())
            .build();
        assert!(!req.has_identity());

        let req = CreateCustomerRequest::builder().company_name("Acme").build();
        assert!(req.has_identity());
    }
}
