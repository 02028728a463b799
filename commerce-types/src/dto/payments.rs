//! Payment requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Nullable;
use crate::builder::dto_builder;
use crate::domain::{Address, ApiError, DelayAction, IdempotencyKey, Money, Payment};

/// Request to take a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    /// Card nonce, card on file id, or `CASH`/`EXTERNAL`
    #[schema(example = "cnon:card-nonce-ok")]
    pub source_id: String,
    pub idempotency_key: IdempotencyKey,
    pub amount_money: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_fee_money: Option<Money>,
    /// ISO 8601 duration before an unfinished payment is acted upon
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "PT36H")]
    pub delay_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_action: Option<DelayAction>,
    /// When false the payment stays APPROVED until completed or canceled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Token from a buyer verification (3-D Secure) flow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_partial_authorization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_description_identifier: Option<String>,
}

dto_builder! {
    CreatePaymentRequestBuilder => CreatePaymentRequest {
        required {
            source_id: String,
            idempotency_key: IdempotencyKey,
            amount_money: Money,
        }
        optional {
            tip_money: Money,
            app_fee_money: Money,
            delay_duration: String,
            delay_action: DelayAction,
            autocomplete: bool,
            order_id: String,
            customer_id: String,
            location_id: String,
            team_member_id: String,
            reference_id: String,
            verification_token: String,
            accept_partial_authorization: bool,
            buyer_email_address: String,
            billing_address: Address,
            shipping_address: Address,
            note: String,
            statement_description_identifier: String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetPaymentResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

/// Fields of an APPROVED payment that can still be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentUpdate {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<Money>)]
    pub amount_money: Nullable<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<Money>)]
    pub tip_money: Nullable<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<Money>)]
    pub app_fee_money: Nullable<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub delay_duration: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<DelayAction>)]
    pub delay_action: Nullable<DelayAction>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub customer_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub note: Nullable<String>,
    /// Must match the payment's current token
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub version_token: Nullable<String>,
}

impl PaymentUpdate {
    /// Applies this update to a local copy of the payment.
    ///
    /// Required money fields on [`Payment`] cannot be cleared, so a null
    /// `amount_money` leaves the amount as it is.
    pub fn apply_to(self, payment: &mut Payment) {
        if let Nullable::Value(amount) = self.amount_money {
            payment.amount_money = amount;
        }
        self.tip_money.apply_to(&mut payment.tip_money);
        self.app_fee_money.apply_to(&mut payment.app_fee_money);
        self.delay_duration.apply_to(&mut payment.delay_duration);
        self.delay_action.apply_to(&mut payment.delay_action);
        self.customer_id.apply_to(&mut payment.customer_id);
        self.note.apply_to(&mut payment.note);
        self.version_token.apply_to(&mut payment.version_token);
    }
}

dto_builder! {
    PaymentUpdateBuilder => PaymentUpdate {
        nullable {
            amount_money: Money,
            tip_money: Money,
            app_fee_money: Money,
            delay_duration: String,
            delay_action: DelayAction,
            customer_id: String,
            note: String,
            version_token: String,
        }
    }
}

/// Request to update an APPROVED payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdatePaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentUpdate>,
    pub idempotency_key: IdempotencyKey,
}

dto_builder! {
    UpdatePaymentRequestBuilder => UpdatePaymentRequest {
        required { idempotency_key: IdempotencyKey }
        optional { payment: PaymentUpdate }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdatePaymentResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CancelPaymentResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

/// Request to complete (capture) an APPROVED payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompletePaymentRequest {
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub version_token: Nullable<String>,
}

dto_builder! {
    CompletePaymentRequestBuilder => CompletePaymentRequest {
        nullable { version_token: String }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompletePaymentResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListPaymentsResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<Payment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}
