//! Payment resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::address::Address;
use super::card::CardPaymentDetails;
use super::money::Money;
use crate::builder::dto_builder;
use crate::error::ValidationError;

/// Lifecycle state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Authorized, waiting to be completed or canceled
    Approved,
    Pending,
    Completed,
    Canceled,
    Failed,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    /// Terminal states never change again.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled | Self::Failed)
    }
}

/// Kind of funding source used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    Card,
    BankAccount,
    Wallet,
    BuyNowPayLater,
    SquareAccount,
    Cash,
    External,
    #[serde(other)]
    Unknown,
}

/// What happens to an approved payment when its delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DelayAction {
    Cancel,
    Complete,
    #[serde(other)]
    Unknown,
}

/// A fee charged by the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProcessingFee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_at: Option<DateTime<Utc>>,
    /// INITIAL or ADJUSTMENT
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,
}

/// Details of a cash payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CashPaymentDetails {
    pub buyer_supplied_money: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_back_money: Option<Money>,
}

/// Details of a payment recorded outside the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExternalPaymentDetails {
    /// CHECK, BANK_TRANSFER, OTHER_GIFT_CARD, CRYPTO, ...
    #[serde(rename = "type")]
    pub payment_type: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_fee_money: Option<Money>,
}

/// A payment taken against a funding source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    #[schema(example = "R2B3Z8WMVt3EAmzYWLZvz7Y69EbZY")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Amount before tip
    pub amount_money: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_fee_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub processing_fee: Vec<ProcessingFee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "PT168H")]
    pub delay_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_action: Option<DelayAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delayed_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_details: Option<CardPaymentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_details: Option<CashPaymentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_details: Option<ExternalPaymentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refund_ids: Vec<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    /// Opaque token that must be echoed back on update/complete calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_token: Option<String>,
}

impl Payment {
    /// Returns true once the payment can no longer change state.
    pub fn is_final(&self) -> bool {
        self.status.is_some_and(|s| s.is_final())
    }

    /// Amount still available for refunds: total (or amount when no total is
    /// reported) minus what has already been refunded.
    pub fn remaining_refundable(&self) -> Result<Money, ValidationError> {
        let total = self.total_money.unwrap_or(self.amount_money);
        match self.refunded_money {
            Some(refunded) => total.checked_sub(refunded),
            None => Ok(total),
        }
    }
}

dto_builder! {
    PaymentBuilder => Payment {
        required {
            id: String,
            amount_money: Money,
        }
        optional {
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
            tip_money: Money,
            total_money: Money,
            app_fee_money: Money,
            approved_money: Money,
            refunded_money: Money,
            status: PaymentStatus,
            delay_duration: String,
            delay_action: DelayAction,
            delayed_until: DateTime<Utc>,
            source_type: SourceType,
            card_details: CardPaymentDetails,
            cash_details: CashPaymentDetails,
            external_details: ExternalPaymentDetails,
            location_id: String,
            order_id: String,
            reference_id: String,
            customer_id: String,
            employee_id: String,
            buyer_email_address: String,
            billing_address: Address,
            shipping_address: Address,
            note: String,
            statement_description_identifier: String,
            receipt_number: String,
            receipt_url: String,
            version_token: String,
        }
        defaulted {
            processing_fee: Vec<ProcessingFee>,
            refund_ids: Vec<String>,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;

    fn usd(amount: i64) -> Money {
        Money::new(amount, Currency::USD)
    }

    #[test]
    fn test_remaining_refundable() {
        let payment = Payment::builder("p_1", usd(1000))
            .total_money(usd(1200))
            .refunded_money(usd(200))
            .build();
        assert_eq!(payment.remaining_refundable().unwrap(), usd(1000));
    }

    #[test]
    fn test_remaining_refundable_without_total() {
        let payment = Payment::builder("p_1", usd(1000)).build();
        assert_eq!(payment.remaining_refundable().unwrap(), usd(1000));
    }

    #[test]
    fn test_remaining_refundable_currency_mismatch() {
        let payment = Payment::builder("p_1", usd(1000))
            .refunded_money(Money::new(100, Currency::EUR))
            .build();
        assert!(payment.remaining_refundable().is_err());
    }

    #[test]
    fn test_is_final() {
        let payment = Payment::builder("p_1", usd(1))
            .status(PaymentStatus::Approved)
            .build();
        assert!(!payment.is_final());

        let payment = PaymentBuilder::init("p_1", usd(1))
            .status(PaymentStatus::Canceled)
            .build();
        assert!(payment.is_final());
        assert!(!Payment::builder("p_1", usd(1)).build().is_final());
    }

    #[test]
    fn test_processing_fee_type_field() {
        let fee = ProcessingFee {
            effective_at: None,
            fee_type: Some("INITIAL".to_string()),
            amount_money: Some(usd(59)),
        };
        let json = serde_json::to_value(&fee).unwrap();
        assert_eq!(json["type"], "INITIAL");
        assert!(json.get("fee_type").is_none());
    }
}
