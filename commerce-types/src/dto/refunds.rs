//! Refund requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Nullable;
use crate::builder::dto_builder;
use crate::domain::{ApiError, IdempotencyKey, Money, Payment, PaymentRefund};
use crate::error::ValidationError;

/// Request to refund (part of) a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RefundPaymentRequest {
    pub idempotency_key: IdempotencyKey,
    pub amount_money: Money,
    pub payment_id: String,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<Money>)]
    pub app_fee_money: Nullable<Money>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub reason: Nullable<String>,
    /// Guards against refunding a payment that changed in the meantime
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub payment_version_token: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub team_member_id: Nullable<String>,
}

impl RefundPaymentRequest {
    /// Builds a request refunding whatever is left on `payment`, pinned to its
    /// current version token.
    ///
    /// Fails with [`ValidationError::NothingToRefund`] once the payment is
    /// fully refunded.
    pub fn full_refund(
        payment: &Payment,
        idempotency_key: IdempotencyKey,
    ) -> Result<Self, ValidationError> {
        let remaining = payment.remaining_refundable()?;
        if remaining.amount <= 0 {
            return Err(ValidationError::NothingToRefund);
        }
        let mut builder = Self::builder(idempotency_key, remaining, payment.id.clone());
        if let Some(token) = &payment.version_token {
            builder = builder.payment_version_token(token.clone());
        }
        Ok(builder.build())
    }

    /// Checks the amount is positive and within what is still refundable on
    /// `payment`.
    pub fn check_against(&self, payment: &Payment) -> Result<(), ValidationError> {
        if self.amount_money.amount <= 0 {
            return Err(ValidationError::NonPositiveRefund(self.amount_money.amount));
        }
        let remaining = payment.remaining_refundable()?;
        let left = remaining.checked_sub(self.amount_money)?;
        if left.amount < 0 {
            return Err(ValidationError::RefundExceedsPayment {
                remaining: remaining.amount,
                requested: self.amount_money.amount,
            });
        }
        Ok(())
    }
}

dto_builder! {
    RefundPaymentRequestBuilder => RefundPaymentRequest {
        required {
            idempotency_key: IdempotencyKey,
            amount_money: Money,
            payment_id: String,
        }
        nullable {
            app_fee_money: Money,
            reason: String,
            payment_version_token: String,
            team_member_id: String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RefundPaymentResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund: Option<PaymentRefund>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetPaymentRefundResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund: Option<PaymentRefund>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListPaymentRefundsResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refunds: Vec<PaymentRefund>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;
    use serde_json::json;

    fn usd(amount: i64) -> Money {
        Money::new(amount, Currency::USD)
    }

    fn payment() -> Payment {
        Payment::builder("p_1", usd(1000))
            .total_money(usd(1000))
            .refunded_money(usd(300))
            .version_token("v1")
            .build()
    }

    #[test]
    fn test_full_refund() {
        let req = RefundPaymentRequest::full_refund(&payment(), IdempotencyKey::generate()).unwrap();
        assert_eq!(req.amount_money, usd(700));
        assert_eq!(req.payment_id, "p_1");
        assert_eq!(req.payment_version_token, Nullable::Value("v1".to_string()));
    }

    #[test]
    fn test_check_against() {
        let ok = RefundPaymentRequest::builder(IdempotencyKey::generate(), usd(700), "p_1").build();
        assert!(ok.check_against(&payment()).is_ok());

        let too_much =
            RefundPaymentRequest::builder(IdempotencyKey::generate(), usd(701), "p_1").build();
        assert_eq!(
            too_much.check_against(&payment()),
            Err(ValidationError::RefundExceedsPayment {
                remaining: 700,
                requested: 701
            })
        );

        let wrong_currency = RefundPaymentRequest::builder(
            IdempotencyKey::generate(),
            Money::new(1, Currency::EUR),
            "p_1",
        )
        .build();
        assert!(matches!(
            wrong_currency.check_against(&payment()),
            Err(ValidationError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_full_refund_of_refunded_payment() {
        let payment = Payment::builder("p_1", usd(1000))
            .total_money(usd(1000))
            .refunded_money(usd(1000))
            .build();
        assert_eq!(
            RefundPaymentRequest::full_refund(&payment, IdempotencyKey::generate()),
            Err(ValidationError::NothingToRefund)
        );
    }

    #[test]
    fn test_check_against_rejects_non_positive_amounts() {
        for amount in [0, -500] {
            let req =
                RefundPaymentRequest::builder(IdempotencyKey::generate(), usd(amount), "p_1").build();
            assert_eq!(
                req.check_against(&payment()),
                Err(ValidationError::NonPositiveRefund(amount))
            );
        }
    }

    #[test]
    fn test_refund_request_explicit_null_reason() {
        let key: IdempotencyKey = "refund-1".parse().unwrap();
        let req = RefundPaymentRequest::builder(key, usd(100), "p_1")
            .reason(Nullable::Null)
            .build();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "idempotency_key": "refund-1",
                "amount_money": { "amount": 100, "currency": "USD" },
                "payment_id": "p_1",
                "reason": null
            })
        );
    }
}
