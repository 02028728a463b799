//! Decoding payloads into their typed models.
//!
//! A payload is decoded into the Rust type for its kind and serialized back,
//! so the output shows exactly what the models keep: unknown fields are
//! dropped and unset optional fields disappear.

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use commerce_types::domain::{Customer, ErrorResponse, Location, Order, Payment, PaymentRefund};
use commerce_types::dto::{
    CompletePaymentRequest, CreateCustomerRequest, CreateCustomerResponse, CreateOrderRequest,
    CreatePaymentRequest, CreatePaymentResponse, ListCustomersResponse, ListLocationsResponse,
    ListPaymentRefundsResponse, ListPaymentsResponse, RefundPaymentRequest, RefundPaymentResponse,
    UpdateCustomerRequest, UpdateLocationRequest, UpdateOrderRequest, UpdatePaymentRequest,
};
use commerce_types::webhook::WebhookEvent;

/// Payload kinds accepted by `commerce inspect`.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadKind {
    Payment,
    CreatePaymentRequest,
    CreatePaymentResponse,
    UpdatePaymentRequest,
    CompletePaymentRequest,
    ListPaymentsResponse,
    Refund,
    RefundPaymentRequest,
    RefundPaymentResponse,
    ListPaymentRefundsResponse,
    Customer,
    CreateCustomerRequest,
    CreateCustomerResponse,
    UpdateCustomerRequest,
    ListCustomersResponse,
    Order,
    CreateOrderRequest,
    UpdateOrderRequest,
    Location,
    UpdateLocationRequest,
    ListLocationsResponse,
    WebhookEvent,
    ErrorResponse,
}

/// Decodes `payload` as `kind` and returns its canonical JSON form.
pub fn inspect(kind: PayloadKind, payload: &[u8]) -> anyhow::Result<Value> {
    match kind {
        PayloadKind::Payment => canonical::<Payment>(kind, payload),
        PayloadKind::CreatePaymentRequest => canonical::<CreatePaymentRequest>(kind, payload),
        PayloadKind::CreatePaymentResponse => canonical::<CreatePaymentResponse>(kind, payload),
        PayloadKind::UpdatePaymentRequest => canonical::<UpdatePaymentRequest>(kind, payload),
        PayloadKind::CompletePaymentRequest => canonical::<CompletePaymentRequest>(kind, payload),
        PayloadKind::ListPaymentsResponse => canonical::<ListPaymentsResponse>(kind, payload),
        PayloadKind::Refund => canonical::<PaymentRefund>(kind, payload),
        PayloadKind::RefundPaymentRequest => canonical::<RefundPaymentRequest>(kind, payload),
        PayloadKind::RefundPaymentResponse => canonical::<RefundPaymentResponse>(kind, payload),
        PayloadKind::ListPaymentRefundsResponse => {
            canonical::<ListPaymentRefundsResponse>(kind, payload)
        }
        PayloadKind::Customer => canonical::<Customer>(kind, payload),
        PayloadKind::CreateCustomerRequest => canonical::<CreateCustomerRequest>(kind, payload),
        PayloadKind::CreateCustomerResponse => canonical::<CreateCustomerResponse>(kind, payload),
        PayloadKind::UpdateCustomerRequest => canonical::<UpdateCustomerRequest>(kind, payload),
        PayloadKind::ListCustomersResponse => canonical::<ListCustomersResponse>(kind, payload),
        PayloadKind::Order => canonical::<Order>(kind, payload),
        PayloadKind::CreateOrderRequest => canonical::<CreateOrderRequest>(kind, payload),
        PayloadKind::UpdateOrderRequest => canonical::<UpdateOrderRequest>(kind, payload),
        PayloadKind::Location => canonical::<Location>(kind, payload),
        PayloadKind::UpdateLocationRequest => canonical::<UpdateLocationRequest>(kind, payload),
        PayloadKind::ListLocationsResponse => canonical::<ListLocationsResponse>(kind, payload),
        PayloadKind::WebhookEvent => canonical::<WebhookEvent>(kind, payload),
        PayloadKind::ErrorResponse => canonical::<ErrorResponse>(kind, payload),
    }
}

fn canonical<T: DeserializeOwned + Serialize>(
    kind: PayloadKind,
    payload: &[u8],
) -> anyhow::Result<Value> {
    let typed: T = serde_json::from_slice(payload)
        .with_context(|| format!("Payload is not a valid {kind:?}"))?;
    tracing::debug!(?kind, bytes = payload.len(), "Decoded payload");
    Ok(serde_json::to_value(&typed)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inspect_drops_unknown_fields() {
        let payload = json!({
            "id": "pay_1",
            "amount_money": { "amount": 250, "currency": "EUR" },
            "status": "APPROVED",
            "not_a_payment_field": 42
        });
        let out = inspect(PayloadKind::Payment, payload.to_string().as_bytes()).unwrap();
        assert_eq!(
            out,
            json!({
                "id": "pay_1",
                "amount_money": { "amount": 250, "currency": "EUR" },
                "status": "APPROVED"
            })
        );
    }

    #[test]
    fn test_inspect_keeps_explicit_nulls() {
        let payload = br#"{"nickname": null, "note": "vip", "version": 4}"#;
        let out = inspect(PayloadKind::UpdateCustomerRequest, payload).unwrap();
        assert_eq!(out, json!({ "nickname": null, "note": "vip", "version": 4 }));
    }

    #[test]
    fn test_inspect_reports_position() {
        let payload = b"{\n  \"id\": \"pay_1\"\n}";
        let err = inspect(PayloadKind::Payment, payload).unwrap_err();

        assert_eq!(err.to_string(), "Payload is not a valid Payment");
        let cause = format!("{:#}", err);
        assert!(cause.contains("amount_money"), "{cause}");
        assert!(cause.contains("line 3"), "{cause}");
    }

    #[test]
    fn test_kind_names() {
        use clap::ValueEnum;

        let kind = PayloadKind::from_str("update-order-request", false).unwrap();
        assert_eq!(kind, PayloadKind::UpdateOrderRequest);
        assert!(PayloadKind::from_str("webhook-event", false).is_ok());
    }
}
