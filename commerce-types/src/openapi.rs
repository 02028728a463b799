//! OpenAPI component document for every model and DTO.

use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

use crate::domain::{
    Address, ApiError, Card, CardBrand, CardEntryMethod, CardPaymentDetails, CardType,
    CashPaymentDetails, Coordinates, Currency, Customer, CustomerCreationSource,
    CustomerPreferences, DelayAction, DiscountType, ErrorCategory, ErrorResponse,
    ExternalPaymentDetails, FulfillmentState, FulfillmentType, IdempotencyKey, Location,
    LocationCapability, LocationStatus, LocationType, Money, Order, OrderFulfillment,
    OrderLineItem, OrderLineItemAppliedDiscount, OrderLineItemAppliedTax, OrderLineItemDiscount,
    OrderLineItemItemType, OrderLineItemTax, OrderState, Payment, PaymentRefund, PaymentStatus,
    ProcessingFee, RefundStatus, Scope, SourceType, TaxType,
};
use crate::dto::{
    CancelPaymentResponse, CompletePaymentRequest, CompletePaymentResponse,
    CreateCustomerRequest, CreateCustomerResponse, CreateOrderRequest, CreateOrderResponse,
    CreatePaymentRequest, CreatePaymentResponse, DeleteCustomerResponse,
    GetPaymentRefundResponse, GetPaymentResponse, ListCustomersResponse, ListLocationsResponse,
    ListPaymentRefundsResponse, ListPaymentsResponse, LocationUpdate, OrderUpdate, PaymentUpdate,
    RefundPaymentRequest, RefundPaymentResponse, RetrieveCustomerResponse,
    RetrieveLocationResponse, RetrieveOrderResponse, UpdateCustomerRequest,
    UpdateCustomerResponse, UpdateLocationRequest, UpdateLocationResponse, UpdateOrderRequest,
    UpdateOrderResponse, UpdatePaymentRequest, UpdatePaymentResponse,
};
use crate::webhook::{SIGNATURE_HEADER, WebhookEvent, WebhookEventData};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Commerce API models",
        description = "Resources, request and response bodies, and webhook notifications"
    ),
    components(
        schemas(
            // Common
            Money,
            Currency,
            Address,
            ApiError,
            ErrorCategory,
            ErrorResponse,
            IdempotencyKey,
            // Customers
            Customer,
            CustomerPreferences,
            CustomerCreationSource,
            CreateCustomerRequest,
            CreateCustomerResponse,
            UpdateCustomerRequest,
            UpdateCustomerResponse,
            RetrieveCustomerResponse,
            DeleteCustomerResponse,
            ListCustomersResponse,
            // Payments
            Payment,
            PaymentStatus,
            SourceType,
            DelayAction,
            ProcessingFee,
            Card,
            CardBrand,
            CardType,
            CardEntryMethod,
            CardPaymentDetails,
            CashPaymentDetails,
            ExternalPaymentDetails,
            CreatePaymentRequest,
            CreatePaymentResponse,
            GetPaymentResponse,
            PaymentUpdate,
            UpdatePaymentRequest,
            UpdatePaymentResponse,
            CancelPaymentResponse,
            CompletePaymentRequest,
            CompletePaymentResponse,
            ListPaymentsResponse,
            // Refunds
            PaymentRefund,
            RefundStatus,
            RefundPaymentRequest,
            RefundPaymentResponse,
            GetPaymentRefundResponse,
            ListPaymentRefundsResponse,
            // Orders
            Order,
            OrderState,
            OrderLineItem,
            OrderLineItemItemType,
            OrderLineItemTax,
            OrderLineItemDiscount,
            OrderLineItemAppliedTax,
            OrderLineItemAppliedDiscount,
            OrderFulfillment,
            FulfillmentType,
            FulfillmentState,
            Scope,
            TaxType,
            DiscountType,
            CreateOrderRequest,
            CreateOrderResponse,
            RetrieveOrderResponse,
            OrderUpdate,
            UpdateOrderRequest,
            UpdateOrderResponse,
            // Locations
            Location,
            LocationStatus,
            LocationType,
            LocationCapability,
            Coordinates,
            ListLocationsResponse,
            RetrieveLocationResponse,
            LocationUpdate,
            UpdateLocationRequest,
            UpdateLocationResponse,
            // Webhooks
            WebhookEvent,
            WebhookEventData,
        )
    ),
    modifiers(&WebhookSignatureAddon)
)]
pub struct ApiDoc;

/// Documents the header that carries notification signatures.
struct WebhookSignatureAddon;

impl Modify for WebhookSignatureAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "webhook_signature",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    SIGNATURE_HEADER,
                    "Base64 HMAC-SHA256 of notification URL + body",
                ))),
            );
        }
    }
}

impl ApiDoc {
    /// Renders the document as JSON.
    pub fn to_json(pretty: bool) -> Result<String, serde_json::Error> {
        let doc = Self::openapi();
        if pretty {
            doc.to_pretty_json()
        } else {
            doc.to_json()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();

        for name in [
            "Payment",
            "CreatePaymentRequest",
            "UpdateCustomerRequest",
            "UpdateOrderRequest",
            "RefundPaymentRequest",
            "WebhookEvent",
            "ErrorResponse",
        ] {
            assert!(components.schemas.contains_key(name), "missing {name}");
        }
        assert!(components.security_schemes.contains_key("webhook_signature"));
    }

    #[test]
    fn test_to_json() {
        let json = ApiDoc::to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["info"]["title"], "Commerce API models");
        assert!(value["components"]["schemas"]["Money"].is_object());
    }
}
