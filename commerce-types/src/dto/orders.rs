//! Order requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Nullable;
use crate::builder::dto_builder;
use crate::domain::{
    ApiError, IdempotencyKey, Order, OrderFulfillment, OrderLineItem, OrderLineItemDiscount,
    OrderLineItemTax, OrderState,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub order: Order,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<IdempotencyKey>,
}

dto_builder! {
    CreateOrderRequestBuilder => CreateOrderRequest {
        required { order: Order }
        optional { idempotency_key: IdempotencyKey }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RetrieveOrderResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

/// Sparse order sent with an update: only the fields being changed.
///
/// `version` must be the order's current version. Line items, taxes and
/// discounts are matched by `uid`; entries with a new `uid` are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderUpdate {
    pub version: i64,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub reference_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub customer_id: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<String>)]
    pub ticket_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<OrderState>)]
    pub state: Nullable<OrderState>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<Vec<OrderLineItem>>)]
    pub line_items: Nullable<Vec<OrderLineItem>>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<Vec<OrderLineItemTax>>)]
    pub taxes: Nullable<Vec<OrderLineItemTax>>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<Vec<OrderLineItemDiscount>>)]
    pub discounts: Nullable<Vec<OrderLineItemDiscount>>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<Vec<OrderFulfillment>>)]
    pub fulfillments: Nullable<Vec<OrderFulfillment>>,
    #[serde(default, skip_serializing_if = "Nullable::is_unset")]
    #[schema(value_type = Option<HashMap<String, String>>)]
    pub metadata: Nullable<HashMap<String, String>>,
}

dto_builder! {
    OrderUpdateBuilder => OrderUpdate {
        required { version: i64 }
        nullable {
            reference_id: String,
            customer_id: String,
            ticket_name: String,
            state: OrderState,
            line_items: Vec<OrderLineItem>,
            taxes: Vec<OrderLineItemTax>,
            discounts: Vec<OrderLineItemDiscount>,
            fulfillments: Vec<OrderFulfillment>,
            metadata: HashMap<String, String>,
        }
    }
}

/// Request to update an open order.
///
/// Besides JSON nulls in the sparse order, the orders endpoint accepts
/// `fields_to_clear`: dot-paths (e.g. `discounts`, `line_items[uid].note`)
/// the server must remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderUpdate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields_to_clear: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<IdempotencyKey>,
}

impl UpdateOrderRequest {
    /// Adds a dot-path to `fields_to_clear`, ignoring duplicates.
    #[must_use]
    pub fn clear_field(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        if !self.fields_to_clear.contains(&path) {
            self.fields_to_clear.push(path);
        }
        self
    }

    /// Moves every top-level explicit null of the sparse order into
    /// `fields_to_clear`, leaving those fields unset.
    ///
    /// Some API versions ignore nulls inside `order` and only honour
    /// `fields_to_clear`; a normalized request is understood by both.
    #[must_use]
    pub fn normalize_nulls(mut self) -> Self {
        let Some(order) = self.order.as_mut() else {
            return self;
        };
        let mut cleared = Vec::new();
        take_null(&mut order.reference_id, "reference_id", &mut cleared);
        take_null(&mut order.customer_id, "customer_id", &mut cleared);
        take_null(&mut order.ticket_name, "ticket_name", &mut cleared);
        take_null(&mut order.state, "state", &mut cleared);
        take_null(&mut order.line_items, "line_items", &mut cleared);
        take_null(&mut order.taxes, "taxes", &mut cleared);
        take_null(&mut order.discounts, "discounts", &mut cleared);
        take_null(&mut order.fulfillments, "fulfillments", &mut cleared);
        take_null(&mut order.metadata, "metadata", &mut cleared);
        cleared.into_iter().fold(self, Self::clear_field)
    }
}

fn take_null<T>(field: &mut Nullable<T>, name: &'static str, cleared: &mut Vec<&'static str>) {
    if field.is_null() {
        *field = Nullable::Unset;
        cleared.push(name);
    }
}

dto_builder! {
    UpdateOrderRequestBuilder => UpdateOrderRequest {
        optional {
            order: OrderUpdate,
            idempotency_key: IdempotencyKey,
        }
        defaulted { fields_to_clear: Vec<String> }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Currency, Money};
    use serde_json::json;

    #[test]
    fn test_create_order_request_wire_shape() {
        let order = Order::builder("L1")
            .reference_id("my-order-001")
            .line_items(vec![
                OrderLineItem::builder("1")
                    .name("New York Strip Steak")
                    .base_price_money(Money::new(1599, Currency::USD))
                    .build(),
            ])
            .build();
        let key: IdempotencyKey = "8193148c-9586-11e6-99f9-28cfe92138cf".parse().unwrap();
        let req = CreateOrderRequest::builder(order).idempotency_key(key).build();

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "order": {
                    "location_id": "L1",
                    "reference_id": "my-order-001",
                    "line_items": [{
                        "name": "New York Strip Steak",
                        "quantity": "1",
                        "base_price_money": { "amount": 1599, "currency": "USD" }
                    }]
                },
                "idempotency_key": "8193148c-9586-11e6-99f9-28cfe92138cf"
            })
        );
    }

    #[test]
    fn test_normalize_nulls() {
        let update = OrderUpdate::builder(3_i64)
            .discounts(Nullable::Null)
            .customer_id(Nullable::Null)
            .ticket_name("Table 4")
            .build();
        let req = UpdateOrderRequest::builder()
            .order(update)
            .fields_to_clear(vec!["discounts".to_string()])
            .build()
            .normalize_nulls();

        assert_eq!(req.fields_to_clear, vec!["discounts", "customer_id"]);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "order": { "version": 3, "ticket_name": "Table 4" },
                "fields_to_clear": ["discounts", "customer_id"]
            })
        );
    }

    #[test]
    fn test_normalize_without_order() {
        let req = UpdateOrderRequest::builder()
            .build()
            .clear_field("line_items[li_1].note")
            .normalize_nulls();
        assert_eq!(req.fields_to_clear, vec!["line_items[li_1].note"]);
        assert!(req.order.is_none());
    }

    #[test]
    fn test_clear_only_request_wire_shape() {
        let req: UpdateOrderRequest = serde_json::from_value(json!({
            "fields_to_clear": ["discounts"],
            "idempotency_key": "k-1"
        }))
        .unwrap();
        assert!(req.order.is_none());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "fields_to_clear": ["discounts"], "idempotency_key": "k-1" })
        );
    }

    #[test]
    fn test_decode_update_request_with_nulls() {
        let req: UpdateOrderRequest = serde_json::from_value(json!({
            "order": { "version": 1, "metadata": null, "state": "COMPLETED" }
        }))
        .unwrap();
        let order = req.order.unwrap();
        assert!(order.metadata.is_null());
        assert_eq!(order.state, Nullable::Value(OrderState::Completed));
        assert!(order.line_items.is_unset());
    }
}
