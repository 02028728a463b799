//! Order resource and its line items.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::money::{Currency, Money};
use crate::builder::dto_builder;
use crate::error::ValidationError;

// ─────────────────────────────────────────────────────────────────────────────
// Enums
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Open,
    Completed,
    Canceled,
    Draft,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderLineItemItemType {
    Item,
    CustomAmount,
    GiftCard,
    #[serde(other)]
    Unknown,
}

/// Whether a tax or discount applies to the whole order or selected line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scope {
    LineItem,
    Order,
    #[serde(other)]
    OtherScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxType {
    Additive,
    Inclusive,
    #[serde(other)]
    UnknownTax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    FixedPercentage,
    FixedAmount,
    VariablePercentage,
    VariableAmount,
    #[serde(other)]
    UnknownDiscount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentType {
    Pickup,
    Shipment,
    Delivery,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentState {
    Proposed,
    Reserved,
    Prepared,
    Completed,
    Canceled,
    Failed,
    #[serde(other)]
    Unknown,
}

// ─────────────────────────────────────────────────────────────────────────────
// Taxes, discounts, fulfillments
// ─────────────────────────────────────────────────────────────────────────────

/// A tax defined at the order level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLineItemTax {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<TaxType>,
    /// Decimal percentage as a string, e.g. `"7.25"`
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "7.25")]
    pub percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
}

/// A discount defined at the order level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLineItemDiscount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
}

/// Links a line item to an order-level tax by uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLineItemAppliedTax {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub tax_uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_money: Option<Money>,
}

/// Links a line item to an order-level discount by uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLineItemAppliedDiscount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub discount_uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_money: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderFulfillment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub fulfillment_type: Option<FulfillmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<FulfillmentState>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Line items
// ─────────────────────────────────────────────────────────────────────────────

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Decimal quantity as a string, e.g. `"1"` or `"0.5"`
    #[schema(example = "1")]
    pub quantity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<OrderLineItemItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_taxes: Vec<OrderLineItemAppliedTax>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_discounts: Vec<OrderLineItemAppliedDiscount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_total_price_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_sales_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,
}

dto_builder! {
    OrderLineItemBuilder => OrderLineItem {
        required { quantity: String }
        optional {
            uid: String,
            name: String,
            catalog_object_id: String,
            variation_name: String,
            item_type: OrderLineItemItemType,
            note: String,
            base_price_money: Money,
            variation_total_price_money: Money,
            gross_sales_money: Money,
            total_tax_money: Money,
            total_discount_money: Money,
            total_money: Money,
        }
        defaulted {
            metadata: HashMap<String, String>,
            applied_taxes: Vec<OrderLineItemAppliedTax>,
            applied_discounts: Vec<OrderLineItemAppliedDiscount>,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Order
// ─────────────────────────────────────────────────────────────────────────────

/// A purchase: line items plus the taxes, discounts and totals the server
/// computes for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub location_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<OrderLineItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<OrderLineItemTax>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discounts: Vec<OrderLineItemDiscount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fulfillments: Vec<OrderFulfillment>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tip_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_amount_due_money: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_name: Option<String>,
}

impl Order {
    /// The order's currency, taken from its total or the first priced line item.
    pub fn currency(&self) -> Option<Currency> {
        self.total_money.map(|m| m.currency).or_else(|| {
            self.line_items
                .iter()
                .find_map(|item| item.total_money.map(|m| m.currency))
        })
    }

    /// Sums the `total_money` of the line items priced in the order currency.
    ///
    /// Line items without a total, or with a total in another currency, are
    /// skipped. Returns `Ok(None)` when the order has no currency, and an
    /// error only when the sum overflows.
    pub fn line_item_subtotal(&self) -> Result<Option<Money>, ValidationError> {
        let Some(currency) = self.currency() else {
            return Ok(None);
        };
        self.line_items
            .iter()
            .filter_map(|item| item.total_money)
            .filter(|total| total.currency == currency)
            .try_fold(Money::zero(currency), |sum, next| sum.checked_add(next))
            .map(Some)
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, Some(OrderState::Open) | None)
    }
}

dto_builder! {
    OrderBuilder => Order {
        required { location_id: String }
        optional {
            id: String,
            reference_id: String,
            customer_id: String,
            state: OrderState,
            version: i64,
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
            closed_at: DateTime<Utc>,
            total_money: Money,
            total_tax_money: Money,
            total_discount_money: Money,
            total_tip_money: Money,
            net_amount_due_money: Money,
            ticket_name: String,
        }
        defaulted {
            line_items: Vec<OrderLineItem>,
            taxes: Vec<OrderLineItemTax>,
            discounts: Vec<OrderLineItemDiscount>,
            fulfillments: Vec<OrderFulfillment>,
            metadata: HashMap<String, String>,
        }
    }
}
