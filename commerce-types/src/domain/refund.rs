//! Payment refund resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::money::Money;
use super::payment::ProcessingFee;
use crate::builder::dto_builder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    Pending,
    Completed,
    Rejected,
    Failed,
    #[serde(other)]
    Unknown,
}

impl RefundStatus {
    /// Whether the refunded amount actually left the merchant's balance (or will).
    pub fn counts_against_payment(&self) -> bool {
        matches!(self, Self::Pending | Self::Completed)
    }
}

/// A refund of (part of) a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaymentRefund {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RefundStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Present for refunds not linked to a payment (unlinked refunds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlinked: Option<bool>,
    pub amount_money: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_fee_money: Option<Money>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub processing_fee: Vec<ProcessingFee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<String>,
}

dto_builder! {
    PaymentRefundBuilder => PaymentRefund {
        required {
            id: String,
            amount_money: Money,
        }
        optional {
            status: RefundStatus,
            location_id: String,
            unlinked: bool,
            app_fee_money: Money,
            payment_id: String,
            order_id: String,
            reason: String,
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
            team_member_id: String,
        }
        defaulted {
            processing_fee: Vec<ProcessingFee>,
        }
    }
}
