//! Card on file and card payment details.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::address::Address;
use crate::builder::dto_builder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardBrand {
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
    DiscoverDiners,
    Jcb,
    ChinaUnionpay,
    SquareGiftCard,
    SquareCapitalCard,
    Interac,
    Eftpos,
    Felica,
    Ebt,
    #[serde(other)]
    OtherBrand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Credit,
    Debit,
    #[serde(other)]
    UnknownCardType,
}

/// A payment card. Full card numbers never appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_brand: Option<CardBrand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "1111")]
    pub last_4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    /// Stable identifier of the card number across merchants' cards on file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
}

impl Card {
    /// Returns true when the card expires before the given month.
    pub fn is_expired_at(&self, year: i64, month: i64) -> bool {
        match (self.exp_year, self.exp_month) {
            (Some(exp_year), Some(exp_month)) => (exp_year, exp_month) < (year, month),
            _ => false,
        }
    }
}

dto_builder! {
    CardBuilder => Card {
        optional {
            id: String,
            card_brand: CardBrand,
            last_4: String,
            exp_month: i64,
            exp_year: i64,
            cardholder_name: String,
            billing_address: Address,
            fingerprint: String,
            customer_id: String,
            enabled: bool,
            card_type: CardType,
            bin: String,
        }
    }
}

/// How the card details were captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardEntryMethod {
    Keyed,
    Swiped,
    Emv,
    OnFile,
    Contactless,
    #[serde(other)]
    Unknown,
}

/// Card-specific details of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CardPaymentDetails {
    /// AUTHORIZED, CAPTURED, VOIDED or FAILED
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "CAPTURED")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_method: Option<CardEntryMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "CVV_ACCEPTED")]
    pub cvv_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "AVS_ACCEPTED")]
    pub avs_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_result_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_expiry() {
        let card = Card::builder().exp_month(4_i64).exp_year(2026_i64).build();
        assert!(card.is_expired_at(2026, 5));
        assert!(!card.is_expired_at(2026, 4));
        assert!(!Card::builder().build().is_expired_at(2100, 1));
    }

    #[test]
    fn test_card_brand_wire_names() {
        assert_eq!(
            serde_json::to_value(CardBrand::AmericanExpress).unwrap(),
            "AMERICAN_EXPRESS"
        );
        let brand: CardBrand = serde_json::from_value("VISA".into()).unwrap();
        assert_eq!(brand, CardBrand::Visa);
    }
}
