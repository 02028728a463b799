//! Monetary amounts with embedded currency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::ValidationError;

macro_rules! currencies {
    ($($code:ident),* $(,)?) => {
        /// ISO 4217 currency codes.
        ///
        /// Codes the API adds later decode as `UnknownCurrency` instead of
        /// failing the whole payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum Currency {
            $($code,)*
            #[serde(rename = "UNKNOWN_CURRENCY", other)]
            UnknownCurrency,
        }

        impl Currency {
            /// Returns the three-letter code (`UNKNOWN_CURRENCY` for unrecognized ones).
            pub fn code(&self) -> &'static str {
                match self {
                    $(Currency::$code => stringify!($code),)*
                    Currency::UnknownCurrency => "UNKNOWN_CURRENCY",
                }
            }
        }
    };
}

currencies! {
    AED, AFN, ALL, AMD, ANG, AOA, ARS, AUD, AWG, AZN, BAM, BBD,
    BDT, BGN, BHD, BIF, BMD, BND, BOB, BOV, BRL, BSD, BTN, BWP,
    BYN, BZD, CAD, CDF, CHE, CHF, CHW, CLF, CLP, CNY, COP, COU,
    CRC, CUC, CUP, CVE, CZK, DJF, DKK, DOP, DZD, EGP, ERN, ETB,
    EUR, FJD, FKP, GBP, GEL, GHS, GIP, GMD, GNF, GTQ, GYD, HKD,
    HNL, HRK, HTG, HUF, IDR, ILS, INR, IQD, IRR, ISK, JMD, JOD,
    JPY, KES, KGS, KHR, KMF, KPW, KRW, KWD, KYD, KZT, LAK, LBP,
    LKR, LRD, LSL, LYD, MAD, MDL, MGA, MKD, MMK, MNT, MOP, MRU,
    MUR, MVR, MWK, MXN, MXV, MYR, MZN, NAD, NGN, NIO, NOK, NPR,
    NZD, OMR, PAB, PEN, PGK, PHP, PKR, PLN, PYG, QAR, RON, RSD,
    RUB, RWF, SAR, SBD, SCR, SDG, SEK, SGD, SHP, SLE, SLL, SOS,
    SRD, SSP, STN, SVC, SYP, SZL, THB, TJS, TMT, TND, TOP, TRY,
    TTD, TWD, TZS, UAH, UGX, USD, USN, UYI, UYU, UYW, UZS, VED,
    VES, VND, VUV, WST, XAF, XAG, XAU, XBA, XBB, XBC, XBD, XCD,
    XDR, XOF, XPD, XPF, XPT, XSU, XTS, XUA, XXX, YER, ZAR, ZMW,
    ZWL,
}

impl Currency {
    /// Returns the number of decimal places of the currency's minor unit.
    pub fn decimal_places(&self) -> u8 {
        use Currency::*;
        match self {
            BIF | CLP | DJF | GNF | ISK | JPY | KMF | KRW | PYG | RWF | UGX | UYI | VND | VUV
            | XAF | XOF | XPF => 0,
            BHD | IQD | JOD | KWD | LYD | OMR | TND => 3,
            CLF | UYW => 4,
            _ => 2,
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Currency::UnknownCurrency
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let currency: Currency =
            serde_json::from_value(serde_json::Value::String(s.trim().to_uppercase()))
                .map_err(|_| ValidationError::UnknownCurrency(s.to_string()))?;
        if !currency.is_known() {
            return Err(ValidationError::UnknownCurrency(s.to_string()));
        }
        Ok(currency)
    }
}

/// An amount of money in the smallest denomination of its currency.
///
/// `{"amount": 100, "currency": "USD"}` is one US dollar. Amounts may be
/// negative where the API reports adjustments (refunded fees, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Money {
    #[schema(example = 100)]
    pub amount: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Checked addition - fails if currencies differ or the sum overflows.
    pub fn checked_add(&self, other: Money) -> Result<Money, ValidationError> {
        self.ensure_same_currency(&other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(ValidationError::AmountOverflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Checked subtraction - fails if currencies differ or the result overflows.
    pub fn checked_sub(&self, other: Money) -> Result<Money, ValidationError> {
        self.ensure_same_currency(&other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(ValidationError::AmountOverflow)?;
        Ok(Money::new(amount, self.currency))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), ValidationError> {
        if self.currency != other.currency {
            return Err(ValidationError::CurrencyMismatch {
                expected: self.currency,
                got: other.currency,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = u32::from(self.currency.decimal_places());
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        if places == 0 {
            return write!(f, "{}{} {}", sign, abs, self.currency);
        }
        let scale = 10u64.pow(places);
        write!(
            f,
            "{}{}.{:0width$} {}",
            sign,
            abs / scale,
            abs % scale,
            self.currency,
            width = places as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_wire_shape() {
        let money = Money::new(1050, Currency::USD);
        assert_eq!(
            serde_json::to_value(money).unwrap(),
            serde_json::json!({ "amount": 1050, "currency": "USD" })
        );
    }

    #[test]
    fn test_checked_add() {
        let a = Money::new(100, Currency::EUR);
        let b = Money::new(250, Currency::EUR);
        assert_eq!(a.checked_add(b).unwrap(), Money::new(350, Currency::EUR));
    }

    #[test]
    fn test_currency_mismatch() {
        let a = Money::new(100, Currency::EUR);
        let b = Money::new(100, Currency::USD);
        assert!(matches!(
            a.checked_sub(b),
            Err(ValidationError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_overflow() {
        let a = Money::new(i64::MAX, Currency::USD);
        assert_eq!(
            a.checked_add(Money::new(1, Currency::USD)),
            Err(ValidationError::AmountOverflow)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(1050, Currency::USD).to_string(), "10.50 USD");
        assert_eq!(Money::new(-5, Currency::GBP).to_string(), "-0.05 GBP");
        assert_eq!(Money::new(1200, Currency::JPY).to_string(), "1200 JPY");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("cad".parse::<Currency>().unwrap(), Currency::CAD);
        assert_eq!(
            "XYZ".parse::<Currency>(),
            Err(ValidationError::UnknownCurrency("XYZ".to_string()))
        );
        assert_eq!(Currency::JPY.decimal_places(), 0);
        assert_eq!(Currency::KWD.decimal_places(), 3);
    }

    #[test]
    fn test_decode_any_iso_currency() {
        let money: Money =
            serde_json::from_value(serde_json::json!({ "amount": 1999, "currency": "ZAR" }))
                .unwrap();
        assert_eq!(money.currency, Currency::ZAR);
        assert_eq!(money.to_string(), "19.99 ZAR");
    }

    #[test]
    fn test_decode_unlisted_currency() {
        let money: Money =
            serde_json::from_value(serde_json::json!({ "amount": 5, "currency": "XYZ" })).unwrap();
        assert_eq!(money.currency, Currency::UnknownCurrency);
        assert!(!money.currency.is_known());
        assert_eq!(
            serde_json::to_value(money.currency).unwrap(),
            serde_json::json!("UNKNOWN_CURRENCY")
        );
        assert_eq!(
            "UNKNOWN_CURRENCY".parse::<Currency>(),
            Err(ValidationError::UnknownCurrency("UNKNOWN_CURRENCY".to_string()))
        );
    }
}
