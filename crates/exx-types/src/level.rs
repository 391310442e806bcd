//! Price level type and decimal decoding shared by the response structs

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// A single `[price, quantity]` entry of an order book side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BookLevel(
    #[serde(deserialize_with = "deserialize_decimal")] pub Decimal,
    #[serde(deserialize_with = "deserialize_decimal")] pub Decimal,
);

impl BookLevel {
    /// Create a new price level
    pub fn new(price: Decimal, qty: Decimal) -> Self {
        Self(price, qty)
    }

    /// Price of this level
    pub fn price(&self) -> Decimal {
        self.0
    }

    /// Quantity at this price level
    pub fn qty(&self) -> Decimal {
        self.1
    }
}

/// EXX mixes JSON strings (`"30.487"`) and JSON numbers (`31.595`) for the
/// same fields, so every decimal goes through this deserializer.
pub(crate) fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    use rust_decimal::prelude::FromPrimitive;
    use serde::de::Error;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Decimal::from_str(&s).map_err(D::Error::custom),
        StringOrNumber::Number(n) => {
            let s = n.to_string();
            if s.contains('e') || s.contains('E') {
                let f = n.as_f64().ok_or_else(|| D::Error::custom("invalid number"))?;
                Decimal::from_f64(f).ok_or_else(|| D::Error::custom("cannot convert to decimal"))
            } else {
                Decimal::from_str(&s).map_err(D::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_level_from_strings() {
        let level: BookLevel = serde_json::from_str(r#"["32.831", "0.083"]"#).unwrap();
        assert_eq!(level.price(), dec!(32.831));
        assert_eq!(level.qty(), dec!(0.083));
    }

    #[test]
    fn test_level_from_numbers() {
        let level: BookLevel = serde_json::from_str("[30.434, 10.766]").unwrap();
        assert_eq!(level, BookLevel::new(dec!(30.434), dec!(10.766)));
    }

    #[test]
    fn test_level_scientific_notation() {
        let level: BookLevel = serde_json::from_str("[0.05005, 5e-6]").unwrap();
        assert_eq!(level.price(), dec!(0.05005));
        assert!(level.qty() > Decimal::ZERO);
    }
}
