//! Serde helpers for `u128` atomic amounts.
//!
//! Amounts are written as decimal strings so JSON consumers with 53-bit
//! numbers do not lose precision. Both strings and plain JSON integers are
//! accepted on input.

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;

pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
    deserializer.deserialize_any(AmountVisitor)
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = u128;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer or integer string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u128, E> {
        Ok(u128::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<u128, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u128, E> {
        u128::try_from(v).map_err(|_| E::custom(format!("negative amount {}", v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u128, E> {
        vaultkit_types::amount::parse_atomic(v).map_err(E::custom)
    }
}

/// Same encoding for `Option<u128>`; `None` is written as `null`.
pub mod option {
    use super::AmountVisitor;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<u128>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u128>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapped(#[serde(deserialize_with = "deserialize_inner")] u128);

        fn deserialize_inner<'de, D: Deserializer<'de>>(d: D) -> Result<u128, D::Error> {
            d.deserialize_any(AmountVisitor)
        }

        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(v)| v))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        value: u128,
        #[serde(default, with = "super::option")]
        limit: Option<u128>,
    }

    #[test]
    fn test_written_as_string() {
        let h = Holder { value: 1_500_000_000_000_000_000, limit: Some(21000) };
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["value"], "1500000000000000000");
        assert_eq!(json["limit"], "21000");
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let h: Holder = serde_json::from_str(r#"{"value": 42, "limit": "7"}"#).unwrap();
        assert_eq!(h, Holder { value: 42, limit: Some(7) });

        let h: Holder = serde_json::from_str(r#"{"value": "42", "limit": null}"#).unwrap();
        assert_eq!(h.limit, None);

        let h: Holder = serde_json::from_str(r#"{"value": "42"}"#).unwrap();
        assert_eq!(h.limit, None);
    }

    #[test]
    fn test_rejects_fractions_and_negatives() {
        assert!(serde_json::from_str::<Holder>(r#"{"value": "1.5"}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"value": -1}"#).is_err());
    }
}
