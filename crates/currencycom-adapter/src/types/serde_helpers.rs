/*
[INPUT]:  JSON values the exchange sends for prices and quantities
[OUTPUT]: Decimal (de)serializers tolerant of strings, numbers, null and "";
          null-as-default for every other field
[POS]:    Data layer - shared serde adapters
[UPDATE]: When the exchange changes how numeric fields are encoded
*/

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// Parse a decimal from a JSON string or number without a float round-trip
pub(crate) fn decimal_from_value<E: serde::de::Error>(value: &Value) -> Result<Decimal, E> {
    match value {
        Value::Null => Ok(Decimal::ZERO),
        Value::String(raw) if raw.trim().is_empty() => Ok(Decimal::ZERO),
        Value::String(raw) => parse_decimal(raw.trim()),
        Value::Number(number) => decimal_from_number(number),
        other => Err(E::custom(format!("invalid decimal value: {other}"))),
    }
}

/// Parse a decimal from a JSON number only
pub(crate) fn decimal_from_number<E: serde::de::Error>(number: &Number) -> Result<Decimal, E> {
    parse_decimal(&number.to_string())
}

/// `#[serde(deserialize_with = "null_as_default")]`: explicit `null` decodes
/// like a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn parse_decimal<E: serde::de::Error>(raw: &str) -> Result<Decimal, E> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(E::custom)
}

/// `#[serde(with = "decimal")]`: decode leniently, encode as a string
pub(crate) mod decimal {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decimal_from_value(&value)
    }

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}

/// Map of asset (or fee kind) to amount
pub(crate) mod decimal_map {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?;
        raw.unwrap_or_default()
            .into_iter()
            .map(|(key, value)| decimal_from_value(&value).map(|amount| (key, amount)))
            .collect()
    }

    pub fn serialize<S>(values: &BTreeMap<String, Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        values
            .iter()
            .map(|(key, value)| (key.as_str(), value.to_string()))
            .collect::<BTreeMap<_, _>>()
            .serialize(serializer)
    }
}
