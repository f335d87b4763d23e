//! Conversion from DynamoDB attribute values to plain JSON.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::core::models::RawItem;
use crate::errors::StorageError;

/// Converts one stored item into a [`RawItem`].
///
/// # Errors
///
/// Returns [`StorageError::Decode`] if any attribute cannot be represented.
pub fn item_to_raw(item: &HashMap<String, AttributeValue>) -> Result<RawItem, StorageError> {
    let mut raw = Map::new();
    for (name, value) in item {
        raw.insert(name.clone(), attribute_to_json(value)?);
    }
    Ok(raw)
}

/// # Errors
///
/// Returns [`StorageError::Decode`] for malformed numbers or attribute
/// types this SDK version does not know about.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, StorageError> {
    let json = match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => parse_number(n)?,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob)),
        AttributeValue::Ss(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| parse_number(n))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::Bs(values) => Value::Array(
            values
                .iter()
                .map(|blob| Value::String(STANDARD.encode(blob)))
                .collect(),
        ),
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => Value::Object(item_to_raw(map)?),
        other => {
            return Err(StorageError::Decode(format!(
                "unsupported attribute value: {other:?}"
            )));
        }
    };
    Ok(json)
}

/// Converts a stored number to JSON without losing precision.
///
/// DynamoDB numbers carry up to 38 significant digits. Values that neither
/// fit an integer nor survive an `f64` exactly are kept as their decimal
/// string.
fn parse_number(n: &str) -> Result<Value, StorageError> {
    let n = n.trim();
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::Number(Number::from(i)));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::Number(Number::from(u)));
    }

    let invalid = || StorageError::Decode(format!("invalid number `{n}`"));
    let float = n.parse::<f64>().map_err(|_| invalid())?;
    let stored = significant_digits(n).ok_or_else(invalid)?;

    match Number::from_f64(float) {
        Some(number) if significant_digits(&format!("{float:e}")) == Some(stored) => {
            Ok(Value::Number(number))
        }
        Some(_) => {
            debug!(number = %n, "Keeping number as string to preserve precision");
            Ok(Value::String(n.to_string()))
        }
        None => Err(invalid()),
    }
}

/// Splits a decimal literal into its significant digits and the power of ten
/// of the first one, so `0.0120` and `1.2e-2` compare equal.
fn significant_digits(literal: &str) -> Option<(String, i64)> {
    let unsigned = literal.trim_start_matches(['+', '-']);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], unsigned[at + 1..].parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int}{frac}");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    let leading_zeros = digits.len() - significant.len();
    let significant = significant.trim_end_matches('0');
    if significant.is_empty() {
        return Some((String::new(), 0));
    }

    let int_len = i64::try_from(int.len()).ok()?;
    let leading_zeros = i64::try_from(leading_zeros).ok()?;
    Some((significant.to_string(), int_len - leading_zeros - 1 + exponent))
}
