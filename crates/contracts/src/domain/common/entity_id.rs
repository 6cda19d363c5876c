use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Types that carry the gateway identifier of a record
pub trait EntityId {
    fn entity_id(&self) -> &str;
}

/// Deserialize an identifier sent either as a JSON string or a number
pub fn entity_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "invalid id: expected string or number, got {}",
            other
        ))),
    }
}

/// Deserialize a count sent either as a JSON number or a numeric string.
/// Missing, `null` and blank values read as zero.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .ok_or_else(|| serde::de::Error::custom(format!("invalid count: {}", n))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(0),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid count: {}", s))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid count: {}",
            other
        ))),
    }
}
