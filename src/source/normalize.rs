//! Raw hh.ru resume items and their mapping into [`NewCandidate`]

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::candidate::NewCandidate;

/// Stored when the resume has no first name
pub const UNKNOWN_NAME: &str = "Unknown";
/// Stored when the resume has no email or salary
pub const MISSING_VALUE: &str = "N/A";

/// One item of the `items` array returned by the resume search.
///
/// Every field is optional and decoded on its own: a field that is missing,
/// `null` or of an unexpected shape (the live API sends `experience` as a
/// list of jobs) reads as absent and falls back to a placeholder during
/// [`normalize`]. Fields not listed here, including any upstream status,
/// are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResume {
    #[serde(default, deserialize_with = "text_or_none")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub experience: Option<RawExperience>,
    /// Name the live API uses for the experience block
    #[serde(default, deserialize_with = "object_or_none")]
    pub total_experience: Option<RawExperience>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub salary: Option<RawSalary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawExperience {
    #[serde(default)]
    pub months: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSalary {
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub currency: Option<String>,
}

impl RawResume {
    /// Decode one search item; an item that is not an object at all
    /// becomes an empty resume
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// Map a raw resume into the fixed candidate shape
pub fn normalize(raw: &RawResume) -> NewCandidate {
    let months = [raw.experience.as_ref(), raw.total_experience.as_ref()]
        .into_iter()
        .flatten()
        .find_map(|exp| exp.months.as_ref().filter(|m| !m.is_null()))
        .map(months_from_value)
        .unwrap_or(0);

    let salary = raw
        .salary
        .as_ref()
        .and_then(|s| s.amount.as_ref())
        .and_then(amount_to_text)
        .unwrap_or_else(|| MISSING_VALUE.to_string());

    NewCandidate {
        name: raw.first_name.clone().unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        email: raw.email.clone().unwrap_or_else(|| MISSING_VALUE.to_string()),
        experience: years_from_months(months),
        salary,
    }
}

/// Normalize a whole batch, one candidate per raw item
pub fn normalize_all(raw: &[RawResume]) -> Vec<NewCandidate> {
    raw.iter().map(normalize).collect()
}

/// Whole years, truncated: 30 months is 2 years
pub fn years_from_months(months: u64) -> u32 {
    u32::try_from(months / 12).unwrap_or(u32::MAX)
}

/// Negative, non-numeric and null month counts all read as zero
fn months_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f.trunc() as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    }
}

fn amount_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
