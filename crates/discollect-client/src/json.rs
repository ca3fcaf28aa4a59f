// SPDX-License-Identifier: GPL-3.0-or-later

//! Lenient field extraction from decoded JSON objects.
//!
//! Every accessor returns `None` when the key is absent, `null`, or holds a
//! value of an unexpected type. Nothing in this module fails.

use chrono::{DateTime, NaiveDateTime};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use url::Url;

/// A decoded JSON object with keys in document order.
pub type JsonObject = Map<String, Value>;

/// Textual form of date fields (`yyyy-MM-dd'T'HH:mm:ss`).
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// An absolute URL from a response, together with the text it was parsed from.
///
/// `as_str`, `Display` and serialization all give back the original text;
/// [`DiscogsUrl::url`] is the parsed (normalized) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscogsUrl {
    raw: String,
    url: Url,
}

impl DiscogsUrl {
    /// Empty or relative strings yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let url = Url::parse(raw.trim()).ok()?;
        Some(Self {
            raw: raw.to_string(),
            url,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn into_url(self) -> Url {
        self.url
    }
}

impl std::fmt::Display for DiscogsUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<Url> for DiscogsUrl {
    fn as_ref(&self) -> &Url {
        &self.url
    }
}

impl Serialize for DiscogsUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// Parse an absolute URL; empty or relative strings yield `None`.
pub fn parse_url(raw: &str) -> Option<DiscogsUrl> {
    DiscogsUrl::parse(raw)
}

/// Parse a date field. Offsets on RFC 3339 timestamps are dropped, keeping
/// the wall-clock time as written.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

/// Render a date back into [`DATE_FORMAT`].
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Name of the JSON kind of `value`, for error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Typed, total view over a [`JsonObject`].
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    object: &'a JsonObject,
}

impl<'a> Fields<'a> {
    pub fn new(object: &'a JsonObject) -> Self {
        Self { object }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|value| !value.is_null())
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).map(str::to_string)
    }

    /// Non-negative integer. Integral floats such as `149.0` are accepted.
    pub fn u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(value_as_u64)
    }

    pub fn u32(&self, key: &str) -> Option<u32> {
        self.u64(key).and_then(|n| u32::try_from(n).ok())
    }

    pub fn u16(&self, key: &str) -> Option<u16> {
        self.u64(key).and_then(|n| u16::try_from(n).ok())
    }

    pub fn f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn object(&self, key: &str) -> Option<JsonObject> {
        self.get(key).and_then(Value::as_object).cloned()
    }

    pub fn list(&self, key: &str) -> Option<Vec<Value>> {
        self.get(key).and_then(Value::as_array).cloned()
    }

    /// A list whose elements are all strings.
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key)?
            .as_array()?
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    }

    /// A list whose elements are all objects.
    pub fn object_list(&self, key: &str) -> Option<Vec<JsonObject>> {
        self.get(key)?
            .as_array()?
            .iter()
            .map(|item| item.as_object().cloned())
            .collect()
    }

    pub fn url(&self, key: &str) -> Option<DiscogsUrl> {
        self.get(key).and_then(Value::as_str).and_then(parse_url)
    }

    /// A list of URL strings. Entries that do not parse are skipped.
    pub fn url_list(&self, key: &str) -> Option<Vec<DiscogsUrl>> {
        let items = self.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(parse_url)
                .collect(),
        )
    }

    pub fn date(&self, key: &str) -> Option<NaiveDateTime> {
        self.get(key).and_then(Value::as_str).and_then(parse_date)
    }
}

fn value_as_u64(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}
