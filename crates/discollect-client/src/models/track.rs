// SPDX-License-Identifier: GPL-3.0-or-later

use crate::json::{Fields, JsonObject};
use serde::Serialize;
use serde_json::Value;

/// A tracklist entry of a release or master release.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    /// Length in seconds.
    pub duration: Option<f64>,
    /// Position label as printed on the release ("A1", "2-03", ...).
    pub position: Option<String>,
    pub title: Option<String>,
    /// Entry type, e.g. "track", "heading" or "index".
    pub track_type: Option<String>,
}

impl Track {
    pub fn from_json(object: &JsonObject) -> Self {
        let fields = Fields::new(object);
        Self {
            duration: object.get("duration").and_then(parse_duration),
            position: fields.string("position"),
            title: fields.string("title"),
            track_type: fields.string("type_").or_else(|| fields.string("type")),
        }
    }
}

impl From<JsonObject> for Track {
    fn from(object: JsonObject) -> Self {
        Self::from_json(&object)
    }
}

/// Durations come either as a number of seconds or as `m:ss` / `h:mm:ss`.
fn parse_duration(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|secs| *secs >= 0.0),
        Value::String(s) => parse_clock(s),
        _ => None,
    }
}

fn parse_clock(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parts = raw.split(':').collect::<Vec<_>>();
    if parts.len() > 3 {
        return None;
    }

    let mut seconds = 0.0;
    for part in parts {
        let value: f64 = part.trim().parse().ok()?;
        if value < 0.0 || !value.is_finite() {
            return None;
        }
        seconds = seconds * 60.0 + value;
    }
    Some(seconds)
}
