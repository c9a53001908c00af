//! Core types for Career Theme Park

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::coords::{LngLat, Position, RawPosition};
use crate::zones::ZoneTheme;

/// Identifier of a role as the dataset wrote it: text or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRoleId {
    Text(String),
    Number(serde_json::Number),
}

/// One role record exactly as it appears in the dataset
///
/// Every field is optional: a sparse record still loads, it just renders with
/// blanks (and without a pin if it has no usable position). A field of the
/// wrong type reads as absent instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleEntry {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<RawRoleId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub start_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub end_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_zone_ids")]
    pub zone_ids: Option<Vec<String>>,
    /// `lat`/`lng`, `coordinates` and `geometry`, untouched
    #[serde(flatten)]
    pub position: RawPosition,
}

fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<RawRoleId>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(text)) => Some(RawRoleId::Text(text)),
        Some(Value::Number(number)) => Some(RawRoleId::Number(number)),
        _ => None,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// Integers, integral floats (`2022.0`) and numeric strings (`"2019"`)
fn lenient_year<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    Ok(Option::<Value>::deserialize(d)?.as_ref().and_then(year_from))
}

fn year_from(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => match number.as_i64() {
            Some(year) => i32::try_from(year).ok(),
            None => number
                .as_f64()
                .filter(|year| year.fract() == 0.0 && year.abs() <= f64::from(i32::MAX))
                .map(|year| year as i32),
        },
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// A list of zone ids; a bare string counts as a one-zone list and
/// non-string members are dropped.
fn lenient_zone_ids<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(zone)) => Some(vec![zone]),
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(zone) => Some(zone),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Stable identifier of a decorated role.
///
/// Either the dataset's own id rendered as text, or the role's index in
/// sorted load order when the dataset has none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub String);

impl RoleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the id for the role at `index` in load order
    pub fn from_raw(raw: Option<&RawRoleId>, index: usize) -> Self {
        match raw {
            Some(RawRoleId::Text(text)) => Self(text.clone()),
            Some(RawRoleId::Number(number)) => Self(number.to_string()),
            None => Self(index.to_string()),
        }
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A role after load-time enrichment. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedRole {
    pub id: RoleId,
    pub title: String,
    pub company: String,
    /// Display range, e.g. `"2019 – 2023"`
    pub years: String,
    pub location: String,
    pub summary: String,
    /// First listed zone, or [`crate::zones::UNKNOWN_ZONE`]
    pub zone_id: String,
    pub theme: &'static ZoneTheme,
    /// Carried through unchanged for later resolution
    pub position: RawPosition,
}

impl DecoratedRole {
    /// Resolved `[lng, lat]`, or `None` if the role cannot be placed on the map
    pub fn coordinates(&self) -> Option<LngLat> {
        crate::coords::resolve_coordinates(&self.position)
    }

    /// The encoding the position was resolved from
    pub fn resolved_position(&self) -> Option<Position> {
        Position::from_raw(&self.position)
    }

    pub fn is_placeable(&self) -> bool {
        self.coordinates().is_some()
    }
}

/// Format a start/end year pair for display. Missing years render empty.
pub fn format_years(start_year: Option<i32>, end_year: Option<i32>) -> String {
    let side = |year: Option<i32>| year.map(|y| y.to_string()).unwrap_or_default();
    format!("{} – {}", side(start_year), side(end_year))
}
