//! Coordinate resolution for role records.
//!
//! A role's position may arrive in one of three shapes:
//!
//! 1. explicit `lat` and `lng` numeric fields
//! 2. a two-element `coordinates` array, `[lng, lat]`
//! 3. a nested `geometry` object with a `coordinates` array, `[lng, lat]`
//!
//! The shapes are tried in that order and the first structurally valid one
//! wins. Values are used as-is: the career world is already laid out in map
//! units, so there is no range check or reprojection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A canonical `[longitude, latitude]` pair in map units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// The pair in `[lng, lat]` order
    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<[f64; 2]> for LngLat {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl std::fmt::Display for LngLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lng, self.lat)
    }
}

/// The positional fields of a role exactly as they appeared in the dataset.
///
/// Kept as untyped JSON so a malformed position never fails the document;
/// it only makes the role unplaceable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,
}

impl RawPosition {
    /// Position given as explicit latitude/longitude numbers
    pub fn from_lat_lng(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(Value::from(lat)),
            lng: Some(Value::from(lng)),
            ..Self::default()
        }
    }

    /// Position given as a `[lng, lat]` array
    pub fn from_pair(lng: f64, lat: f64) -> Self {
        Self {
            coordinates: Some(Value::from(vec![lng, lat])),
            ..Self::default()
        }
    }

    /// Position given as `{ "coordinates": [lng, lat] }` geometry
    pub fn from_geometry(lng: f64, lat: f64) -> Self {
        Self {
            geometry: Some(serde_json::json!({ "coordinates": [lng, lat] })),
            ..Self::default()
        }
    }
}

/// The shape a position was resolved from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    LatLng { lat: f64, lng: f64 },
    Pair(LngLat),
    Geometry(LngLat),
}

impl Position {
    /// Try each encoding in priority order.
    pub fn from_raw(raw: &RawPosition) -> Option<Self> {
        explicit_lat_lng(raw)
            .or_else(|| raw.coordinates.as_ref().and_then(pair).map(Position::Pair))
            .or_else(|| {
                raw.geometry
                    .as_ref()
                    .and_then(|g| g.get("coordinates"))
                    .and_then(pair)
                    .map(Position::Geometry)
            })
    }

    /// The canonical `[lng, lat]` pair
    pub fn lng_lat(&self) -> LngLat {
        match *self {
            Position::LatLng { lat, lng } => LngLat::new(lng, lat),
            Position::Pair(p) | Position::Geometry(p) => p,
        }
    }

    /// Short name of the encoding, used in logs and the CLI
    pub fn shape_name(&self) -> &'static str {
        match self {
            Position::LatLng { .. } => "lat/lng",
            Position::Pair(_) => "coordinates",
            Position::Geometry(_) => "geometry",
        }
    }
}

/// Resolve a role position to `[lng, lat]`, or `None` if no shape is valid.
pub fn resolve_coordinates(raw: &RawPosition) -> Option<LngLat> {
    Position::from_raw(raw).map(|p| p.lng_lat())
}

fn explicit_lat_lng(raw: &RawPosition) -> Option<Position> {
    let lat = raw.lat.as_ref()?.as_f64()?;
    let lng = raw.lng.as_ref()?.as_f64()?;
    Some(Position::LatLng { lat, lng })
}

fn pair(value: &Value) -> Option<LngLat> {
    match value.as_array()?.as_slice() {
        [lng, lat] => Some(LngLat::new(lng.as_f64()?, lat.as_f64()?)),
        _ => None,
    }
}
