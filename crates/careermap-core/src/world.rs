//! Background shapes of the career world.
//!
//! The backdrop is a GeoJSON `FeatureCollection` in map units. Features with
//! `"kind": "world"` make up the island itself; features with a `zoneId`
//! property are zone overlays. Only polygon geometries are drawn; points and
//! lines in the same document are ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::camera::to_svg;
use crate::config::DatasetSource;
use crate::coords::LngLat;
use crate::error::{CareerMapError, CareerMapResult};

/// What a backdrop polygon represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    World,
    Zone(String),
}

/// One polygon: an outer ring followed by any holes
#[derive(Debug, Clone, PartialEq)]
pub struct WorldShape {
    pub kind: ShapeKind,
    pub rings: Vec<Vec<LngLat>>,
}

impl WorldShape {
    /// SVG path data for the polygon, holes included (draw with `evenodd`).
    pub fn svg_path(&self) -> String {
        let mut path = String::new();
        for ring in self.rings.iter().filter(|ring| ring.len() >= 3) {
            for (i, point) in ring.iter().enumerate() {
                let (x, y) = to_svg(*point);
                let op = if i == 0 { 'M' } else { 'L' };
                if !path.is_empty() {
                    path.push(' ');
                }
                path.push_str(&format!("{op}{x} {y}"));
            }
            path.push_str(" Z");
        }
        path
    }
}

/// Parsed backdrop document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldMap {
    pub shapes: Vec<WorldShape>,
}

#[derive(Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Vec<f64>>>> },
    #[serde(other)]
    Other,
}

impl WorldMap {
    /// Parse a GeoJSON feature collection
    pub fn parse(body: &str) -> CareerMapResult<Self> {
        let collection: FeatureCollection = serde_json::from_str(body)?;
        if collection.kind != "FeatureCollection" {
            return Err(CareerMapError::InvalidDataset(format!(
                "expected a FeatureCollection, found {}",
                collection.kind
            )));
        }

        let mut shapes = Vec::new();
        for feature in collection.features {
            let Some(kind) = feature.properties.as_ref().and_then(shape_kind) else {
                continue;
            };
            let polygons = match feature.geometry {
                Some(Geometry::Polygon { coordinates }) => vec![coordinates],
                Some(Geometry::MultiPolygon { coordinates }) => coordinates,
                Some(Geometry::Other) | None => continue,
            };
            for polygon in polygons {
                shapes.push(WorldShape {
                    kind: kind.clone(),
                    rings: polygon.iter().map(|ring| to_ring(ring)).collect(),
                });
            }
        }
        Ok(Self { shapes })
    }

    /// Read and parse the backdrop from `source`
    pub async fn load(source: &DatasetSource) -> CareerMapResult<Self> {
        let body = source.read_to_string().await?;
        let world = Self::parse(&body)?;
        tracing::info!(source = %source, shapes = world.shapes.len(), "Loaded world backdrop");
        Ok(world)
    }

    /// Polygons of the island itself
    pub fn world_shapes(&self) -> impl Iterator<Item = &WorldShape> {
        self.shapes.iter().filter(|s| s.kind == ShapeKind::World)
    }

    /// Overlay polygons for one zone
    pub fn zone_shapes<'a>(&'a self, zone_id: &'a str) -> impl Iterator<Item = &'a WorldShape> {
        self.shapes
            .iter()
            .filter(move |s| matches!(&s.kind, ShapeKind::Zone(id) if id == zone_id))
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn shape_kind(properties: &Map<String, Value>) -> Option<ShapeKind> {
    if properties.get("kind").and_then(Value::as_str) == Some("world") {
        return Some(ShapeKind::World);
    }
    properties
        .get("zoneId")
        .and_then(Value::as_str)
        .map(|id| ShapeKind::Zone(id.to_string()))
}

/// Positions may carry an altitude; only the first two members are used.
fn to_ring(ring: &[Vec<f64>]) -> Vec<LngLat> {
    ring.iter()
        .filter_map(|position| match position.as_slice() {
            [lng, lat, ..] => Some(LngLat::new(*lng, *lat)),
            _ => None,
        })
        .collect()
}
