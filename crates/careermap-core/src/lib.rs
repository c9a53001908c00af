//! Career Theme Park Core Library
//!
//! Everything behind the career map that is not drawing: loading the role
//! dataset, resolving role coordinates, the zone theme registry, filtering,
//! and the camera math the map view animates with.
//!
//! ## Overview
//!
//! A career history is a static JSON list of roles. Each role is placed on a
//! fictional 0–100 world, inside a themed "zone". The desktop app shows the
//! roles as a searchable list next to the map; picking a role flies the
//! camera to its pin.
//!
//! ## Quick Start
//!
//! ```ignore
//! use careermap_core::{loader, DatasetSource, TrailState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = DatasetSource::parse("assets/data/roles.json");
//!     let roles = loader::load_roles(&source).await;
//!
//!     let mut trail = TrailState::default();
//!     trail.set_roles(roles);
//!     trail.set_query("mountain");
//!
//!     for role in trail.filtered() {
//!         println!("{} {} ({})", role.theme.icon, role.title, role.years);
//!     }
//! }
//! ```

pub mod camera;
pub mod config;
pub mod coords;
pub mod error;
pub mod filter;
pub mod loader;
pub mod map;
pub mod trail;
pub mod types;
pub mod world;
pub mod zones;

// Re-exports
pub use camera::{Bounds, Camera, CameraAnimation, Viewport};
pub use config::{CareerMapConfig, DatasetSource};
pub use coords::{resolve_coordinates, LngLat, Position, RawPosition};
pub use error::{CareerMapError, CareerMapResult};
pub use filter::filter_roles;
pub use map::{bounds_for, markers_for, MapCommand, MapHandle, MapReadiness, Marker};
pub use trail::TrailState;
pub use types::*;
pub use world::{ShapeKind, WorldMap, WorldShape};
pub use zones::{theme_for, ZoneTheme, UNKNOWN_THEME, UNKNOWN_ZONE, ZONE_THEMES};
