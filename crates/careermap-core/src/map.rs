//! Commands from the page to the map view, and the map's readiness.
//!
//! The map view owns its camera. Everyone else talks to it by sending
//! [`MapCommand`]s through a [`MapHandle`], which only exists once the map has
//! finished initializing. Until then the page holds [`MapReadiness::Pending`]
//! and commands are dropped.

use std::time::Duration;

use futures::channel::mpsc::UnboundedSender;

use crate::camera::{fit_bounds, Bounds, Camera, Viewport};
use crate::coords::LngLat;
use crate::types::{DecoratedRole, RoleId};

/// Padding around a bounds fit, in pixels
pub const FIT_PADDING: f64 = 60.0;
/// A bounds fit never zooms in past this
pub const FIT_MAX_ZOOM: f64 = 12.0;
pub const FIT_DURATION: Duration = Duration::from_millis(1000);

/// Zoom used when focusing a single role
pub const FOCUS_ZOOM: f64 = 4.2;
/// Pitch used when focusing a single role
pub const FOCUS_PITCH: f64 = 55.0;
pub const FOCUS_DURATION: Duration = Duration::from_millis(1200);

/// How long a marker pulses after its role is picked
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(900);

/// Something the page asks the map view to do
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    /// Animate so that `bounds` is fully visible
    FitBounds {
        bounds: Bounds,
        padding: f64,
        max_zoom: f64,
    },
    /// Eased transition to a new center, zoom and pitch
    EaseTo {
        center: LngLat,
        zoom: f64,
        pitch: f64,
        duration: Duration,
    },
    /// Pulse the marker of a role, if it is on the map
    Highlight { id: RoleId },
}

impl MapCommand {
    /// Fit command for `bounds` with the standard padding and zoom ceiling
    pub fn fit(bounds: Bounds) -> Self {
        MapCommand::FitBounds {
            bounds,
            padding: FIT_PADDING,
            max_zoom: FIT_MAX_ZOOM,
        }
    }

    /// Focus transition onto a single position
    pub fn focus(center: LngLat) -> Self {
        MapCommand::EaseTo {
            center,
            zoom: FOCUS_ZOOM,
            pitch: FOCUS_PITCH,
            duration: FOCUS_DURATION,
        }
    }

    /// Whether the command moves the camera
    pub fn moves_camera(&self) -> bool {
        !matches!(self, MapCommand::Highlight { .. })
    }

    /// Target camera and duration for a camera-moving command
    pub fn camera_target(&self, current: &Camera, viewport: Viewport) -> Option<(Camera, Duration)> {
        match self {
            MapCommand::FitBounds {
                bounds,
                padding,
                max_zoom,
            } => Some((
                fit_bounds(current, bounds, viewport, *padding, *max_zoom),
                FIT_DURATION,
            )),
            MapCommand::EaseTo {
                center,
                zoom,
                pitch,
                duration,
            } => Some((
                Camera {
                    center: *center,
                    zoom: *zoom,
                    pitch: *pitch,
                    bearing: current.bearing,
                }
                .constrained(),
                *duration,
            )),
            MapCommand::Highlight { .. } => None,
        }
    }
}

/// Sending side of a mounted map's command queue
#[derive(Debug, Clone)]
pub struct MapHandle {
    tx: UnboundedSender<MapCommand>,
}

impl MapHandle {
    pub fn new(tx: UnboundedSender<MapCommand>) -> Self {
        Self { tx }
    }

    /// Queue a command. Returns `false` if the map is gone.
    pub fn send(&self, command: MapCommand) -> bool {
        self.tx.unbounded_send(command).is_ok()
    }
}

/// Whether the map can take commands yet
#[derive(Debug, Clone, Default)]
pub enum MapReadiness {
    #[default]
    Pending,
    Ready(MapHandle),
}

impl MapReadiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, MapReadiness::Ready(_))
    }

    pub fn handle(&self) -> Option<&MapHandle> {
        match self {
            MapReadiness::Ready(handle) => Some(handle),
            MapReadiness::Pending => None,
        }
    }

    /// Send every command to the map, or drop them all if it is not ready.
    ///
    /// Returns how many were delivered.
    pub fn dispatch(&self, commands: impl IntoIterator<Item = MapCommand>) -> usize {
        let Some(handle) = self.handle() else {
            let dropped = commands.into_iter().count();
            if dropped > 0 {
                tracing::debug!(dropped, "Map not ready, dropping commands");
            }
            return 0;
        };
        commands
            .into_iter()
            .map(|command| handle.send(command))
            .filter(|delivered| *delivered)
            .count()
    }
}

/// One pin on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: RoleId,
    pub at: LngLat,
    pub title: String,
    pub color: &'static str,
}

/// One marker per role that can be placed; the rest are skipped.
pub fn markers_for(roles: &[DecoratedRole]) -> Vec<Marker> {
    roles
        .iter()
        .filter_map(|role| match role.coordinates() {
            Some(at) => Some(Marker {
                id: role.id.clone(),
                at,
                title: role.title.clone(),
                color: role.theme.color,
            }),
            None => {
                tracing::debug!(role = %role.id, "Role has no usable position, not placed");
                None
            }
        })
        .collect()
}

/// Bounds over every placeable role, `None` if no role can be placed
pub fn bounds_for(roles: &[DecoratedRole]) -> Option<Bounds> {
    Bounds::from_points(roles.iter().filter_map(DecoratedRole::coordinates))
}
