//! Camera math for the career world.
//!
//! The world is a fixed 0–100 square in map units (`lng` grows east, `lat`
//! grows north). Scale follows the usual web-map convention: at zoom 0 a
//! 512 px tile spans 360 units, and every zoom level doubles that. Map units
//! are treated as already projected, so there is no latitude distortion.

use std::time::Duration;

use serde::Serialize;

use crate::coords::LngLat;

/// Lower edge of the world on both axes
pub const WORLD_MIN: f64 = 0.0;
/// Upper edge of the world on both axes
pub const WORLD_MAX: f64 = 100.0;

const TILE_SIZE: f64 = 512.0;
const UNITS_PER_TURN: f64 = 360.0;

pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 16.0;
pub const MAX_PITCH: f64 = 85.0;

/// Size of the map's drawing surface in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Axis-aligned rectangle in SVG space (`y` grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Map units to SVG space: same `x`, `y` flipped so north is up.
pub fn to_svg(point: LngLat) -> (f64, f64) {
    (point.lng, WORLD_MAX - point.lat)
}

/// The map's view state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub center: LngLat,
    pub zoom: f64,
    /// Tilt in degrees, 0 is straight down
    pub pitch: f64,
    /// Rotation in degrees clockwise from north
    pub bearing: f64,
}

impl Camera {
    /// Starting camera for the full-size map
    pub fn full() -> Self {
        Self {
            center: LngLat::new(50.0, 50.0),
            zoom: 3.2,
            pitch: 45.0,
            bearing: 0.0,
        }
    }

    /// Starting camera for the minimap
    pub fn compact() -> Self {
        Self {
            zoom: 2.3,
            pitch: 0.0,
            ..Self::full()
        }
    }

    /// Map units covered by one CSS pixel at this zoom
    pub fn units_per_pixel(&self) -> f64 {
        units_per_pixel(self.zoom)
    }

    /// Keep the center inside the world and zoom/pitch inside their ranges.
    pub fn constrained(self) -> Self {
        Self {
            center: LngLat::new(
                self.center.lng.clamp(WORLD_MIN, WORLD_MAX),
                self.center.lat.clamp(WORLD_MIN, WORLD_MAX),
            ),
            zoom: self.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            pitch: self.pitch.clamp(0.0, MAX_PITCH),
            bearing: self.bearing.rem_euclid(360.0),
        }
    }

    /// The part of the world visible in `viewport`, in SVG space
    pub fn visible_rect(&self, viewport: Viewport) -> Rect {
        let upp = self.units_per_pixel();
        let width = viewport.width * upp;
        let height = viewport.height * upp;
        let (cx, cy) = to_svg(self.center);
        Rect {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    /// Pixel position of `point` relative to the viewport's top-left corner
    pub fn project(&self, point: LngLat, viewport: Viewport) -> (f64, f64) {
        let upp = self.units_per_pixel();
        (
            (point.lng - self.center.lng) / upp + viewport.width / 2.0,
            (self.center.lat - point.lat) / upp + viewport.height / 2.0,
        )
    }

    /// Map position under the pixel `(x, y)` of the viewport
    pub fn unproject(&self, x: f64, y: f64, viewport: Viewport) -> LngLat {
        let upp = self.units_per_pixel();
        LngLat::new(
            self.center.lng + (x - viewport.width / 2.0) * upp,
            self.center.lat - (y - viewport.height / 2.0) * upp,
        )
    }

    /// Camera after dragging the map content by `(dx, dy)` pixels
    pub fn panned_by(self, dx: f64, dy: f64) -> Self {
        let upp = self.units_per_pixel();
        Self {
            center: LngLat::new(self.center.lng - dx * upp, self.center.lat + dy * upp),
            ..self
        }
        .constrained()
    }

    /// Camera after changing zoom by `delta` while the point under the
    /// pixel `anchor` stays put.
    pub fn zoomed_around(self, delta: f64, anchor: (f64, f64), viewport: Viewport) -> Self {
        let fixed = self.unproject(anchor.0, anchor.1, viewport);
        let zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        let upp = units_per_pixel(zoom);
        Self {
            center: LngLat::new(
                fixed.lng - (anchor.0 - viewport.width / 2.0) * upp,
                fixed.lat + (anchor.1 - viewport.height / 2.0) * upp,
            ),
            zoom,
            ..self
        }
        .constrained()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::full()
    }
}

fn units_per_pixel(zoom: f64) -> f64 {
    UNITS_PER_TURN / (TILE_SIZE * 2f64.powf(zoom))
}

/// Smallest box containing a set of map positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    /// South-west corner
    pub min: LngLat,
    /// North-east corner
    pub max: LngLat,
}

impl Bounds {
    pub fn from_point(point: LngLat) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Bounds of all points, `None` when there are none
    pub fn from_points(points: impl IntoIterator<Item = LngLat>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::from_point(first);
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: LngLat) {
        self.min.lng = self.min.lng.min(point.lng);
        self.min.lat = self.min.lat.min(point.lat);
        self.max.lng = self.max.lng.max(point.lng);
        self.max.lat = self.max.lat.max(point.lat);
    }

    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.min.lng + self.max.lng) / 2.0,
            (self.min.lat + self.max.lat) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.max.lng - self.min.lng
    }

    pub fn height(&self) -> f64 {
        self.max.lat - self.min.lat
    }

    pub fn contains(&self, point: LngLat) -> bool {
        (self.min.lng..=self.max.lng).contains(&point.lng)
            && (self.min.lat..=self.max.lat).contains(&point.lat)
    }
}

/// The camera that shows `bounds` inside `viewport` with `padding` pixels on
/// every side, zoomed in no further than `max_zoom`.
///
/// Pitch is kept and bearing reset to north.
pub fn fit_bounds(
    current: &Camera,
    bounds: &Bounds,
    viewport: Viewport,
    padding: f64,
    max_zoom: f64,
) -> Camera {
    let avail_w = (viewport.width - 2.0 * padding).max(1.0);
    let avail_h = (viewport.height - 2.0 * padding).max(1.0);
    let needed = (bounds.width() / avail_w).max(bounds.height() / avail_h);

    let zoom = if needed > 0.0 {
        (UNITS_PER_TURN / (TILE_SIZE * needed)).log2().min(max_zoom)
    } else {
        max_zoom
    };

    Camera {
        center: bounds.center(),
        zoom,
        pitch: current.pitch,
        bearing: 0.0,
    }
    .constrained()
}

/// A timed transition between two cameras
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAnimation {
    pub from: Camera,
    pub to: Camera,
    pub duration: Duration,
}

impl CameraAnimation {
    pub fn new(from: Camera, to: Camera, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// Camera at `elapsed` into the transition
    pub fn sample(&self, elapsed: Duration) -> Camera {
        if self.is_finished(elapsed) {
            return self.to;
        }
        let t = ease_in_out_cubic(elapsed.as_secs_f64() / self.duration.as_secs_f64());
        Camera {
            center: LngLat::new(
                lerp(self.from.center.lng, self.to.center.lng, t),
                lerp(self.from.center.lat, self.to.center.lat, t),
            ),
            zoom: lerp(self.from.zoom, self.to.zoom, t),
            pitch: lerp(self.from.pitch, self.to.pitch, t),
            bearing: lerp_angle(self.from.bearing, self.to.bearing, t),
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate degrees along the shorter way round
fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    let delta = (b - a + 540.0).rem_euclid(360.0) - 180.0;
    (a + delta * t).rem_euclid(360.0)
}

fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_project_center_is_viewport_middle() {
        let camera = Camera::full();
        let viewport = Viewport::new(1000.0, 500.0);
        assert_eq!(camera.project(camera.center, viewport), (500.0, 250.0));
    }

    #[test]
    fn test_project_unproject_inverse() {
        let camera = Camera::full();
        let viewport = Viewport::default();
        let point = LngLat::new(42.0, 17.5);
        let (x, y) = camera.project(point, viewport);
        let back = camera.unproject(x, y, viewport);
        assert!(close(back.lng, point.lng) && close(back.lat, point.lat));
    }

    #[test]
    fn test_north_is_up() {
        let camera = Camera::full();
        let viewport = Viewport::default();
        let (_, y_north) = camera.project(LngLat::new(50.0, 60.0), viewport);
        let (_, y_south) = camera.project(LngLat::new(50.0, 40.0), viewport);
        assert!(y_north < y_south);
    }

    #[test]
    fn test_each_zoom_level_halves_the_view() {
        let viewport = Viewport::default();
        let wide = Camera { zoom: 3.0, ..Camera::full() }.visible_rect(viewport);
        let close_up = Camera { zoom: 4.0, ..Camera::full() }.visible_rect(viewport);
        assert!((wide.width / close_up.width - 2.0).abs() < EPS);
    }

    #[test]
    fn test_center_clamped_to_world() {
        let camera = Camera {
            center: LngLat::new(-20.0, 130.0),
            zoom: 40.0,
            pitch: 120.0,
            bearing: -90.0,
        }
        .constrained();
        assert_eq!(camera.center, LngLat::new(WORLD_MIN, WORLD_MAX));
        assert_eq!(camera.zoom, MAX_ZOOM);
        assert_eq!(camera.pitch, MAX_PITCH);
        assert_eq!(camera.bearing, 270.0);
    }

    #[test]
    fn test_pan_moves_opposite_to_drag() {
        let camera = Camera::full();
        let panned = camera.panned_by(100.0, 0.0);
        assert!(panned.center.lng < camera.center.lng);
        assert_eq!(panned.center.lat, camera.center.lat);
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let camera = Camera::full();
        let viewport = Viewport::default();
        let anchor = (200.0, 150.0);
        let before = camera.unproject(anchor.0, anchor.1, viewport);
        let zoomed = camera.zoomed_around(0.5, anchor, viewport);
        let after = zoomed.unproject(anchor.0, anchor.1, viewport);
        assert!(close(before.lng, after.lng) && close(before.lat, after.lat));
        assert!(close(zoomed.zoom, 3.7));
    }

    #[test]
    fn test_bounds_from_points() {
        assert_eq!(Bounds::from_points(Vec::new()), None);

        let bounds = Bounds::from_points([
            LngLat::new(10.0, 80.0),
            LngLat::new(30.0, 20.0),
            LngLat::new(20.0, 50.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, LngLat::new(10.0, 20.0));
        assert_eq!(bounds.max, LngLat::new(30.0, 80.0));
        assert_eq!(bounds.center(), LngLat::new(20.0, 50.0));
        assert!(bounds.contains(LngLat::new(20.0, 50.0)));
        assert!(!bounds.contains(LngLat::new(40.0, 50.0)));
    }

    #[test]
    fn test_fit_bounds_contains_box() {
        let viewport = Viewport::new(1000.0, 800.0);
        let bounds = Bounds::from_points([LngLat::new(10.0, 20.0), LngLat::new(70.0, 60.0)]).unwrap();
        let camera = fit_bounds(&Camera::full(), &bounds, viewport, 60.0, 12.0);

        assert_eq!(camera.center, bounds.center());
        assert_eq!(camera.bearing, 0.0);
        assert_eq!(camera.pitch, 45.0);

        let (x0, y0) = camera.project(LngLat::new(10.0, 60.0), viewport);
        let (x1, y1) = camera.project(LngLat::new(70.0, 20.0), viewport);
        assert!(x0 >= 60.0 - 1e-6 && y0 >= 60.0 - 1e-6);
        assert!(x1 <= 940.0 + 1e-6 && y1 <= 740.0 + 1e-6);
        // the limiting axis touches the padding
        assert!(close(x0, 60.0) || close(y0, 60.0));
    }

    #[test]
    fn test_fit_single_point_uses_max_zoom() {
        let bounds = Bounds::from_point(LngLat::new(25.0, 25.0));
        let camera = fit_bounds(&Camera::full(), &bounds, Viewport::default(), 60.0, 12.0);
        assert_eq!(camera.zoom, 12.0);
        assert_eq!(camera.center, LngLat::new(25.0, 25.0));
    }

    #[test]
    fn test_fit_respects_max_zoom_for_tiny_boxes() {
        let bounds = Bounds::from_points([LngLat::new(25.0, 25.0), LngLat::new(25.001, 25.001)]).unwrap();
        let camera = fit_bounds(&Camera::full(), &bounds, Viewport::default(), 60.0, 12.0);
        assert_eq!(camera.zoom, 12.0);
    }

    #[test]
    fn test_animation_endpoints() {
        let from = Camera::full();
        let to = Camera {
            center: LngLat::new(20.0, 30.0),
            zoom: 4.2,
            pitch: 55.0,
            bearing: 0.0,
        };
        let animation = CameraAnimation::new(from, to, Duration::from_millis(1200));

        assert_eq!(animation.sample(Duration::ZERO), from);
        assert_eq!(animation.sample(Duration::from_millis(1200)), to);
        assert_eq!(animation.sample(Duration::from_secs(5)), to);
        assert!(animation.is_finished(Duration::from_millis(1200)));
        assert!(!animation.is_finished(Duration::from_millis(600)));

        let mid = animation.sample(Duration::from_millis(600));
        assert!(close(mid.center.lng, 35.0));
        assert!(close(mid.zoom, 3.7));
    }

    #[test]
    fn test_animation_takes_short_way_round() {
        let from = Camera { bearing: 350.0, ..Camera::full() };
        let to = Camera { bearing: 10.0, ..Camera::full() };
        let mid = CameraAnimation::new(from, to, Duration::from_secs(1)).sample(Duration::from_millis(500));
        assert!(close(mid.bearing, 0.0) || close(mid.bearing, 360.0));
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=100 {
            let value = ease_in_out_cubic(step as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
        assert!(close(last, 1.0));
    }
}
