//! Color constants shared between the stylesheet and generated SVG.
//!
//! Zone colors live with the zone table in `careermap_core::zones`.

// === WORLD (map backdrop) ===
pub const WORLD_FILL: &str = "#fef3c7";
pub const WORLD_OUTLINE: &str = "#facc15";
pub const WORLD_EDGE: &str = "rgba(148, 163, 184, 0.35)";

// === MARKERS ===
pub const MARKER_PINK: &str = "#ec4899";
pub const MARKER_BORDER: &str = "#ffffff";
