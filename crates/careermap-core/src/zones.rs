//! Zone theme registry.
//!
//! Every role lives in a zone. A zone has a display name, an accent color used
//! for the card glow, badge and map overlay, and a glyph shown on the card.
//! The table is fixed at compile time; there is no way to add zones at runtime.

use serde::Serialize;

/// Zone identifier used when a role lists no zones at all.
pub const UNKNOWN_ZONE: &str = "unknown";

/// Display metadata for a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneTheme {
    /// Zone identifier as it appears in `zoneIds` and the backdrop's `zoneId`
    pub id: &'static str,
    /// Human-readable zone name
    pub name: &'static str,
    /// Accent color as a CSS hex string
    pub color: &'static str,
    /// Glyph shown next to role titles
    pub icon: &'static str,
}

/// Every known zone, in the order their map overlays are drawn.
pub static ZONE_THEMES: [ZoneTheme; 6] = [
    ZoneTheme {
        id: "martech-mountain",
        name: "MarTech Mountain Pass",
        color: "#0d9488",
        icon: "⛰",
    },
    ZoneTheme {
        id: "revops-forge",
        name: "The RevOps Ironworks",
        color: "#475569",
        icon: "⚒️",
    },
    ZoneTheme {
        id: "abm-kingdom",
        name: "The Royal ABM Kingdom",
        color: "#7c3aed",
        icon: "👑",
    },
    ZoneTheme {
        id: "demand-gen-fields",
        name: "The DemandGen Prairie",
        color: "#16a34a",
        icon: "🌾",
    },
    ZoneTheme {
        id: "onboarding-forest",
        name: "Onboarding Forest",
        color: "#0ea5e9",
        icon: "🌲",
    },
    ZoneTheme {
        id: "gtmstack-citadel",
        name: "GTMstack Citadel",
        color: "#eab308",
        icon: "🏰",
    },
];

/// Theme for any zone identifier not in [`ZONE_THEMES`].
pub static UNKNOWN_THEME: ZoneTheme = ZoneTheme {
    id: UNKNOWN_ZONE,
    name: "Unknown Land",
    color: "#94a3b8",
    icon: "⭐",
};

/// Look up the theme for a zone, falling back to [`UNKNOWN_THEME`].
pub fn theme_for(zone_id: &str) -> &'static ZoneTheme {
    ZONE_THEMES
        .iter()
        .find(|theme| theme.id == zone_id)
        .unwrap_or(&UNKNOWN_THEME)
}

/// Whether the zone id is one of the registered zones
pub fn is_known_zone(zone_id: &str) -> bool {
    ZONE_THEMES.iter().any(|theme| theme.id == zone_id)
}
