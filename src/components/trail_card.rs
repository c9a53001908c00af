//! Trail Card Component
//!
//! One role in the career trail: glyph, title, company, years, location,
//! summary and a badge in the zone's color.

use careermap_core::DecoratedRole;
use dioxus::prelude::*;

/// Card glow tinted with the zone color
fn card_glow(color: &str) -> String {
    format!("box-shadow: 0 3px 10px {color}22, 0 0 25px {color}15;")
}

/// Zone badge background and glow
fn badge_style(color: &str) -> String {
    format!("background-color: {color}; box-shadow: 0 0 10px {color}66;")
}

#[component]
pub fn TrailCard(
    /// Role to show
    role: DecoratedRole,
    /// Called when the card is clicked
    on_click: EventHandler<()>,
) -> Element {
    let theme = role.theme;
    let placeable = role.is_placeable();

    rsx! {
        div {
            class: if placeable { "trail-card" } else { "trail-card trail-card--unplaced" },
            style: "{card_glow(theme.color)}",
            "data-role-id": "{role.id}",
            onclick: move |_| on_click.call(()),

            // Header row
            div { class: "trail-card__header",
                span { class: "trail-card__icon", "{theme.icon}" }
                h3 { class: "trail-card__title", "{role.title}" }
            }

            p { class: "trail-card__company", "{role.company}" }
            p { class: "trail-card__years", "{role.years}" }

            if !role.location.is_empty() {
                p { class: "trail-card__location", "📍 {role.location}" }
            }

            if !role.summary.is_empty() {
                p { class: "trail-card__summary", "{role.summary}" }
            }

            div { class: "trail-card__badge", style: "{badge_style(theme.color)}",
                "{theme.name}"
            }
        }
    }
}
