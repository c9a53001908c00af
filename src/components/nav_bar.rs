//! Navigation Bar Component
//!
//! Brand on the left, one link per park section on the right.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Roles,
    Skills,
    Projects,
    Certifications,
}

impl NavLocation {
    pub const ALL: [NavLocation; 4] = [
        NavLocation::Roles,
        NavLocation::Skills,
        NavLocation::Projects,
        NavLocation::Certifications,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Roles => "Roles",
            NavLocation::Skills => "Skills",
            NavLocation::Projects => "Projects",
            NavLocation::Certifications => "Certifications",
        }
    }

    /// Path this location lives at
    pub fn path(&self) -> &'static str {
        match self {
            NavLocation::Roles => "/",
            NavLocation::Skills => "/skills",
            NavLocation::Projects => "/projects",
            NavLocation::Certifications => "/certifications",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Roles => Route::CareerTrail {},
            NavLocation::Skills => Route::Skills {},
            NavLocation::Projects => Route::Projects {},
            NavLocation::Certifications => Route::Certifications {},
        }
    }
}

/// Navigation bar
///
/// The link for `current` is highlighted.
#[component]
pub fn NavBar(current: NavLocation) -> Element {
    rsx! {
        header { class: "nav-bar",
            nav { class: "nav-bar__inner",
                Link { to: Route::CareerTrail {}, class: "nav-bar__brand", "Career Theme Park" }

                div { class: "nav-bar__links",
                    for location in NavLocation::ALL {
                        Link {
                            to: location.route(),
                            class: if location == current { "nav-link active" } else { "nav-link" },
                            "{location.display_name()}"
                        }
                    }
                }
            }
        }
    }
}
