//! Placeholder pages for sections that only exist in the navigation bar.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavBar, NavLocation};

#[component]
fn ComingSoon(current: NavLocation) -> Element {
    rsx! {
        div { class: "page",
            NavBar { current: current }
            main { class: "coming-soon",
                h2 { class: "coming-soon__title", "{current.display_name()}" }
                p { class: "coming-soon__text", "This part of the park is still under construction." }
                Link { to: Route::CareerTrail {}, class: "coming-soon__back", "Back to the career trail" }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! { ComingSoon { current: NavLocation::Skills } }
}

#[component]
pub fn Projects() -> Element {
    rsx! { ComingSoon { current: NavLocation::Projects } }
}

#[component]
pub fn Certifications() -> Element {
    rsx! { ComingSoon { current: NavLocation::Certifications } }
}
