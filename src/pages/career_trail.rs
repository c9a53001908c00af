//! Career Trail Page
//!
//! The home page: a searchable list of roles beside the main map, with a
//! minimap in the corner. Search narrows both the list and the pins, and the
//! main map refits to whatever is left. Clicking a card flies to its pin.

use careermap_core::{DecoratedRole, MapHandle, MapReadiness, TrailState};
use dioxus::prelude::*;

use crate::components::{CareerMap, NavBar, NavLocation, SearchBar, TrailList};
use crate::context::{use_roles, use_roles_loaded};

#[component]
pub fn CareerTrail() -> Element {
    let roles = use_roles();
    let loaded = use_roles_loaded();

    let mut trail = use_signal(TrailState::default);
    let mut readiness = use_signal(MapReadiness::default);

    // Loaded roles feed the trail; the current query is re-applied
    use_effect(move || {
        let roles = roles();
        trail.write().set_roles(roles);
    });

    // Only changes to the filtered list (not every keystroke) reach the map
    let filtered = use_memo(move || trail.read().filtered().to_vec());

    // Refit whenever the filtered list changes or the map becomes ready
    use_effect(move || {
        let visible = filtered.read().len();
        let map = readiness.read();
        if trail.peek().sync_camera(&map) {
            tracing::debug!(visible, "Fitted map to filtered roles");
        }
    });

    let on_search = move |query: String| {
        if trail.write().set_query(query) {
            tracing::debug!(matches = trail.peek().filtered().len(), "Search changed the trail");
        }
    };

    let on_select = move |role: DecoratedRole| {
        let map = readiness.peek();
        if !map.is_ready() {
            tracing::debug!(role = %role.id, "Role picked before the map was ready");
            return;
        }
        let sent = TrailState::activate(&role, &map);
        tracing::debug!(role = %role.id, sent, "Role picked from the trail");
    };

    let on_ready = move |handle: MapHandle| {
        tracing::info!("Career map ready");
        readiness.set(MapReadiness::Ready(handle));
    };

    let query = trail.read().query().to_string();
    let visible = filtered();

    rsx! {
        div { class: "page career-trail",
            NavBar { current: NavLocation::Roles }
            SearchBar { value: query, on_input: on_search }

            main { class: "career-trail__body",
                aside { class: "career-trail__list",
                    TrailList {
                        roles: visible.clone(),
                        loaded: loaded(),
                        on_select: on_select,
                    }
                }

                section { class: "career-trail__map",
                    CareerMap { roles: visible.clone(), on_ready: on_ready }

                    div { class: "career-trail__minimap",
                        CareerMap { roles: visible, compact: true }
                    }
                }
            }
        }
    }
}
