//! Trail List Component
//!
//! The filtered roles, one card each, in the order given.

use careermap_core::DecoratedRole;
use dioxus::prelude::*;

use super::TrailCard;

#[derive(Props, Clone, PartialEq)]
pub struct TrailListProps {
    /// Roles to show, already filtered
    pub roles: Vec<DecoratedRole>,
    /// Whether the dataset has finished loading
    #[props(default = true)]
    pub loaded: bool,
    /// Called with the role whose card was clicked
    pub on_select: EventHandler<DecoratedRole>,
}

#[component]
pub fn TrailList(props: TrailListProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        div { class: "trail-list",
            if props.roles.is_empty() {
                p { class: "trail-list__empty",
                    if props.loaded { "No roles match this search." } else { "Loading the trail..." }
                }
            }

            for role in props.roles.iter() {
                {
                    let picked = role.clone();
                    rsx! {
                        div { key: "{role.id}", class: "trail-list__item",
                            TrailCard {
                                role: role.clone(),
                                on_click: move |_| on_select.call(picked.clone()),
                            }
                        }
                    }
                }
            }
        }
    }
}
