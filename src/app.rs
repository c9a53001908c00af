use careermap_core::{loader, DecoratedRole};
use dioxus::prelude::*;

use crate::context::{get_config, RolesContext};
use crate::pages::{Certifications, CareerTrail, Projects, Skills};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Career trail: searchable role list beside the map
/// - `/skills`, `/projects`, `/certifications` - Not built yet
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    CareerTrail {},
    #[route("/skills")]
    Skills {},
    #[route("/projects")]
    Projects {},
    #[route("/certifications")]
    Certifications {},
}

/// Root application component.
///
/// Provides global styles, configuration and role context, and routing.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);
    let roles: Signal<Vec<DecoratedRole>> = use_signal(Vec::new);
    let loaded: Signal<bool> = use_signal(|| false);

    // Provide context to all child components
    use_context_provider(|| config.clone());
    use_context_provider(|| RolesContext { roles, loaded });

    // Load the dataset once on mount. Failures come back as an empty list.
    let source = config.roles.clone();
    use_effect(move || {
        let source = source.clone();
        let mut roles = roles;
        let mut loaded = loaded;
        spawn(async move {
            let loaded_roles = loader::load_roles(&source).await;
            roles.set(loaded_roles);
            loaded.set(true);
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
