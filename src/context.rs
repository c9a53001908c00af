//! Shared context for Career Theme Park.
//!
//! Provides the startup configuration and the loaded roles to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let roles = use_roles();
//! if use_roles_loaded()() {
//!     for role in roles.read().iter() { /* ... */ }
//! }
//! ```

use careermap_core::{CareerMapConfig, DecoratedRole};
use dioxus::prelude::*;

/// Get the configuration resolved at startup.
pub fn get_config() -> CareerMapConfig {
    crate::get_config()
}

/// Loaded roles, newest first. Empty until the dataset load finishes
/// (and stays empty if it fails).
#[derive(Clone, Copy)]
pub struct RolesContext {
    pub roles: Signal<Vec<DecoratedRole>>,
    pub loaded: Signal<bool>,
}

/// Hook to access the loaded roles from context.
pub fn use_roles() -> Signal<Vec<DecoratedRole>> {
    use_context::<RolesContext>().roles
}

/// Hook to check whether the dataset load has finished.
pub fn use_roles_loaded() -> Signal<bool> {
    use_context::<RolesContext>().loaded
}

/// Hook to access the configuration from context.
pub fn use_config() -> CareerMapConfig {
    use_context::<CareerMapConfig>()
}
