//! State behind the career trail page.
//!
//! Holds the loaded roles and the live search query; the filtered list is
//! always a pure function of the two. The page turns state changes into map
//! commands through [`TrailState::fit_command`] and
//! [`TrailState::focus_commands`].

use crate::filter::filter_roles;
use crate::map::{bounds_for, MapCommand, MapReadiness};
use crate::types::{DecoratedRole, RoleId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrailState {
    roles: Vec<DecoratedRole>,
    query: String,
    filtered: Vec<DecoratedRole>,
}

impl TrailState {
    pub fn new(roles: Vec<DecoratedRole>) -> Self {
        let mut state = Self::default();
        state.set_roles(roles);
        state
    }

    /// Replace the loaded roles. The current query is re-applied.
    pub fn set_roles(&mut self, roles: Vec<DecoratedRole>) {
        self.roles = roles;
        self.refilter();
    }

    /// Change the search query. Returns whether the filtered list changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        self.query = query.into();
        let before = std::mem::take(&mut self.filtered);
        self.refilter();
        before != self.filtered
    }

    fn refilter(&mut self) {
        self.filtered = filter_roles(&self.roles, &self.query);
    }

    pub fn roles(&self) -> &[DecoratedRole] {
        &self.roles
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filtered(&self) -> &[DecoratedRole] {
        &self.filtered
    }

    pub fn find(&self, id: &RoleId) -> Option<&DecoratedRole> {
        self.roles.iter().find(|role| &role.id == id)
    }

    /// Bounds fit over the placeable filtered roles, `None` when none resolve
    pub fn fit_command(&self) -> Option<MapCommand> {
        bounds_for(&self.filtered).map(MapCommand::fit)
    }

    /// Fit the map to the filtered roles, if it is ready and there is
    /// anything to fit. Returns whether a command went out.
    pub fn sync_camera(&self, map: &MapReadiness) -> bool {
        match self.fit_command() {
            Some(command) => map.dispatch([command]) > 0,
            None => false,
        }
    }

    /// Commands for picking `role` in the list: fly to it, then pulse its
    /// marker. Empty when the role has no usable position.
    pub fn focus_commands(role: &DecoratedRole) -> Vec<MapCommand> {
        match role.coordinates() {
            Some(center) => vec![
                MapCommand::focus(center),
                MapCommand::Highlight {
                    id: role.id.clone(),
                },
            ],
            None => {
                tracing::debug!(role = %role.id, "Picked role has no position, camera unchanged");
                Vec::new()
            }
        }
    }

    /// Send the focus commands for `role` to the map
    pub fn activate(role: &DecoratedRole, map: &MapReadiness) -> usize {
        map.dispatch(Self::focus_commands(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::LngLat;
    use crate::loader::decorate_roles;
    use crate::map::{FIT_MAX_ZOOM, FIT_PADDING};
    use futures::channel::mpsc;
    use serde_json::json;

    fn roles() -> Vec<DecoratedRole> {
        decorate_roles(
            serde_json::from_value(json!([
                { "id": "a", "title": "Ops Lead", "endYear": 2024, "lat": 20, "lng": 10,
                  "zoneIds": ["revops-forge"] },
                { "id": "b", "title": "ABM Manager", "endYear": 2020, "coordinates": [70, 60],
                  "zoneIds": ["abm-kingdom"] },
                { "id": "c", "title": "Intern", "endYear": 2012 }
            ]))
            .unwrap(),
        )
    }

    #[test]
    fn test_new_state_shows_everything() {
        let state = TrailState::new(roles());
        assert_eq!(state.query(), "");
        assert_eq!(state.filtered(), state.roles());
    }

    #[test]
    fn test_set_query_reports_changes() {
        let mut state = TrailState::new(roles());
        assert!(state.set_query("abm"));
        assert_eq!(state.filtered().len(), 1);
        assert!(!state.set_query("ABM"));
        assert!(state.set_query(""));
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn test_set_roles_keeps_query() {
        let mut state = TrailState::default();
        state.set_query("intern");
        assert!(state.filtered().is_empty());
        state.set_roles(roles());
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filtered()[0].id, RoleId::new("c"));
    }

    #[test]
    fn test_fit_command_skips_unplaceable() {
        let state = TrailState::new(roles());
        match state.fit_command() {
            Some(MapCommand::FitBounds {
                bounds,
                padding,
                max_zoom,
            }) => {
                assert_eq!(bounds.min, LngLat::new(10.0, 20.0));
                assert_eq!(bounds.max, LngLat::new(70.0, 60.0));
                assert_eq!(padding, FIT_PADDING);
                assert_eq!(max_zoom, FIT_MAX_ZOOM);
            }
            other => panic!("expected a bounds fit, got {other:?}"),
        }
    }

    #[test]
    fn test_no_fit_when_nothing_resolves() {
        let mut state = TrailState::new(roles());
        state.set_query("intern");
        assert_eq!(state.fit_command(), None);

        let (tx, mut rx) = mpsc::unbounded();
        let map = MapReadiness::Ready(crate::map::MapHandle::new(tx));
        assert!(!state.sync_camera(&map));
        assert!(rx.try_next().is_err());
    }

    #[test]
    fn test_sync_camera_waits_for_map() {
        let state = TrailState::new(roles());
        assert!(!state.sync_camera(&MapReadiness::Pending));
    }

    #[test]
    fn test_focus_commands() {
        let state = TrailState::new(roles());
        let role = state.find(&RoleId::new("b")).unwrap();
        let commands = TrailState::focus_commands(role);
        assert_eq!(
            commands,
            vec![
                MapCommand::focus(LngLat::new(70.0, 60.0)),
                MapCommand::Highlight { id: RoleId::new("b") },
            ]
        );

        let unplaced = state.find(&RoleId::new("c")).unwrap();
        assert!(TrailState::focus_commands(unplaced).is_empty());
    }
}
