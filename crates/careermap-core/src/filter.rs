//! Search filtering over decorated roles.

use crate::types::DecoratedRole;

/// Whether a role matches a search query.
///
/// Case-insensitive substring match against the title, the company and the
/// zone display name. An empty query matches everything.
pub fn role_matches(role: &DecoratedRole, query: &str) -> bool {
    let query = query.to_lowercase();
    matches_lowercase(role, &query)
}

fn matches_lowercase(role: &DecoratedRole, query: &str) -> bool {
    query.is_empty()
        || role.title.to_lowercase().contains(query)
        || role.company.to_lowercase().contains(query)
        || role.theme.name.to_lowercase().contains(query)
}

/// Roles matching `query`, in their original order.
pub fn filter_roles(roles: &[DecoratedRole], query: &str) -> Vec<DecoratedRole> {
    let query = query.to_lowercase();
    roles
        .iter()
        .filter(|role| matches_lowercase(role, &query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::decorate_roles;
    use serde_json::json;

    fn roles() -> Vec<DecoratedRole> {
        decorate_roles(
            serde_json::from_value(json!([
                { "id": "sf", "title": "Marketing Ops Lead", "company": "Salesforce",
                  "endYear": 2024, "zoneIds": ["revops-forge"] },
                { "id": "rh", "title": "ABM Manager", "company": "Red Hat",
                  "endYear": 2019, "zoneIds": ["martech-mountain"] },
                { "id": "px", "title": "Digital Strategist", "company": "PRGX",
                  "endYear": 2015 }
            ]))
            .unwrap(),
        )
    }

    fn ids(roles: &[DecoratedRole]) -> Vec<&str> {
        roles.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let all = roles();
        assert_eq!(filter_roles(&all, ""), all);
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        assert_eq!(ids(&filter_roles(&roles(), "abm")), ["rh"]);
        assert_eq!(ids(&filter_roles(&roles(), "DIGITAL")), ["px"]);
    }

    #[test]
    fn test_matches_company() {
        assert_eq!(ids(&filter_roles(&roles(), "red hat")), ["rh"]);
    }

    #[test]
    fn test_matches_zone_name() {
        assert_eq!(ids(&filter_roles(&roles(), "MOUNTAIN")), ["rh"]);
        assert_eq!(ids(&filter_roles(&roles(), "ironworks")), ["sf"]);
        assert_eq!(ids(&filter_roles(&roles(), "unknown land")), ["px"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_roles(&roles(), "astronaut").is_empty());
    }

    #[test]
    fn test_role_matches_agrees_with_filter() {
        let all = roles();
        for query in ["", "a", "Ops", "prairie", "x"] {
            let expected: Vec<_> = all.iter().filter(|r| role_matches(r, query)).cloned().collect();
            assert_eq!(filter_roles(&all, query), expected);
        }
    }
}
