//! Derived filters over the candidate datasets.
//!
//! All functions here are pure: same inputs, same output, no state. The
//! entitlement filter is parent-gated by policy: until at least one
//! application is selected, no entitlements are offered at all.

use crate::model::{Application, CustomGroup, Entitlement, Region, StoreRecord, User, UserGroup};

fn matches(query: &str, fields: &[&str]) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(query))
}

/// Entitlements narrowed to the selected applications, then by search.
///
/// Empty `selected_apps` yields an empty result, not all entitlements:
/// the user must pick an application before entitlements are shown.
pub fn entitlements_for_apps<'a>(
    all: &'a [Entitlement],
    selected_apps: &[Application],
    search: &str,
) -> Vec<&'a Entitlement> {
    if selected_apps.is_empty() {
        return Vec::new();
    }
    let names: Vec<&str> = selected_apps
        .iter()
        .map(|app| app.application_name.as_str())
        .collect();
    let mut filtered: Vec<&Entitlement> = all
        .iter()
        .filter(|ent| names.contains(&ent.application_name.as_str()))
        .collect();

    let query = search.trim().to_lowercase();
    if !query.is_empty() {
        filtered.retain(|ent| {
            matches(
                &query,
                &[
                    &ent.entitlement_name,
                    &ent.entitlement_type,
                    &ent.application_name,
                    &ent.description,
                ],
            )
        });
    }
    filtered
}

/// Applications matching a free-text search, or all when blank.
pub fn search_applications<'a>(all: &'a [Application], search: &str) -> Vec<&'a Application> {
    let query = search.trim().to_lowercase();
    if query.is_empty() {
        return all.iter().collect();
    }
    all.iter()
        .filter(|app| {
            matches(
                &query,
                &[
                    &app.application_name,
                    &app.application_type,
                    &app.owner,
                    &app.department,
                ],
            )
        })
        .collect()
}

pub fn search_users<'a>(all: &'a [User], search: &str) -> Vec<&'a User> {
    let query = search.trim().to_lowercase();
    if query.is_empty() {
        return all.iter().collect();
    }
    all.iter()
        .filter(|user| {
            matches(
                &query,
                &[
                    &user.name,
                    &user.emp_id,
                    &user.manager,
                    &user.store_code,
                    &user.brand,
                ],
            )
        })
        .collect()
}

pub fn search_user_groups<'a>(all: &'a [UserGroup], search: &str) -> Vec<&'a UserGroup> {
    let query = search.trim().to_lowercase();
    if query.is_empty() {
        return all.iter().collect();
    }
    all.iter()
        .filter(|group| matches(&query, &[&group.group_name, &group.description]))
        .collect()
}

pub fn search_stores<'a>(all: &'a [StoreRecord], search: &str) -> Vec<&'a StoreRecord> {
    let query = search.trim().to_lowercase();
    if query.is_empty() {
        return all.iter().collect();
    }
    all.iter()
        .filter(|store| {
            matches(
                &query,
                &[
                    &store.store_name,
                    &store.store_number,
                    &store.location,
                    &store.brand,
                    &store.region,
                ],
            )
        })
        .collect()
}

pub fn search_regions<'a>(all: &'a [Region], search: &str) -> Vec<&'a Region> {
    let query = search.trim().to_lowercase();
    if query.is_empty() {
        return all.iter().collect();
    }
    all.iter()
        .filter(|region| {
            matches(
                &query,
                &[&region.region_name, &region.description, &region.states],
            )
        })
        .collect()
}

pub fn search_custom_groups<'a>(all: &'a [CustomGroup], search: &str) -> Vec<&'a CustomGroup> {
    let query = search.trim().to_lowercase();
    if query.is_empty() {
        return all.iter().collect();
    }
    all.iter()
        .filter(|group| {
            matches(
                &query,
                &[&group.group_name, &group.description, &group.created_by],
            )
        })
        .collect()
}

/// User search for the group-creation wizard. Search-gated: a blank query
/// returns nothing, so the picker starts empty until the admin searches.
pub fn search_directory_users<'a>(all: &'a [User], search: &str) -> Vec<&'a User> {
    let query = search.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    all.iter()
        .filter(|user| {
            matches(
                &query,
                &[
                    &user.name,
                    &user.email,
                    &user.emp_id,
                    &user.manager,
                    &user.store_code,
                    &user.brand,
                ],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;
    use crate::model::Risk;

    fn app(name: &str) -> Application {
        Application {
            id: name.to_string(),
            application_name: name.to_string(),
            application_type: String::new(),
            owner: String::new(),
            department: String::new(),
            status: "Active".into(),
            last_sync: String::new(),
        }
    }

    fn entitlement(id: &str, name: &str, app_name: &str) -> Entitlement {
        Entitlement {
            id: id.to_string(),
            entitlement_name: name.to_string(),
            entitlement_type: "Role".into(),
            application_name: app_name.to_string(),
            description: String::new(),
            risk: Risk::Low,
            last_reviewed: String::new(),
            scope: String::new(),
        }
    }

    #[test]
    fn test_empty_parent_selection_yields_empty_result() {
        let all = fixtures::entitlements();
        assert!(entitlements_for_apps(&all, &[], "").is_empty());
        assert!(entitlements_for_apps(&all, &[], "admin").is_empty());
    }

    #[test]
    fn test_filter_by_selected_application() {
        let all = vec![
            entitlement("1", "Administrator", "Active Directory"),
            entitlement("2", "Finance Manager", "Oracle ERP"),
        ];
        let selected = vec![app("Active Directory")];
        let filtered = entitlements_for_apps(&all, &selected, "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_search_applies_after_parent_filter() {
        let all = fixtures::entitlements();
        let selected = vec![app("Active Directory")];
        // Three AD entitlements in the fixtures; only one mentions "read".
        let unsearched = entitlements_for_apps(&all, &selected, "");
        assert_eq!(unsearched.len(), 3);
        let searched = entitlements_for_apps(&all, &selected, "read");
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].entitlement_name, "Read Only Access");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = fixtures::entitlements();
        let selected = vec![app("Oracle ERP")];
        let lower = entitlements_for_apps(&all, &selected, "database");
        let upper = entitlements_for_apps(&all, &selected, "DATABASE");
        assert_eq!(lower.len(), 1);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = fixtures::entitlements();
        let selected = vec![app("Active Directory"), app("Workday")];
        let first: Vec<String> = entitlements_for_apps(&all, &selected, "acc")
            .iter()
            .map(|e| e.id.clone())
            .collect();
        let second: Vec<String> = entitlements_for_apps(&all, &selected, "acc")
            .iter()
            .map(|e| e.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_blank_search_returns_all_applications() {
        let all = fixtures::applications();
        assert_eq!(search_applications(&all, "   ").len(), all.len());
    }

    #[test]
    fn test_application_search_matches_owner() {
        let all = fixtures::applications();
        let hits = search_applications(&all, "finance team");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].application_name, "Oracle ERP");
    }

    #[test]
    fn test_directory_search_is_gated_on_query() {
        let all = fixtures::users();
        assert!(search_directory_users(&all, "").is_empty());
        assert!(search_directory_users(&all, "  ").is_empty());
        assert!(!search_directory_users(&all, "smith").is_empty());
    }

    #[test]
    fn test_store_search_matches_region() {
        let all = fixtures::stores();
        let hits = search_stores(&all, "northeast");
        assert_eq!(hits.len(), 2);
    }
}
