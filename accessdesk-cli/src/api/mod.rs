//! Query boundary to the governance directory backend.
//!
//! Screens never talk to a backend directly; they hand a [`Query`] to a
//! [`QueryExecutor`] and normalize whatever rows come back. The only
//! executor shipped today is [`MockDirectory`], which serves the built-in
//! fixtures with simulated latency.

pub mod executor;
pub mod normalize;
pub mod query;

pub use executor::{MockDirectory, QueryExecutor};
pub use normalize::normalize_user;
pub use query::{Query, QueryResponse};

use anyhow::Result;

use crate::model::User;
use crate::model::fixtures;

/// Fallback roster shown when the directory returns no usable rows.
pub fn fallback_users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "Aamod Radwan".into(),
            email: "aamod.radwan@zillasecurity.io".into(),
            emp_id: "EMP001".into(),
            manager: "Manager Name".into(),
            store_code: String::new(),
            brand: "Sales".into(),
            title: Some("Staff".into()),
            department: Some("Sales".into()),
            start_date: "2023-01-01".into(),
        },
        User {
            id: "2".into(),
            name: "Abdulah Thibadeau".into(),
            email: "abdulah.thibadeau@zillasecurity.io".into(),
            emp_id: "EMP002".into(),
            manager: "Manager Name".into(),
            store_code: String::new(),
            brand: "IT & Security".into(),
            title: Some("Manager - IT & Security".into()),
            department: Some("IT & Security".into()),
            start_date: "2023-01-01".into(),
        },
    ]
}

/// Fetch and normalize the operations-department users for the
/// group-creation wizard. Empty or failing responses fall back to the
/// fixed roster rather than surfacing an error.
pub async fn load_operations_users<E: QueryExecutor>(executor: &E) -> Vec<User> {
    let query = Query::new("SELECT * FROM usr WHERE lower(department) = ?")
        .with_param("operations");
    let rows = match executor.execute(&query).await {
        Ok(response) => response.result_set,
        Err(err) => {
            log::warn!("directory query failed, using fallback roster: {err}");
            Vec::new()
        }
    };

    let mut users: Vec<User> = rows.iter().map(normalize_user).collect();
    if users.is_empty() {
        users = fallback_users();
    }
    // Rows without a stable id get one assigned by position.
    for (index, user) in users.iter_mut().enumerate() {
        if user.id.is_empty() {
            user.id = format!("user-{index}");
        }
    }
    users
}

/// Load the full fixture datasets a picker needs, as one executor call
/// per entity kind would. Kept synchronous-shaped for the mock.
pub fn load_fixture_catalog() -> Result<Catalog> {
    Ok(Catalog {
        users: fixtures::users(),
        user_groups: fixtures::user_groups(),
        applications: fixtures::applications(),
        entitlements: fixtures::entitlements(),
        stores: fixtures::stores(),
        regions: fixtures::regions(),
        custom_groups: fixtures::custom_groups(),
        roles: fixtures::roles(),
    })
}

/// Candidate datasets behind the portal's pickers.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub users: Vec<crate::model::User>,
    pub user_groups: Vec<crate::model::UserGroup>,
    pub applications: Vec<crate::model::Application>,
    pub entitlements: Vec<crate::model::Entitlement>,
    pub stores: Vec<crate::model::StoreRecord>,
    pub regions: Vec<crate::model::Region>,
    pub custom_groups: Vec<crate::model::CustomGroup>,
    pub roles: Vec<crate::model::Role>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct EmptyDirectory;

    impl QueryExecutor for EmptyDirectory {
        async fn execute(&self, _query: &Query) -> Result<QueryResponse> {
            Ok(QueryResponse::default())
        }
    }

    struct BrokenDirectory;

    impl QueryExecutor for BrokenDirectory {
        async fn execute(&self, _query: &Query) -> Result<QueryResponse> {
            anyhow::bail!("directory unavailable")
        }
    }

    #[tokio::test]
    async fn test_load_operations_users_from_mock() {
        let directory = MockDirectory::new(Duration::ZERO);
        let users = load_operations_users(&directory).await;
        assert_eq!(users.len(), 6);
        assert_eq!(users[0].name, "John Smith");
        assert!(users.iter().all(|u| !u.id.is_empty()));
    }

    #[tokio::test]
    async fn test_empty_response_falls_back_to_fixed_roster() {
        let users = load_operations_users(&EmptyDirectory).await;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Aamod Radwan");
    }

    #[tokio::test]
    async fn test_failed_query_falls_back_to_fixed_roster() {
        let users = load_operations_users(&BrokenDirectory).await;
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "Abdulah Thibadeau");
    }
}
