//! Query executors.

use std::time::Duration;

use anyhow::Result;
use serde_json::json;

use super::query::{Query, QueryResponse};
use crate::model::fixtures;

/// Executes directory queries. Implementations own transport, auth and
/// retries; callers only see rows.
pub trait QueryExecutor {
    fn execute(&self, query: &Query) -> impl Future<Output = Result<QueryResponse>> + Send;
}

/// Fixture-backed executor with simulated latency, standing in for the
/// governance backend until one is wired up.
#[derive(Debug, Clone)]
pub struct MockDirectory {
    latency: Duration,
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new(Duration::from_millis(400))
    }
}

impl MockDirectory {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn rows_for(&self, query: &Query) -> Vec<serde_json::Value> {
        // The only query shape the portal issues today is the
        // operations-department user lookup.
        let wants_operations = query
            .params
            .iter()
            .any(|p| p.eq_ignore_ascii_case("operations"));
        if !query.text.to_lowercase().contains("from usr") || !wants_operations {
            return Vec::new();
        }
        fixtures::users()
            .into_iter()
            .map(|user| {
                json!({
                    "id": user.id,
                    "displayname": user.name,
                    "username": user.email,
                    "empid": user.emp_id,
                    "manager": user.manager,
                    "storecode": user.store_code,
                    "brand": user.brand,
                    "startdate": user.start_date,
                    "department": "Operations",
                })
            })
            .collect()
    }
}

impl QueryExecutor for MockDirectory {
    async fn execute(&self, query: &Query) -> Result<QueryResponse> {
        log::debug!("mock directory query: {} {:?}", query.text, query.params);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(QueryResponse::new(self.rows_for(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_directory_serves_operations_users() {
        let directory = MockDirectory::new(Duration::ZERO);
        let query = Query::new("SELECT * FROM usr WHERE lower(department) = ?")
            .with_param("operations");
        let response = directory.execute(&query).await.unwrap();
        assert_eq!(response.result_set.len(), 6);
        assert_eq!(response.result_set[0]["displayname"], "John Smith");
    }

    #[tokio::test]
    async fn test_unknown_query_returns_no_rows() {
        let directory = MockDirectory::new(Duration::ZERO);
        let query = Query::new("SELECT * FROM grp").with_param("operations");
        let response = directory.execute(&query).await.unwrap();
        assert!(response.is_empty());
    }
}
