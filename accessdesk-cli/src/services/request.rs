//! Submission boundary for the wizard flows.
//!
//! The portal never persisted submitted requests itself; persistence is an
//! explicit collaborator behind [`RequestSink`] so a real backend can be
//! wired in without touching the wizards. The default sink writes one JSON
//! document per receipt under the data directory.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Application, Entitlement, Location, User, UserGroup};

/// A completed access-request wizard run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequest {
    pub users: Vec<User>,
    pub groups: Vec<UserGroup>,
    pub locations: Vec<Location>,
    pub apps: Vec<Application>,
    pub entitlements: Vec<Entitlement>,
    pub submitted_at: DateTime<Utc>,
}

/// A completed group-creation wizard run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupRequest {
    pub group_name: String,
    pub description: String,
    pub owner: String,
    pub tags: Vec<String>,
    pub owner_is_reviewer: bool,
    pub member_ids: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

/// Any payload the portal can submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RequestDocument {
    Access(AccessRequest),
    Group(GroupRequest),
}

pub trait RequestSink: Send {
    fn submit(&self, document: RequestDocument) -> Result<RequestReceipt>;
}

/// Writes each submission as `<id>.json` under `dir`.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl RequestSink for JsonFileSink {
    fn submit(&self, document: RequestDocument) -> Result<RequestReceipt> {
        let receipt = RequestReceipt {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        };
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create request dir {}", self.dir.display()))?;
        let path = self.dir.join(format!("{}.json", receipt.id));
        let body = serde_json::json!({
            "receipt": receipt,
            "request": document,
        });
        fs::write(&path, serde_json::to_string_pretty(&body)?)
            .with_context(|| format!("Failed to write request {}", path.display()))?;
        log::info!("submitted request {} to {}", receipt.id, path.display());
        Ok(receipt)
    }
}

/// In-memory sink for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    submitted: Mutex<Vec<RequestDocument>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Vec<RequestDocument> {
        self.submitted.lock().unwrap().clone()
    }
}

impl RequestSink for MemorySink {
    fn submit(&self, document: RequestDocument) -> Result<RequestReceipt> {
        self.submitted.lock().unwrap().push(document);
        Ok(RequestReceipt {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        })
    }
}

// Shared handles submit too, so tests can keep one end and hand the
// other to a session.
impl<S: RequestSink + Sync> RequestSink for std::sync::Arc<S> {
    fn submit(&self, document: RequestDocument) -> Result<RequestReceipt> {
        self.as_ref().submit(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    fn sample_access_request() -> AccessRequest {
        AccessRequest {
            users: vec![fixtures::users()[0].clone()],
            groups: vec![],
            locations: vec![],
            apps: vec![fixtures::applications()[0].clone()],
            entitlements: vec![fixtures::entitlements()[0].clone()],
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_file_sink_writes_one_document_per_receipt() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::new(dir.path().join("requests"));
        let a = sink
            .submit(RequestDocument::Access(sample_access_request()))
            .unwrap();
        let b = sink
            .submit(RequestDocument::Access(sample_access_request()))
            .unwrap();
        assert_ne!(a.id, b.id);
        let count = fs::read_dir(dir.path().join("requests")).unwrap().count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_file_sink_document_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::new(dir.path().to_path_buf());
        let receipt = sink
            .submit(RequestDocument::Access(sample_access_request()))
            .unwrap();
        let content =
            fs::read_to_string(dir.path().join(format!("{}.json", receipt.id))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["request"]["kind"], "access");
        assert_eq!(value["request"]["users"][0]["name"], "John Smith");
    }

    #[test]
    fn test_memory_sink_records_submissions() {
        let sink = MemorySink::new();
        sink.submit(RequestDocument::Group(GroupRequest {
            group_name: "Operations".into(),
            description: "Ops staff".into(),
            owner: "jdoe".into(),
            tags: vec![],
            owner_is_reviewer: true,
            member_ids: vec!["1".into()],
            submitted_at: Utc::now(),
        }))
        .unwrap();
        assert_eq!(sink.submitted().len(), 1);
    }
}
