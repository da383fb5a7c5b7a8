//! Session state shared by every screen.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::api::{Catalog, MockDirectory, load_fixture_catalog};
use crate::config::Config;
use crate::services::{Handoff, JsonFileSink, RequestSink, SelectionSet};
use crate::tui::theme::Theme;

/// Everything the screens share: candidate datasets, the selection
/// stores, and the external collaborators. Owned by the runtime and
/// passed `&mut` into `update`, so ownership stays explicit.
pub struct Session {
    pub catalog: Catalog,
    pub selections: SelectionSet,
    pub handoff: Handoff,
    pub sink: Box<dyn RequestSink>,
    pub directory: Arc<MockDirectory>,
    pub theme: Theme,
    /// Transient message shown in the footer (submit receipts, errors).
    pub status: Option<String>,
}

impl Session {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            catalog: load_fixture_catalog()?,
            selections: SelectionSet::new(),
            handoff: Handoff::new(config.handoff_dir()?),
            sink: Box::new(JsonFileSink::new(config.requests_dir()?)),
            directory: Arc::new(MockDirectory::new(Duration::from_millis(
                config.mock_latency_ms,
            ))),
            theme: Theme::default(),
            status: None,
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        use crate::services::request::MemorySink;

        let dir = std::env::temp_dir().join("accessdesk-test-session");
        Self {
            catalog: load_fixture_catalog().unwrap(),
            selections: SelectionSet::new(),
            handoff: Handoff::new(dir),
            sink: Box::new(MemorySink::new()),
            directory: Arc::new(MockDirectory::new(Duration::ZERO)),
            theme: Theme::default(),
            status: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}
