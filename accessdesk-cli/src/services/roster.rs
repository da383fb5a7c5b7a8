//! Roster upload for the group-creation wizard.
//!
//! The "Upload" selection method takes a CSV of members instead of picking
//! users one by one. Expected header: `name,email` with an optional
//! `emp_id` column; unknown columns are ignored.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub emp_id: Option<String>,
}

/// Parse a member roster from a CSV file.
pub fn load_roster(path: &Path) -> Result<Vec<RosterEntry>> {
    if !path.exists() {
        bail!("Roster file does not exist: {}", path.display());
    }
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open roster {}", path.display()))?;
    let mut entries = Vec::new();
    for (line, result) in reader.deserialize::<RosterEntry>().enumerate() {
        let entry: RosterEntry =
            result.with_context(|| format!("Bad roster row {}", line + 2))?;
        if entry.name.trim().is_empty() || entry.email.trim().is_empty() {
            bail!("Roster row {} is missing a name or email", line + 2);
        }
        entries.push(entry);
    }
    if entries.is_empty() {
        bail!("Roster file has no members: {}", path.display());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_roster(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_parses_basic_roster() {
        let (_guard, path) =
            write_roster("name,email\nJohn Smith,john.smith@example.com\nJane Doe,jane.doe@example.com\n");
        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "John Smith");
        assert!(roster[0].emp_id.is_none());
    }

    #[test]
    fn test_optional_emp_id_column() {
        let (_guard, path) =
            write_roster("name,email,emp_id\nJohn Smith,john@example.com,EMP001\n");
        let roster = load_roster(&path).unwrap();
        assert_eq!(roster[0].emp_id.as_deref(), Some("EMP001"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_roster(Path::new("/nonexistent/roster.csv")).is_err());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let (_guard, path) = write_roster("name,email\n,missing@example.com\n");
        assert!(load_roster(&path).is_err());
    }

    #[test]
    fn test_empty_roster_rejected() {
        let (_guard, path) = write_roster("name,email\n");
        assert!(load_roster(&path).is_err());
    }
}
