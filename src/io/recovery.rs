use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::io::paths::recovery_log_file;

/// Self-documenting header written at the top of a new recovery log.
const FILE_HEADER: &str = "\
<!-- todos recovery log — append-only error recovery data
     This file captures list content that could not be saved or restored
     normally. If todos went missing, their JSON is preserved here.
     Safe to delete if empty or stale. -->

---
";

/// Category of a recovery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryCategory {
    /// The data file could not be parsed; its raw content is preserved.
    Parse,
    /// A save failed; the unsaved JSON is preserved.
    Write,
}

impl fmt::Display for RecoveryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryCategory::Parse => write!(f, "parse"),
            RecoveryCategory::Write => write!(f, "write"),
        }
    }
}

/// A single entry in the recovery log.
#[derive(Debug, Clone)]
pub struct RecoveryEntry {
    pub timestamp: DateTime<Utc>,
    pub category: RecoveryCategory,
    pub description: String,
    pub body: String,
}

impl RecoveryEntry {
    pub fn new(category: RecoveryCategory, description: &str, body: &str) -> Self {
        RecoveryEntry {
            timestamp: Utc::now(),
            category,
            description: description.to_string(),
            body: body.to_string(),
        }
    }

    /// Format this entry as a markdown block for the recovery log.
    fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "## {} — {}: {}\n",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.category,
            self.description,
        ));
        if !self.body.is_empty() {
            out.push('\n');
            out.push_str("```text\n");
            out.push_str(&self.body);
            if !self.body.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
        }
        out.push('\n');
        out.push_str("---\n");
        out
    }
}

/// Append a recovery entry to the log next to the data file. Errors are
/// swallowed; logging must never take the app down.
pub fn log_recovery(data_file: &Path, entry: RecoveryEntry) {
    let _ = log_recovery_inner(data_file, entry);
}

fn log_recovery_inner(data_file: &Path, entry: RecoveryEntry) -> io::Result<()> {
    let path = recovery_log_file(data_file);

    let needs_header = !path.exists() || std::fs::metadata(&path).map_or(true, |m| m.len() == 0);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if needs_header {
        file.write_all(FILE_HEADER.as_bytes())?;
    }
    file.write_all(entry.to_markdown().as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn entry_formatting_has_header_body_and_rule() {
        let entry = RecoveryEntry::new(RecoveryCategory::Write, "save failed", "[{\"id\":0}]");
        let md = entry.to_markdown();
        assert!(md.starts_with("## "));
        assert!(md.contains("write: save failed"));
        assert!(md.contains("```text\n[{\"id\":0}]\n```"));
        assert!(md.ends_with("---\n"));
    }

    #[test]
    fn empty_body_omits_code_fence() {
        let entry = RecoveryEntry::new(RecoveryCategory::Parse, "unreadable file", "");
        let md = entry.to_markdown();
        assert!(!md.contains("```"));
        assert!(md.contains("parse: unreadable file"));
    }

    #[test]
    fn log_writes_header_once_then_appends() {
        let tmp = TempDir::new().unwrap();
        let data_file = tmp.path().join("todos.json");

        log_recovery(
            &data_file,
            RecoveryEntry::new(RecoveryCategory::Parse, "first", "body1"),
        );
        log_recovery(
            &data_file,
            RecoveryEntry::new(RecoveryCategory::Write, "second", "body2"),
        );

        let content = std::fs::read_to_string(tmp.path().join(".recovery.log")).unwrap();
        assert!(content.starts_with("<!-- todos recovery log"));
        assert_eq!(content.matches("todos recovery log").count(), 1);
        assert!(content.contains("parse: first"));
        assert!(content.contains("write: second"));
        assert!(content.find("first").unwrap() < content.find("second").unwrap());
    }
}
