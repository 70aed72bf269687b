//! Files and messages that leave the desk: JSON and CSV exports, share text
//! and email drafts.

mod json;
mod share;
mod tabular;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub use self::json::{
    cluster_export, cluster_export_filename, digest_summary, digest_summary_filename,
    ArticleExport, ClusterExport, DigestSummary,
};
pub use self::share::{
    email_body, email_subject, parse_recipients, share_or_copy, share_text, shareable_link,
    Clipboard, EmailDraft, ShareOutcome, SharePayload, Sharer, DEFAULT_EMAIL_MESSAGE,
};
pub use self::tabular::{clusters_csv, clusters_csv_filename, CSV_HEADER};

use crate::TARGET_EXPORT;

/// Writes `bytes` to `dir/filename`, creating `dir` first if needed.
pub fn write_export(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    let path = dir.join(filename);
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(
        target: TARGET_EXPORT,
        "Wrote {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_export_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("exports");

        let path = write_export(&dir, "a.json", b"{}").unwrap();
        assert_eq!(path, dir.join("a.json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_export_reports_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = write_export(&blocker, "a.json", b"{}").unwrap_err();
        assert!(err.to_string().contains("Failed to create export directory"));
    }
}
