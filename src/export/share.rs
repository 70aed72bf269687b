use anyhow::Result;
use tracing::{info, warn};

use crate::report::long_date;
use crate::types::{DailyDigest, TopicCluster};
use crate::TARGET_EXPORT;

pub const DEFAULT_EMAIL_MESSAGE: &str =
    "Please find attached the daily intelligence digest for your review.";

/// Highlights listed in an email draft.
const EMAIL_HIGHLIGHTS: usize = 3;
/// Characters of a cluster summary quoted in an email draft.
const EMAIL_SUMMARY_CHARS: usize = 100;

/// What a platform share sheet receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
    /// Used instead when the share sheet is unavailable.
    pub plain_text: String,
}

impl SharePayload {
    pub fn for_cluster(cluster: &TopicCluster, url: &str) -> Self {
        Self {
            title: cluster.title.clone(),
            text: cluster.summary.clone(),
            url: url.to_string(),
            plain_text: share_text(cluster),
        }
    }
}

/// A native share target, if the platform has one.
pub trait Sharer {
    fn share(&self, payload: &SharePayload) -> Result<()>;
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

/// Offers `payload` to the sharer, falling back to copying the plain text
/// when there is no sharer or it fails.
pub fn share_or_copy(
    sharer: Option<&dyn Sharer>,
    clipboard: &mut dyn Clipboard,
    payload: &SharePayload,
) -> Result<ShareOutcome> {
    if let Some(sharer) = sharer {
        match sharer.share(payload) {
            Ok(()) => {
                info!(target: TARGET_EXPORT, "Shared {:?}", payload.title);
                return Ok(ShareOutcome::Shared);
            }
            Err(e) => warn!(
                target: TARGET_EXPORT,
                "Share of {:?} failed, copying instead: {:?}", payload.title, e
            ),
        }
    }
    clipboard.write_text(&payload.plain_text)?;
    Ok(ShareOutcome::Copied)
}

pub fn share_text(cluster: &TopicCluster) -> String {
    format!(
        "{}\n\n{}\n\nAffected Districts: {}",
        cluster.title,
        cluster.summary,
        cluster.affected_districts.join(", ")
    )
}

pub fn shareable_link(base_url: &str, digest: &DailyDigest) -> String {
    format!("{}/digest/{}", base_url.trim_end_matches('/'), digest.date)
}

/// Comma-separated addresses, trimmed, with blanks and repeats dropped.
pub fn parse_recipients(input: &str) -> Vec<String> {
    let mut recipients: Vec<String> = Vec::new();
    for address in input.split(',').map(str::trim) {
        if !address.is_empty() && !recipients.iter().any(|r| r == address) {
            recipients.push(address.to_string());
        }
    }
    recipients
}

/// A composed digest email. Nothing is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Uses `DEFAULT_EMAIL_MESSAGE` when no message is given.
    pub fn for_digest(digest: &DailyDigest, recipients: Vec<String>, message: Option<&str>) -> Self {
        Self {
            recipients,
            subject: email_subject(digest),
            body: email_body(digest, message.unwrap_or(DEFAULT_EMAIL_MESSAGE)),
        }
    }
}

pub fn email_subject(digest: &DailyDigest) -> String {
    format!(
        "AP State Police Daily Digest - {}",
        digest.date.format("%d/%m/%Y")
    )
}

/// Plain-text email draft for the digest. Nothing is sent.
pub fn email_body(digest: &DailyDigest, message: &str) -> String {
    let highlights = digest
        .topic_clusters
        .iter()
        .take(EMAIL_HIGHLIGHTS)
        .enumerate()
        .map(|(i, cluster)| {
            let summary: String = cluster.summary.chars().take(EMAIL_SUMMARY_CHARS).collect();
            format!(
                "{}. {} ({} Priority)\n     - {}...\n     - Affected Districts: {}",
                i + 1,
                cluster.title,
                cluster.priority.as_str().to_uppercase(),
                summary,
                cluster.affected_districts.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Dear Colleague,

{message}

DIGEST SUMMARY:
- Date: {date}
- Total Articles Analyzed: {total}
- Relevant Articles: {relevant}
- Topic Clusters: {clusters}
- High Priority Items: {high}
- Districts Covered: {districts}

KEY HIGHLIGHTS:
{highlights}

For detailed analysis, please access the full digest through the secure portal.

Best regards,
AP State Police Intelligence Division
Generated: {generated}

---
CLASSIFICATION: OFFICIAL USE ONLY
This communication contains sensitive law enforcement information.",
        message = message,
        date = long_date(digest.date),
        total = digest.total_articles,
        relevant = digest.relevant_articles,
        clusters = digest.topic_clusters.len(),
        high = digest.high_priority_clusters(),
        districts = digest.districts.len(),
        highlights = highlights,
        generated = digest.generated_at.format("%d/%m/%Y %H:%M"),
    )
}
