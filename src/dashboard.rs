//! Controller tying the processing sequence, the synthesizer, state and the
//! export surfaces together.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use std::path::PathBuf;
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::dates::DateWindow;
use crate::environment::DeskConfig;
use crate::error::{DashboardError, Result};
use crate::export::{
    self, cluster_export, cluster_export_filename, clusters_csv, clusters_csv_filename,
    digest_summary, digest_summary_filename, parse_recipients, share_or_copy, shareable_link,
    Clipboard, EmailDraft, ShareOutcome, SharePayload, Sharer,
};
use crate::pipeline::{run_steps, AutoRefresh, ProcessingOutcome, RefreshTick, PROCESSING_STEPS};
use crate::report::{build_report, render_text, report_filename, RenderOptions, ReportBranding};
use crate::schedule::ScheduleRequest;
use crate::state::AppState;
use crate::synth::{generate_analytics, generate_digest};
use crate::types::{AnalyticsData, DailyDigest, NotificationKind, ProcessingStatus, TopicCluster};
use crate::TARGET_STATE;

pub struct Dashboard<R: Rng> {
    state: AppState,
    config: DeskConfig,
    branding: ReportBranding,
    rng: R,
    analytics: Option<AnalyticsData>,
    status_tx: watch::Sender<Option<ProcessingStatus>>,
    auto_refresh: AutoRefresh,
}

impl<R: Rng> Dashboard<R> {
    pub fn new(config: DeskConfig, rng: R, today: NaiveDate) -> Self {
        let mut state = AppState::new(today);
        state.preferences.favorite_districts = config.favorite_districts.clone();
        let (status_tx, _) = watch::channel(None);
        let auto_refresh = AutoRefresh::new(config.refresh_interval);
        Self {
            state,
            config,
            branding: ReportBranding::default(),
            rng,
            analytics: None,
            status_tx,
            auto_refresh,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn branding(&self) -> &ReportBranding {
        &self.branding
    }

    pub fn analytics(&self) -> Option<&AnalyticsData> {
        self.analytics.as_ref()
    }

    /// Progress of the current or last processing run.
    pub fn subscribe_status(&self) -> watch::Receiver<Option<ProcessingStatus>> {
        self.status_tx.subscribe()
    }

    pub fn status(&self) -> Option<ProcessingStatus> {
        self.status_tx.borrow().clone()
    }

    fn digest(&self) -> Result<&DailyDigest> {
        self.state.digest().ok_or(DashboardError::NoDigest)
    }

    pub fn cluster(&self, id: &str) -> Result<&TopicCluster> {
        self.digest()?
            .cluster(id)
            .ok_or_else(|| DashboardError::ClusterNotFound(id.to_string()))
    }

    /// Id of the cluster at 1-based `position` in the digest.
    pub fn cluster_id_at(&self, position: usize) -> Result<String> {
        let digest = self.digest()?;
        position
            .checked_sub(1)
            .and_then(|i| digest.topic_clusters.get(i))
            .map(|c| c.id.clone())
            .ok_or_else(|| DashboardError::ClusterNotFound(format!("#{}", position)))
    }

    /// Runs the processing sequence for `date`, then synthesizes and applies
    /// a new digest. A cancelled run leaves the previous digest in place.
    pub async fn process_news_feed(
        &mut self,
        date: NaiveDate,
        cancel_rx: &mut watch::Receiver<bool>,
    ) -> Result<&DailyDigest> {
        self.state.selected_date = date;
        let outcome = run_steps(
            &PROCESSING_STEPS,
            self.config.step_delay,
            &self.status_tx,
            cancel_rx,
        )
        .await;
        if let ProcessingOutcome::Cancelled { at_step } = outcome {
            warn!(target: TARGET_STATE, "Digest for {} not generated, cancelled at step {}", date, at_step + 1);
            return Err(DashboardError::Cancelled);
        }

        let now = Utc::now();
        let digest = generate_digest(date, now, &mut self.rng);
        self.analytics = Some(generate_analytics(&mut self.rng));
        self.state.apply_digest(digest, now);
        self.digest()
    }

    /// Validates `input` against `window` and processes the chosen date.
    pub async fn select_date(
        &mut self,
        window: &DateWindow,
        input: &str,
        cancel_rx: &mut watch::Receiver<bool>,
    ) -> Result<&DailyDigest> {
        let date = window.select(input)?;
        self.process_news_feed(date, cancel_rx).await
    }

    /// Re-processes the currently selected date.
    pub async fn refresh(
        &mut self,
        tick: RefreshTick,
        cancel_rx: &mut watch::Receiver<bool>,
    ) -> Result<&DailyDigest> {
        info!(target: TARGET_STATE, "Auto-refresh {} for {}", tick.sequence, self.state.selected_date);
        let date = self.state.selected_date;
        self.process_news_feed(date, cancel_rx).await
    }

    /// Starts or stops the auto-refresh timer; ticks arrive on `tx`.
    pub fn toggle_auto_refresh(&mut self, tx: mpsc::Sender<RefreshTick>) -> bool {
        let enabled = self.auto_refresh.toggle(tx);
        self.state.set_auto_refresh(enabled);
        enabled
    }

    fn record(&mut self, title: &str, message: &str, kind: NotificationKind) {
        self.state.notifications.push(title, message, kind, Utc::now());
    }

    /// Renders the printable report with the alerts still active and saves it.
    pub fn export_report(&mut self, ansi: bool, generated_at: DateTime<Utc>) -> Result<PathBuf> {
        let digest = self.digest()?;
        let document = build_report(digest, self.state.alerts(), &self.branding, generated_at);
        let text = render_text(&document, RenderOptions { ansi });
        let filename = report_filename(&self.branding, digest.date);
        let path = export::write_export(&self.config.export_dir, &filename, text.as_bytes())?;
        self.record(
            "Report Generated",
            "Daily digest report has been saved successfully",
            NotificationKind::Success,
        );
        Ok(path)
    }

    pub fn export_cluster_json(&mut self, id: &str, today: NaiveDate) -> Result<PathBuf> {
        let cluster = self.cluster(id)?;
        let bytes = serde_json::to_vec_pretty(&cluster_export(cluster)).map_err(anyhow::Error::from)?;
        let filename = cluster_export_filename(cluster, today);
        let path = export::write_export(&self.config.export_dir, &filename, &bytes)?;
        self.record(
            "Cluster Exported",
            "Cluster data has been exported as JSON",
            NotificationKind::Success,
        );
        Ok(path)
    }

    pub fn export_summary_json(&mut self) -> Result<PathBuf> {
        let digest = self.digest()?;
        let bytes = serde_json::to_vec_pretty(&digest_summary(digest)).map_err(anyhow::Error::from)?;
        let filename = digest_summary_filename(digest);
        let path = export::write_export(&self.config.export_dir, &filename, &bytes)?;
        self.record(
            "Summary Exported",
            "Digest summary has been exported as JSON",
            NotificationKind::Success,
        );
        Ok(path)
    }

    pub fn export_clusters_csv(&mut self) -> Result<PathBuf> {
        let digest = self.digest()?;
        let csv = clusters_csv(digest)?;
        let filename = clusters_csv_filename(digest);
        let path = export::write_export(&self.config.export_dir, &filename, csv.as_bytes())?;
        self.record(
            "Clusters Exported",
            "Topic clusters have been exported as CSV",
            NotificationKind::Success,
        );
        Ok(path)
    }

    pub fn share_cluster(
        &mut self,
        id: &str,
        sharer: Option<&dyn Sharer>,
        clipboard: &mut dyn Clipboard,
    ) -> Result<ShareOutcome> {
        let digest = self.digest()?;
        let url = shareable_link(&self.config.share_base_url, digest);
        let payload = SharePayload::for_cluster(self.cluster(id)?, &url);
        let outcome = share_or_copy(sharer, clipboard, &payload)?;
        let message = match outcome {
            ShareOutcome::Shared => "Cluster details have been shared",
            ShareOutcome::Copied => "Cluster details copied to clipboard",
        };
        self.record("Cluster Shared", message, NotificationKind::Success);
        Ok(outcome)
    }

    /// Composes the digest email for comma-separated `recipients`. Nothing is sent.
    pub fn draft_email(&mut self, recipients: &str, message: Option<&str>) -> Result<EmailDraft> {
        let recipients = parse_recipients(recipients);
        if recipients.is_empty() {
            return Err(DashboardError::NoRecipients);
        }
        let draft = EmailDraft::for_digest(self.digest()?, recipients, message);
        info!(
            target: TARGET_STATE,
            "Digest email drafted for {} recipient(s)",
            draft.recipients.len()
        );
        self.record(
            "Email Drafted",
            &format!("Digest email prepared for {}", draft.recipients.join(", ")),
            NotificationKind::Success,
        );
        Ok(draft)
    }

    /// Validates and acknowledges a delivery schedule. Nothing is delivered.
    pub fn schedule_report(&mut self, request: &ScheduleRequest) -> Result<()> {
        request.validate()?;
        info!(
            target: TARGET_STATE,
            "Report scheduled {} at {} for {} recipient(s)",
            request.frequency,
            request.time,
            request.recipients.len()
        );
        self.record("Report Scheduled", &request.confirmation(), NotificationKind::Success);
        Ok(())
    }

    pub fn dismiss_alert(&mut self, id: &str) -> bool {
        self.state.dismiss_alert(id, Utc::now())
    }

    pub fn archive_cluster(&mut self, id: &str) -> Result<()> {
        self.cluster(id)?;
        self.state.archive_cluster(id, Utc::now());
        Ok(())
    }
}
