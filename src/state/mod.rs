//! Interactive dashboard state.
//!
//! Everything the desk remembers between actions lives in `AppState`, which is
//! passed explicitly to whatever needs it. Nothing is persisted; a new process
//! starts from `AppState::new`.

mod filter;
mod notifications;
mod stats;

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashSet;
use tracing::{debug, info};

pub use self::filter::{filter_clusters, matches_search, PriorityFilter, ViewMode};
pub use self::notifications::{NotificationCenter, MAX_NOTIFICATIONS};
pub use self::stats::{signed_percent, DashboardStats};

use crate::types::{Alert, DailyDigest, NotificationKind, TopicCluster, UserPreferences};
use crate::TARGET_STATE;

#[derive(Debug, Clone)]
pub struct AppState {
    pub selected_date: NaiveDate,
    digest: Option<DailyDigest>,
    alerts: Vec<Alert>,
    pub filter: PriorityFilter,
    pub search: String,
    pub view_mode: ViewMode,
    pub show_alerts: bool,
    pub auto_refresh: bool,
    /// Insertion ordered; ids may outlive the digest they came from.
    bookmarks: Vec<String>,
    /// Ids may outlive the digest they came from.
    archived: HashSet<String>,
    pub notifications: NotificationCenter,
    pub last_refresh: Option<DateTime<Utc>>,
    pub preferences: UserPreferences,
}

impl AppState {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            digest: None,
            alerts: Vec::new(),
            filter: PriorityFilter::All,
            search: String::new(),
            view_mode: ViewMode::Grid,
            show_alerts: true,
            auto_refresh: false,
            bookmarks: Vec::new(),
            archived: HashSet::new(),
            notifications: NotificationCenter::default(),
            last_refresh: None,
            preferences: UserPreferences::default(),
        }
    }

    pub fn digest(&self) -> Option<&DailyDigest> {
        self.digest.as_ref()
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Swaps in a freshly synthesized digest. Bookmarks and archives are kept
    /// as they are, even when their ids no longer exist.
    pub fn apply_digest(&mut self, digest: DailyDigest, now: DateTime<Utc>) {
        let message = format!(
            "New digest generated with {} clusters",
            digest.topic_clusters.len()
        );
        info!(
            target: TARGET_STATE,
            "Digest for {} applied: {} clusters, {} alerts",
            digest.date,
            digest.topic_clusters.len(),
            digest.alerts.len()
        );
        self.selected_date = digest.date;
        self.alerts = digest.alerts.clone();
        self.digest = Some(digest);
        self.last_refresh = Some(now);
        self.notifications
            .push("Daily Digest Updated", &message, NotificationKind::Info, now);
    }

    /// Clusters visible under the current filter, search and archive set.
    pub fn filtered_clusters(&self) -> Vec<&TopicCluster> {
        match &self.digest {
            Some(digest) => filter_clusters(
                &digest.topic_clusters,
                self.filter,
                &self.search,
                &self.archived,
            ),
            None => Vec::new(),
        }
    }

    /// Archived clusters that still exist in the current digest, in digest order.
    pub fn archived_clusters(&self) -> Vec<&TopicCluster> {
        self.digest
            .iter()
            .flat_map(|d| d.topic_clusters.iter())
            .filter(|c| self.archived.contains(&c.id))
            .collect()
    }

    pub fn stats(&self) -> Option<DashboardStats> {
        self.digest
            .as_ref()
            .map(|d| DashboardStats::from_digest(d, self.bookmarks.len(), self.archived.len()))
    }

    /// Removes the alert with `id`. Unknown ids leave everything untouched.
    pub fn dismiss_alert(&mut self, id: &str, now: DateTime<Utc>) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        if self.alerts.len() == before {
            debug!(target: TARGET_STATE, "Dismiss ignored, no alert {}", id);
            return false;
        }
        self.notifications.push(
            "Alert Dismissed",
            "Alert has been successfully dismissed",
            NotificationKind::Info,
            now,
        );
        true
    }

    /// Returns whether the cluster is bookmarked afterwards.
    pub fn toggle_bookmark(&mut self, id: &str) -> bool {
        if let Some(pos) = self.bookmarks.iter().position(|b| b == id) {
            self.bookmarks.remove(pos);
            false
        } else {
            self.bookmarks.push(id.to_string());
            true
        }
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b == id)
    }

    pub fn bookmarks(&self) -> &[String] {
        &self.bookmarks
    }

    pub fn archive_cluster(&mut self, id: &str, now: DateTime<Utc>) {
        if self.archived.insert(id.to_string()) {
            self.notifications.push(
                "Cluster Archived",
                "Topic cluster has been archived",
                NotificationKind::Info,
                now,
            );
        }
    }

    pub fn restore_cluster(&mut self, id: &str) -> bool {
        self.archived.remove(id)
    }

    pub fn clear_archives(&mut self) {
        self.archived.clear();
    }

    pub fn is_archived(&self, id: &str) -> bool {
        self.archived.contains(id)
    }

    pub fn archived_count(&self) -> usize {
        self.archived.len()
    }

    pub fn set_filter(&mut self, filter: PriorityFilter) {
        self.filter = filter;
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn set_auto_refresh(&mut self, enabled: bool) {
        self.auto_refresh = enabled;
    }

    pub fn toggle_alerts_panel(&mut self) -> bool {
        self.show_alerts = !self.show_alerts;
        self.show_alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{alert, cluster, digest};
    use crate::types::Priority;

    fn loaded() -> AppState {
        let now = Utc::now();
        let mut state = AppState::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        state.apply_digest(
            digest(
                vec![
                    cluster("c1", "Coastal Security", "Shoreline patrols.", Priority::High),
                    cluster("c2", "Youth Programs", "Mentorship.", Priority::Low),
                    cluster("c3", "Cyber Crime Units", "Digital threats.", Priority::High),
                ],
                vec![
                    alert("alert-1", Priority::High),
                    alert("alert-2", Priority::Medium),
                    alert("alert-3", Priority::High),
                ],
            ),
            now,
        );
        state
    }

    fn visible_ids(state: &AppState) -> Vec<String> {
        state.filtered_clusters().iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_apply_digest_records_notification() {
        let state = loaded();
        assert_eq!(state.alerts().len(), 3);
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(
            state.notifications.latest().map(|n| n.message.as_str()),
            Some("New digest generated with 3 clusters")
        );
        assert!(state.last_refresh.is_some());
    }

    #[test]
    fn test_dismiss_removes_exactly_one() {
        let mut state = loaded();
        assert!(state.dismiss_alert("alert-2", Utc::now()));
        let ids: Vec<&str> = state.alerts().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["alert-1", "alert-3"]);
        assert_eq!(state.notifications.len(), 2);
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let mut state = loaded();
        let before = state.alerts().to_vec();
        assert!(!state.dismiss_alert("alert-42", Utc::now()));
        assert_eq!(state.alerts(), &before[..]);
        assert_eq!(state.notifications.len(), 1);
    }

    #[test]
    fn test_archive_and_restore() {
        let mut state = loaded();
        state.set_filter(PriorityFilter::Only(Priority::High));
        state.set_search("cyber");
        assert_eq!(visible_ids(&state), vec!["c3"]);

        state.archive_cluster("c3", Utc::now());
        assert!(visible_ids(&state).is_empty());
        assert_eq!(state.archived_clusters().len(), 1);

        assert!(state.restore_cluster("c3"));
        assert_eq!(visible_ids(&state), vec!["c3"]);
        assert!(state.archived_clusters().is_empty());
    }

    #[test]
    fn test_stale_ids_survive_new_digest() {
        let mut state = loaded();
        state.toggle_bookmark("c1");
        state.archive_cluster("c2", Utc::now());

        state.apply_digest(digest(vec![], vec![]), Utc::now());
        assert!(state.is_bookmarked("c1"));
        assert!(state.is_archived("c2"));
        assert!(state.archived_clusters().is_empty());
        assert_eq!(state.stats().map(|s| (s.bookmarked, s.archived)), Some((1, 1)));
    }

    #[test]
    fn test_toggle_bookmark() {
        let mut state = loaded();
        assert!(state.toggle_bookmark("c2"));
        assert!(state.toggle_bookmark("c1"));
        assert_eq!(state.bookmarks(), &["c2".to_string(), "c1".to_string()]);
        assert!(!state.toggle_bookmark("c2"));
        assert_eq!(state.bookmarks(), &["c1".to_string()]);
    }

    #[test]
    fn test_no_digest_shows_nothing() {
        let state = AppState::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(state.filtered_clusters().is_empty());
        assert!(state.stats().is_none());
    }
}
