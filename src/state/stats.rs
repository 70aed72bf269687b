use serde::Serialize;

use crate::types::DailyDigest;

/// The five headline cards shown above the cluster list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_articles: usize,
    pub articles_change: i32,
    pub relevant_articles: usize,
    pub relevance_rate: u32,
    pub cluster_count: usize,
    pub high_priority_clusters: usize,
    pub district_count: usize,
    pub focus_district: String,
    pub bookmarked: usize,
    pub archived: usize,
}

impl DashboardStats {
    pub fn from_digest(digest: &DailyDigest, bookmarked: usize, archived: usize) -> Self {
        Self {
            total_articles: digest.total_articles,
            articles_change: digest.weekly_comparison.articles_change,
            relevant_articles: digest.relevant_articles,
            relevance_rate: digest.relevance_rate(),
            cluster_count: digest.topic_clusters.len(),
            high_priority_clusters: digest.high_priority_clusters(),
            district_count: digest.districts.len(),
            focus_district: digest.focus_district().to_string(),
            bookmarked,
            archived,
        }
    }
}

/// "+6%" / "-3%" / "0%"
pub fn signed_percent(value: i32) -> String {
    if value > 0 {
        format!("+{}%", value)
    } else {
        format!("{}%", value)
    }
}
