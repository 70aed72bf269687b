use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::types::{article_timestamp, ClusterTrends, DailyDigest, Priority, RiskLevel, TopicCluster};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleExport<'a> {
    pub title: &'a str,
    pub source: &'a str,
    #[serde(with = "article_timestamp")]
    pub published_at: NaiveDateTime,
    pub relevance_score: u8,
    pub district: &'a str,
}

/// One cluster with its articles trimmed to the fields analysts file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterExport<'a> {
    pub cluster: &'a str,
    pub priority: Priority,
    pub risk_level: RiskLevel,
    pub summary: &'a str,
    pub affected_districts: &'a [String],
    pub articles: Vec<ArticleExport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_items: Option<&'a [String]>,
    pub trends: &'a ClusterTrends,
}

pub fn cluster_export(cluster: &TopicCluster) -> ClusterExport<'_> {
    ClusterExport {
        cluster: &cluster.title,
        priority: cluster.priority,
        risk_level: cluster.risk_level,
        summary: &cluster.summary,
        affected_districts: &cluster.affected_districts,
        articles: cluster
            .articles
            .iter()
            .map(|a| ArticleExport {
                title: &a.title,
                source: &a.source,
                published_at: a.published_at,
                relevance_score: a.relevance_score,
                district: &a.district,
            })
            .collect(),
        action_items: cluster.action_items.as_deref(),
        trends: &cluster.trends,
    }
}

/// Named after the day of export, not the digest date.
pub fn cluster_export_filename(cluster: &TopicCluster, today: NaiveDate) -> String {
    format!("cluster_{}_{}.json", cluster.id, today)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestSummary {
    pub date: NaiveDate,
    pub total_articles: usize,
    pub relevant_articles: usize,
    pub topic_clusters: usize,
    pub high_priority_clusters: usize,
    pub districts: usize,
    pub generated_at: DateTime<Utc>,
}

pub fn digest_summary(digest: &DailyDigest) -> DigestSummary {
    DigestSummary {
        date: digest.date,
        total_articles: digest.total_articles,
        relevant_articles: digest.relevant_articles,
        topic_clusters: digest.topic_clusters.len(),
        high_priority_clusters: digest.high_priority_clusters(),
        districts: digest.districts.len(),
        generated_at: digest.generated_at,
    }
}

pub fn digest_summary_filename(digest: &DailyDigest) -> String {
    format!("AP_Police_Digest_Summary_{}.json", digest.date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{article, at, cluster, digest};
    use serde_json::json;

    #[test]
    fn test_cluster_export_shape() {
        let mut c = cluster("c7", "Coastal Security", "Patrols.", Priority::High);
        c.action_items = Some(vec!["Deploy teams".to_string()]);

        let value = serde_json::to_value(cluster_export(&c)).unwrap();
        assert_eq!(value["cluster"], "Coastal Security");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["riskLevel"], "low");
        assert_eq!(value["affectedDistricts"], json!(["Kadapa"]));
        assert_eq!(value["articles"], json!([]));
        assert_eq!(value["actionItems"], json!(["Deploy teams"]));
        assert_eq!(value["trends"]["weeklyTrend"], "stable");
    }

    #[test]
    fn test_cluster_export_article_fields() {
        let mut c = cluster("c7", "Coastal Security", "Patrols.", Priority::High);
        c.articles = vec![article("a1", "Harbour check", at(1, 7))];

        let value = serde_json::to_value(cluster_export(&c)).unwrap();
        assert_eq!(
            value["articles"][0],
            json!({
                "title": "Harbour check",
                "source": "Eenadu",
                "publishedAt": "2024-05-01 07:30:00",
                "relevanceScore": 85,
                "district": "Guntur",
            })
        );
    }

    #[test]
    fn test_cluster_export_omits_missing_actions() {
        let c = cluster("c7", "Coastal Security", "Patrols.", Priority::High);
        let value = serde_json::to_value(cluster_export(&c)).unwrap();
        assert!(value.get("actionItems").is_none());
        assert_eq!(
            cluster_export_filename(&c, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()),
            "cluster_c7_2024-06-02.json"
        );
    }

    #[test]
    fn test_digest_summary() {
        let d = digest(
            vec![
                cluster("a", "A", "a", Priority::High),
                cluster("b", "B", "b", Priority::Low),
            ],
            vec![],
        );
        let value = serde_json::to_value(digest_summary(&d)).unwrap();
        assert_eq!(
            value,
            json!({
                "date": "2024-05-01",
                "totalArticles": 32,
                "relevantArticles": 24,
                "topicClusters": 2,
                "highPriorityClusters": 1,
                "districts": 3,
                "generatedAt": "2024-05-01T08:00:00Z",
            })
        );
        assert_eq!(
            digest_summary_filename(&d),
            "AP_Police_Digest_Summary_2024-05-01.json"
        );
    }
}
