use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{AlertType, Priority, RiskLevel, Sentiment, WeeklyTrend};

/// Article timestamps as `yyyy-MM-dd HH:mm:ss`, the feed's own format.
pub mod article_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(at: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&at.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Approximate place an article refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// Struct representing a synthesized news article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub content: String,
    pub source: String,
    #[serde(with = "article_timestamp")]
    pub published_at: NaiveDateTime,
    pub url: String,
    /// Always within 0..=100.
    pub relevance_score: u8,
    pub district: String,
    pub category: String,
    pub priority: Priority,
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crime_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub officers_involved: Option<Vec<String>>,
}

impl NewsArticle {
    pub fn published_on(&self) -> NaiveDate {
        self.published_at.date()
    }
}

/// Aggregate trend metrics for a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterTrends {
    pub sentiment: Sentiment,
    /// Percent of the day's coverage.
    pub coverage: u8,
    pub sources: Vec<String>,
    pub weekly_trend: WeeklyTrend,
}

/// Struct representing a topic cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicCluster {
    pub id: String,
    pub title: String,
    pub articles: Vec<NewsArticle>,
    pub summary: String,
    pub priority: Priority,
    pub affected_districts: Vec<String>,
    /// Articles from the seven days before the digest date.
    pub related_articles: Vec<NewsArticle>,
    pub trends: ClusterTrends,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_items: Option<Vec<String>>,
    pub risk_level: RiskLevel,
}

impl TopicCluster {
    pub fn action_items(&self) -> &[String] {
        self.action_items.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityDistribution {
    pub fn from_clusters(clusters: &[TopicCluster]) -> Self {
        clusters
            .iter()
            .fold(Self::default(), |mut acc, cluster| {
                match cluster.priority {
                    Priority::High => acc.high += 1,
                    Priority::Medium => acc.medium += 1,
                    Priority::Low => acc.low += 1,
                }
                acc
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyComparison {
    /// Signed percent change against the previous week.
    pub articles_change: i32,
    pub priority_distribution: PriorityDistribution,
    pub top_districts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub districts: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub action_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherImpact {
    pub condition: String,
    /// Degrees Celsius.
    pub temperature: i32,
    pub description: String,
    pub crime_correlation: Priority,
    pub recommendations: Vec<String>,
}

/// The synthesized bundle for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDigest {
    pub date: NaiveDate,
    pub total_articles: usize,
    pub relevant_articles: usize,
    pub topic_clusters: Vec<TopicCluster>,
    pub districts: Vec<String>,
    pub generated_at: DateTime<Utc>,
    pub weekly_comparison: WeeklyComparison,
    pub alerts: Vec<Alert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_impact: Option<WeatherImpact>,
}

impl DailyDigest {
    pub fn high_priority_clusters(&self) -> usize {
        self.topic_clusters
            .iter()
            .filter(|c| c.priority == Priority::High)
            .count()
    }

    pub fn cluster(&self, id: &str) -> Option<&TopicCluster> {
        self.topic_clusters.iter().find(|c| c.id == id)
    }

    /// Percentage of relevant articles, 0 when nothing was collected.
    pub fn relevance_rate(&self) -> u32 {
        relevance_rate(self.relevant_articles, self.total_articles)
    }

    pub fn focus_district(&self) -> &str {
        self.weekly_comparison
            .top_districts
            .first()
            .map(String::as_str)
            .unwrap_or("n/a")
    }
}

/// Rounded `relevant / total` percentage. A zero total yields 0 rather than NaN.
pub fn relevance_rate(relevant: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((relevant as f64 / total as f64) * 100.0).round() as u32
}

/// One announced step of the processing sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStatus {
    pub step: String,
    pub progress: u8,
    pub is_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub favorite_districts: Vec<String>,
}

impl UserPreferences {
    pub fn is_favorite(&self, district: &str) -> bool {
        self.favorite_districts
            .iter()
            .any(|d| d.eq_ignore_ascii_case(district))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relevance_rate_zero_total() {
        assert_eq!(relevance_rate(0, 0), 0);
        assert_eq!(relevance_rate(5, 0), 0);
    }

    #[test]
    fn test_relevance_rate_rounds() {
        assert_eq!(relevance_rate(1, 3), 33);
        assert_eq!(relevance_rate(2, 3), 67);
        assert_eq!(relevance_rate(30, 30), 100);
    }

    #[test]
    fn test_published_at_uses_feed_format() {
        let json = serde_json::json!({
            "id": "article-1",
            "title": "Patrol",
            "content": "Night patrol.",
            "source": "Eenadu",
            "publishedAt": "2024-05-01 07:05:09",
            "url": "https://example.com/1",
            "relevanceScore": 80,
            "district": "Guntur",
            "category": "patrol",
            "priority": "low",
            "keywords": [],
            "sentiment": "neutral"
        });
        let article: NewsArticle = serde_json::from_value(json).unwrap();
        assert_eq!(
            article.published_at,
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(7, 5, 9)
                .unwrap()
        );
        let back = serde_json::to_value(&article).unwrap();
        assert_eq!(back["publishedAt"], "2024-05-01 07:05:09");

        let mut bad = back;
        bad["publishedAt"] = serde_json::json!("2024-05-01T07:05:09");
        assert!(serde_json::from_value::<NewsArticle>(bad).is_err());
    }

    #[test]
    fn test_alert_type_field_is_named_type() {
        let alert = Alert {
            id: "alert-9".to_string(),
            alert_type: AlertType::Escalation,
            title: "t".to_string(),
            description: "d".to_string(),
            priority: Priority::Low,
            districts: vec![],
            timestamp: DateTime::from_timestamp(0, 0).unwrap(),
            action_required: false,
        };
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "escalation");
        assert_eq!(json["actionRequired"], false);
    }
}
