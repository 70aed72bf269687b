//! Hand-built fixtures shared by unit tests.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::types::{
    Alert, AlertType, ClusterTrends, DailyDigest, NewsArticle, Priority, PriorityDistribution,
    RiskLevel, Sentiment, TopicCluster, WeeklyComparison, WeeklyTrend,
};

/// `2024-05-<day> <hour>:30:00`.
pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .unwrap()
        .and_hms_opt(hour, 30, 0)
        .unwrap()
}

pub fn article(id: &str, title: &str, published_at: NaiveDateTime) -> NewsArticle {
    NewsArticle {
        id: id.to_string(),
        title: title.to_string(),
        content: format!("Report on {}.", title),
        source: "Eenadu".to_string(),
        published_at,
        url: format!("https://news.example/{}", id),
        relevance_score: 85,
        district: "Guntur".to_string(),
        category: "traffic".to_string(),
        priority: Priority::Medium,
        keywords: vec!["checkpost".to_string(), "highway".to_string()],
        sentiment: Sentiment::Neutral,
        location: None,
        crime_tags: None,
        officers_involved: None,
    }
}

pub fn cluster(id: &str, title: &str, summary: &str, priority: Priority) -> TopicCluster {
    TopicCluster {
        id: id.to_string(),
        title: title.to_string(),
        articles: vec![],
        summary: summary.to_string(),
        priority,
        affected_districts: vec!["Kadapa".to_string()],
        related_articles: vec![],
        trends: ClusterTrends {
            sentiment: Sentiment::Neutral,
            coverage: 40,
            sources: vec!["Sakshi".to_string()],
            weekly_trend: WeeklyTrend::Stable,
        },
        action_items: None,
        risk_level: RiskLevel::Low,
    }
}

pub fn alert(id: &str, priority: Priority) -> Alert {
    Alert {
        id: id.to_string(),
        alert_type: AlertType::Breaking,
        title: format!("Alert {}", id),
        description: "Units dispatched.".to_string(),
        priority,
        districts: vec!["Visakhapatnam".to_string()],
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        action_required: true,
    }
}

/// A digest over the given clusters with fixed counts and no weather.
pub fn digest(clusters: Vec<TopicCluster>, alerts: Vec<Alert>) -> DailyDigest {
    DailyDigest {
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        total_articles: 32,
        relevant_articles: 24,
        weekly_comparison: WeeklyComparison {
            articles_change: 6,
            priority_distribution: PriorityDistribution::from_clusters(&clusters),
            top_districts: vec!["Visakhapatnam".to_string(), "Vijayawada".to_string()],
        },
        topic_clusters: clusters,
        districts: vec!["Visakhapatnam".to_string(), "Vijayawada".to_string(), "Kadapa".to_string()],
        generated_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
        alerts,
        weather_impact: None,
    }
}
