use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::Rng;
use tracing::debug;

use super::article::generate_article;
use super::cluster::generate_topic_cluster;
use super::pools::{DISTRICTS, TOP_DISTRICTS};
use super::supplemental::{generate_alerts, generate_weather};
use crate::types::{DailyDigest, NewsArticle, PriorityDistribution, WeeklyComparison};
use crate::TARGET_SYNTH;

/// The target day plus the seven days before it.
pub const HISTORY_DAYS: u64 = 8;

pub const MIN_ARTICLES_PER_DAY: usize = 20;
pub const MAX_ARTICLES_PER_DAY: usize = 44;

/// Articles scoring strictly above this count as relevant.
pub const RELEVANCE_THRESHOLD: u8 = 70;

/// Relevant articles grouped per cluster.
pub const CLUSTER_SIZE: usize = 4;

pub const MAX_CLUSTERS: usize = 10;

/// Related articles attached to each cluster from earlier days.
pub const MAX_RELATED_ARTICLES: usize = 3;

/// Synthesizes the digest for `date`. Always succeeds.
pub fn generate_digest<R: Rng + ?Sized>(
    date: NaiveDate,
    generated_at: DateTime<Utc>,
    rng: &mut R,
) -> DailyDigest {
    let mut all_articles: Vec<NewsArticle> = Vec::new();
    for offset in 0..HISTORY_DAYS {
        let Some(day) = date.checked_sub_days(Days::new(offset)) else {
            break;
        };
        let per_day = rng.random_range(MIN_ARTICLES_PER_DAY..=MAX_ARTICLES_PER_DAY);
        for j in 0..per_day {
            all_articles.push(generate_article(&format!("{}-{}", day, j), day, rng));
        }
    }

    let (todays, history): (Vec<NewsArticle>, Vec<NewsArticle>) = all_articles
        .into_iter()
        .partition(|article| article.published_on() == date);

    let relevant: Vec<NewsArticle> = todays
        .iter()
        .filter(|article| article.relevance_score > RELEVANCE_THRESHOLD)
        .cloned()
        .collect();

    let cluster_count = (relevant.len() / CLUSTER_SIZE + 1).min(MAX_CLUSTERS);
    let mut topic_clusters = Vec::with_capacity(cluster_count);
    for members in relevant.chunks(CLUSTER_SIZE).take(cluster_count) {
        let mut cluster = generate_topic_cluster(members, rng);
        if let Some(lead) = members.first() {
            cluster.related_articles = history
                .iter()
                .filter(|article| article.category == lead.category)
                .take(MAX_RELATED_ARTICLES)
                .cloned()
                .collect();
        }
        topic_clusters.push(cluster);
    }

    debug!(
        target: TARGET_SYNTH,
        "Synthesized digest for {}: {} articles, {} relevant, {} clusters, {} historical",
        date,
        todays.len(),
        relevant.len(),
        topic_clusters.len(),
        history.len()
    );

    let weekly_comparison = WeeklyComparison {
        articles_change: rng.random_range(-15..15),
        priority_distribution: PriorityDistribution::from_clusters(&topic_clusters),
        top_districts: TOP_DISTRICTS.iter().map(|d| d.to_string()).collect(),
    };

    DailyDigest {
        date,
        total_articles: todays.len(),
        relevant_articles: relevant.len(),
        topic_clusters,
        districts: DISTRICTS.iter().map(|d| d.to_string()).collect(),
        generated_at,
        weekly_comparison,
        alerts: generate_alerts(generated_at, rng),
        weather_impact: Some(generate_weather(rng)),
    }
}
