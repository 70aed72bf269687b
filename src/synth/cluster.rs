use rand::Rng;

use super::pools::{ACTION_ITEMS, CLUSTER_SUMMARIES, CLUSTER_TITLES};
use super::{first_n, pick, random_id, unique_in_order};
use crate::types::{
    ClusterTrends, NewsArticle, Priority, RiskLevel, Sentiment, TopicCluster, WeeklyTrend,
};

/// Maximum number of source names listed in a cluster's trends
pub const MAX_TREND_SOURCES: usize = 3;

/// Builds a cluster around `members`, which must come from one synthesis run.
///
/// Related articles are left empty; the digest fills them from earlier days.
pub fn generate_topic_cluster<R: Rng + ?Sized>(members: &[NewsArticle], rng: &mut R) -> TopicCluster {
    let article_count = rng.random_range(2..=5).min(members.len());
    let district_count = rng.random_range(1..=3);
    let action_count = rng.random_range(2..=5);

    let mut affected_districts = unique_in_order(members.iter().map(|a| a.district.as_str()));
    affected_districts.truncate(district_count);

    let mut sources = unique_in_order(members.iter().map(|a| a.source.as_str()));
    sources.truncate(MAX_TREND_SOURCES);

    TopicCluster {
        id: format!("cluster-{}", random_id(rng)),
        title: pick(CLUSTER_TITLES, rng).to_string(),
        articles: members[..article_count].to_vec(),
        summary: pick(CLUSTER_SUMMARIES, rng).to_string(),
        priority: *pick(&Priority::ALL, rng),
        affected_districts,
        related_articles: Vec::new(),
        trends: ClusterTrends {
            sentiment: *pick(&Sentiment::ALL, rng),
            coverage: rng.random_range(25..=74),
            sources,
            weekly_trend: *pick(&WeeklyTrend::ALL, rng),
        },
        action_items: Some(first_n(ACTION_ITEMS, action_count)),
        risk_level: *pick(&RiskLevel::ALL, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::article::generate_article;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn members(rng: &mut StdRng, n: usize) -> Vec<NewsArticle> {
        let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        (0..n)
            .map(|j| generate_article(&format!("{}-{}", date, j), date, rng))
            .collect()
    }

    #[test]
    fn test_cluster_draws_only_from_members() {
        let mut rng = StdRng::seed_from_u64(5);
        for n in 1..=4 {
            let members = members(&mut rng, n);
            let cluster = generate_topic_cluster(&members, &mut rng);

            assert!(!cluster.articles.is_empty());
            assert!(cluster.articles.len() <= n);
            assert!(cluster.articles.iter().all(|a| members.contains(a)));
            assert!(cluster
                .affected_districts
                .iter()
                .all(|d| members.iter().any(|a| &a.district == d)));
            assert!(cluster.trends.sources.len() <= MAX_TREND_SOURCES);
            assert!((2..=5).contains(&cluster.action_items().len()));
            assert!((25..=74).contains(&cluster.trends.coverage));
            assert!(cluster.related_articles.is_empty());
        }
    }

    #[test]
    fn test_cluster_ids_differ() {
        let mut rng = StdRng::seed_from_u64(6);
        let members = members(&mut rng, 4);
        let a = generate_topic_cluster(&members, &mut rng);
        let b = generate_topic_cluster(&members, &mut rng);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("cluster-"));
    }
}
