//! Digest synthesizer.
//!
//! Produces a `DailyDigest` whose shape is fixed and whose content is drawn
//! uniformly from the pools in `pools`. Nothing here reads real data, so every
//! generator takes the RNG explicitly; pass a seeded `StdRng` to reproduce a
//! digest.

mod article;
mod cluster;
mod digest;
pub mod pools;
mod supplemental;

use rand::Rng;

pub use article::{generate_article, MAX_RELEVANCE, MIN_RELEVANCE};
pub use cluster::{generate_topic_cluster, MAX_TREND_SOURCES};
pub use digest::{
    generate_digest, CLUSTER_SIZE, HISTORY_DAYS, MAX_ARTICLES_PER_DAY, MAX_CLUSTERS,
    MAX_RELATED_ARTICLES, MIN_ARTICLES_PER_DAY, RELEVANCE_THRESHOLD,
};
pub use supplemental::{generate_alerts, generate_analytics, generate_weather};

/// Uniform choice from a non-empty pool.
fn pick<'a, T, R: Rng + ?Sized>(pool: &'a [T], rng: &mut R) -> &'a T {
    &pool[rng.random_range(0..pool.len())]
}

/// The first `n` entries of a pool as owned strings.
fn first_n(pool: &[&str], n: usize) -> Vec<String> {
    pool.iter().take(n).map(|s| s.to_string()).collect()
}

/// Distinct values in first-seen order.
fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Random v4-style id drawn from `rng`, so seeded runs repeat their ids.
fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    uuid::Builder::from_random_bytes(rng.random())
        .into_uuid()
        .simple()
        .to_string()
}
