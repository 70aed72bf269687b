use chrono::{NaiveDate, NaiveTime};
use rand::Rng;

use super::pools::{
    ARTICLE_CONTENTS, ARTICLE_TITLES, CATEGORIES, CRIME_TAGS, DISTRICTS, HQ_LAT, HQ_LNG,
    KEYWORDS, OFFICERS, SOURCES,
};
use super::{first_n, pick};
use crate::types::{GeoLocation, NewsArticle, Priority, Sentiment};

/// Lowest and highest relevance a synthesized article can get.
pub const MIN_RELEVANCE: u8 = 60;
pub const MAX_RELEVANCE: u8 = 99;

/// Generates one article published at a random time on `date`.
pub fn generate_article<R: Rng + ?Sized>(id: &str, date: NaiveDate, rng: &mut R) -> NewsArticle {
    let seconds = rng.random_range(0..86_400u32);
    let published_at =
        date.and_time(NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or_default());

    let keyword_count = rng.random_range(2..=4);
    let tag_count = rng.random_range(1..=3);
    let officer_count = rng.random_range(1..=2);

    NewsArticle {
        id: id.to_string(),
        title: pick(ARTICLE_TITLES, rng).to_string(),
        content: pick(ARTICLE_CONTENTS, rng).to_string(),
        source: pick(SOURCES, rng).to_string(),
        published_at,
        url: format!("https://example.com/article/{}", id),
        relevance_score: rng.random_range(MIN_RELEVANCE..=MAX_RELEVANCE),
        district: pick(DISTRICTS, rng).to_string(),
        category: pick(CATEGORIES, rng).to_string(),
        priority: *pick(&Priority::ALL, rng),
        keywords: first_n(KEYWORDS, keyword_count),
        sentiment: *pick(&Sentiment::ALL, rng),
        location: Some(GeoLocation {
            lat: HQ_LAT + (rng.random::<f64>() - 0.5) * 2.0,
            lng: HQ_LNG + (rng.random::<f64>() - 0.5) * 2.0,
            address: format!("{} Main Road", rng.random_range(1..=999)),
        }),
        crime_tags: Some(first_n(CRIME_TAGS, tag_count)),
        officers_involved: Some(first_n(OFFICERS, officer_count)),
    }
}
