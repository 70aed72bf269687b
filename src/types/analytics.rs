use serde::{Deserialize, Serialize};

use super::enums::DistrictTrend;
use super::records::PriorityDistribution;

/// A labelled count, kept in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub value: i32,
}

impl Bucket {
    pub fn new(label: &str, value: i32) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimePatterns {
    pub time_of_day: Vec<Bucket>,
    pub day_of_week: Vec<Bucket>,
    /// Percent change per month.
    pub monthly_trend: Vec<Bucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictStats {
    pub district: String,
    pub total_incidents: u32,
    pub priority_breakdown: PriorityDistribution,
    pub trend: DistrictTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReliability {
    pub source: String,
    /// 0.0 ..= 1.0
    pub score: f64,
}

/// Supplementary analytics shown alongside a digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub crime_patterns: CrimePatterns,
    pub district_comparison: Vec<DistrictStats>,
    pub source_reliability: Vec<SourceReliability>,
}

impl AnalyticsData {
    /// Time-of-day bucket with the most incidents.
    pub fn peak_time_of_day(&self) -> Option<&Bucket> {
        self.crime_patterns.time_of_day.iter().max_by_key(|b| b.value)
    }
}
