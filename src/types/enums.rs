//! Closed enumerations shared by articles, clusters and alerts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational priority of an article, cluster or alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

/// Four-value severity tag attached to a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl WeeklyTrend {
    pub const ALL: [WeeklyTrend; 3] = [
        WeeklyTrend::Increasing,
        WeeklyTrend::Decreasing,
        WeeklyTrend::Stable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeeklyTrend::Increasing => "increasing",
            WeeklyTrend::Decreasing => "decreasing",
            WeeklyTrend::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistrictTrend {
    Up,
    Down,
    Stable,
}

impl DistrictTrend {
    pub const ALL: [DistrictTrend; 3] = [DistrictTrend::Up, DistrictTrend::Down, DistrictTrend::Stable];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistrictTrend::Up => "up",
            DistrictTrend::Down => "down",
            DistrictTrend::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Breaking,
    Pattern,
    Escalation,
    Weather,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Breaking => "breaking",
            AlertType::Pattern => "pattern",
            AlertType::Escalation => "escalation",
            AlertType::Weather => "weather",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Priority, Sentiment, RiskLevel, WeeklyTrend, DistrictTrend, AlertType);

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&RiskLevel::Critical).unwrap(), "\"critical\"");
        assert_eq!(
            serde_json::from_str::<Priority>("\"medium\"").unwrap(),
            Priority::Medium
        );
        assert_eq!(AlertType::Weather.to_string(), "weather");
    }

    #[test]
    fn test_district_trend_display_matches_serde() {
        for trend in DistrictTrend::ALL {
            assert_eq!(
                serde_json::to_string(&trend).unwrap(),
                format!("\"{}\"", trend)
            );
        }
        assert_eq!(DistrictTrend::Up.to_string(), "up");
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert!("urgent".parse::<Priority>().is_err());
    }
}
