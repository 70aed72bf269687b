//! Alerts, weather impact and analytics that accompany a digest.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::pools::{SOURCES, WEATHER_CONDITIONS, WEATHER_RECOMMENDATIONS};
use super::{first_n, pick};
use crate::types::{
    Alert, AlertType, AnalyticsData, Bucket, CrimePatterns, DistrictStats, DistrictTrend,
    Priority, PriorityDistribution, SourceReliability, WeatherImpact,
};

fn alert(
    id: &str,
    alert_type: AlertType,
    title: &str,
    description: &str,
    priority: Priority,
    districts: &[&str],
    timestamp: DateTime<Utc>,
) -> Alert {
    Alert {
        id: id.to_string(),
        alert_type,
        title: title.to_string(),
        description: description.to_string(),
        priority,
        districts: districts.iter().map(|d| d.to_string()).collect(),
        timestamp,
        action_required: true,
    }
}

/// Returns between zero and three of the standing alerts, newest first.
pub fn generate_alerts<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<Alert> {
    let mut alerts = vec![
        alert(
            "alert-1",
            AlertType::Breaking,
            "Multi-Vehicle Accident on NH-16 Near Visakhapatnam",
            "Major traffic incident on National Highway 16 requiring immediate response. Multiple units dispatched to scene.",
            Priority::High,
            &["Visakhapatnam", "Anakapalli"],
            now,
        ),
        alert(
            "alert-2",
            AlertType::Pattern,
            "Increased Property Crime Reports in Vijayawada",
            "Pattern analysis indicates 35% increase in property crime reports over the past week in commercial areas.",
            Priority::Medium,
            &["Vijayawada"],
            now - Duration::hours(2),
        ),
        alert(
            "alert-3",
            AlertType::Weather,
            "Cyclone Warning for Coastal Districts",
            "Meteorological department issues cyclone warning for coastal areas. Enhanced security measures required.",
            Priority::High,
            &["Srikakulam", "Sompeta", "Kakinada"],
            now - Duration::hours(4),
        ),
    ];
    alerts.truncate(rng.random_range(0..=3));
    alerts
}

pub fn generate_weather<R: Rng + ?Sized>(rng: &mut R) -> WeatherImpact {
    let condition = pick(WEATHER_CONDITIONS, rng).to_string();
    let recommendation_count = rng.random_range(2..=4);

    WeatherImpact {
        temperature: rng.random_range(25..=39),
        description: format!(
            "{} weather conditions typical for Andhra Pradesh coastal region may impact patrol operations and response times.",
            condition
        ),
        condition,
        crime_correlation: *pick(&Priority::ALL, rng),
        recommendations: first_n(WEATHER_RECOMMENDATIONS, recommendation_count),
    }
}

/// `base + [0, span)`
fn spread<R: Rng + ?Sized>(rng: &mut R, span: i32, base: i32) -> i32 {
    rng.random_range(0..span) + base
}

pub fn generate_analytics<R: Rng + ?Sized>(rng: &mut R) -> AnalyticsData {
    let time_of_day = vec![
        Bucket::new("00-06", spread(rng, 15, 5)),
        Bucket::new("06-12", spread(rng, 25, 15)),
        Bucket::new("12-18", spread(rng, 35, 20)),
        Bucket::new("18-24", spread(rng, 30, 25)),
    ];

    let day_of_week = vec![
        Bucket::new("Monday", spread(rng, 40, 20)),
        Bucket::new("Tuesday", spread(rng, 35, 18)),
        Bucket::new("Wednesday", spread(rng, 30, 15)),
        Bucket::new("Thursday", spread(rng, 35, 20)),
        Bucket::new("Friday", spread(rng, 50, 30)),
        Bucket::new("Saturday", spread(rng, 60, 35)),
        Bucket::new("Sunday", spread(rng, 45, 25)),
    ];

    let monthly_trend = [
        ("Jan", -3),
        ("Feb", -1),
        ("Mar", 2),
        ("Apr", 5),
        ("May", 8),
        ("Jun", 12),
        ("Jul", 15),
        ("Aug", 18),
        ("Sep", 10),
        ("Oct", 5),
        ("Nov", 2),
        ("Dec", -2),
    ]
    .iter()
    .map(|(label, value)| Bucket::new(label, *value))
    .collect();

    // (district, incident span, incident base, high, medium, low)
    let districts = [
        ("Visakhapatnam", 80, 60, 18, 28, 34),
        ("Vijayawada", 70, 50, 15, 25, 30),
        ("Tirupati", 60, 40, 12, 20, 28),
        ("Kakinada", 50, 30, 8, 18, 24),
        ("Srikakulam", 45, 25, 6, 15, 24),
    ];
    let district_comparison = districts
        .iter()
        .map(|&(district, span, base, high, medium, low)| DistrictStats {
            district: district.to_string(),
            total_incidents: spread(rng, span, base) as u32,
            priority_breakdown: PriorityDistribution { high, medium, low },
            trend: *pick(&DistrictTrend::ALL, rng),
        })
        .collect();

    let reliability = [0.94, 0.91, 0.89, 0.87, 0.88, 0.85];
    let source_reliability = SOURCES
        .iter()
        .zip(reliability)
        .map(|(source, score)| SourceReliability {
            source: source.to_string(),
            score,
        })
        .collect();

    AnalyticsData {
        crime_patterns: CrimePatterns {
            time_of_day,
            day_of_week,
            monthly_trend,
        },
        district_comparison,
        source_reliability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alerts_are_a_prefix_of_the_standing_set() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen_lengths = [false; 4];

        for _ in 0..100 {
            let alerts = generate_alerts(now, &mut rng);
            seen_lengths[alerts.len()] = true;
            for (i, alert) in alerts.iter().enumerate() {
                assert_eq!(alert.id, format!("alert-{}", i + 1));
                assert!(alert.timestamp <= now);
            }
        }
        assert!(seen_lengths.iter().all(|seen| *seen));
    }

    #[test]
    fn test_weather_ranges() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..50 {
            let weather = generate_weather(&mut rng);
            assert!((25..=39).contains(&weather.temperature));
            assert!((2..=4).contains(&weather.recommendations.len()));
            assert!(weather.description.starts_with(&weather.condition));
        }
    }

    #[test]
    fn test_analytics_shape() {
        let mut rng = StdRng::seed_from_u64(9);
        let analytics = generate_analytics(&mut rng);

        assert_eq!(analytics.crime_patterns.time_of_day.len(), 4);
        assert_eq!(analytics.crime_patterns.day_of_week.len(), 7);
        assert_eq!(analytics.crime_patterns.monthly_trend.len(), 12);
        assert_eq!(analytics.district_comparison.len(), 5);
        assert_eq!(analytics.source_reliability.len(), SOURCES.len());

        let night = &analytics.crime_patterns.time_of_day[0];
        assert!((5..20).contains(&night.value));
        assert!(analytics.peak_time_of_day().is_some());
    }
}
