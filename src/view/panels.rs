use colored::Colorize;

use super::{bar, priority_label, section_title};
use crate::state::NotificationCenter;
use crate::types::{Alert, AnalyticsData, Bucket, NotificationKind, Priority, WeatherImpact};

const BAR_WIDTH: usize = 30;

pub fn render_alerts(alerts: &[Alert]) -> String {
    let mut lines = vec![section_title("ACTIVE ALERTS")];
    for alert in alerts {
        let kind = alert.alert_type.as_str().to_uppercase();
        lines.push(format!(
            "[{}] {} {}  {}",
            alert.id.dimmed(),
            priority_label(alert.priority),
            kind.bold(),
            alert.title
        ));
        lines.push(format!("    {}", alert.description));
        lines.push(format!(
            "    Districts: {}  |  {}{}",
            alert.districts.join(", "),
            alert.timestamp.format("%d/%m %H:%M"),
            if alert.action_required {
                "  |  ACTION REQUIRED".bright_red().bold().to_string()
            } else {
                String::new()
            }
        ));
    }
    lines.join("\n")
}

pub fn render_weather(weather: &WeatherImpact) -> String {
    let correlation = match weather.crime_correlation {
        Priority::High => "High crime correlation".bright_red(),
        Priority::Medium => "Medium crime correlation".bright_yellow(),
        Priority::Low => "Low crime correlation".bright_green(),
    };
    let mut lines = vec![
        section_title("WEATHER IMPACT"),
        format!("{}, {}°C  |  {}", weather.condition, weather.temperature, correlation),
        format!("    {}", weather.description),
    ];
    lines.extend(weather.recommendations.iter().map(|r| format!("    • {}", r)));
    lines.join("\n")
}

fn bucket_rows(buckets: &[Bucket]) -> Vec<String> {
    let max = buckets.iter().map(|b| b.value.abs()).max().unwrap_or(0);
    buckets
        .iter()
        .map(|b| {
            let filled = bar(f64::from(b.value.abs()), f64::from(max), BAR_WIDTH);
            let filled = if b.value < 0 {
                filled.bright_red()
            } else {
                filled.bright_blue()
            };
            format!("    {:<12} {:<w$} {}", b.label, filled, b.value, w = BAR_WIDTH)
        })
        .collect()
}

pub fn render_analytics(analytics: &AnalyticsData) -> String {
    let patterns = &analytics.crime_patterns;
    let mut lines = vec![section_title("CRIME PATTERN ANALYTICS")];

    if let Some(peak) = analytics.peak_time_of_day() {
        lines.push(format!("Peak activity: {} ({})", peak.label.bold(), peak.value));
    }
    lines.push("Time of day".underline().to_string());
    lines.extend(bucket_rows(&patterns.time_of_day));
    lines.push("Day of week".underline().to_string());
    lines.extend(bucket_rows(&patterns.day_of_week));
    lines.push("Monthly trend (%)".underline().to_string());
    lines.extend(bucket_rows(&patterns.monthly_trend));

    lines.push("District comparison".underline().to_string());
    for stats in &analytics.district_comparison {
        let b = &stats.priority_breakdown;
        lines.push(format!(
            "    {:<14} {:>4} incidents  H{} M{} L{}  {}",
            stats.district, stats.total_incidents, b.high, b.medium, b.low, stats.trend
        ));
    }

    lines.push("Source reliability".underline().to_string());
    for source in &analytics.source_reliability {
        lines.push(format!(
            "    {:<16} {:<w$} {:.0}%",
            source.source,
            bar(source.score, 1.0, BAR_WIDTH),
            source.score * 100.0,
            w = BAR_WIDTH
        ));
    }
    lines.join("\n")
}

pub fn render_notifications(center: &NotificationCenter) -> String {
    let mut lines = vec![section_title(&format!(
        "NOTIFICATIONS ({} unread)",
        center.unread_count()
    ))];
    for n in center.items() {
        let marker = if n.read { " " } else { "●" };
        let title = match n.kind {
            NotificationKind::Success => n.title.bright_green(),
            NotificationKind::Warning => n.title.bright_yellow(),
            NotificationKind::Error => n.title.bright_red(),
            NotificationKind::Info => n.title.bright_blue(),
        };
        lines.push(format!(
            "{} {}  {}  {}",
            marker,
            n.timestamp.format("%H:%M"),
            title,
            n.message.dimmed()
        ));
    }
    lines.join("\n")
}
