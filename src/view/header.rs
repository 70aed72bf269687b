use colored::Colorize;

use super::bar;
use crate::state::{signed_percent, AppState, DashboardStats};
use crate::types::ProcessingStatus;

pub fn render_header(state: &AppState) -> String {
    let mode = if state.auto_refresh {
        "Auto-Refresh ON".bright_green()
    } else {
        "Manual Mode".yellow()
    };
    let districts = state
        .digest()
        .map(|d| format!("{} Districts", d.districts.len()))
        .unwrap_or_else(|| "No digest".to_string());
    let last = state
        .last_refresh
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string());
    let unread = state.notifications.unread_count();
    let alerts = state.alerts().len();

    let mut lines = vec![
        "═".repeat(80).bright_blue().to_string(),
        format!(
            "{}  {}",
            "ANDHRA PRADESH STATE POLICE".bright_blue().bold(),
            "Intelligence Analysis & News Monitoring System".dimmed()
        ),
        format!(
            "{}  |  {}  |  Last: {}  |  Date: {}",
            mode, districts, last, state.selected_date
        ),
    ];
    if unread > 0 || alerts > 0 {
        lines.push(format!(
            "{} unread notification(s)  |  {} active alert(s)",
            unread,
            if alerts > 0 {
                alerts.to_string().bright_red().bold()
            } else {
                alerts.to_string().normal()
            }
        ));
    }
    lines.push("═".repeat(80).bright_blue().to_string());
    lines.join("\n")
}

/// The five headline cards, one per line.
pub fn render_stats(stats: &DashboardStats) -> String {
    let rows = [
        (
            "News Articles",
            stats.total_articles.to_string(),
            format!(
                "{} vs last week",
                signed_percent(stats.articles_change)
            ),
        ),
        (
            "Relevant Articles",
            stats.relevant_articles.to_string(),
            format!("{}% relevance rate", stats.relevance_rate),
        ),
        (
            "Topic Clusters",
            stats.cluster_count.to_string(),
            format!("{} high priority", stats.high_priority_clusters),
        ),
        (
            "AP Districts",
            stats.district_count.to_string(),
            format!("Focus: {}", stats.focus_district),
        ),
        (
            "Bookmarked",
            stats.bookmarked.to_string(),
            format!("{} archived", stats.archived),
        ),
    ];
    rows.iter()
        .map(|(label, value, detail)| {
            format!("{:<18} {:>6}  {}", label, value.bold(), detail.dimmed())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_progress(status: &ProcessingStatus) -> String {
    let gauge = format!(
        "[{:<30}]",
        bar(f64::from(status.progress), 100.0, 30)
    );
    match &status.error {
        Some(error) => format!(
            "{} {:>3}% {} ({})",
            gauge,
            status.progress,
            status.step,
            error.bright_red()
        ),
        None => format!("{} {:>3}% {}", gauge.bright_blue(), status.progress, status.step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::tests::plain;

    #[test]
    fn test_stats_lines() {
        let stats = DashboardStats {
            total_articles: 0,
            articles_change: -4,
            relevant_articles: 0,
            relevance_rate: 0,
            cluster_count: 0,
            high_priority_clusters: 0,
            district_count: 0,
            focus_district: "n/a".to_string(),
            bookmarked: 1,
            archived: 2,
        };
        let out = plain(&render_stats(&stats));
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("-4% vs last week"));
        assert!(out.contains("0% relevance rate"));
        assert!(out.contains("Focus: n/a"));
        assert!(out.contains("2 archived"));
    }

    #[test]
    fn test_progress_line() {
        let status = ProcessingStatus {
            step: "Clustering articles by operational categories...".to_string(),
            progress: 50,
            is_complete: false,
            error: None,
        };
        let out = plain(&render_progress(&status));
        assert!(out.starts_with(&format!("[{}{}]", "█".repeat(15), " ".repeat(15))));
        assert!(out.contains(" 50% Clustering"));
    }
}
