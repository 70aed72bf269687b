//! Terminal rendering of the dashboard.
//!
//! Every function returns a `String`; nothing here prints. Colour comes from
//! `colored`, which decides on its own whether escapes are emitted.

mod clusters;
mod detail;
mod header;
mod panels;

use colored::{ColoredString, Colorize};

pub use self::clusters::{render_archived, render_clusters};
pub use self::detail::render_cluster_detail;
pub use self::header::{render_header, render_progress, render_stats};
pub use self::panels::{render_alerts, render_analytics, render_notifications, render_weather};

use crate::state::AppState;
use crate::types::{AnalyticsData, Priority, ProcessingStatus, RiskLevel};

/// Everything a full dashboard render reads.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub state: &'a AppState,
    pub analytics: Option<&'a AnalyticsData>,
    pub status: Option<&'a ProcessingStatus>,
}

/// Header, panels and cluster list, top to bottom.
pub fn render_dashboard(ctx: ViewContext) -> String {
    let state = ctx.state;
    let mut sections = vec![render_header(state)];

    if let Some(status) = ctx.status.filter(|s| !s.is_complete) {
        sections.push(render_progress(status));
    }

    let Some(digest) = state.digest() else {
        sections.push(format!(
            "{}\n{}",
            "Select a date to analyze AP State Police news feeds".bold(),
            "Choose a date within the last 30 days to begin intelligence analysis".dimmed()
        ));
        return sections.join("\n\n");
    };

    if let Some(stats) = state.stats() {
        sections.push(render_stats(&stats));
    }
    if state.show_alerts && !state.alerts().is_empty() {
        sections.push(render_alerts(state.alerts()));
    }
    if let Some(weather) = &digest.weather_impact {
        sections.push(render_weather(weather));
    }
    if let Some(analytics) = ctx.analytics {
        sections.push(render_analytics(analytics));
    }
    sections.push(render_clusters(state));
    if state.archived_count() > 0 {
        sections.push(render_archived(state));
    }
    if !state.notifications.is_empty() {
        sections.push(render_notifications(&state.notifications));
    }
    sections.join("\n\n")
}

fn section_title(title: &str) -> String {
    format!("{}\n{}", title.bright_blue().bold(), "─".repeat(60).bright_blue())
}

fn priority_label(priority: Priority) -> ColoredString {
    let label = priority.as_str().to_uppercase();
    match priority {
        Priority::High => label.bright_red().bold(),
        Priority::Medium => label.bright_yellow(),
        Priority::Low => label.bright_green(),
    }
}

fn risk_label(risk: RiskLevel) -> ColoredString {
    let label = risk.as_str().to_uppercase();
    match risk {
        RiskLevel::Critical => label.red().bold(),
        RiskLevel::High => label.bright_red(),
        RiskLevel::Medium => label.bright_yellow(),
        RiskLevel::Low => label.bright_green(),
    }
}

/// `width` cells of bar for `value` out of `max`.
fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}
