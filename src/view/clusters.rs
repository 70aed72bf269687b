use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

use super::{priority_label, risk_label, section_title};
use crate::state::{AppState, ViewMode};
use crate::types::TopicCluster;

/// Summary characters shown in the compact table.
const PREVIEW_CHARS: usize = 60;

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS - 3).collect();
    format!("{}...", cut)
}

fn marker(state: &AppState, cluster: &TopicCluster) -> &'static str {
    if state.is_bookmarked(&cluster.id) {
        "★"
    } else {
        ""
    }
}

fn favorite_districts(state: &AppState, cluster: &TopicCluster) -> String {
    cluster
        .affected_districts
        .iter()
        .map(|d| {
            if state.preferences.is_favorite(d) {
                format!("{}*", d)
            } else {
                d.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Grid mode is a compact table; list mode prints a detailed card per cluster.
pub fn render_clusters(state: &AppState) -> String {
    let clusters = state.filtered_clusters();
    let title = section_title(&format!(
        "TOPIC CLUSTERS ({} shown, filter: {}{})",
        clusters.len(),
        state.filter,
        if state.search.is_empty() {
            String::new()
        } else {
            format!(", search: {:?}", state.search)
        }
    ));
    if clusters.is_empty() {
        return format!(
            "{}\n{}\n{}",
            title,
            "No clusters match your current filters".bold(),
            "Try adjusting your search criteria or priority filters".dimmed()
        );
    }

    match state.view_mode {
        ViewMode::Grid => format!("{}\n{}", title, cluster_table(state, &clusters)),
        ViewMode::List => {
            let cards: Vec<String> = clusters
                .iter()
                .enumerate()
                .map(|(i, c)| cluster_card(state, i + 1, c))
                .collect();
            format!("{}\n{}", title, cards.join("\n\n"))
        }
    }
}

fn cluster_table(state: &AppState, clusters: &[&TopicCluster]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(
        ["#", "", "Title", "Priority", "Risk", "Districts", "Articles", "Summary"]
            .iter()
            .map(|h| Cell::new(h))
            .collect(),
    ));
    for (i, cluster) in clusters.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()),
            Cell::new(marker(state, cluster)),
            Cell::new(&cluster.title),
            Cell::new(cluster.priority.as_str()),
            Cell::new(cluster.risk_level.as_str()),
            Cell::new(&favorite_districts(state, cluster)),
            Cell::new(&cluster.articles.len().to_string()),
            Cell::new(&preview(&cluster.summary)),
        ]));
    }
    table.to_string()
}

fn cluster_card(state: &AppState, position: usize, cluster: &TopicCluster) -> String {
    let bookmark = marker(state, cluster);
    let mut lines = vec![
        format!(
            "{}. {}{}",
            position,
            cluster.title.bold(),
            if bookmark.is_empty() {
                String::new()
            } else {
                format!(" {}", bookmark.bright_yellow())
            }
        ),
        format!(
            "   Priority: {}  Risk: {}  Sentiment: {}  Trend: {}  Coverage: {}%",
            priority_label(cluster.priority),
            risk_label(cluster.risk_level),
            cluster.trends.sentiment,
            cluster.trends.weekly_trend,
            cluster.trends.coverage
        ),
        format!("   Districts: {}", favorite_districts(state, cluster)),
        format!("   {}", cluster.summary),
        format!(
            "   Articles: {} ({} related)  Sources: {}",
            cluster.articles.len(),
            cluster.related_articles.len(),
            cluster.trends.sources.join(", ")
        ),
    ];
    for action in cluster.action_items() {
        lines.push(format!("   • {}", action));
    }
    lines.push(format!("   id: {}", cluster.id.dimmed()));
    lines.join("\n")
}

pub fn render_archived(state: &AppState) -> String {
    let archived = state.archived_clusters();
    let mut lines = vec![section_title(&format!(
        "ARCHIVED ({})",
        state.archived_count()
    ))];
    for cluster in archived {
        lines.push(format!(
            "  {}  {}  {}",
            priority_label(cluster.priority),
            cluster.title,
            cluster.id.dimmed()
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PriorityFilter;
    use crate::test_support::{cluster, digest};
    use crate::types::Priority;
    use crate::view::tests::plain;
    use chrono::{NaiveDate, Utc};

    fn state() -> AppState {
        let mut state = AppState::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        state.apply_digest(
            digest(
                vec![
                    cluster("c1", "Coastal Security", "Shoreline patrols.", Priority::High),
                    cluster("c2", "Youth Programs", &"m".repeat(80), Priority::Low),
                ],
                vec![],
            ),
            Utc::now(),
        );
        state
    }

    #[test]
    fn test_grid_table_rows() {
        let mut state = state();
        state.toggle_bookmark("c2");
        state.preferences.favorite_districts = vec!["kadapa".to_string()];

        let out = plain(&render_clusters(&state));
        assert!(out.contains("TOPIC CLUSTERS (2 shown, filter: all)"));
        assert!(out.contains("Coastal Security"));
        assert!(out.contains("★"));
        assert!(out.contains("Kadapa*"));
        assert!(out.contains(&format!("{}...", "m".repeat(57))));
    }

    #[test]
    fn test_list_cards_and_empty_filter() {
        let mut state = state();
        state.set_view_mode(ViewMode::List);
        let out = plain(&render_clusters(&state));
        assert!(out.contains("1. Coastal Security"));
        assert!(out.contains("2. Youth Programs"));
        assert!(out.contains("Priority: HIGH  Risk: LOW"));

        state.set_filter(PriorityFilter::Only(Priority::Medium));
        let out = plain(&render_clusters(&state));
        assert!(out.contains("No clusters match your current filters"));
    }

    #[test]
    fn test_archived_section() {
        let mut state = state();
        state.archive_cluster("c1", Utc::now());
        state.archive_cluster("gone", Utc::now());
        let out = plain(&render_archived(&state));
        assert!(out.contains("ARCHIVED (2)"));
        assert!(out.contains("Coastal Security"));
        assert_eq!(out.lines().count(), 3);
    }
}
