use colored::Colorize;

use super::{priority_label, risk_label, section_title};
use crate::state::AppState;
use crate::types::{NewsArticle, TopicCluster};

fn current_article(article: &NewsArticle) -> Vec<String> {
    let keywords = article
        .keywords
        .iter()
        .map(|k| format!("#{}", k))
        .collect::<Vec<_>>()
        .join(" ");
    vec![
        format!(
            "  • {}  [{} | {}% relevant]",
            article.title.bold(),
            article.source,
            article.relevance_score
        ),
        format!("    {}", article.content),
        format!(
            "    {}  |  {}  |  {}  |  {}",
            article.published_at.format("%b %-d, %Y, %-I:%M %p"),
            article.district,
            article.category,
            keywords.dimmed()
        ),
    ]
}

fn related_article(article: &NewsArticle) -> Vec<String> {
    vec![
        format!(
            "  • {}  [{} | {}]",
            article.title,
            article.source,
            article.published_at.format("%b %d")
        ),
        format!("    {}", article.content.dimmed()),
    ]
}

/// Full view of one cluster: overview, recommended actions, its articles and
/// the related coverage from the week before.
pub fn render_cluster_detail(state: &AppState, cluster: &TopicCluster) -> String {
    let bookmark = if state.is_bookmarked(&cluster.id) {
        format!(" {}", "★".bright_yellow())
    } else {
        String::new()
    };
    let trends = &cluster.trends;
    let mut lines = vec![
        format!(
            "{}  {}{}",
            cluster.title.bold(),
            priority_label(cluster.priority),
            bookmark
        ),
        String::new(),
        "Summary".underline().to_string(),
        format!("  {}", cluster.summary),
        format!(
            "Affected Districts: {}",
            cluster.affected_districts.join(", ")
        ),
        format!(
            "Sentiment: {} ({}% coverage)  Risk: {}  Trend: {}",
            trends.sentiment,
            trends.coverage,
            risk_label(cluster.risk_level),
            trends.weekly_trend
        ),
        format!("Sources: {}", trends.sources.join(", ")),
    ];

    if !cluster.action_items().is_empty() {
        lines.push("Recommended Actions:".underline().to_string());
        lines.extend(
            cluster
                .action_items()
                .iter()
                .enumerate()
                .map(|(i, action)| format!("  {}. {}", i + 1, action)),
        );
    }

    lines.push(String::new());
    lines.push(section_title(&format!(
        "Current Articles ({})",
        cluster.articles.len()
    )));
    for article in &cluster.articles {
        lines.extend(current_article(article));
    }

    if !cluster.related_articles.is_empty() {
        lines.push(String::new());
        lines.push(section_title("Related Articles (Last 7 Days)"));
        for article in &cluster.related_articles {
            lines.extend(related_article(article));
        }
    }
    lines.push(format!("id: {}", cluster.id.dimmed()));
    lines.join("\n")
}
