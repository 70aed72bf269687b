use chrono::{DateTime, Utc};
use tracing::info;

use super::layout::{
    BlockKind, Element, Font, PageWriter, ReportDocument, Rgb, AP_BLUE, BLACK, BORDER_GREY,
    BOX_GREY, CONTENT_TOP, CONTENT_WIDTH, FOOTER_RESERVE, HEADER_HEIGHT, MARGIN, PAGE_HEIGHT,
    PAGE_WIDTH, TABLE_HEADER_FILL, WHITE,
};
use super::wrap::wrap;
use super::{long_date, ReportBranding};
use crate::state::signed_percent;
use crate::types::{Alert, DailyDigest, Priority, RiskLevel, TopicCluster};
use crate::TARGET_REPORT;

/// Recommended actions printed per cluster before summarising the rest.
const MAX_LISTED_ACTIONS: usize = 3;
const TABLE_COLUMNS: [f32; 3] = [50.0, 30.0, 70.0];
const TABLE_ROW_HEIGHT: f32 = 8.0;

fn priority_color(priority: Priority) -> Rgb {
    match priority {
        Priority::High => Rgb(255, 0, 0),
        Priority::Medium => Rgb(255, 165, 0),
        Priority::Low => Rgb(0, 128, 0),
    }
}

fn risk_color(risk: RiskLevel) -> Rgb {
    match risk {
        RiskLevel::Critical => Rgb(255, 0, 0),
        RiskLevel::High => Rgb(255, 100, 0),
        RiskLevel::Medium => Rgb(255, 165, 0),
        RiskLevel::Low => Rgb(0, 128, 0),
    }
}

fn alert_tint(priority: Priority) -> Rgb {
    match priority {
        Priority::High => Rgb(255, 235, 235),
        Priority::Medium => Rgb(255, 248, 235),
        Priority::Low => Rgb(235, 248, 255),
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

fn header_band(branding: &ReportBranding, generated: &str) -> Vec<Element> {
    let text = |x, y, content: &str, font, color| Element::Text {
        x,
        y,
        content: content.to_string(),
        font,
        color,
    };
    vec![
        Element::Rect {
            x: 0.0,
            y: 0.0,
            width: PAGE_WIDTH,
            height: HEADER_HEIGHT,
            fill: Some(AP_BLUE),
            stroke: None,
        },
        Element::Rect {
            x: MARGIN,
            y: 8.0,
            width: 20.0,
            height: 20.0,
            fill: Some(WHITE),
            stroke: None,
        },
        text(MARGIN + 7.0, 20.0, &branding.logo_text, Font::normal(8.0), AP_BLUE),
        text(MARGIN + 30.0, 15.0, &branding.organization, Font::bold(18.0), WHITE),
        text(MARGIN + 30.0, 25.0, &branding.division, Font::normal(10.0), WHITE),
        text(
            PAGE_WIDTH - 80.0,
            15.0,
            &format!("Generated: {}", generated),
            Font::normal(8.0),
            WHITE,
        ),
        text(PAGE_WIDTH - 80.0, 22.0, &branding.classification, Font::normal(8.0), WHITE),
    ]
}

fn footer(branding: &ReportBranding, generated: &str, page: usize, total: usize) -> Vec<Element> {
    vec![
        Element::Line {
            x1: MARGIN,
            y1: PAGE_HEIGHT - 20.0,
            x2: PAGE_WIDTH - MARGIN,
            y2: PAGE_HEIGHT - 20.0,
            color: AP_BLUE,
        },
        Element::Text {
            x: MARGIN,
            y: PAGE_HEIGHT - 12.0,
            content: branding.footer.clone(),
            font: Font::bold(8.0),
            color: AP_BLUE,
        },
        Element::Text {
            x: PAGE_WIDTH - 40.0,
            y: PAGE_HEIGHT - 12.0,
            content: format!("Page {} of {}", page, total),
            font: Font::bold(8.0),
            color: AP_BLUE,
        },
        Element::Text {
            x: PAGE_WIDTH - 80.0,
            y: PAGE_HEIGHT - 6.0,
            content: format!("Generated: {}", generated),
            font: Font::normal(8.0),
            color: AP_BLUE,
        },
    ]
}

fn section_heading(writer: &mut PageWriter, kind: BlockKind, title: &str, required: f32) {
    writer.begin(kind, required);
    writer.text(MARGIN, 0.0, title, Font::bold(14.0), AP_BLUE);
}

/// Lays out the printable digest.
///
/// `alerts` is passed separately from the digest so dismissed alerts stay out
/// of the report.
pub fn build_report(
    digest: &DailyDigest,
    alerts: &[Alert],
    branding: &ReportBranding,
    generated_at: DateTime<Utc>,
) -> ReportDocument {
    let generated = timestamp(generated_at);
    let mut writer = PageWriter::new(header_band(branding, &generated));

    writer.begin(BlockKind::Title, 15.0);
    writer.text(MARGIN, 0.0, "DAILY INTELLIGENCE DIGEST", Font::bold(16.0), BLACK);
    writer.advance(15.0);

    write_details(&mut writer, digest);
    write_executive_summary(&mut writer, digest);

    if !alerts.is_empty() {
        section_heading(&mut writer, BlockKind::AlertsHeading, "ACTIVE ALERTS", 20.0);
        writer.advance(10.0);
        for (index, alert) in alerts.iter().enumerate() {
            write_alert(&mut writer, index, alert);
        }
        writer.advance(10.0);
    }

    section_heading(
        &mut writer,
        BlockKind::ClustersHeading,
        "TOPIC CLUSTER ANALYSIS",
        20.0,
    );
    writer.advance(15.0);
    for (index, cluster) in digest.topic_clusters.iter().enumerate() {
        write_cluster(&mut writer, index, cluster);
    }

    write_statistics(&mut writer, digest);
    write_distribution(&mut writer, branding);

    let doc = writer.finish(format!("Daily Intelligence Digest {}", digest.date), |page, total| {
        footer(branding, &generated, page, total)
    });
    info!(
        target: TARGET_REPORT,
        "Report for {} laid out on {} page(s), {} cluster(s), {} alert(s)",
        digest.date,
        doc.page_count(),
        digest.topic_clusters.len(),
        alerts.len()
    );
    doc
}

fn write_details(writer: &mut PageWriter, digest: &DailyDigest) {
    writer.begin(BlockKind::Details, 40.0);
    writer.rect(MARGIN, 0.0, CONTENT_WIDTH, 30.0, None, Some(BOX_GREY));
    writer.text(MARGIN + 5.0, 8.0, "REPORT DETAILS", Font::bold(10.0), BLACK);
    writer.text(
        MARGIN + 5.0,
        16.0,
        format!("Report Date: {}", long_date(digest.date)),
        Font::normal(10.0),
        BLACK,
    );
    writer.text(
        MARGIN + 5.0,
        22.0,
        format!("Analysis Period: {} (24-hour cycle)", digest.date),
        Font::normal(10.0),
        BLACK,
    );
    writer.text(
        MARGIN + 120.0,
        16.0,
        format!("Total Articles: {}", digest.total_articles),
        Font::normal(10.0),
        BLACK,
    );
    writer.text(
        MARGIN + 120.0,
        22.0,
        format!("Relevant Articles: {}", digest.relevant_articles),
        Font::normal(10.0),
        BLACK,
    );
    writer.advance(40.0);
}

fn write_executive_summary(writer: &mut PageWriter, digest: &DailyDigest) {
    let summary = format!(
        "This daily digest presents analysis of {} news articles from regional sources, \
         with {} deemed operationally relevant. Analysis identified {} distinct topic \
         clusters, with {} classified as high priority. Coverage spans {} operational \
         districts of Andhra Pradesh.",
        digest.total_articles,
        digest.relevant_articles,
        digest.topic_clusters.len(),
        digest.high_priority_clusters(),
        digest.districts.len()
    );
    let lines = wrap(&summary, CONTENT_WIDTH, 10.0);
    let body = lines.len() as f32 * 5.0;

    section_heading(writer, BlockKind::ExecutiveSummary, "EXECUTIVE SUMMARY", 10.0 + body);
    writer.advance(10.0);
    writer.lines(MARGIN, 0.0, &lines, Font::normal(10.0), BLACK, 5.0);
    writer.advance(body + 15.0);
}

fn write_alert(writer: &mut PageWriter, index: usize, alert: &Alert) {
    let description = wrap(&alert.description, CONTENT_WIDTH - 6.0, 9.0);
    let box_height = 14.0 + description.len() as f32 * 4.0;

    writer.begin(BlockKind::Alert(index), box_height + 4.0);
    writer.rect(
        MARGIN,
        0.0,
        CONTENT_WIDTH,
        box_height,
        Some(alert_tint(alert.priority)),
        Some(BORDER_GREY),
    );
    writer.text(
        MARGIN + 3.0,
        6.0,
        format!("ALERT {}: {}", index + 1, alert.title.to_uppercase()),
        Font::bold(10.0),
        BLACK,
    );
    writer.text(
        MARGIN + 3.0,
        12.0,
        format!(
            "Priority: {} | Type: {}",
            alert.priority.as_str().to_uppercase(),
            alert.alert_type.as_str().to_uppercase()
        ),
        Font::normal(9.0),
        BLACK,
    );
    writer.lines(MARGIN + 3.0, 16.0, &description, Font::normal(9.0), BLACK, 4.0);
    writer.advance(box_height + 4.0);
}

struct ClusterText {
    summary: Vec<String>,
    actions: Vec<Vec<String>>,
    remaining_actions: usize,
}

impl ClusterText {
    fn new(cluster: &TopicCluster) -> Self {
        let items = cluster.action_items();
        Self {
            summary: wrap(&cluster.summary, CONTENT_WIDTH, 9.0),
            actions: items
                .iter()
                .take(MAX_LISTED_ACTIONS)
                .map(|action| wrap(&format!("• {}", action), CONTENT_WIDTH - 10.0, 9.0))
                .collect(),
            remaining_actions: items.len().saturating_sub(MAX_LISTED_ACTIONS),
        }
    }

    fn height(&self) -> f32 {
        let mut height = 8.0 + 8.0 + 6.0 + self.summary.len() as f32 * 4.0 + 5.0 + 8.0;
        if !self.actions.is_empty() {
            height += 5.0;
            height += self.actions.iter().map(Vec::len).sum::<usize>() as f32 * 4.0;
            if self.remaining_actions > 0 {
                height += 4.0;
            }
        }
        height + 10.0
    }
}

fn write_cluster(writer: &mut PageWriter, index: usize, cluster: &TopicCluster) {
    let text = ClusterText::new(cluster);
    // A block taller than a page starts on a fresh page and runs over.
    let usable = PAGE_HEIGHT - FOOTER_RESERVE - CONTENT_TOP;
    writer.begin(BlockKind::Cluster(index), text.height().min(usable));

    writer.text(
        MARGIN,
        0.0,
        format!("{}. {}", index + 1, cluster.title.to_uppercase()),
        Font::bold(12.0),
        BLACK,
    );
    writer.advance(8.0);

    writer.text(
        MARGIN,
        0.0,
        format!("PRIORITY: {}", cluster.priority.as_str().to_uppercase()),
        Font::bold(9.0),
        priority_color(cluster.priority),
    );
    writer.text(
        MARGIN + 60.0,
        0.0,
        format!("RISK: {}", cluster.risk_level.as_str().to_uppercase()),
        Font::bold(9.0),
        risk_color(cluster.risk_level),
    );
    writer.advance(8.0);

    writer.text(
        MARGIN,
        0.0,
        format!("Districts: {}", cluster.affected_districts.join(", ")),
        Font::normal(9.0),
        BLACK,
    );
    writer.advance(6.0);

    writer.lines(MARGIN, 0.0, &text.summary, Font::normal(9.0), BLACK, 4.0);
    writer.advance(text.summary.len() as f32 * 4.0 + 5.0);

    writer.text(
        MARGIN,
        0.0,
        format!(
            "Articles: {} | Sources: {} | Sentiment: {}",
            cluster.articles.len(),
            cluster.trends.sources.join(", "),
            cluster.trends.sentiment
        ),
        Font::italic(8.0),
        BLACK,
    );
    writer.advance(8.0);

    if !text.actions.is_empty() {
        writer.text(MARGIN, 0.0, "Recommended Actions:", Font::bold(9.0), BLACK);
        writer.advance(5.0);
        for lines in &text.actions {
            writer.lines(MARGIN + 5.0, 0.0, lines, Font::normal(9.0), BLACK, 4.0);
            writer.advance(lines.len() as f32 * 4.0);
        }
        if text.remaining_actions > 0 {
            writer.text(
                MARGIN + 5.0,
                0.0,
                format!(
                    "... and {} additional recommendations",
                    text.remaining_actions
                ),
                Font::italic(9.0),
                BLACK,
            );
            writer.advance(4.0);
        }
    }
    writer.advance(10.0);
}

fn write_statistics(writer: &mut PageWriter, digest: &DailyDigest) {
    let rows = [
        ["Metric".to_string(), "Current".to_string(), "Analysis".to_string()],
        [
            "Total Articles".to_string(),
            digest.total_articles.to_string(),
            format!("{}% relevant", digest.relevance_rate()),
        ],
        [
            "High Priority Clusters".to_string(),
            digest.high_priority_clusters().to_string(),
            "Immediate attention required".to_string(),
        ],
        [
            "Districts Covered".to_string(),
            digest.districts.len().to_string(),
            format!("Primary: {}", digest.focus_district()),
        ],
        [
            "Weekly Change".to_string(),
            signed_percent(digest.weekly_comparison.articles_change),
            "Compared to previous week".to_string(),
        ],
    ];

    let table_height = rows.len() as f32 * TABLE_ROW_HEIGHT;
    section_heading(
        writer,
        BlockKind::Statistics,
        "STATISTICAL SUMMARY",
        15.0 + table_height,
    );
    writer.advance(15.0);
    for (row_index, row) in rows.iter().enumerate() {
        let (fill, font) = if row_index == 0 {
            (Some(TABLE_HEADER_FILL), Font::bold(8.0))
        } else {
            (None, Font::normal(8.0))
        };
        let mut x = MARGIN;
        for (cell, width) in row.iter().zip(TABLE_COLUMNS) {
            writer.rect(x, 0.0, width, TABLE_ROW_HEIGHT, fill, Some(BORDER_GREY));
            writer.text(x + 2.0, 5.0, cell.as_str(), font, BLACK);
            x += width;
        }
        writer.advance(TABLE_ROW_HEIGHT);
    }
    writer.advance(15.0);
}

fn write_distribution(writer: &mut PageWriter, branding: &ReportBranding) {
    let required = 8.0 + branding.distribution.len() as f32 * 4.0;
    writer.begin(BlockKind::Distribution, required.max(25.0));
    writer.text(MARGIN, 0.0, "DISTRIBUTION", Font::bold(10.0), AP_BLUE);
    writer.advance(8.0);
    for item in &branding.distribution {
        writer.text(MARGIN, 0.0, format!("• {}", item), Font::normal(8.0), BLACK);
        writer.advance(4.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::layout::Block;
    use crate::test_support::{alert, cluster, digest};
    use chrono::TimeZone;

    fn generated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 14, 30, 0).unwrap()
    }

    fn clusters(n: usize) -> Vec<TopicCluster> {
        (0..n)
            .map(|i| {
                let mut c = cluster(
                    &format!("c{}", i),
                    &format!("Cluster {}", i),
                    "Coordinated patrols continue across the coastal belt.",
                    Priority::Medium,
                );
                c.action_items = Some(
                    (0..5)
                        .map(|a| format!("Action {} for cluster {}", a, i))
                        .collect(),
                );
                c
            })
            .collect()
    }

    fn cluster_indices(doc: &ReportDocument) -> Vec<usize> {
        doc.blocks
            .iter()
            .filter_map(|b| match b.kind {
                BlockKind::Cluster(i) => Some(i),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_no_alerts_section_without_alerts() {
        let doc = build_report(
            &digest(clusters(2), vec![]),
            &[],
            &ReportBranding::default(),
            generated(),
        );
        assert!(doc
            .blocks_of(|k| matches!(k, BlockKind::AlertsHeading | BlockKind::Alert(_)))
            .is_empty());
        assert!(!doc.pages.iter().any(|p| p.contains_text("ACTIVE ALERTS")));
    }

    #[test]
    fn test_alert_blocks_follow_alert_list() {
        let alerts = vec![alert("a", Priority::High), alert("b", Priority::Low)];
        let doc = build_report(
            &digest(clusters(1), alerts.clone()),
            &alerts[..1],
            &ReportBranding::default(),
            generated(),
        );
        assert_eq!(doc.blocks_of(|k| matches!(k, BlockKind::Alert(_))).len(), 1);
        assert!(doc.pages[0].contains_text("ALERT 1: ALERT A"));
        assert!(doc.pages[0].contains_text("Priority: HIGH | Type: BREAKING"));
    }

    #[test]
    fn test_one_block_per_cluster_in_order() {
        let doc = build_report(
            &digest(clusters(4), vec![]),
            &[],
            &ReportBranding::default(),
            generated(),
        );
        assert_eq!(cluster_indices(&doc), vec![0, 1, 2, 3]);
        let all_text: Vec<&str> = doc.pages.iter().flat_map(|p| p.texts()).collect();
        assert!(all_text.contains(&"1. CLUSTER 0"));
        assert!(all_text.contains(&"4. CLUSTER 3"));
        assert!(all_text.contains(&"... and 2 additional recommendations"));
    }

    #[test]
    fn test_many_clusters_paginate_with_footer_and_header() {
        let doc = build_report(
            &digest(clusters(10), vec![]),
            &[],
            &ReportBranding::default(),
            generated(),
        );
        let total = doc.page_count();
        assert!(total > 1);
        for (i, page) in doc.pages.iter().enumerate() {
            assert!(page.contains_text(&format!("Page {} of {}", i + 1, total)));
            assert!(page.contains_text("OFFICIAL USE ONLY - AP STATE POLICE"));
            assert!(page.contains_text("AP STATE POLICE"));
            assert!(page.contains_text("Generated: 01/05/2024 14:30"));
        }
        let pages: Vec<usize> = doc.blocks.iter().map(|b: &Block| b.page).collect();
        assert!(pages.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(doc.blocks.last().map(|b| b.kind), Some(BlockKind::Distribution));
    }

    #[test]
    fn test_text_stays_above_footer() {
        let doc = build_report(
            &digest(clusters(10), vec![alert("a", Priority::Medium)]),
            &[alert("a", Priority::Medium)],
            &ReportBranding::default(),
            generated(),
        );
        let footer_top = PAGE_HEIGHT - 20.0;
        for page in &doc.pages {
            for element in &page.elements {
                if let Element::Text { y, content, .. } = element {
                    let is_footer = content.starts_with("Page ")
                        || content.starts_with("OFFICIAL USE ONLY")
                        || (*y > footer_top && content.starts_with("Generated: "));
                    if !is_footer {
                        assert!(*y < footer_top, "{:?} at {}", content, y);
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_digest_reports_zero_relevance() {
        let mut empty = digest(vec![], vec![]);
        empty.total_articles = 0;
        empty.relevant_articles = 0;
        let doc = build_report(&empty, &[], &ReportBranding::default(), generated());
        assert!(doc.pages.iter().any(|p| p.contains_text("0% relevant")));
        assert!(cluster_indices(&doc).is_empty());
    }
}
