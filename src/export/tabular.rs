use anyhow::Result;

use crate::types::DailyDigest;

pub const CSV_HEADER: [&str; 6] = [
    "title",
    "priority",
    "riskLevel",
    "districts",
    "articles",
    "sentiment",
];

/// One row per cluster. An empty digest still gets the header row.
pub fn clusters_csv(digest: &DailyDigest) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for cluster in &digest.topic_clusters {
        writer.write_record([
            cluster.title.as_str(),
            cluster.priority.as_str(),
            cluster.risk_level.as_str(),
            cluster.affected_districts.join(";").as_str(),
            cluster.articles.len().to_string().as_str(),
            cluster.trends.sentiment.as_str(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn clusters_csv_filename(digest: &DailyDigest) -> String {
    format!("AP_Police_Clusters_{}.csv", digest.date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cluster, digest};
    use crate::types::Priority;

    #[test]
    fn test_empty_digest_is_header_only() {
        let out = clusters_csv(&digest(vec![], vec![])).unwrap();
        assert_eq!(out, "title,priority,riskLevel,districts,articles,sentiment\n");
    }

    #[test]
    fn test_one_row_per_cluster() {
        let mut quoted = cluster("b", "Traffic, Roads \"Safety\"", "s", Priority::Low);
        quoted.affected_districts = vec!["Guntur".to_string(), "Krishna".to_string()];
        let d = digest(
            vec![cluster("a", "Coastal Security", "s", Priority::High), quoted],
            vec![],
        );

        let out = clusters_csv(&d).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Coastal Security,high,low,Kadapa,0,neutral");
        assert_eq!(
            lines[2],
            "\"Traffic, Roads \"\"Safety\"\"\",low,low,Guntur;Krishna,0,neutral"
        );
        assert_eq!(clusters_csv_filename(&d), "AP_Police_Clusters_2024-05-01.csv");
    }
}
