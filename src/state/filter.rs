use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::types::{Priority, TopicCluster};

/// Priority filter applied to the cluster list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => *wanted == priority,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(PriorityFilter::All);
        }
        s.parse().map(PriorityFilter::Only)
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityFilter::All => f.write_str("all"),
            PriorityFilter::Only(priority) => write!(f, "{}", priority),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}

/// Case-insensitive substring match against title or summary. Empty search matches.
pub fn matches_search(cluster: &TopicCluster, search: &str) -> bool {
    let needle = search.to_lowercase();
    needle.is_empty()
        || cluster.title.to_lowercase().contains(&needle)
        || cluster.summary.to_lowercase().contains(&needle)
}

/// Clusters visible under the given filter, search text and archive set, in
/// source order.
pub fn filter_clusters<'a>(
    clusters: &'a [TopicCluster],
    filter: PriorityFilter,
    search: &str,
    archived: &HashSet<String>,
) -> Vec<&'a TopicCluster> {
    clusters
        .iter()
        .filter(|cluster| !archived.contains(&cluster.id))
        .filter(|cluster| filter.matches(cluster.priority))
        .filter(|cluster| matches_search(cluster, search))
        .collect()
}
