pub mod dashboard;
pub mod dates;
pub mod environment;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod schedule;
pub mod state;
pub mod synth;
#[cfg(test)]
mod test_support;
pub mod types;
pub mod view;

pub const TARGET_SYNTH: &str = "synth";
pub const TARGET_PIPELINE: &str = "pipeline";
pub const TARGET_REPORT: &str = "report";
pub const TARGET_STATE: &str = "state";
pub const TARGET_EXPORT: &str = "export";
