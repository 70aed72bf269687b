//! Recurring report delivery requests.
//!
//! A schedule is validated and acknowledged; delivery itself is out of scope.

use chrono::NaiveTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ScheduleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryFormat {
    Pdf,
    Email,
    #[default]
    Both,
}

impl DeliveryFormat {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryFormat::Pdf => "PDF",
            DeliveryFormat::Email => "EMAIL",
            DeliveryFormat::Both => "Email + PDF",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub frequency: Frequency,
    /// "HH:MM", IST.
    pub time: String,
    pub recipients: Vec<String>,
    pub format: DeliveryFormat,
    pub include_alerts: bool,
    pub include_analytics: bool,
}

impl Default for ScheduleRequest {
    fn default() -> Self {
        Self {
            frequency: Frequency::Daily,
            time: "08:00".to_string(),
            recipients: Vec::new(),
            format: DeliveryFormat::Both,
            include_alerts: true,
            include_analytics: true,
        }
    }
}

impl ScheduleRequest {
    /// Adds a trimmed recipient. Blank and duplicate entries are ignored.
    pub fn add_recipient(&mut self, recipient: &str) -> bool {
        let recipient = recipient.trim();
        if recipient.is_empty() || self.recipients.iter().any(|r| r == recipient) {
            return false;
        }
        self.recipients.push(recipient.to_string());
        true
    }

    pub fn remove_recipient(&mut self, recipient: &str) {
        self.recipients.retain(|r| r != recipient);
    }

    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.recipients.is_empty() {
            return Err(ScheduleError::NoRecipients);
        }
        NaiveTime::parse_from_str(&self.time, "%H:%M")
            .map_err(|_| ScheduleError::InvalidTime(self.time.clone()))?;
        Ok(())
    }

    /// Sections the delivered report would carry.
    pub fn contents(&self) -> Vec<&'static str> {
        let mut contents = Vec::new();
        if self.include_alerts {
            contents.push("Alerts");
        }
        if self.include_analytics {
            contents.push("Analytics");
        }
        contents.push("Topic Clusters");
        contents
    }

    /// Human summary of the schedule, one line per field.
    pub fn preview(&self) -> Vec<String> {
        let frequency = self.frequency.to_string();
        let mut chars = frequency.chars();
        let frequency = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => frequency,
        };
        vec![
            format!("Frequency: {} at {} IST", frequency, self.time),
            format!("Recipients: {} officers", self.recipients.len()),
            format!("Format: {}", self.format.label()),
            format!("Content: {}", self.contents().join(", ")),
        ]
    }

    pub fn confirmation(&self) -> String {
        format!("Report scheduled for {} delivery", self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_recipient_trims_and_dedupes() {
        let mut request = ScheduleRequest::default();
        assert!(request.add_recipient("  sp.guntur@appolice.gov.in "));
        assert!(!request.add_recipient("sp.guntur@appolice.gov.in"));
        assert!(!request.add_recipient("   "));
        assert_eq!(request.recipients, vec!["sp.guntur@appolice.gov.in"]);

        request.remove_recipient("sp.guntur@appolice.gov.in");
        assert!(request.recipients.is_empty());
    }

    #[test]
    fn test_validate() {
        let mut request = ScheduleRequest::default();
        assert_eq!(request.validate(), Err(ScheduleError::NoRecipients));

        request.add_recipient("dig@appolice.gov.in");
        assert_eq!(request.validate(), Ok(()));

        request.time = "25:00".to_string();
        assert_eq!(
            request.validate(),
            Err(ScheduleError::InvalidTime("25:00".to_string()))
        );
    }

    #[test]
    fn test_preview() {
        let mut request = ScheduleRequest {
            frequency: Frequency::Weekly,
            include_analytics: false,
            ..Default::default()
        };
        request.add_recipient("a@appolice.gov.in");
        assert_eq!(
            request.preview(),
            vec![
                "Frequency: Weekly at 08:00 IST",
                "Recipients: 1 officers",
                "Format: Email + PDF",
                "Content: Alerts, Topic Clusters",
            ]
        );
        assert_eq!(request.confirmation(), "Report scheduled for weekly delivery");
    }
}
