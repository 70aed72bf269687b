//! The printable daily digest.
//!
//! `build_report` lays the digest out onto A4 pages as positioned elements;
//! `render_text` turns that document into fixed-width text for a terminal or
//! a `.txt` file.

mod builder;
pub mod layout;
mod render;
pub mod wrap;

use chrono::{Datelike, NaiveDate};

pub use self::builder::build_report;
pub use self::layout::{Block, BlockKind, Element, Font, FontStyle, Page, ReportDocument, Rgb};
pub use self::render::{render_text, RenderOptions};

/// Organisation strings stamped onto every report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBranding {
    pub organization: String,
    pub division: String,
    pub logo_text: String,
    pub classification: String,
    pub footer: String,
    pub file_prefix: String,
    pub distribution: Vec<String>,
}

impl Default for ReportBranding {
    fn default() -> Self {
        Self {
            organization: "AP STATE POLICE".to_string(),
            division: "Intelligence Analysis & News Monitoring Division".to_string(),
            logo_text: "AP".to_string(),
            classification: "CLASSIFICATION: OFFICIAL USE ONLY".to_string(),
            footer: "OFFICIAL USE ONLY - AP STATE POLICE".to_string(),
            file_prefix: "AP_State_Police".to_string(),
            distribution: [
                "Director General of Police, AP",
                "Additional DGP (Intelligence)",
                "Inspector General (Law & Order)",
                "Superintendents of Police - All Districts",
                "Intelligence Division - State HQ",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

pub fn report_filename(branding: &ReportBranding, date: NaiveDate) -> String {
    format!("{}_Daily_Digest_{}.txt", branding.file_prefix, date)
}

/// "Wednesday, May 1st, 2024"
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!(
        "{}, {} {}{}, {}",
        date.format("%A"),
        date.format("%B"),
        day,
        suffix,
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(
            report_filename(&ReportBranding::default(), date),
            "AP_State_Police_Daily_Digest_2024-05-01.txt"
        );
    }

    #[test]
    fn test_long_date_ordinals() {
        let d = |day| long_date(NaiveDate::from_ymd_opt(2024, 5, day).unwrap());
        assert_eq!(d(1), "Wednesday, May 1st, 2024");
        assert_eq!(d(2), "Thursday, May 2nd, 2024");
        assert_eq!(d(3), "Friday, May 3rd, 2024");
        assert_eq!(d(11), "Saturday, May 11th, 2024");
        assert_eq!(d(22), "Wednesday, May 22nd, 2024");
    }
}
