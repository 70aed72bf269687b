use chrono::{Days, NaiveDate};

use crate::error::DateSelectionError;

/// How far back the date picker reaches.
pub const DAYS_BACK: u64 = 30;

/// The range of dates a digest may be requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub today: NaiveDate,
    pub days_back: u64,
}

impl DateWindow {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            days_back: DAYS_BACK,
        }
    }

    pub fn earliest(&self) -> NaiveDate {
        self.today
            .checked_sub_days(Days::new(self.days_back))
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.earliest() && date <= self.today
    }

    /// Parses a `YYYY-MM-DD` string and checks it against the window.
    pub fn select(&self, input: &str) -> Result<NaiveDate, DateSelectionError> {
        let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map_err(|_| DateSelectionError::Parse(input.to_string()))?;
        self.check(date)
    }

    pub fn check(&self, date: NaiveDate) -> Result<NaiveDate, DateSelectionError> {
        if date > self.today {
            return Err(DateSelectionError::InFuture {
                date,
                today: self.today,
            });
        }
        let earliest = self.earliest();
        if date < earliest {
            return Err(DateSelectionError::TooOld { date, earliest });
        }
        Ok(date)
    }
}
