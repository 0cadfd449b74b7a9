use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire label the server uses for an ordinary working day
pub const WORK_DAY_LABEL: &str = "Work Day";

/// Wire value that asks the server to drop any override for a date
pub const REVERT_TO_DEFAULT: &str = "DEFAULT";

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Full English name for a 1-indexed month
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("Unknown")
}

/// Check if a year is a leap year (proleptic Gregorian)
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Parse a YYYY-MM-DD string
pub fn parse_iso_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").ok()
}

/// Format YYYY-MM-DD for display, e.g. "June 1, 2024". Unparseable input is returned as-is.
pub fn format_date_for_display(date_str: &str) -> String {
    match parse_iso_date(date_str) {
        Some(date) => format!("{} {}, {}", month_name(date.month()), date.day(), date.year()),
        None => date_str.to_string(),
    }
}

/// A displayed calendar month. Everything else about it is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthRef {
    pub year: i32,
    /// 1-indexed (1 = January)
    pub month: u32,
}

impl MonthRef {
    /// Returns `None` when `month` is outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Number of days in this month (28-31)
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if is_leap_year(self.year) { 29 } else { 28 }
            }
        }
    }

    /// Weekday of the 1st of the month (0 = Sunday, 6 = Saturday)
    ///
    /// Computed arithmetically so it holds for years outside chrono's range.
    pub fn first_weekday(&self) -> u32 {
        const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let y = if self.month < 3 {
            self.year as i64 - 1
        } else {
            self.year as i64
        };
        let idx = (self.month.clamp(1, 12) - 1) as usize;
        let w = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + OFFSETS[idx] + 1;
        w.rem_euclid(7) as u32
    }

    /// Shift by a number of months, rolling into adjacent years
    pub fn shift_months(&self, delta: i32) -> Self {
        let total = self.year as i64 * 12 + (self.month as i64 - 1) + delta as i64;
        let year = total.div_euclid(12).clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        let month = total.rem_euclid(12) as u32 + 1;
        Self { year, month }
    }

    /// Shift by a number of years, keeping the month
    pub fn shift_years(&self, delta: i32) -> Self {
        Self {
            year: self.year.saturating_add(delta),
            month: self.month,
        }
    }

    /// ISO date string for a day of this month
    pub fn iso_date(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }

    /// ISO date strings for every day of the month, in order
    pub fn dates(&self) -> Vec<String> {
        (1..=self.days_in_month()).map(|day| self.iso_date(day)).collect()
    }

    /// Heading text, e.g. "June 2024"
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// What a day currently is, as reported by the server
///
/// Anything other than the work-day label is an absence code. That includes
/// labels the server computes itself, such as `Weekend` or `Holiday`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DayType {
    #[default]
    WorkDay,
    Absence(String),
}

impl DayType {
    pub fn as_wire(&self) -> &str {
        match self {
            DayType::WorkDay => WORK_DAY_LABEL,
            DayType::Absence(code) => code,
        }
    }

    /// Human-readable label: underscores become spaces
    pub fn label(&self) -> String {
        self.as_wire().replace('_', " ")
    }

    /// CSS modifier class, e.g. `day-work`, `day-sick`, `day-weekend`
    pub fn css_class(&self) -> String {
        let label = self.label().to_lowercase();
        let first_word = label.split_whitespace().next().unwrap_or("work");
        format!("day-{}", first_word)
    }
}

impl From<String> for DayType {
    fn from(value: String) -> Self {
        if value.is_empty() || value == WORK_DAY_LABEL {
            DayType::WorkDay
        } else {
            DayType::Absence(value)
        }
    }
}

impl From<DayType> for String {
    fn from(value: DayType) -> Self {
        match value {
            DayType::WorkDay => WORK_DAY_LABEL.to_string(),
            DayType::Absence(code) => code,
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// The type a user picks in the bulk-edit chooser
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DayTypeChoice {
    /// Remove any override so the server's default applies again
    RevertToDefault,
    WorkDay,
    Absence(String),
}

impl DayTypeChoice {
    pub fn as_wire(&self) -> &str {
        match self {
            DayTypeChoice::RevertToDefault => REVERT_TO_DEFAULT,
            DayTypeChoice::WorkDay => WORK_DAY_LABEL,
            DayTypeChoice::Absence(code) => code,
        }
    }

    pub fn label(&self) -> String {
        match self {
            DayTypeChoice::RevertToDefault => "(Revert to Default)".to_string(),
            DayTypeChoice::WorkDay => WORK_DAY_LABEL.to_string(),
            DayTypeChoice::Absence(code) => code.replace('_', " "),
        }
    }
}

impl From<String> for DayTypeChoice {
    fn from(value: String) -> Self {
        match value.as_str() {
            REVERT_TO_DEFAULT => DayTypeChoice::RevertToDefault,
            WORK_DAY_LABEL => DayTypeChoice::WorkDay,
            _ => DayTypeChoice::Absence(value),
        }
    }
}

impl From<DayTypeChoice> for String {
    fn from(value: DayTypeChoice) -> Self {
        match value {
            DayTypeChoice::Absence(code) => code,
            other => other.as_wire().to_string(),
        }
    }
}

/// One entry of `GET {base}/{year}/{month}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    #[serde(rename = "type")]
    pub day_type: DayType,
}

/// Body of `POST {base}/update-days`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDaysRequest {
    pub dates: Vec<String>,
    pub day_type: DayTypeChoice,
}

/// Error body the server sends with non-2xx responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
