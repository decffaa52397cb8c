//! Derived statistics shared by the trackers: streaks, percentages,
//! period filters, score tiers and money/bar rendering.
//!
//! Date predicates work on the stored `YYYY-MM-DD` strings directly
//! (comparison and prefix match), which is only sound because every
//! producer writes zero-padded ISO dates.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};

use crate::clock::{DATE_FORMAT, MONTH_FORMAT};

/// Consecutive days, ending at `today`, whose entry is `true`.
pub fn streak(done_by_date: &HashMap<String, bool>, today: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = today;
    while done_by_date
        .get(&day.format(DATE_FORMAT).to_string())
        .copied()
        .unwrap_or(false)
    {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}

/// `part / whole` as a whole percentage, rounded half away from zero.
/// Zero when `whole` is zero.
pub fn percent(part: f64, whole: f64) -> i64 {
    if whole == 0.0 {
        return 0;
    }
    (part / whole * 100.0).round() as i64
}

/// Round a money amount to cents.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Monday of the ISO week containing `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
}

/// `today - days`, formatted as a stored date.
pub fn days_ago(today: NaiveDate, days: i64) -> String {
    (today - Duration::days(days)).format(DATE_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Period
// ---------------------------------------------------------------------------

/// Reporting window for aggregate views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Week,
    Month,
    All,
}

impl Period {
    /// Parse a period name. Anything unrecognised means "all".
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "today" => Self::Today,
            "week" => Self::Week,
            "" | "month" => Self::Month,
            _ => Self::All,
        }
    }

    pub fn matches(self, date: &str, today: NaiveDate) -> bool {
        match self {
            Self::Today => date == today.format(DATE_FORMAT).to_string(),
            Self::Week => date >= week_start(today).format(DATE_FORMAT).to_string().as_str(),
            Self::Month => date.starts_with(&today.format(MONTH_FORMAT).to_string()),
            Self::All => true,
        }
    }

    /// Heading used in reports ("Today", "October 2026", ...).
    pub fn label(self, today: NaiveDate) -> String {
        match self {
            Self::Today => "Today".into(),
            Self::Week => "This Week".into(),
            Self::Month => today.format("%B %Y").to_string(),
            Self::All => "All Time".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Qualitative bucket for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Strong,
    Good,
    Fair,
    Low,
}

impl Tier {
    pub fn of(score: i64) -> Self {
        match score {
            s if s >= 80 => Self::Strong,
            s if s >= 60 => Self::Good,
            s if s >= 40 => Self::Fair,
            _ => Self::Low,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// `#` per 5% done, `-` per 5% left.
pub fn progress_bar(pct: i64) -> String {
    let pct = pct.clamp(0, 100) as usize;
    format!("{}{}", "#".repeat(pct / 5), "-".repeat((100 - pct) / 5))
}

/// Money with a currency prefix, thousands separators and two decimals.
pub struct Money(pub f64);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.2}", self.0.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.0 < 0.0 && fixed != "0.00" { "-" } else { "" };
        write!(f, "Rs.{sign}{grouped}.{frac_part}")
    }
}

pub fn money(amount: f64) -> String {
    Money(amount).to_string()
}
