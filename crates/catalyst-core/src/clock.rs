use chrono::{Local, NaiveDate, NaiveDateTime};

/// Date format used for every stored `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Timestamp format used for `created`, `timestamp`, `last_updated`, ...
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Month prefix used by the month period filter.
pub const MONTH_FORMAT: &str = "%Y-%m";

/// Source of "now" for every tool. Reports and streaks are computed
/// relative to it, so tests pin it with [`FixedClock`].
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn date_string(&self) -> String {
        self.now().format(DATE_FORMAT).to_string()
    }

    fn stamp(&self) -> String {
        self.now().format(STAMP_FORMAT).to_string()
    }

    fn month_prefix(&self) -> String {
        self.now().format(MONTH_FORMAT).to_string()
    }
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Noon on the given date. Returns `None` for an invalid date.
    pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
