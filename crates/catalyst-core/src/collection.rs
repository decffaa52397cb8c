use std::fmt;

/// A named, file-backed collection. Each one is owned by a single tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Applications,
    Tasks,
    Habits,
    Goals,
    Expenses,
    Income,
    Budget,
    Savings,
    Mood,
    Journal,
}

impl Collection {
    /// File name under the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Applications => "applications.json",
            Self::Tasks => "todos.json",
            Self::Habits => "habits.json",
            Self::Goals => "goals.json",
            Self::Expenses => "expenses.json",
            Self::Income => "income.json",
            Self::Budget => "budget.json",
            Self::Savings => "savings.json",
            Self::Mood => "mood_log.json",
            Self::Journal => "journal.json",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name().trim_end_matches(".json"))
    }
}
