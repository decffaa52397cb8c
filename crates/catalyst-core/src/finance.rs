use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::choice::closed_enum;
use crate::stats::percent;

closed_enum! {
    pub enum ExpenseCategory ("category") {
        Food => "food",
        Transport => "transport",
        Rent => "rent",
        Utilities => "utilities",
        Entertainment => "entertainment",
        Shopping => "shopping",
        Health => "health",
        Education => "education",
        Subscriptions => "subscriptions",
        Other => "other",
    }
}

closed_enum! {
    pub enum IncomeSource ("source") {
        Salary => "salary",
        Freelance => "freelance",
        Investment => "investment",
        Gift => "gift",
        Refund => "refund",
        Other => "other",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u32,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: u32,
    pub amount: f64,
    pub source: IncomeSource,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub timestamp: String,
}

/// Monthly budget. Only one exists; setting a new one replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub monthly_total: f64,
    #[serde(default)]
    pub categories: BTreeMap<String, f64>,
    pub set_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub amount: f64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: u32,
    pub name: String,
    pub target: f64,
    #[serde(default)]
    pub saved: f64,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub deposits: Vec<Deposit>,
    pub created: String,
}

impl SavingsGoal {
    /// Progress towards the target, capped at 100.
    pub fn progress(&self) -> i64 {
        if self.target <= 0.0 {
            return 0;
        }
        percent(self.saved, self.target).min(100)
    }

    pub fn remaining(&self) -> f64 {
        (self.target - self.saved).max(0.0)
    }

    pub fn is_reached(&self) -> bool {
        self.progress() >= 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(target: f64, saved: f64) -> SavingsGoal {
        SavingsGoal {
            id: 1,
            name: "Laptop".into(),
            target,
            saved,
            deadline: String::new(),
            deposits: Vec::new(),
            created: "2026-10-19".into(),
        }
    }

    #[test]
    fn test_savings_progress_caps_at_100() {
        assert_eq!(goal(50000.0, 25000.0).progress(), 50);
        assert_eq!(goal(100.0, 250.0).progress(), 100);
        assert_eq!(goal(100.0, 250.0).remaining(), 0.0);
    }

    #[test]
    fn test_savings_reached_threshold() {
        assert!(!goal(1000.0, 990.0).is_reached());
        assert!(goal(1000.0, 1000.0).is_reached());
    }

    #[test]
    fn test_legacy_integer_saved_field() {
        let json = r#"{"id":1,"name":"Trip","target":500.0,"saved":0,"deadline":"","deposits":[],"created":"2026-10-01"}"#;
        let g: SavingsGoal = serde_json::from_str(json).unwrap();
        assert_eq!(g.saved, 0.0);
    }
}
