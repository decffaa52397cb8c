use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::choice::closed_enum;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

closed_enum! {
    pub enum Priority ("priority") {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

closed_enum! {
    pub enum TaskStatus ("task status") {
        Pending => "pending",
        Completed => "completed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub task: String,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: String,
    pub created: String,
    #[serde(default)]
    pub completed_at: String,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

// ---------------------------------------------------------------------------
// Habits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitEntry {
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<HabitEntry>,
    pub created: String,
}

impl Habit {
    pub fn new(name: String, created: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
            created,
        }
    }

    /// Record `completed` for `date`, replacing any entry already there.
    pub fn log(&mut self, date: &str, completed: bool) {
        match self.entries.iter_mut().find(|e| e.date == date) {
            Some(entry) => entry.completed = completed,
            None => self.entries.push(HabitEntry {
                date: date.to_string(),
                completed,
            }),
        }
    }

    pub fn done_by_date(&self) -> HashMap<String, bool> {
        self.entries
            .iter()
            .map(|e| (e.date.clone(), e.completed))
            .collect()
    }

    pub fn done_count(&self) -> usize {
        self.entries.iter().filter(|e| e.completed).count()
    }
}

// ---------------------------------------------------------------------------
// Weekly goals
// ---------------------------------------------------------------------------

closed_enum! {
    pub enum GoalCategory ("category") {
        Career => "career",
        Health => "health",
        Learning => "learning",
        Personal => "personal",
        General => "general",
    }
}

closed_enum! {
    pub enum GoalStatus ("goal status") {
        InProgress => "in_progress",
        Completed => "completed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyGoal {
    pub id: u32,
    pub goal: String,
    pub category: GoalCategory,
    pub status: GoalStatus,
    pub week_start: String,
    pub created: String,
    #[serde(default)]
    pub completed_at: String,
}

impl WeeklyGoal {
    pub fn is_done(&self) -> bool {
        self.status == GoalStatus::Completed
    }
}
