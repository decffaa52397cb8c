mod choice;

pub mod application;
pub mod clock;
pub mod collection;
pub mod error;
pub mod finance;
pub mod job_search;
pub mod planner;
pub mod skills;
pub mod stats;
pub mod store;
pub mod wellness;

pub use application::{Application, ApplicationStatus};
pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::Collection;
pub use error::{CatalystError, CatalystResult, IntoReply};
pub use finance::{Budget, Deposit, Expense, ExpenseCategory, Income, IncomeSource, SavingsGoal};
pub use job_search::{search_jobs, JobLink};
pub use planner::{
    GoalCategory, GoalStatus, Habit, HabitEntry, Priority, Task, TaskStatus, WeeklyGoal,
};
pub use skills::analyze_skill_gap;
pub use stats::{money, percent, Period, Tier};
pub use store::{next_id, RecordStore};
pub use wellness::{JournalEntry, Mood, MoodEntry, Trend};
