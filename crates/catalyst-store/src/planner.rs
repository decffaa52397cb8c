//! Daily planner: tasks, habits, weekly goals and the weekly progress report.

use tracing::info;

use catalyst_core::clock::DATE_FORMAT;
use catalyst_core::stats::{percent, streak, week_start, Tier};
use catalyst_core::{
    next_id, CatalystError, CatalystResult, Clock, Collection, GoalCategory, GoalStatus, Habit,
    Priority, RecordStore, Task, TaskStatus, WeeklyGoal,
};

use crate::{id_arg, optional_text, required_text};

pub struct Planner<'a, S> {
    store: &'a S,
    clock: &'a dyn Clock,
}

impl<'a, S: RecordStore> Planner<'a, S> {
    pub fn new(store: &'a S, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    fn week_start(&self) -> String {
        week_start(self.clock.today()).format(DATE_FORMAT).to_string()
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    pub fn add_task(&self, task: &str, priority: &str, due_date: &str) -> CatalystResult<String> {
        let task = required_text(task, "Task description is required.")?;
        let priority = match priority.trim() {
            "" => Priority::Medium,
            p => p.parse()?,
        };

        let mut todos: Vec<Task> = self.store.load(Collection::Tasks);
        let todo = Task {
            id: next_id(&todos),
            task: task.to_string(),
            priority,
            status: TaskStatus::Pending,
            due_date: optional_text(due_date),
            created: self.clock.stamp(),
            completed_at: String::new(),
        };
        let due = if todo.due_date.is_empty() {
            String::new()
        } else {
            format!(" | Due: {}", todo.due_date)
        };
        let reply = format!(
            "Task #{} added!\n  [{}] {}{due}",
            todo.id,
            priority.as_str().to_uppercase(),
            todo.task
        );
        info!("added task #{}", todo.id);
        todos.push(todo);
        self.store.save(Collection::Tasks, &todos)?;

        Ok(reply)
    }

    pub fn complete_task(&self, task_id: i64) -> CatalystResult<String> {
        let id = id_arg(task_id, "Please provide a valid task ID.")?;

        let mut todos: Vec<Task> = self.store.load(Collection::Tasks);
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalystError::NotFound(format!("Task #{id}")))?;
        if todo.is_done() {
            return Ok(format!("Task #{id} is already completed!"));
        }
        todo.status = TaskStatus::Completed;
        todo.completed_at = self.clock.stamp();
        let name = todo.task.clone();
        self.store.save(Collection::Tasks, &todos)?;

        let done = todos.iter().filter(|t| t.is_done()).count();
        let pending = todos.len() - done;
        info!("completed task #{id}");
        Ok(format!(
            "Task #{id} completed: {name}\nProgress: {done} done, {pending} remaining. Keep going!"
        ))
    }

    pub fn list_tasks(&self, show_completed: bool) -> CatalystResult<String> {
        let mut todos: Vec<Task> = self.store.load(Collection::Tasks);
        if todos.is_empty() {
            return Ok("No tasks yet! Use add_task to get started.".into());
        }
        if !show_completed {
            todos.retain(|t| !t.is_done());
            if todos.is_empty() {
                return Ok(
                    "All tasks completed! You're crushing it! Add more with add_task.".into(),
                );
            }
        }

        let mut lines = vec![format!("Your Tasks ({}):\n", todos.len())];
        for priority in Priority::ALL {
            let group: Vec<&Task> = todos.iter().filter(|t| t.priority == *priority).collect();
            if group.is_empty() {
                continue;
            }
            lines.push(format!("**{} PRIORITY:**", priority.as_str().to_uppercase()));
            for t in group {
                let mark = if t.is_done() { "[x]" } else { "[ ]" };
                let due = if t.due_date.is_empty() {
                    String::new()
                } else {
                    format!(" (due: {})", t.due_date)
                };
                lines.push(format!("  {mark} #{} {}{due}", t.id, t.task));
            }
            lines.push(String::new());
        }

        let done = todos.iter().filter(|t| t.is_done()).count();
        if done > 0 {
            lines.push(format!("Progress: {done}/{} tasks done", todos.len()));
        }
        Ok(lines.join("\n"))
    }

    // -----------------------------------------------------------------------
    // Habits
    // -----------------------------------------------------------------------

    pub fn track_habit(&self, habit_name: &str, completed: bool) -> CatalystResult<String> {
        let name = required_text(habit_name, "Habit name is required.")?.to_lowercase();
        let today = self.clock.date_string();

        let mut habits: Vec<Habit> = self.store.load(Collection::Habits);
        let idx = match habits.iter().position(|h| h.name == name) {
            Some(i) => i,
            None => {
                habits.push(Habit::new(name.clone(), today.clone()));
                habits.len() - 1
            }
        };
        habits[idx].log(&today, completed);
        self.store.save(Collection::Habits, &habits)?;

        let habit = &habits[idx];
        let current = streak(&habit.done_by_date(), self.clock.today());
        let done = habit.done_count();
        let total = habit.entries.len();
        let rate = percent(done as f64, total as f64);

        info!("tracked habit {name}: completed={completed}");
        Ok(format!(
            "Habit: {name} - {} for today!\n  Current streak: {current} days\n  Completion rate: {rate}% ({done}/{total} days)\n  {}",
            if completed { "Done" } else { "Skipped" },
            if current > 1 {
                "Keep the streak alive!"
            } else {
                "Start building that streak!"
            }
        ))
    }

    pub fn view_habits(&self) -> CatalystResult<String> {
        let habits: Vec<Habit> = self.store.load(Collection::Habits);
        if habits.is_empty() {
            return Ok("No habits tracked yet! Use track_habit('exercise') to start.".into());
        }

        let today = self.clock.date_string();
        let mut lines = vec![format!("Your Habits ({} tracked):\n", habits.len())];
        for habit in &habits {
            let by_date = habit.done_by_date();
            let current = streak(&by_date, self.clock.today());
            let done = habit.done_count();
            let total = habit.entries.len();
            let mark = if by_date.get(&today).copied().unwrap_or(false) {
                "[x]"
            } else {
                "[ ]"
            };
            lines.push(format!(
                "  {mark} {}: {current} day streak | {}% rate ({done}/{total})",
                habit.name,
                percent(done as f64, total as f64)
            ));
        }
        lines.push(
            "\nTip: Consistency > perfection. Even 1% daily improvement compounds.".into(),
        );
        Ok(lines.join("\n"))
    }

    // -----------------------------------------------------------------------
    // Weekly goals
    // -----------------------------------------------------------------------

    pub fn set_weekly_goal(&self, goal: &str, category: &str) -> CatalystResult<String> {
        let goal = required_text(goal, "Goal description is required.")?;
        let category = category.parse().unwrap_or(GoalCategory::General);

        let mut goals: Vec<WeeklyGoal> = self.store.load(Collection::Goals);
        let entry = WeeklyGoal {
            id: next_id(&goals),
            goal: goal.to_string(),
            category,
            status: GoalStatus::InProgress,
            week_start: self.week_start(),
            created: self.clock.stamp(),
            completed_at: String::new(),
        };
        let reply = format!(
            "Weekly goal #{} set!\n  [{}] {}\n  Week of: {}\n  Break this into daily tasks with add_task for best results!",
            entry.id,
            category.as_str().to_uppercase(),
            entry.goal,
            entry.week_start
        );
        info!("set weekly goal #{}", entry.id);
        goals.push(entry);
        self.store.save(Collection::Goals, &goals)?;

        Ok(reply)
    }

    pub fn complete_goal(&self, goal_id: i64) -> CatalystResult<String> {
        let id = id_arg(goal_id, "Please provide a valid goal ID.")?;

        let mut goals: Vec<WeeklyGoal> = self.store.load(Collection::Goals);
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| CatalystError::NotFound(format!("Goal #{id}")))?;
        goal.status = GoalStatus::Completed;
        goal.completed_at = self.clock.stamp();
        let reply = format!(
            "Goal #{id} completed: {}\nAmazing work! Celebrate this win!",
            goal.goal
        );
        self.store.save(Collection::Goals, &goals)?;

        info!("completed goal #{id}");
        Ok(reply)
    }

    // -----------------------------------------------------------------------
    // Report
    // -----------------------------------------------------------------------

    /// Tasks created, habit entries logged and goals set in the current ISO week.
    pub fn weekly_report(&self) -> CatalystResult<String> {
        let week = self.week_start();

        let todos: Vec<Task> = self.store.load(Collection::Tasks);
        let week_todos: Vec<&Task> = todos
            .iter()
            .filter(|t| date_part(&t.created) >= week.as_str())
            .collect();
        let todos_done = week_todos.iter().filter(|t| t.is_done()).count();

        let habits: Vec<Habit> = self.store.load(Collection::Habits);

        let goals: Vec<WeeklyGoal> = self.store.load(Collection::Goals);
        let week_goals: Vec<&WeeklyGoal> = goals.iter().filter(|g| g.week_start == week).collect();
        let goals_done = week_goals.iter().filter(|g| g.is_done()).count();

        let mut lines = vec![
            "**Weekly Progress Report**\n".to_string(),
            format!("Week of {week} | Generated: {}\n", self.clock.stamp()),
            "**Tasks:**".to_string(),
        ];
        if week_todos.is_empty() {
            lines.push("  No tasks created this week".into());
        } else {
            lines.push(format!(
                "  Total: {} | Completed: {todos_done} | Pending: {}",
                week_todos.len(),
                week_todos.len() - todos_done
            ));
            lines.push(format!(
                "  Completion rate: {}%",
                percent(todos_done as f64, week_todos.len() as f64)
            ));
        }
        lines.push(String::new());

        lines.push("**Habits:**".into());
        if habits.is_empty() {
            lines.push("  No habits tracked yet".into());
        }
        for h in &habits {
            let entries: Vec<_> = h.entries.iter().filter(|e| e.date >= week).collect();
            let done = entries.iter().filter(|e| e.completed).count();
            lines.push(format!(
                "  {}: {done}/{} days this week",
                h.name,
                entries.len()
            ));
        }
        lines.push(String::new());

        lines.push("**Weekly Goals:**".into());
        if week_goals.is_empty() {
            lines.push("  No goals set this week. Use set_weekly_goal to set some!".into());
        } else {
            for g in &week_goals {
                let status = if g.is_done() { "DONE" } else { "IN PROGRESS" };
                lines.push(format!("  [{status}] {} ({})", g.goal, g.category));
            }
            lines.push(format!("  Completed: {goals_done}/{}", week_goals.len()));
        }
        lines.push(String::new());

        let mut ratios = Vec::new();
        if !week_todos.is_empty() {
            ratios.push(todos_done as f64 / week_todos.len() as f64);
        }
        if !week_goals.is_empty() {
            ratios.push(goals_done as f64 / week_goals.len() as f64);
        }

        if ratios.is_empty() {
            lines.push("Start tracking tasks and goals to see your weekly score!".into());
        } else {
            let overall = percent(ratios.iter().sum::<f64>(), ratios.len() as f64);
            lines.push(format!("**Overall Score: {overall}%**"));
            lines.push(
                match Tier::of(overall) {
                    Tier::Strong => "Incredible week! You're on fire!",
                    Tier::Good => "Solid progress! Keep pushing forward.",
                    Tier::Fair => {
                        "Good start. Focus on fewer goals next week for better completion."
                    }
                    Tier::Low => {
                        "Tough week. Reset and come back stronger. Progress is not linear."
                    }
                }
                .into(),
            );
        }

        Ok(lines.join("\n"))
    }
}

/// Leading `YYYY-MM-DD` of a timestamp.
fn date_part(stamp: &str) -> &str {
    stamp.get(..10).unwrap_or(stamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsonStore;
    use catalyst_core::{FixedClock, IntoReply};
    use chrono::{Duration, NaiveDate};
    use tempfile::TempDir;

    fn test_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        (dir, store)
    }

    /// Wednesday 2026-10-21, in the ISO week starting Monday 2026-10-19.
    fn wednesday() -> FixedClock {
        FixedClock::on(2026, 10, 21).unwrap()
    }

    fn day(offset: i64) -> FixedClock {
        let base = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        FixedClock((base + Duration::days(offset)).and_hms_opt(8, 0, 0).unwrap())
    }

    #[test]
    fn test_add_and_complete_task() {
        let (_dir, store) = test_store();
        let clock = wednesday();
        let planner = Planner::new(&store, &clock);

        let reply = planner.add_task("Write cover letter", "HIGH", "2026-10-25").unwrap();
        assert_eq!(
            reply,
            "Task #1 added!\n  [HIGH] Write cover letter | Due: 2026-10-25"
        );
        planner.add_task("Update resume", "", "").unwrap();

        let reply = planner.complete_task(1).unwrap();
        assert!(reply.contains("Progress: 1 done, 1 remaining"));
        assert_eq!(planner.complete_task(1).unwrap(), "Task #1 is already completed!");
        assert!(planner.complete_task(7).into_reply().contains("not found"));
        assert!(planner.complete_task(-1).into_reply().starts_with("Error:"));
    }

    #[test]
    fn test_add_task_validation() {
        let (_dir, store) = test_store();
        let clock = wednesday();
        let planner = Planner::new(&store, &clock);

        assert!(planner.add_task(" ", "high", "").into_reply().starts_with("Error:"));
        let reply = planner.add_task("x", "urgent", "").into_reply();
        assert_eq!(
            reply,
            "Error: Invalid priority 'urgent'. Must be one of: high, medium, low"
        );
    }

    #[test]
    fn test_list_tasks_hides_completed_by_default() {
        let (_dir, store) = test_store();
        let clock = wednesday();
        let planner = Planner::new(&store, &clock);
        planner.add_task("low thing", "low", "").unwrap();
        planner.add_task("urgent thing", "high", "").unwrap();
        planner.complete_task(1).unwrap();

        let pending = planner.list_tasks(false).unwrap();
        assert!(pending.starts_with("Your Tasks (1):"));
        assert!(pending.contains("[ ] #2 urgent thing"));
        assert!(!pending.contains("low thing"));

        let all = planner.list_tasks(true).unwrap();
        assert!(all.contains("[x] #1 low thing"));
        assert!(all.find("HIGH PRIORITY").unwrap() < all.find("LOW PRIORITY").unwrap());
        assert!(all.contains("Progress: 1/2 tasks done"));

        planner.complete_task(2).unwrap();
        assert!(planner.list_tasks(false).unwrap().starts_with("All tasks completed!"));
    }

    #[test]
    fn test_habit_streak_over_consecutive_days() {
        let (_dir, store) = test_store();
        let mut last = String::new();
        for offset in 0..5 {
            let clock = day(offset);
            last = Planner::new(&store, &clock).track_habit("Exercise", true).unwrap();
        }
        assert!(last.contains("Current streak: 5 days"));
        assert!(last.contains("Completion rate: 100% (5/5 days)"));
        assert!(last.contains("Keep the streak alive!"));

        let habits: Vec<Habit> = store.load(Collection::Habits);
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "exercise");
    }

    #[test]
    fn test_habit_streak_resets_after_gap_or_skip() {
        let (_dir, store) = test_store();
        for offset in 0..3 {
            let clock = day(offset);
            Planner::new(&store, &clock).track_habit("reading", true).unwrap();
        }

        // Day 3 skipped outright; day 4 starts over.
        let clock = day(4);
        let reply = Planner::new(&store, &clock).track_habit("reading", true).unwrap();
        assert!(reply.contains("Current streak: 1 days"));

        // Re-logging the same day as skipped drops the streak to zero.
        let reply = Planner::new(&store, &clock).track_habit("reading", false).unwrap();
        assert!(reply.contains("Skipped for today"));
        assert!(reply.contains("Current streak: 0 days"));
        assert!(reply.contains("Completion rate: 75% (3/4 days)"));
    }

    #[test]
    fn test_view_habits() {
        let (_dir, store) = test_store();
        let clock = wednesday();
        let planner = Planner::new(&store, &clock);
        assert!(planner.view_habits().unwrap().starts_with("No habits tracked yet"));

        planner.track_habit("meditation", true).unwrap();
        planner.track_habit("reading", false).unwrap();
        let view = planner.view_habits().unwrap();
        assert!(view.contains("[x] meditation: 1 day streak | 100% rate (1/1)"));
        assert!(view.contains("[ ] reading: 0 day streak | 0% rate (0/1)"));
    }

    #[test]
    fn test_goal_category_falls_back_to_general() {
        let (_dir, store) = test_store();
        let clock = wednesday();
        let planner = Planner::new(&store, &clock);

        let reply = planner.set_weekly_goal("Ship portfolio", "hobby").unwrap();
        assert!(reply.contains("[GENERAL] Ship portfolio"));
        assert!(reply.contains("Week of: 2026-10-19"));

        planner.set_weekly_goal("Run 10k", "Health").unwrap();
        let goals: Vec<WeeklyGoal> = store.load(Collection::Goals);
        assert_eq!(goals[1].category, GoalCategory::Health);
        assert_eq!(goals[1].id, 2);
    }

    #[test]
    fn test_complete_goal() {
        let (_dir, store) = test_store();
        let clock = wednesday();
        let planner = Planner::new(&store, &clock);
        planner.set_weekly_goal("Apply to 5 jobs", "career").unwrap();

        assert!(planner.complete_goal(1).unwrap().starts_with("Goal #1 completed"));
        assert!(planner.complete_goal(2).into_reply().contains("not found"));

        let goals: Vec<WeeklyGoal> = store.load(Collection::Goals);
        assert!(goals[0].is_done());
        assert_eq!(goals[0].completed_at, "2026-10-21 12:00");
    }

    #[test]
    fn test_weekly_report_scores_current_week() {
        let (_dir, store) = test_store();

        // Last week's task must not count.
        let last_week = FixedClock::on(2026, 10, 16).unwrap();
        Planner::new(&store, &last_week).add_task("old", "low", "").unwrap();

        let clock = wednesday();
        let planner = Planner::new(&store, &clock);
        planner.add_task("a", "high", "").unwrap();
        planner.add_task("b", "high", "").unwrap();
        planner.complete_task(2).unwrap();
        planner.set_weekly_goal("g1", "career").unwrap();
        planner.set_weekly_goal("g2", "career").unwrap();
        planner.complete_goal(1).unwrap();
        planner.complete_goal(2).unwrap();
        planner.track_habit("walk", true).unwrap();

        let report = planner.weekly_report().unwrap();
        assert!(report.contains("Week of 2026-10-19"));
        assert!(report.contains("Total: 2 | Completed: 1 | Pending: 1"));
        assert!(report.contains("Completion rate: 50%"));
        assert!(report.contains("walk: 1/1 days this week"));
        assert!(report.contains("Completed: 2/2"));
        // mean(0.5, 1.0) = 75%
        assert!(report.contains("**Overall Score: 75%**"));
        assert!(report.contains("Solid progress!"));
    }

    #[test]
    fn test_weekly_report_empty() {
        let (_dir, store) = test_store();
        let clock = wednesday();
        let report = Planner::new(&store, &clock).weekly_report().unwrap();
        assert!(report.contains("No tasks created this week"));
        assert!(report.contains("No habits tracked yet"));
        assert!(report.ends_with("Start tracking tasks and goals to see your weekly score!"));
    }
}
