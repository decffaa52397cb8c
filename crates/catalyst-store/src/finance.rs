//! Personal finance: expenses, income, the monthly budget and savings goals.

use std::collections::BTreeMap;

use tracing::{debug, info};

use catalyst_core::stats::{percent, progress_bar, round2};
use catalyst_core::{
    money, next_id, Budget, CatalystError, CatalystResult, Clock, Collection, Deposit, Expense,
    ExpenseCategory, Income, IncomeSource, Period, RecordStore, SavingsGoal,
};

use crate::{amount_arg, id_arg, optional_text, required_text};

/// Share of the monthly budget above which `add_expense` warns.
const BUDGET_WARN_RATIO: f64 = 0.8;

const POSITIVE_AMOUNT: &str = "Amount must be a positive number.";

pub struct Finance<'a, S> {
    store: &'a S,
    clock: &'a dyn Clock,
}

impl<'a, S: RecordStore> Finance<'a, S> {
    pub fn new(store: &'a S, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Monthly budget, when one is set with a positive total.
    fn budget_total(&self) -> Option<f64> {
        self.store
            .load_one::<Budget>(Collection::Budget)
            .map(|b| b.monthly_total)
            .filter(|t| *t > 0.0)
    }

    // -----------------------------------------------------------------------
    // Expenses
    // -----------------------------------------------------------------------

    pub fn add_expense(
        &self,
        amount: f64,
        category: &str,
        description: &str,
    ) -> CatalystResult<String> {
        let amount = amount_arg(amount, POSITIVE_AMOUNT)?;
        let category = match category.trim() {
            "" => ExpenseCategory::Other,
            c => c.parse()?,
        };
        let today = self.clock.date_string();

        let mut expenses: Vec<Expense> = self.store.load(Collection::Expenses);
        let expense = Expense {
            id: next_id(&expenses),
            amount,
            category,
            description: optional_text(description),
            date: today.clone(),
            timestamp: self.clock.stamp(),
        };
        let id = expense.id;
        let desc = if expense.description.is_empty() {
            String::new()
        } else {
            format!(" - {}", expense.description)
        };
        expenses.push(expense);
        self.store.save(Collection::Expenses, &expenses)?;
        info!("logged expense #{id}: {amount} ({category})");

        let today_total: f64 = expenses
            .iter()
            .filter(|e| e.date == today)
            .map(|e| e.amount)
            .sum();

        let mut reply = format!(
            "Expense #{id} logged!\n  {}: {}{desc}\n  Today's total: {}",
            capitalize(category.as_str()),
            money(amount),
            money(today_total)
        );

        if let Some(budget) = self.budget_total() {
            let month = self.clock.month_prefix();
            let month_total: f64 = expenses
                .iter()
                .filter(|e| e.date.starts_with(&month))
                .map(|e| e.amount)
                .sum();
            if month_total > budget * BUDGET_WARN_RATIO {
                debug!("month spend {month_total} over warning line of {budget}");
                reply.push_str(&format!(
                    "\n  WARNING: You've used {}% of your monthly budget!",
                    percent(month_total, budget)
                ));
            }
        }

        Ok(reply)
    }

    pub fn view_expenses(&self, period: &str) -> CatalystResult<String> {
        let expenses: Vec<Expense> = self.store.load(Collection::Expenses);
        if expenses.is_empty() {
            return Ok("No expenses logged yet! Use add_expense to start tracking.".into());
        }

        let period = Period::parse(period);
        let today = self.clock.today();
        let label = period.label(today);
        let filtered: Vec<&Expense> = expenses
            .iter()
            .filter(|e| period.matches(&e.date, today))
            .collect();
        if filtered.is_empty() {
            return Ok(format!("No expenses found for {label}."));
        }

        let total: f64 = filtered.iter().map(|e| e.amount).sum();
        let by_category = ranked(filtered.iter().map(|e| (e.category.as_str(), e.amount)));

        let mut lines = vec![
            format!("**Expenses - {label}**\n"),
            format!("Total: {} ({} transactions)\n", money(total), filtered.len()),
            "**By Category:**".to_string(),
        ];
        for (category, amount) in &by_category {
            let pct = percent(*amount, total);
            lines.push(format!(
                "  {category:15} {:>15}  {} {pct}%",
                money(*amount),
                "#".repeat((pct.max(0) / 5) as usize)
            ));
        }

        if period == Period::Month {
            if let Some(budget) = self.budget_total() {
                let remaining = budget - total;
                lines.push(format!("\n**Budget:** {}", money(budget)));
                lines.push(format!(
                    "  Spent: {} | Remaining: {}",
                    money(total),
                    money(remaining)
                ));
                if remaining < 0.0 {
                    lines.push(format!("  You're {} OVER budget!", money(-remaining)));
                }
            }
        }

        Ok(lines.join("\n"))
    }

    // -----------------------------------------------------------------------
    // Income and budget
    // -----------------------------------------------------------------------

    pub fn add_income(
        &self,
        amount: f64,
        source: &str,
        description: &str,
    ) -> CatalystResult<String> {
        let amount = amount_arg(amount, POSITIVE_AMOUNT)?;
        let source = match source.trim() {
            "" => IncomeSource::Salary,
            s => s.parse().unwrap_or(IncomeSource::Other),
        };

        let mut income: Vec<Income> = self.store.load(Collection::Income);
        let entry = Income {
            id: next_id(&income),
            amount,
            source,
            description: optional_text(description),
            date: self.clock.date_string(),
            timestamp: self.clock.stamp(),
        };
        info!("logged income #{}: {amount} ({source})", entry.id);
        income.push(entry);
        self.store.save(Collection::Income, &income)?;

        let month = self.clock.month_prefix();
        let month_income: f64 = income
            .iter()
            .filter(|i| i.date.starts_with(&month))
            .map(|i| i.amount)
            .sum();

        Ok(format!(
            "Income logged!\n  Source: {} | Amount: {}\n  This month's total income: {}",
            capitalize(source.as_str()),
            money(amount),
            money(month_income)
        ))
    }

    /// Replace the monthly budget. `category_budgets` is a comma list of
    /// `category:amount` pairs; items that don't parse are skipped.
    pub fn set_budget(&self, monthly_total: f64, category_budgets: &str) -> CatalystResult<String> {
        let monthly_total = amount_arg(monthly_total, "Monthly budget must be a positive number.")?;

        let mut categories = BTreeMap::new();
        for item in category_budgets.split(',') {
            let Some((category, amount)) = item.split_once(':') else {
                continue;
            };
            let category = category.trim().to_lowercase();
            match amount.trim().parse::<f64>() {
                Ok(limit) if round2(limit).is_finite() && !category.is_empty() => {
                    categories.insert(category, round2(limit));
                }
                _ => debug!("skipping budget item {item:?}"),
            }
        }

        let budget = Budget {
            monthly_total,
            categories,
            set_date: self.clock.date_string(),
        };
        self.store.save_one(Collection::Budget, &budget)?;
        info!("budget set to {monthly_total}");

        let mut lines = vec![format!("Monthly budget set: {}\n", money(monthly_total))];
        if !budget.categories.is_empty() {
            lines.push("Category limits:".into());
            for (category, limit) in &budget.categories {
                lines.push(format!("  {}: {}", capitalize(category), money(*limit)));
            }
        }
        lines.push("\nTip: The 50/30/20 rule - 50% needs, 30% wants, 20% savings.".into());
        Ok(lines.join("\n"))
    }

    // -----------------------------------------------------------------------
    // Savings goals
    // -----------------------------------------------------------------------

    pub fn set_savings_goal(
        &self,
        name: &str,
        target_amount: f64,
        deadline: &str,
    ) -> CatalystResult<String> {
        let name = required_text(name, "Goal name is required.")?;
        let target = amount_arg(target_amount, "Target amount must be a positive number.")?;

        let mut savings: Vec<SavingsGoal> = self.store.load(Collection::Savings);
        let goal = SavingsGoal {
            id: next_id(&savings),
            name: name.to_string(),
            target,
            saved: 0.0,
            deadline: optional_text(deadline),
            deposits: Vec::new(),
            created: self.clock.date_string(),
        };
        let deadline = if goal.deadline.is_empty() {
            String::new()
        } else {
            format!("\n  Deadline: {}", goal.deadline)
        };
        let reply = format!(
            "Savings goal created!\n  Goal #{}: {}\n  Target: {}{deadline}\n  Start saving with add_to_savings!",
            goal.id,
            goal.name,
            money(goal.target)
        );
        info!("created savings goal #{}", goal.id);
        savings.push(goal);
        self.store.save(Collection::Savings, &savings)?;

        Ok(reply)
    }

    pub fn add_to_savings(&self, goal_id: i64, amount: f64) -> CatalystResult<String> {
        let id = id_arg(goal_id, "Please provide a valid goal ID.")?;
        let amount = amount_arg(amount, POSITIVE_AMOUNT)?;

        let mut savings: Vec<SavingsGoal> = self.store.load(Collection::Savings);
        let goal = savings
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| CatalystError::NotFound(format!("Savings goal #{id}")))?;
        let saved = round2(goal.saved + amount);
        if !saved.is_finite() {
            return Err(CatalystError::Invalid("Amount is too large.".into()));
        }
        goal.saved = saved;
        goal.deposits.push(Deposit {
            amount,
            date: self.clock.date_string(),
        });

        let pct = goal.progress();
        let mut reply = format!(
            "Added {} to '{}'!\n  Progress: {} / {} ({pct}%)\n  [{}]\n  Remaining: {}",
            money(amount),
            goal.name,
            money(goal.saved),
            money(goal.target),
            progress_bar(pct),
            money(goal.remaining())
        );
        if goal.is_reached() {
            reply.push_str("\n\n  GOAL REACHED! Congratulations!");
        }
        self.store.save(Collection::Savings, &savings)?;

        info!("deposited {amount} into savings goal #{id}");
        Ok(reply)
    }

    pub fn view_savings(&self) -> CatalystResult<String> {
        let savings: Vec<SavingsGoal> = self.store.load(Collection::Savings);
        if savings.is_empty() {
            return Ok("No savings goals yet! Use set_savings_goal to create one.".into());
        }

        let mut lines = vec![format!("**Your Savings Goals ({}):**\n", savings.len())];
        for goal in &savings {
            let pct = goal.progress();
            let reached = if goal.is_reached() { " (REACHED!)" } else { "" };
            let deadline = if goal.deadline.is_empty() {
                String::new()
            } else {
                format!(" | Deadline: {}", goal.deadline)
            };
            lines.push(format!("  #{} {}{reached}", goal.id, goal.name));
            lines.push(format!(
                "    {} / {} ({pct}%){deadline}",
                money(goal.saved),
                money(goal.target)
            ));
            lines.push(format!("    [{}]", progress_bar(pct)));
            lines.push(String::new());
        }

        let saved: f64 = savings.iter().map(|g| g.saved).sum();
        let target: f64 = savings.iter().map(|g| g.target).sum();
        lines.push(format!("**Total Saved: {} / {}**", money(saved), money(target)));
        Ok(lines.join("\n"))
    }

    // -----------------------------------------------------------------------
    // Summary
    // -----------------------------------------------------------------------

    pub fn financial_summary(&self, period: &str) -> CatalystResult<String> {
        let period = Period::parse(period);
        let today = self.clock.today();

        let expenses: Vec<Expense> = self.store.load(Collection::Expenses);
        let income: Vec<Income> = self.store.load(Collection::Income);
        let savings: Vec<SavingsGoal> = self.store.load(Collection::Savings);

        let expenses: Vec<&Expense> = expenses
            .iter()
            .filter(|e| period.matches(&e.date, today))
            .collect();
        let income: Vec<&Income> = income
            .iter()
            .filter(|i| period.matches(&i.date, today))
            .collect();

        let total_expense: f64 = expenses.iter().map(|e| e.amount).sum();
        let total_income: f64 = income.iter().map(|i| i.amount).sum();
        let net = total_income - total_expense;

        let mut lines = vec![
            format!("**Financial Summary - {}**\n", period.label(today)),
            format!("**Income:** {}", money(total_income)),
        ];
        for (source, amount) in ranked(income.iter().map(|i| (i.source.as_str(), i.amount))) {
            lines.push(format!("  {}: {}", capitalize(source), money(amount)));
        }
        lines.push(String::new());

        lines.push(format!("**Expenses:** {}", money(total_expense)));
        for (category, amount) in ranked(expenses.iter().map(|e| (e.category.as_str(), e.amount)))
            .into_iter()
            .take(5)
        {
            lines.push(format!("  {}: {}", capitalize(category), money(amount)));
        }
        lines.push(String::new());

        let net_label = if net >= 0.0 { "Surplus" } else { "Deficit" };
        lines.push(format!("**Net {net_label}:** {}", money(net.abs())));

        if period == Period::Month {
            if let Some(budget) = self.budget_total() {
                lines.push(format!(
                    "\n**Budget:** {} / {} ({}% used)",
                    money(total_expense),
                    money(budget),
                    percent(total_expense, budget)
                ));
            }
        }

        if !savings.is_empty() {
            let saved: f64 = savings.iter().map(|g| g.saved).sum();
            let target: f64 = savings.iter().map(|g| g.target).sum();
            lines.push(format!(
                "\n**Savings Progress:** {} / {}",
                money(saved),
                money(target)
            ));
        }

        lines.push("\n**Quick Advice:**".into());
        if total_income > 0.0 {
            let rate = percent(net, total_income);
            lines.push(format!("  Savings rate: {rate}%"));
            lines.push(
                match rate {
                    r if r >= 20 => "  Excellent! You're saving more than the recommended 20%.",
                    r if r >= 10 => "  Good progress! Aim for 20% savings rate.",
                    r if r > 0 => {
                        "  Try to increase savings. Cut the highest expense category first."
                    }
                    _ => "  You're spending more than you earn. Review your top expenses.",
                }
                .into(),
            );
        } else {
            lines.push("  Log your income with add_income for better insights.".into());
        }

        Ok(lines.join("\n"))
    }
}

/// Sum amounts per key, largest first.
fn ranked<'k>(items: impl Iterator<Item = (&'k str, f64)>) -> Vec<(&'k str, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for (key, amount) in items {
        *totals.entry(key).or_default() += amount;
    }
    let mut ranked: Vec<_> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsonStore;
    use catalyst_core::{FixedClock, IntoReply};
    use tempfile::TempDir;

    fn test_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        (dir, store)
    }

    fn clock() -> FixedClock {
        FixedClock::on(2026, 10, 21).unwrap()
    }

    #[test]
    fn test_add_expense_reports_daily_total() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);

        let reply = finance.add_expense(250.5, "Food", "lunch").unwrap();
        assert_eq!(
            reply,
            "Expense #1 logged!\n  Food: Rs.250.50 - lunch\n  Today's total: Rs.250.50"
        );
        let reply = finance.add_expense(1000.0, "", "").unwrap();
        assert!(reply.contains("Other: Rs.1,000.00"));
        assert!(reply.contains("Today's total: Rs.1,250.50"));
    }

    #[test]
    fn test_add_expense_validation() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);

        assert_eq!(
            finance.add_expense(0.0, "food", "").into_reply(),
            "Error: Amount must be a positive number."
        );
        assert!(finance.add_expense(-3.0, "food", "").into_reply().starts_with("Error:"));
        assert!(finance
            .add_expense(10.0, "gadgets", "")
            .into_reply()
            .starts_with("Error: Invalid category 'gadgets'"));
        assert!(store.load::<Expense>(Collection::Expenses).is_empty());
    }

    #[test]
    fn test_huge_expense_is_rejected_and_history_kept() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);
        finance.add_expense(100.0, "food", "").unwrap();
        finance.add_expense(200.0, "food", "").unwrap();

        assert_eq!(
            finance.add_expense(1e307, "food", "").into_reply(),
            "Error: Amount must be a positive number."
        );
        assert!(finance.add_income(1e307, "salary", "").is_err());
        assert!(finance.set_budget(1e307, "").is_err());

        let expenses: Vec<Expense> = store.load(Collection::Expenses);
        assert_eq!(expenses.len(), 2);
        let reply = finance.add_expense(5.0, "food", "").unwrap();
        assert!(reply.starts_with("Expense #3 logged!"));
    }

    #[test]
    fn test_sub_cent_amounts_are_rejected() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);

        assert!(finance.add_expense(0.001, "food", "").is_err());
        assert!(finance.add_income(0.004, "salary", "").is_err());
        assert!(finance.set_savings_goal("Trip", 0.004, "").is_err());
        assert!(store.load::<Expense>(Collection::Expenses).is_empty());
        assert!(store.load::<SavingsGoal>(Collection::Savings).is_empty());

        finance.set_savings_goal("Trip", 10.0, "").unwrap();
        assert!(finance.add_to_savings(1, 0.003).is_err());
        let savings: Vec<SavingsGoal> = store.load(Collection::Savings);
        assert_eq!(savings[0].target, 10.0);
        assert!(savings[0].deposits.is_empty());
    }

    #[test]
    fn test_savings_total_overflow_keeps_goal() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);
        finance.set_savings_goal("Moon", 1000.0, "").unwrap();
        finance.add_to_savings(1, 1.7e306).unwrap();

        assert_eq!(
            finance.add_to_savings(1, 1.7e306).into_reply(),
            "Error: Amount is too large."
        );
        let savings: Vec<SavingsGoal> = store.load(Collection::Savings);
        assert_eq!(savings.len(), 1);
        assert_eq!(savings[0].deposits.len(), 1);
        assert!(savings[0].saved.is_finite());
    }

    #[test]
    fn test_budget_warning_above_80_percent() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);
        finance.set_budget(1000.0, "").unwrap();

        let reply = finance.add_expense(800.0, "rent", "").unwrap();
        assert!(!reply.contains("WARNING"));

        let reply = finance.add_expense(50.0, "food", "").unwrap();
        assert!(reply.contains("WARNING: You've used 85% of your monthly budget!"));
    }

    #[test]
    fn test_budget_ignores_other_months() {
        let (_dir, store) = test_store();
        let september = FixedClock::on(2026, 9, 30).unwrap();
        Finance::new(&store, &september).add_expense(900.0, "rent", "").unwrap();

        let clock = clock();
        let finance = Finance::new(&store, &clock);
        finance.set_budget(1000.0, "").unwrap();
        let reply = finance.add_expense(100.0, "food", "").unwrap();
        assert!(!reply.contains("WARNING"));
    }

    #[test]
    fn test_view_expenses_by_period() {
        let (_dir, store) = test_store();
        let earlier = FixedClock::on(2026, 10, 2).unwrap();
        Finance::new(&store, &earlier).add_expense(300.0, "transport", "").unwrap();

        let clock = clock();
        let finance = Finance::new(&store, &clock);
        finance.add_expense(100.0, "food", "").unwrap();
        finance.set_budget(350.0, "").unwrap();

        let month = finance.view_expenses("").unwrap();
        assert!(month.starts_with("**Expenses - October 2026**"));
        assert!(month.contains("Total: Rs.400.00 (2 transactions)"));
        assert!(month.find("transport").unwrap() < month.find("food").unwrap());
        assert!(month.contains("You're Rs.50.00 OVER budget!"));

        let today = finance.view_expenses("today").unwrap();
        assert!(today.contains("Total: Rs.100.00 (1 transactions)"));
        assert!(!today.contains("**Budget:**"));

        let nothing = FixedClock::on(2026, 11, 1).unwrap();
        let reply = Finance::new(&store, &nothing).view_expenses("week").unwrap();
        assert_eq!(reply, "No expenses found for This Week.");

        let all = Finance::new(&store, &nothing).view_expenses("everything").unwrap();
        assert!(all.starts_with("**Expenses - All Time**"));
    }

    #[test]
    fn test_view_expenses_empty() {
        let (_dir, store) = test_store();
        let clock = clock();
        let reply = Finance::new(&store, &clock).view_expenses("month").unwrap();
        assert!(reply.starts_with("No expenses logged yet!"));
    }

    #[test]
    fn test_add_income_source_fallback() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);

        let reply = finance.add_income(50000.0, "", "").unwrap();
        assert!(reply.contains("Source: Salary | Amount: Rs.50,000.00"));
        let reply = finance.add_income(2000.0, "lottery", "").unwrap();
        assert!(reply.contains("Source: Other"));
        assert!(reply.contains("This month's total income: Rs.52,000.00"));

        let income: Vec<Income> = store.load(Collection::Income);
        assert_eq!(income[1].source, IncomeSource::Other);
    }

    #[test]
    fn test_set_budget_skips_malformed_items() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);

        let reply = finance
            .set_budget(30000.0, "food:5000, Transport:2000.456,junk,fun:abc")
            .unwrap();
        assert!(reply.starts_with("Monthly budget set: Rs.30,000.00"));
        assert!(reply.contains("Food: Rs.5,000.00"));
        assert!(!reply.contains("Fun"));

        let budget: Budget = store.load_one(Collection::Budget).unwrap();
        assert_eq!(budget.categories.len(), 2);
        assert_eq!(budget.categories["transport"], 2000.46);

        assert!(finance.set_budget(0.0, "").into_reply().starts_with("Error:"));
    }

    #[test]
    fn test_savings_progress_and_goal_reached() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);
        let reply = finance.set_savings_goal("Laptop", 50000.0, "2026-12-31").unwrap();
        assert!(reply.contains("Goal #1: Laptop"));
        assert!(reply.contains("Deadline: 2026-12-31"));

        let reply = finance.add_to_savings(1, 25000.0).unwrap();
        assert!(reply.contains("(50%)"));
        assert!(reply.contains("[##########----------]"));
        assert!(!reply.contains("GOAL REACHED"));

        let reply = finance.add_to_savings(1, 30000.0).unwrap();
        assert!(reply.contains("(100%)"));
        assert!(reply.contains("Remaining: Rs.0.00"));
        assert!(reply.contains("GOAL REACHED! Congratulations!"));

        let savings: Vec<SavingsGoal> = store.load(Collection::Savings);
        assert_eq!(savings[0].saved, 55000.0);
        assert_eq!(savings[0].deposits.len(), 2);

        let view = finance.view_savings().unwrap();
        assert!(view.contains("#1 Laptop (REACHED!)"));
        assert!(view.contains("**Total Saved: Rs.55,000.00 / Rs.50,000.00**"));
    }

    #[test]
    fn test_savings_errors() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);

        assert!(finance.set_savings_goal(" ", 10.0, "").into_reply().starts_with("Error:"));
        assert!(finance.set_savings_goal("Trip", 0.0, "").into_reply().starts_with("Error:"));
        assert_eq!(
            finance.add_to_savings(3, 10.0).into_reply(),
            "Error: Savings goal #3 not found."
        );
        assert!(finance.add_to_savings(0, 10.0).into_reply().starts_with("Error:"));
        assert!(finance.view_savings().unwrap().starts_with("No savings goals yet!"));
    }

    #[test]
    fn test_financial_summary() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);
        finance.add_income(10000.0, "salary", "").unwrap();
        finance.add_expense(7000.0, "rent", "").unwrap();
        finance.add_expense(1500.0, "food", "").unwrap();
        finance.set_budget(10000.0, "").unwrap();
        finance.set_savings_goal("Fund", 5000.0, "").unwrap();

        let summary = finance.financial_summary("month").unwrap();
        assert!(summary.starts_with("**Financial Summary - October 2026**"));
        assert!(summary.contains("**Income:** Rs.10,000.00"));
        assert!(summary.contains("  Salary: Rs.10,000.00"));
        assert!(summary.contains("**Net Surplus:** Rs.1,500.00"));
        assert!(summary.contains("(85% used)"));
        assert!(summary.contains("**Savings Progress:** Rs.0.00 / Rs.5,000.00"));
        assert!(summary.contains("Savings rate: 15%"));
        assert!(summary.contains("Good progress!"));
    }

    #[test]
    fn test_financial_summary_without_income() {
        let (_dir, store) = test_store();
        let clock = clock();
        let finance = Finance::new(&store, &clock);
        finance.add_expense(20.0, "food", "").unwrap();

        let summary = finance.financial_summary("all").unwrap();
        assert!(summary.starts_with("**Financial Summary - All Time**"));
        assert!(summary.contains("**Net Deficit:** Rs.20.00"));
        assert!(summary.ends_with("Log your income with add_income for better insights."));
    }

    #[test]
    fn test_ranked_orders_by_amount() {
        let items = vec![("food", 10.0), ("rent", 50.0), ("food", 45.0)];
        let ranked = ranked(items.into_iter());
        assert_eq!(ranked, vec![("food", 55.0), ("rent", 50.0)]);
    }
}
