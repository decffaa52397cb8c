use serde_json::{json, Map, Value};

use catalyst_core::{
    analyze_skill_gap, search_jobs, ApplicationStatus, ExpenseCategory, GoalCategory, IncomeSource,
    Mood, Priority,
};
use catalyst_store::Toolbox;

use crate::protocol::ToolResult;
use crate::server::ServerConfig;

// ---------------------------------------------------------------------------
// Tool schemas for tools/list
// ---------------------------------------------------------------------------

pub fn tool_definitions() -> Value {
    let tools = vec![
        // --- Job search ---
        json!({
            "name": "search_jobs",
            "description": "Build job-search links for LinkedIn, Indeed, Naukri, Glassdoor, Wellfound and Internshala. Returns a JSON object of platform -> URL.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "job_title": { "type": "string", "description": "Role to search for (e.g. 'backend developer')" },
                    "location": { "type": "string", "description": "City or country. Defaults to the configured location." }
                },
                "required": ["job_title"]
            }
        }),
        json!({
            "name": "analyze_skill_gap",
            "description": "Compare the user's current skills with what a target role requires and give a readiness score with an action plan.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "current_skills": { "type": "string", "description": "Comma-separated skills (e.g. 'Python, SQL, Git')" },
                    "target_role": {
                        "type": "string",
                        "default": "full stack developer",
                        "description": "frontend developer, backend developer, full stack developer, data scientist, devops engineer, mobile developer"
                    }
                },
                "required": ["current_skills"]
            }
        }),
        // --- Applications ---
        json!({
            "name": "add_application",
            "description": "Start tracking a job application.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "company": { "type": "string" },
                    "role": { "type": "string" },
                    "status": {
                        "type": "string",
                        "enum": ApplicationStatus::ALL,
                        "default": "applied"
                    },
                    "notes": { "type": "string" }
                },
                "required": ["company", "role"]
            }
        }),
        json!({
            "name": "update_application",
            "description": "Move a tracked application to a new status, optionally replacing its notes.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "application_id": { "type": "integer", "minimum": 1 },
                    "status": {
                        "type": "string",
                        "enum": ApplicationStatus::ALL
                    },
                    "notes": { "type": "string" }
                },
                "required": ["application_id", "status"]
            }
        }),
        json!({
            "name": "list_applications",
            "description": "List tracked applications grouped by status, with a summary line.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "status_filter": { "type": "string", "description": "Only show this status. Empty for all." }
                }
            }
        }),
        // --- Planner ---
        json!({
            "name": "add_task",
            "description": "Add a to-do item.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "task": { "type": "string" },
                    "priority": { "type": "string", "enum": Priority::ALL, "default": "medium" },
                    "due_date": { "type": "string", "description": "YYYY-MM-DD" }
                },
                "required": ["task"]
            }
        }),
        json!({
            "name": "complete_task",
            "description": "Mark a task as done.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "task_id": { "type": "integer", "minimum": 1 }
                },
                "required": ["task_id"]
            }
        }),
        json!({
            "name": "list_tasks",
            "description": "List tasks grouped by priority.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "show_completed": { "type": "boolean", "default": false }
                }
            }
        }),
        json!({
            "name": "track_habit",
            "description": "Record today's result for a habit. Creates the habit on first use.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "habit_name": { "type": "string" },
                    "completed": { "type": "boolean", "default": true }
                },
                "required": ["habit_name"]
            }
        }),
        json!({
            "name": "view_habits",
            "description": "Show every habit with its streak and completion rate.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
        json!({
            "name": "set_weekly_goal",
            "description": "Set a goal for the current week.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "goal": { "type": "string" },
                    "category": {
                        "type": "string",
                        "enum": GoalCategory::ALL,
                        "default": "general"
                    }
                },
                "required": ["goal"]
            }
        }),
        json!({
            "name": "complete_goal",
            "description": "Mark a weekly goal as completed.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "goal_id": { "type": "integer", "minimum": 1 }
                },
                "required": ["goal_id"]
            }
        }),
        json!({
            "name": "weekly_progress_report",
            "description": "Tasks, habits and goals for the current week with an overall score.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
        // --- Finance ---
        json!({
            "name": "add_expense",
            "description": "Log an expense. Warns when the month's spending passes 80% of the budget.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "amount": { "type": "number", "exclusiveMinimum": 0 },
                    "category": {
                        "type": "string",
                        "enum": ExpenseCategory::ALL,
                        "default": "other"
                    },
                    "description": { "type": "string" }
                },
                "required": ["amount"]
            }
        }),
        json!({
            "name": "view_expenses",
            "description": "Expense breakdown by category for a period.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "period": { "type": "string", "enum": ["today", "week", "month", "all"], "default": "month" }
                }
            }
        }),
        json!({
            "name": "add_income",
            "description": "Log an income entry.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "amount": { "type": "number", "exclusiveMinimum": 0 },
                    "source": {
                        "type": "string",
                        "enum": IncomeSource::ALL,
                        "default": "salary"
                    },
                    "description": { "type": "string" }
                },
                "required": ["amount"]
            }
        }),
        json!({
            "name": "set_budget",
            "description": "Set the monthly budget, replacing any previous one.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "monthly_total": { "type": "number", "exclusiveMinimum": 0 },
                    "category_budgets": { "type": "string", "description": "e.g. 'food:5000,transport:2000'" }
                },
                "required": ["monthly_total"]
            }
        }),
        json!({
            "name": "set_savings_goal",
            "description": "Create a savings goal.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "target_amount": { "type": "number", "exclusiveMinimum": 0 },
                    "deadline": { "type": "string", "description": "YYYY-MM-DD" }
                },
                "required": ["name", "target_amount"]
            }
        }),
        json!({
            "name": "add_to_savings",
            "description": "Deposit money into a savings goal.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "goal_id": { "type": "integer", "minimum": 1 },
                    "amount": { "type": "number", "exclusiveMinimum": 0 }
                },
                "required": ["goal_id", "amount"]
            }
        }),
        json!({
            "name": "view_savings",
            "description": "Progress of every savings goal.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
        json!({
            "name": "financial_summary",
            "description": "Income, expenses, budget use, savings and savings-rate advice for a period.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "period": { "type": "string", "enum": ["month", "all"], "default": "month" }
                }
            }
        }),
        // --- Wellness ---
        json!({
            "name": "log_mood",
            "description": "Log how the user feels right now.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "mood": {
                        "type": "string",
                        "enum": Mood::ALL
                    },
                    "notes": { "type": "string" }
                },
                "required": ["mood"]
            }
        }),
        json!({
            "name": "get_mood_history",
            "description": "Mood entries for the last N days with a breakdown and trend.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "days": { "type": "integer", "minimum": 1, "maximum": 90, "default": 7 }
                }
            }
        }),
        json!({
            "name": "journal_entry",
            "description": "Save a journal entry, or get a writing prompt when the entry is empty.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "entry": { "type": "string" },
                    "get_prompt": { "type": "boolean", "default": false }
                }
            }
        }),
        json!({
            "name": "weekly_checkin",
            "description": "Mood and journal activity for the last 7 days.",
            "inputSchema": { "type": "object", "properties": {} }
        }),
    ];

    json!({ "tools": tools })
}

// ---------------------------------------------------------------------------
// Tool dispatch
// ---------------------------------------------------------------------------

pub fn call_tool(toolbox: &Toolbox, config: &ServerConfig, name: &str, args: &Value) -> ToolResult {
    match name {
        // Stateless
        "search_jobs" => {
            let location = match arg(args, "location").trim() {
                "" => config.default_location.as_str(),
                loc => loc,
            };
            match job_links(arg(args, "job_title"), location) {
                Ok(links) => ToolResult::text(links.to_string()),
                Err(err) => ToolResult::error(err.to_string()),
            }
        }
        "analyze_skill_gap" => ToolResult::reply(analyze_skill_gap(
            arg(args, "current_skills"),
            arg(args, "target_role"),
        )),
        // Applications
        "add_application" => ToolResult::reply(toolbox.applications().add(
            arg(args, "company"),
            arg(args, "role"),
            arg(args, "status"),
            arg(args, "notes"),
        )),
        "update_application" => ToolResult::reply(toolbox.applications().update(
            get_i64(args, "application_id", 0),
            arg(args, "status"),
            arg(args, "notes"),
        )),
        "list_applications" => {
            ToolResult::reply(toolbox.applications().list(arg(args, "status_filter")))
        }
        // Planner
        "add_task" => ToolResult::reply(toolbox.planner().add_task(
            arg(args, "task"),
            arg(args, "priority"),
            arg(args, "due_date"),
        )),
        "complete_task" => {
            ToolResult::reply(toolbox.planner().complete_task(get_i64(args, "task_id", 0)))
        }
        "list_tasks" => ToolResult::reply(
            toolbox
                .planner()
                .list_tasks(get_bool(args, "show_completed", false)),
        ),
        "track_habit" => ToolResult::reply(
            toolbox
                .planner()
                .track_habit(arg(args, "habit_name"), get_bool(args, "completed", true)),
        ),
        "view_habits" => ToolResult::reply(toolbox.planner().view_habits()),
        "set_weekly_goal" => ToolResult::reply(
            toolbox
                .planner()
                .set_weekly_goal(arg(args, "goal"), arg(args, "category")),
        ),
        "complete_goal" => {
            ToolResult::reply(toolbox.planner().complete_goal(get_i64(args, "goal_id", 0)))
        }
        "weekly_progress_report" => ToolResult::reply(toolbox.planner().weekly_report()),
        // Finance
        "add_expense" => ToolResult::reply(toolbox.finance().add_expense(
            get_f64(args, "amount"),
            arg(args, "category"),
            arg(args, "description"),
        )),
        "view_expenses" => ToolResult::reply(toolbox.finance().view_expenses(arg(args, "period"))),
        "add_income" => ToolResult::reply(toolbox.finance().add_income(
            get_f64(args, "amount"),
            arg(args, "source"),
            arg(args, "description"),
        )),
        "set_budget" => ToolResult::reply(
            toolbox
                .finance()
                .set_budget(get_f64(args, "monthly_total"), arg(args, "category_budgets")),
        ),
        "set_savings_goal" => ToolResult::reply(toolbox.finance().set_savings_goal(
            arg(args, "name"),
            get_f64(args, "target_amount"),
            arg(args, "deadline"),
        )),
        "add_to_savings" => ToolResult::reply(
            toolbox
                .finance()
                .add_to_savings(get_i64(args, "goal_id", 0), get_f64(args, "amount")),
        ),
        "view_savings" => ToolResult::reply(toolbox.finance().view_savings()),
        "financial_summary" => {
            ToolResult::reply(toolbox.finance().financial_summary(arg(args, "period")))
        }
        // Wellness
        "log_mood" => ToolResult::reply(
            toolbox
                .wellness()
                .log_mood(arg(args, "mood"), arg(args, "notes")),
        ),
        "get_mood_history" => {
            ToolResult::reply(toolbox.wellness().mood_history(get_i64(args, "days", 7)))
        }
        "journal_entry" => ToolResult::reply(
            toolbox
                .wellness()
                .journal(arg(args, "entry"), get_bool(args, "get_prompt", false)),
        ),
        "weekly_checkin" => ToolResult::reply(toolbox.wellness().weekly_checkin()),
        _ => ToolResult::error(format!("Error: unknown tool: {name}")),
    }
}

/// Search links as an ordered `{platform: url}` object, or an
/// `{"error": ...}` object for a blank title.
pub fn job_links(job_title: &str, location: &str) -> Result<Value, Value> {
    match search_jobs(job_title, location) {
        Ok(links) => Ok(Value::Object(
            links
                .into_iter()
                .map(|l| (l.platform.to_string(), Value::String(l.url)))
                .collect::<Map<String, Value>>(),
        )),
        Err(e) => Err(json!({ "error": e.to_string() })),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn get_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(|v| v.as_str())
}

/// String argument, empty when missing.
fn arg<'a>(args: &'a Value, key: &str) -> &'a str {
    get_str(args, key).unwrap_or("")
}

/// Integer argument. Whole floats (`3.0`) are accepted.
fn get_i64(args: &Value, key: &str, default: i64) -> i64 {
    args.get(key)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(default)
}

/// Missing or non-numeric amounts read as 0 and fail amount validation.
fn get_f64(args: &Value, key: &str) -> f64 {
    args.get(key).and_then(|v| v.as_f64()).unwrap_or(0.0)
}

fn get_bool(args: &Value, key: &str, default: bool) -> bool {
    args.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
}
