mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use catalyst_core::{analyze_skill_gap, CatalystResult};
use catalyst_mcp::tools::job_links;
use catalyst_store::Toolbox;

#[derive(Parser)]
#[command(
    name = "catalyst",
    version,
    about = "Catalyst - career, planning, money and wellness trackers"
)]
struct Cli {
    /// Directory holding the JSON collections
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Job search links and skill-gap analysis
    Jobs {
        #[command(subcommand)]
        command: JobsCommands,
    },

    /// Track job applications
    App {
        #[command(subcommand)]
        command: AppCommands,
    },

    /// Tasks, habits and weekly goals
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },

    /// Expenses, income, budget and savings
    Money {
        #[command(subcommand)]
        command: MoneyCommands,
    },

    /// Mood log and journal
    Wellness {
        #[command(subcommand)]
        command: WellnessCommands,
    },

    /// Show active configuration
    Config,

    /// Start the MCP server (stdio transport)
    Serve,
}

#[derive(Subcommand)]
enum JobsCommands {
    /// Print search links for every job board as JSON
    Search {
        /// Role to search for
        job_title: String,

        /// City or country (default from config)
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Compare your skills against a target role
    SkillGap {
        /// Comma-separated skills
        current_skills: String,

        /// Target role
        #[arg(short, long, default_value = "full stack developer")]
        role: String,
    },
}

#[derive(Subcommand)]
enum AppCommands {
    /// Start tracking an application
    Add {
        company: String,
        role: String,

        /// applied, screening, interview, technical, offer, rejected, withdrawn
        #[arg(short, long, default_value = "applied")]
        status: String,

        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Change an application's status
    Update {
        id: i64,
        status: String,

        /// Replaces existing notes when given
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// List applications grouped by status
    List {
        /// Only show this status
        #[arg(short, long, default_value = "")]
        status: String,
    },
}

#[derive(Subcommand)]
enum PlanCommands {
    /// Add a task
    Task {
        task: String,

        /// high, medium, low
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// YYYY-MM-DD
        #[arg(short, long, default_value = "")]
        due: String,
    },

    /// Mark a task as done
    Done { id: i64 },

    /// List tasks
    Tasks {
        /// Include completed tasks
        #[arg(short, long)]
        all: bool,
    },

    /// Record today's result for a habit
    Habit {
        name: String,

        /// Record the day as skipped
        #[arg(long)]
        skipped: bool,
    },

    /// Show habit streaks
    Habits,

    /// Set a goal for this week
    Goal {
        goal: String,

        /// career, health, learning, personal, general
        #[arg(short, long, default_value = "general")]
        category: String,
    },

    /// Mark a weekly goal as completed
    GoalDone { id: i64 },

    /// Weekly progress report
    Report,
}

#[derive(Subcommand)]
enum MoneyCommands {
    /// Log an expense
    Spend {
        amount: f64,

        #[arg(short, long, default_value = "other")]
        category: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Expense breakdown (today, week, month, all)
    Expenses {
        #[arg(default_value = "month")]
        period: String,
    },

    /// Log income
    Earn {
        amount: f64,

        #[arg(short, long, default_value = "salary")]
        source: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Set the monthly budget
    Budget {
        monthly_total: f64,

        /// e.g. "food:5000,transport:2000"
        #[arg(short, long, default_value = "")]
        categories: String,
    },

    /// Create a savings goal
    SavingsGoal {
        name: String,
        target: f64,

        /// YYYY-MM-DD
        #[arg(short, long, default_value = "")]
        deadline: String,
    },

    /// Deposit into a savings goal
    Save { goal_id: i64, amount: f64 },

    /// Savings goal progress
    Savings,

    /// Financial summary (month or all)
    Summary {
        #[arg(default_value = "month")]
        period: String,
    },
}

#[derive(Subcommand)]
enum WellnessCommands {
    /// Log a mood
    Mood {
        /// great, good, okay, low, stressed, anxious, sad, angry, tired
        mood: String,

        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Mood history for the last N days
    History {
        #[arg(short, long, default_value = "7")]
        days: i64,
    },

    /// Write a journal entry (no text prints a prompt)
    Journal {
        #[arg(default_value = "")]
        entry: String,

        /// Print a prompt instead of saving
        #[arg(long)]
        prompt: bool,
    },

    /// Weekly wellness check-in
    Checkin,
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("dev", "catalyst", "catalyst")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("data"))
}

fn open_toolbox(data_dir: PathBuf) -> Result<Toolbox> {
    Toolbox::open(&data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))
}

/// Print a tracker reply. Failures exit non-zero with `Error: ...`.
fn print(reply: CatalystResult<String>) -> Result<()> {
    println!("{}", reply?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;

    if let Commands::Config = cli.command {
        return cmd_config(&cfg);
    }

    let data_dir = cli
        .data_dir
        .or_else(|| cfg.store.data_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(default_data_dir);
    let toolbox = open_toolbox(data_dir)?;

    match cli.command {
        Commands::Jobs { command } => match command {
            JobsCommands::Search {
                job_title,
                location,
            } => {
                let location = location.unwrap_or_else(|| cfg.jobs.default_location.clone());
                match job_links(&job_title, &location) {
                    Ok(links) => {
                        println!("{}", serde_json::to_string_pretty(&links)?);
                        Ok(())
                    }
                    Err(err) => {
                        anyhow::bail!("{}", err["error"].as_str().unwrap_or("search failed"))
                    }
                }
            }
            JobsCommands::SkillGap {
                current_skills,
                role,
            } => print(analyze_skill_gap(&current_skills, &role)),
        },
        Commands::App { command } => {
            let apps = toolbox.applications();
            match command {
                AppCommands::Add {
                    company,
                    role,
                    status,
                    notes,
                } => print(apps.add(&company, &role, &status, &notes)),
                AppCommands::Update { id, status, notes } => {
                    print(apps.update(id, &status, &notes))
                }
                AppCommands::List { status } => print(apps.list(&status)),
            }
        }
        Commands::Plan { command } => {
            let planner = toolbox.planner();
            match command {
                PlanCommands::Task {
                    task,
                    priority,
                    due,
                } => print(planner.add_task(&task, &priority, &due)),
                PlanCommands::Done { id } => print(planner.complete_task(id)),
                PlanCommands::Tasks { all } => print(planner.list_tasks(all)),
                PlanCommands::Habit { name, skipped } => {
                    print(planner.track_habit(&name, !skipped))
                }
                PlanCommands::Habits => print(planner.view_habits()),
                PlanCommands::Goal { goal, category } => {
                    print(planner.set_weekly_goal(&goal, &category))
                }
                PlanCommands::GoalDone { id } => print(planner.complete_goal(id)),
                PlanCommands::Report => print(planner.weekly_report()),
            }
        }
        Commands::Money { command } => {
            let finance = toolbox.finance();
            match command {
                MoneyCommands::Spend {
                    amount,
                    category,
                    description,
                } => print(finance.add_expense(amount, &category, &description)),
                MoneyCommands::Expenses { period } => print(finance.view_expenses(&period)),
                MoneyCommands::Earn {
                    amount,
                    source,
                    description,
                } => print(finance.add_income(amount, &source, &description)),
                MoneyCommands::Budget {
                    monthly_total,
                    categories,
                } => print(finance.set_budget(monthly_total, &categories)),
                MoneyCommands::SavingsGoal {
                    name,
                    target,
                    deadline,
                } => print(finance.set_savings_goal(&name, target, &deadline)),
                MoneyCommands::Save { goal_id, amount } => {
                    print(finance.add_to_savings(goal_id, amount))
                }
                MoneyCommands::Savings => print(finance.view_savings()),
                MoneyCommands::Summary { period } => print(finance.financial_summary(&period)),
            }
        }
        Commands::Wellness { command } => {
            let wellness = toolbox.wellness();
            match command {
                WellnessCommands::Mood { mood, notes } => print(wellness.log_mood(&mood, &notes)),
                WellnessCommands::History { days } => print(wellness.mood_history(days)),
                WellnessCommands::Journal { entry, prompt } => {
                    print(wellness.journal(&entry, prompt))
                }
                WellnessCommands::Checkin => print(wellness.weekly_checkin()),
            }
        }
        Commands::Config => cmd_config(&cfg),
        Commands::Serve => catalyst_mcp::run_server(&toolbox, &cfg.server_config()),
    }
}

fn cmd_config(cfg: &config::Config) -> Result<()> {
    println!("Config: {}", config::show_config_path());
    println!();
    println!("[store]");
    match &cfg.store.data_dir {
        Some(dir) => println!("  data_dir = {dir}"),
        None => println!("  data_dir = {} (default)", default_data_dir().display()),
    }
    println!();
    println!("[jobs]");
    println!("  default_location = {}", cfg.jobs.default_location);
    println!();
    println!("[mcp]");
    match &cfg.mcp.instructions {
        Some(instr) => println!("  instructions = {instr}"),
        None => println!("  instructions = (built-in)"),
    }
    Ok(())
}
