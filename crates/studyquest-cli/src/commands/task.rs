//! Task management commands for CLI.

use clap::Subcommand;
use studyquest_core::storage::Database;
use studyquest_core::{AdaptationPolicy, DurationParser, SubjectLoadTable, TaskDraft, TaskStatus};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Subject the task belongs to
        #[arg(long)]
        subject: String,
        /// Priority: Low, Medium, High or Urgent (default: Medium)
        #[arg(long, default_value = "Medium")]
        priority: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Estimated duration, e.g. "45 mins" or "1h 30m"
        #[arg(long)]
        duration: Option<String>,
    },
    /// List tasks as JSON
    List {
        /// Filter by status label, e.g. "todo" or "in-progress"
        #[arg(long)]
        status: Option<String>,
        /// Reorder for the latest check-in's cognitive mode
        #[arg(long)]
        adapt: bool,
        /// Reorder for an explicit mode label instead, e.g. "Burnout"
        #[arg(long, conflicts_with = "adapt")]
        mode: Option<String>,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Complete a task and bank its XP
    Complete {
        /// Task ID
        id: String,
    },
    /// Set a task's status
    Status {
        /// Task ID
        id: String,
        /// New status label, e.g. "in-progress" or "rerouted"
        status: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        TaskAction::Add {
            title,
            subject,
            priority,
            description,
            duration,
        } => {
            let draft = TaskDraft {
                title,
                subject_name: subject,
                priority,
                description,
                duration_text: duration,
            };
            let task = draft.build(&DurationParser::new())?;
            db.insert_task(&task)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { status, adapt, mode } => {
            let mut tasks = match status {
                Some(ref label) => db.tasks_with_status(label.parse::<TaskStatus>()?)?,
                None => db.list_tasks()?,
            };
            if let Some(label) = mode {
                let policy = AdaptationPolicy::new(SubjectLoadTable::builtin());
                tasks = policy.adapt_labelled(tasks, &label);
            } else if adapt {
                let mode = db
                    .latest_checkin()?
                    .and_then(|record| record.state.cognitive_mode());
                if let Some(mode) = mode {
                    let policy = AdaptationPolicy::new(SubjectLoadTable::builtin());
                    tasks = policy.adapt(tasks, mode);
                }
            }
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Get { id } => {
            let task = db.get_task(&id)?;
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::Complete { id } => {
            let earned = db.complete_task(&id)?;
            if earned == 0 {
                println!("Task already completed; no XP awarded.");
            } else {
                println!("+{} XP (total {})", earned, db.total_xp()?);
            }
        }
        TaskAction::Status { id, status } => {
            let status = status.parse::<TaskStatus>()?;
            db.update_task_status(&id, status)?;
            println!("Task {} is now {}.", id, status.as_str());
        }
        TaskAction::Delete { id } => {
            db.delete_task(&id)?;
            println!("Task deleted: {id}");
        }
    }
    Ok(())
}
