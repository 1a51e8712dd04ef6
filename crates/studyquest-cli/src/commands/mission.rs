//! Mission drafting commands.

use chrono::{Local, Timelike};
use clap::Subcommand;
use studyquest_core::storage::{Config, Database};
use studyquest_core::{DaySlot, MissionGenerator, MissionPlan};

#[derive(Subcommand)]
pub enum MissionAction {
    /// Draft mission plans from the interest list
    Draft {
        /// Draft short daily missions instead of full sessions
        #[arg(long)]
        daily: bool,
    },

    /// Draft missions and put them on the quest board as tasks
    Init {
        /// Use the short daily mission format
        #[arg(long)]
        daily: bool,
    },
}

pub fn run(action: MissionAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MissionAction::Draft { daily } => draft(daily),
        MissionAction::Init { daily } => init(daily),
    }
}

fn plan_missions(daily: bool) -> Vec<MissionPlan> {
    let config = Config::load_or_default();
    let generator = MissionGenerator::new(config.player.difficulty.is_hardcore());
    if daily {
        generator.daily_missions(&config.player.interests)
    } else {
        generator.draft_plans(&config.player.interests)
    }
}

fn draft(daily: bool) -> Result<(), Box<dyn std::error::Error>> {
    let plans = plan_missions(daily);
    if plans.is_empty() {
        println!("No interests set; nothing to draft.");
        return Ok(());
    }

    for plan in &plans {
        println!(
            "{} ({}, {} min, +{} XP)",
            plan.title, plan.subject_name, plan.estimated_minutes, plan.xp_reward
        );
    }
    if let Some(slot) = DaySlot::from_hour(Local::now().hour()) {
        println!("Suggested slot: {}", slot.as_str());
    }

    Ok(())
}

fn init(daily: bool) -> Result<(), Box<dyn std::error::Error>> {
    let plans = plan_missions(daily);
    if plans.is_empty() {
        println!("No interests set; nothing to draft.");
        return Ok(());
    }

    let db = Database::open()?;
    let count = plans.len();
    for plan in plans {
        let task = plan.into_task();
        db.insert_task(&task)?;
        println!("Quest added: {} (+{} XP)", task.title, task.xp_reward);
    }
    println!("{count} quest(s) on the board.");

    Ok(())
}
