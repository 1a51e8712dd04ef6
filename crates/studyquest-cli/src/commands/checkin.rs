//! Cognitive state check-in commands.
//!
//! A check-in is recorded as a full snapshot: the latest stored state is
//! loaded, the reported fields are applied on top, and the result is
//! appended to history. Reads always want the newest row, never a merge.

use chrono::{Datelike, Utc};
use clap::Subcommand;
use studyquest_core::availability::WEEKDAYS;
use studyquest_core::checkin::{reroute_strategy_hint, QUEST_BOOST_CSI};
use studyquest_core::storage::Database;
use studyquest_core::{CheckinTracker, CheckinUpdate, FatigueLevel};

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Record a check-in
    Record {
        /// Cognitive state index, 0 to 100
        #[arg(long)]
        csi: Option<u32>,

        /// Mode label: "Peak", "Stable", "Fatigue" or "Burnout"
        #[arg(long)]
        mode: Option<String>,

        /// Burnout questionnaire score, 0 to 100
        #[arg(long)]
        burnout: Option<u32>,

        /// Reroute strategy label
        #[arg(long)]
        reroute: Option<String>,

        /// How many tasks to shed from today's plan
        #[arg(long)]
        reduce: Option<u32>,
    },

    /// Apply a quest-completion boost to the cognitive state index
    Boost,

    /// Show the latest check-in
    Show {
        /// Show the last N check-ins instead of the latest
        #[arg(long)]
        history: Option<u32>,
    },
}

pub fn run(action: CheckinAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CheckinAction::Record {
            csi,
            mode,
            burnout,
            reroute,
            reduce,
        } => record(CheckinUpdate {
            csi,
            mode,
            burnout_score: burnout,
            reroute_strategy: reroute,
            task_reduction: reduce,
        }),
        CheckinAction::Boost => boost(),
        CheckinAction::Show { history } => show(history),
    }
}

fn record(update: CheckinUpdate) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut tracker = db
        .latest_checkin()?
        .map(|record| record.state)
        .unwrap_or_default();

    tracker.apply(update);
    db.insert_checkin(&tracker, Utc::now())?;

    match tracker.effective_csi() {
        Some(csi) => println!("Check-in recorded (CSI {csi})."),
        None => println!("Check-in recorded."),
    }

    if let Some(mode) = tracker.cognitive_mode() {
        if mode.defers_high_load() {
            println!("High-load subjects will be deferred.");
            println!("Hint: {}", reroute_strategy_hint(mode));
        }
    }

    Ok(())
}

fn boost() -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut tracker = db
        .latest_checkin()?
        .map(|record| record.state)
        .unwrap_or_default();

    tracker.apply_quest_boost();
    db.insert_checkin(&tracker, Utc::now())?;

    println!("Quest boost applied: +{QUEST_BOOST_CSI} CSI until the next check-in.");
    println!("Daily quest streak: {}", tracker.daily_quest_streak);
    if let Some(csi) = tracker.effective_csi() {
        println!("Effective CSI: {csi}");
    }

    Ok(())
}

fn show(history: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    if let Some(limit) = history {
        let records = db.checkin_history(limit)?;
        if records.is_empty() {
            println!("No check-ins recorded.");
            return Ok(());
        }
        for record in records {
            println!("#{} {}", record.id, stamp(&record.recorded_at));
            print_state(&record.state);
        }
        return Ok(());
    }

    match db.latest_checkin()? {
        Some(record) => {
            println!("Latest check-in, {}:", stamp(&record.recorded_at));
            print_state(&record.state);
        }
        None => println!("No check-ins recorded."),
    }

    Ok(())
}

fn stamp(recorded_at: &chrono::DateTime<Utc>) -> String {
    let day = WEEKDAYS[recorded_at.weekday().num_days_from_sunday() as usize];
    format!("{} {}", day, recorded_at.format("%Y-%m-%d %H:%M"))
}

fn print_state(state: &CheckinTracker) {
    if let Some(csi) = state.effective_csi() {
        println!("  CSI: {csi}");
    }
    if let Some(mode) = &state.mode {
        println!("  Mode: {mode}");
    }
    if let Some(score) = state.burnout_score {
        println!(
            "  Burnout: {} ({})",
            score,
            FatigueLevel::from_score(score).label()
        );
    }
    if let Some(strategy) = &state.reroute_strategy {
        println!("  Reroute strategy: {strategy}");
    }
    if let Some(reduce) = state.task_reduction {
        println!("  Task reduction: {reduce}");
    }
    if state.daily_quest_streak > 0 {
        println!("  Streak: {} day(s)", state.daily_quest_streak);
    }
}
