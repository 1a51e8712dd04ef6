//! Spaced revision commands.

use chrono::Local;
use clap::Subcommand;
use studyquest_core::memory::record_review;
use studyquest_core::storage::Database;

#[derive(Subcommand)]
pub enum MemoryAction {
    /// Record a review of a topic
    Review {
        /// Topic name
        topic: String,
    },

    /// List tracked topics
    List {
        /// Only topics due for review today
        #[arg(long)]
        due: bool,
    },
}

pub fn run(action: MemoryAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MemoryAction::Review { topic } => review(&topic),
        MemoryAction::List { due } => list(due),
    }
}

fn review(topic: &str) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let today = Local::now().date_naive();
    let existing = db.memory_record(topic)?;
    let record = record_review(existing, topic, today);
    db.upsert_memory_record(&record)?;

    println!(
        "Reviewed '{}' ({} review(s), retention {}%).",
        record.topic, record.revision_count, record.retention_score
    );
    println!("Next review: {}", record.next_revision_date);

    Ok(())
}

fn list(due: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let today = Local::now().date_naive();
    let mut records = db.list_memory_records()?;
    if records.is_empty() {
        println!("No topics tracked.");
        return Ok(());
    }

    if due {
        records.retain(|record| record.is_due(today));
        if records.is_empty() {
            println!("Nothing due today.");
            return Ok(());
        }
    }

    for record in &records {
        let marker = if record.is_due(today) { " (due)" } else { "" };
        println!(
            "{}: retention {}% (projected {:.0}%), next {}{}",
            record.topic,
            record.retention_score,
            record.projected_retention(today),
            record.next_revision_date,
            marker
        );
    }

    Ok(())
}
