//! Quest board commands.

use clap::Subcommand;
use studyquest_core::storage::Database;
use studyquest_core::QuestView;

#[derive(Subcommand)]
pub enum QuestAction {
    /// Show the quest board
    Board {
        /// Emit quest views as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: QuestAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QuestAction::Board { json } => board(json),
    }
}

fn board(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let quests: Vec<QuestView> = db
        .quest_board_tasks()?
        .iter()
        .map(QuestView::from_task)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&quests)?);
        return Ok(());
    }
    if quests.is_empty() {
        println!("The quest board is empty.");
        return Ok(());
    }

    for quest in &quests {
        let badge = quest
            .badge
            .as_deref()
            .map(|b| format!(" [{b}]"))
            .unwrap_or_default();
        println!("{} quest: {}{}", quest.kind, quest.title, badge);
        println!("  {}", quest.description);
        println!(
            "  {} | {}/{} | {} day(s) left | +{} XP",
            quest.difficulty,
            quest.progress,
            QuestView::PROGRESS_TOTAL,
            quest.days_left,
            quest.xp_reward
        );
        println!("  id: {}", quest.task_id);
    }

    Ok(())
}
