use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studyquest-cli", version, about = "StudyQuest CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Player profile and onboarding
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Cognitive state check-ins
    Checkin {
        #[command(subcommand)]
        action: commands::checkin::CheckinAction,
    },
    /// Mission drafting
    Mission {
        #[command(subcommand)]
        action: commands::mission::MissionAction,
    },
    /// Quest board
    Quest {
        #[command(subcommand)]
        action: commands::quest::QuestAction,
    },
    /// Spaced revision tracking
    Memory {
        #[command(subcommand)]
        action: commands::memory::MemoryAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Checkin { action } => commands::checkin::run(action),
        Commands::Mission { action } => commands::mission::run(action),
        Commands::Quest { action } => commands::quest::run(action),
        Commands::Memory { action } => commands::memory::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
