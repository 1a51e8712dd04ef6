//! Player profile and onboarding commands.
//!
//! First-run setup collects the fields the planner needs (grade, stream,
//! interests, daily goal), and `show` renders the levelling state the
//! rest of the app derives from banked XP.

use clap::Subcommand;
use studyquest_core::storage::{Config, Database};
use studyquest_core::{
    AdaptationPolicy, DaySlot, Difficulty, PlayerProfile, RewardCalculator, SetupForm, Stream,
    SubjectLoadTable,
};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the player profile and level progress
    Show,

    /// First-run setup: name, grade, stream, interests and daily goal
    Setup {
        /// Player name
        #[arg(long)]
        name: String,

        /// School grade, 1 to 12
        #[arg(long)]
        grade: u8,

        /// Stream for grades 11 and 12: Science, Commerce or Arts
        #[arg(long)]
        stream: Option<String>,

        /// Comma-separated interests, e.g. "Physics,History"
        #[arg(long)]
        interests: String,

        /// Daily study goal in hours, 1 to 6
        #[arg(long, default_value_t = 2)]
        hours: u32,
    },

    /// List subjects available for the configured grade and stream
    Subjects,

    /// Switch between casual and hardcore difficulty
    SetDifficulty {
        /// "casual" or "hardcore"
        difficulty: String,
    },

    /// List or edit the interest list
    Interests {
        /// Add an interest
        #[arg(long)]
        add: Option<String>,

        /// Remove an interest
        #[arg(long)]
        remove: Option<String>,
    },

    /// Import a profile export, replacing the XP ledger
    Import {
        /// Path to a profile JSON file
        path: String,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show => show(),
        ProfileAction::Setup {
            name,
            grade,
            stream,
            interests,
            hours,
        } => setup(name, grade, stream, interests, hours),
        ProfileAction::Subjects => subjects(),
        ProfileAction::SetDifficulty { difficulty } => set_difficulty(&difficulty),
        ProfileAction::Interests { add, remove } => interests(add, remove),
        ProfileAction::Import { path } => import(&path),
    }
}

fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = Database::open()?;
    let profile = PlayerProfile::gather(&config, &db)?;
    let level = profile.level()?;

    let name = if profile.name.is_empty() {
        "(unnamed)"
    } else {
        &profile.name
    };
    println!("{} - Level {}", name, level.level);
    println!(
        "  XP: {} ({} into this level, {} to the next)",
        profile.total_xp, level.xp_into_level, level.xp_to_next_level
    );
    println!("  Progress: {:.1}%", level.progress_percent);
    println!("  Difficulty: {}", profile.difficulty);

    let ladder = RewardCalculator::geometric_level_from_xp(profile.total_xp as f64);
    println!(
        "  Geometric ladder: level {} ({} / {} XP)",
        ladder.level, ladder.xp_into_level, ladder.xp_for_next_level
    );

    if !profile.interests.is_empty() {
        println!("  Interests: {}", profile.interests.join(", "));
    }
    if config.player.grade != 0 {
        println!("  Grade: {}", config.player.grade);
    }
    if let Ok(slot) = config.study.preferred_slot.parse::<DaySlot>() {
        println!(
            "  Preferred slot: {} ({:02}:00-{:02}:00)",
            slot.as_str(),
            slot.start_hour(),
            slot.end_hour()
        );
    }
    println!("  Daily goal: {} h", config.study.daily_goal_hours);

    Ok(())
}

fn setup(
    name: String,
    grade: u8,
    stream: Option<String>,
    interests: String,
    hours: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let stream = stream.as_deref().map(str::parse::<Stream>).transpose()?;
    let interests: Vec<String> = interests
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let form = SetupForm {
        name,
        grade,
        stream,
        interests,
        daily_goal_hours: hours,
    };
    form.validate()?;

    let mut config = Config::load_or_default();
    config.player.name = form.name.clone();
    config.player.grade = form.grade;
    config.player.stream = form
        .stream
        .map(|s| s.as_str().to_string())
        .unwrap_or_default();
    config.player.interests = form.interests.clone();
    config.study.daily_goal_hours = form.daily_goal_hours as u8;
    config.save()?;

    println!("Welcome, {}!", form.name);
    println!(
        "  Grade {} with {} subject(s) available.",
        form.grade,
        form.available_subjects().len()
    );
    println!("  Daily goal: {} h", form.daily_goal_hours);

    Ok(())
}

fn subjects() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    if config.player.grade == 0 {
        println!("No grade configured. Run 'profile setup' first.");
        return Ok(());
    }

    let stream = match config.player.stream.as_str() {
        "" => None,
        label => Some(label.parse::<Stream>()?),
    };

    let policy = AdaptationPolicy::new(SubjectLoadTable::builtin());
    println!("Subjects for grade {}:", config.player.grade);
    for subject in studyquest_core::onboarding::subjects_for_grade(config.player.grade, stream) {
        let load = policy.loads().load_for(subject);
        let marker = if policy.is_high_load(subject) {
            " (high load)"
        } else {
            ""
        };
        println!("  {subject} - load {load}{marker}");
    }

    Ok(())
}

fn set_difficulty(label: &str) -> Result<(), Box<dyn std::error::Error>> {
    let difficulty = label.parse::<Difficulty>()?;
    let mut config = Config::load_or_default();
    config.player.difficulty = difficulty;
    config.save()?;
    println!("Difficulty set to {difficulty}.");
    Ok(())
}

fn interests(add: Option<String>, remove: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();
    let mut changed = false;

    if let Some(interest) = add {
        let interest = interest.trim().to_string();
        let duplicate = config
            .player
            .interests
            .iter()
            .any(|i| i.eq_ignore_ascii_case(&interest));
        if !interest.is_empty() && !duplicate {
            config.player.interests.push(interest);
            changed = true;
        }
    }
    if let Some(target) = remove {
        let before = config.player.interests.len();
        config
            .player
            .interests
            .retain(|i| !i.eq_ignore_ascii_case(&target));
        changed |= config.player.interests.len() != before;
    }
    if changed {
        config.save()?;
    }

    if config.player.interests.is_empty() {
        println!("No interests set.");
    } else {
        for interest in &config.player.interests {
            let marker = if RewardCalculator::is_core_subject(interest) {
                " (core)"
            } else {
                ""
            };
            println!("{interest}{marker}");
        }
    }

    Ok(())
}

fn import(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let profile = PlayerProfile::from_json(&raw)?;

    let mut config = Config::load_or_default();
    config.player.name = profile.name.clone();
    config.player.interests = profile.interests.clone();
    config.player.difficulty = profile.difficulty;
    config.save()?;

    let db = Database::open()?;
    db.import_xp(profile.total_xp)?;

    let level = profile.level()?;
    println!(
        "Imported profile for {} (level {}, {} XP).",
        profile.name, level.level, profile.total_xp
    );

    Ok(())
}
