use calorie_core::*;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kcal")]
#[command(about = "Daily calorie tracker for meals and workouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use defaults for an unreadable config file or stored values instead of failing
    #[arg(long, global = true)]
    recover: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's totals (default)
    Status {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log, remove or list meals
    Meal {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Log, remove or list workouts
    Workout {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Set the daily calorie limit
    Limit {
        #[arg(allow_hyphen_values = true)]
        calories: String,
    },

    /// Clear all meals and workouts
    Reset {
        /// Also restore the configured default limit
        #[arg(long)]
        limit: bool,
    },
}

#[derive(Subcommand)]
enum EntryAction {
    /// Log a new entry
    Add {
        name: String,
        #[arg(allow_hyphen_values = true)]
        calories: String,
    },

    /// Remove an entry by id
    Remove { id: String },

    /// List entries
    List {
        /// Only show entries whose name contains this text
        #[arg(long)]
        filter: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    calorie_core::logging::init();

    let cli = Cli::parse();

    let config = load_config(cli.recover)?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let mut ledger = open_ledger(&data_dir, &config, cli.recover)?;

    match cli.command {
        Some(Commands::Status { json }) => cmd_status(&ledger, json),
        Some(Commands::Meal { action }) => cmd_entry(&mut ledger, EntryKind::Meal, action),
        Some(Commands::Workout { action }) => {
            cmd_entry(&mut ledger, EntryKind::Workout, action)
        }
        Some(Commands::Limit { calories }) => cmd_limit(&mut ledger, &calories),
        Some(Commands::Reset { limit }) => cmd_reset(&mut ledger, limit, &config),
        None => cmd_status(&ledger, false),
    }
}

fn load_config(recover: bool) -> Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) if recover => {
            tracing::warn!("Unable to load config: {}. Using defaults.", e);
            Ok(Config::default())
        }
        Err(e) => {
            eprintln!(
                "Config file {} could not be loaded. Fix it or re-run with --recover.",
                Config::default_config_path().display()
            );
            Err(e)
        }
    }
}

fn open_ledger(data_dir: &Path, config: &Config, recover: bool) -> Result<Ledger<FileStore>> {
    let storage = Storage::new(FileStore::new(data_dir.join("store")));
    let default_limit = config.tracker.default_calorie_limit;
    tracing::debug!("Using data directory {:?}", data_dir);

    if recover {
        tracing::info!("Opening ledger in recovery mode");
        Ok(Ledger::open_or_default(storage, default_limit))
    } else {
        Ledger::open(storage, default_limit).map_err(|e| {
            if e.is_storage() {
                eprintln!("Stored data could not be read. Re-run with --recover to reset unreadable values.");
            }
            e
        })
    }
}

fn cmd_status(ledger: &Ledger<FileStore>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&ledger.summary())?);
    } else {
        display_summary(&ledger.summary());
    }
    Ok(())
}

fn cmd_entry(ledger: &mut Ledger<FileStore>, kind: EntryKind, action: EntryAction) -> Result<()> {
    match action {
        EntryAction::Add { name, calories } => {
            let entry = validate::entry_input(&name, &calories)?.into_entry();
            let entry = ledger.add(kind, entry)?;
            println!(
                "✓ Logged {} '{}' ({} kcal) [{}]",
                kind, entry.name, entry.calories, entry.id
            );
            display_summary(&ledger.summary());
        }

        EntryAction::Remove { id } => match ledger.remove(kind, &EntryId::from(id.as_str()))? {
            Some(removed) => {
                println!("✓ Removed {} '{}' ({} kcal)", kind, removed.name, removed.calories);
                display_summary(&ledger.summary());
            }
            None => println!("No {} with id {} - nothing removed.", kind, id),
        },

        EntryAction::List { filter } => {
            let entries = ledger.find(kind, filter.as_deref().unwrap_or(""));
            if entries.is_empty() {
                println!("No {}s logged.", kind);
            }
            for entry in entries {
                println!("  {}  {:<24} {:>6} kcal", entry.id, entry.name, entry.calories);
            }
        }
    }
    Ok(())
}

fn cmd_limit(ledger: &mut Ledger<FileStore>, calories: &str) -> Result<()> {
    let limit = validate::calorie_limit(calories)?;
    ledger.set_limit(limit)?;
    println!("✓ Daily limit set to {} kcal", limit);
    display_summary(&ledger.summary());
    Ok(())
}

fn cmd_reset(ledger: &mut Ledger<FileStore>, restore_limit: bool, config: &Config) -> Result<()> {
    ledger.reset()?;
    if restore_limit {
        ledger.set_limit(config.tracker.default_calorie_limit)?;
    }
    println!("✓ Day reset");
    display_summary(&ledger.summary());
    Ok(())
}

fn display_summary(summary: &CalorieSummary) {
    const BAR_WIDTH: usize = 20;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  DAILY CALORIES");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Limit:     {:>6}", summary.calorie_limit);
    println!("  Total:     {:>6}", summary.total_calories);
    println!("  Consumed:  {:>6}", summary.consumed_calories);
    println!("  Burned:    {:>6}", summary.burned_calories);
    println!("  Remaining: {:>6}", summary.remaining_calories);

    match summary.progress_fraction {
        Some(fraction) => {
            let filled = (fraction * BAR_WIDTH as f64).round() as usize;
            println!(
                "  Progress:  [{}{}] {:.0}%",
                "#".repeat(filled),
                "-".repeat(BAR_WIDTH - filled),
                fraction * 100.0
            );
        }
        None => println!("  Progress:  n/a (no limit set)"),
    }

    if summary.over_limit {
        println!();
        println!("  ⚠ Over daily limit");
    }
    println!();
}
