//! soulkeeper — Command-line save tracker for Dark Souls runs.
//!
//! Tracks souls drops per area, souls spent on level-ups, the merchant
//! purchase checklist and stat allocation, and recommends the next stat to
//! level with the greedy exponential planner.

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use soulkeeper_ledger::{Tracker, TrackerConfig};

/// Dark Souls stat & souls manager.
#[derive(Parser)]
#[command(name = "soulkeeper")]
#[command(version, about = "Don't you dare go hollow.")]
struct Cli {
    /// Path to the save file (default: <data dir>/soulkeeper/ds_game_state_gui.json,
    /// or $SOULKEEPER_STATE).
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the game overview, optionally updating the status note.
    Status(StatusArgs),
    /// Stat sheet subcommands.
    Stats {
        #[command(subcommand)]
        action: StatsAction,
    },
    /// Recommend the next stat to level (does not change anything).
    Plan(PlanArgs),
    /// Level-up subcommands.
    Level {
        #[command(subcommand)]
        action: LevelAction,
    },
    /// Area subcommands.
    Area {
        #[command(subcommand)]
        action: AreaAction,
    },
    /// Souls drop subcommands.
    Drop {
        #[command(subcommand)]
        action: DropAction,
    },
    /// Merchant checklist subcommands.
    Merchant {
        #[command(subcommand)]
        action: MerchantAction,
    },
}

#[derive(Args)]
struct StatusArgs {
    /// New game status text.
    #[arg(short, long)]
    set: Option<String>,
}

#[derive(Subcommand)]
enum StatsAction {
    /// Show base and current stats.
    Show,
    /// Reset current stats to the starting class values (level-up costs are kept).
    Reset,
}

#[derive(Args)]
struct PlanArgs {
    /// Total planned points for the final build (L).
    #[arg(short = 'L', long, allow_negative_numbers = true)]
    horizon: i64,

    /// Points already allocated so far (t, normally t <= L).
    #[arg(short = 't', long, allow_negative_numbers = true)]
    elapsed: i64,
}

#[derive(Subcommand)]
enum LevelAction {
    /// Plan the next stat, apply +1 to it and save.
    Up(LevelUpArgs),
    /// Souls cost entries for level-ups.
    Cost {
        #[command(subcommand)]
        action: CostAction,
    },
}

#[derive(Args)]
struct LevelUpArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// Souls spent on this level-up.
    #[arg(short, long)]
    souls: Option<u64>,
}

#[derive(Subcommand)]
enum CostAction {
    /// Record the souls spent on a level-up.
    Add { souls: u64 },
    /// Delete a cost entry by index (see `list`).
    Delete { index: usize },
    /// List cost entries.
    List,
}

#[derive(Subcommand)]
enum AreaAction {
    /// Start tracking an area.
    Add { name: String },
    /// Delete an area with its drops and merchants.
    Delete { name: String },
    /// List areas.
    List,
}

#[derive(Subcommand)]
enum DropAction {
    /// Record a souls drop in an area.
    Add { area: String, souls: u64 },
    /// Delete a drop by index (see `list`).
    Delete { area: String, index: usize },
    /// List drops of an area.
    List { area: String },
}

#[derive(Subcommand)]
enum MerchantAction {
    /// Add a merchant to an area's checklist.
    Add { area: String, name: String },
    /// Flip a merchant between bought and pending.
    Toggle { area: String, name: String },
    /// Show the checklist.
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TrackerConfig::resolve(cli.file);
    if let Some(level) = cli.log_level {
        config = config.with_log_level(level);
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let mut tracker = Tracker::open(&config)
        .with_context(|| format!("Failed to load {}", config.state_path.display()))?;

    match cli.command {
        Commands::Status(args) => status(&mut tracker, args),
        Commands::Stats { action } => stats(&mut tracker, action),
        Commands::Plan(args) => plan(&tracker, args),
        Commands::Level { action } => level(&mut tracker, action),
        Commands::Area { action } => area(&mut tracker, action),
        Commands::Drop { action } => drop_cmd(&mut tracker, action),
        Commands::Merchant { action } => merchant(&mut tracker, action),
    }
}

/// Persist after a successful mutation.
fn save(tracker: &Tracker) -> Result<()> {
    tracker
        .save()
        .with_context(|| format!("Failed to save {}", tracker.path().display()))
}

fn status(tracker: &mut Tracker, args: StatusArgs) -> Result<()> {
    if let Some(text) = args.set {
        tracker.set_game_status(&text);
        save(tracker)?;
    }
    print!("{}", render::overview(tracker.state()));
    Ok(())
}

fn stats(tracker: &mut Tracker, action: StatsAction) -> Result<()> {
    match action {
        StatsAction::Show => {}
        StatsAction::Reset => {
            tracker.reset_stats();
            save(tracker)?;
            println!("Current stats have been reset to starting class values.\n");
        }
    }
    print!("{}", render::stats(tracker.state()));
    Ok(())
}

fn plan(tracker: &Tracker, args: PlanArgs) -> Result<()> {
    let rec = tracker
        .recommend(args.horizon, args.elapsed)
        .context("Could not compute next stat (L and t must be positive integers)")?;
    print!("{}", render::recommendation(&rec));
    Ok(())
}

fn level(tracker: &mut Tracker, action: LevelAction) -> Result<()> {
    match action {
        LevelAction::Up(args) => {
            let rec = tracker
                .apply_recommendation(args.plan.horizon, args.plan.elapsed, args.souls)
                .context("Could not apply next stat")?;
            save(tracker)?;
            print!("{}", render::recommendation(&rec));
            let value = tracker.state().current_stats.get(&rec.stat).copied().unwrap_or_default();
            println!("\nApplied +1 to {} (now {value}).", rec.stat);
            if args.souls.is_none() {
                println!("Remember to record the souls cost with `level cost add`.");
            }
        }
        LevelAction::Cost { action } => match action {
            CostAction::Add { souls } => {
                tracker.add_level_up(souls)?;
                save(tracker)?;
                print!("{}", render::indexed(&tracker.state().souls_used_for_leveling));
            }
            CostAction::Delete { index } => {
                let souls = tracker.delete_level_up(index)?;
                save(tracker)?;
                println!("Deleted level-up cost {souls}.");
            }
            CostAction::List => {
                print!("{}", render::indexed(&tracker.state().souls_used_for_leveling));
                println!("Total: {}", tracker.state().total_souls_used());
            }
        },
    }
    Ok(())
}

fn area(tracker: &mut Tracker, action: AreaAction) -> Result<()> {
    match action {
        AreaAction::Add { name } => {
            let area = tracker.add_area(&name)?;
            save(tracker)?;
            println!("Added area {area}.");
        }
        AreaAction::Delete { name } => {
            let area = tracker.delete_area(&name)?;
            save(tracker)?;
            println!("Deleted area {area} and its drops.");
        }
        AreaAction::List => print!("{}", render::areas(tracker.state())),
    }
    Ok(())
}

fn drop_cmd(tracker: &mut Tracker, action: DropAction) -> Result<()> {
    match action {
        DropAction::Add { area, souls } => {
            tracker.add_drop(&area, souls)?;
            save(tracker)?;
            print!("{}", render::indexed(tracker.state().drops(&area)?));
        }
        DropAction::Delete { area, index } => {
            let souls = tracker.delete_drop(&area, index)?;
            save(tracker)?;
            println!("Deleted drop {souls}.");
        }
        DropAction::List { area } => print!("{}", render::indexed(tracker.state().drops(&area)?)),
    }
    Ok(())
}

fn merchant(tracker: &mut Tracker, action: MerchantAction) -> Result<()> {
    match action {
        MerchantAction::Add { area, name } => {
            let (area, name) = tracker.add_merchant(&area, &name)?;
            save(tracker)?;
            println!("Added {name} to {area}.");
        }
        MerchantAction::Toggle { area, name } => {
            let bought = tracker.toggle_merchant(&area, &name)?;
            save(tracker)?;
            let tag = if bought { "BOUGHT" } else { "pending" };
            println!("{} is now {tag}.", name.trim());
        }
        MerchantAction::List => print!("{}", render::merchants(tracker.state())),
    }
    Ok(())
}
