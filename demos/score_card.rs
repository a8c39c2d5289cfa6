//! Scores a single game given on the command line.
//!
//! ```text
//! cargo run --example score_card -- 10 _ 7 3 9 0 10 _ 0 8 8 2 0 6 10 _ 10 _ 10 8 1
//! cargo run --example score_card -- --frames 3 --json 10 _ 10 _ 10 10 10
//! ```
//!
//! Each value fills the next slot. Anything that is not an integer (such as
//! `_`) leaves the slot empty.

use std::sync::Arc;

use clap::Parser;
use tenpin_tally::telemetry::CollectingObserver;
use tenpin_tally::{GameConfig, PlayerHandle, ScoreboardBuilder};

#[derive(Parser)]
struct Opt {
    /// Number of frames in the game.
    #[arg(short, long, default_value_t = 10)]
    frames: usize,
    /// Pins standing at the start of each rack.
    #[arg(short, long, default_value_t = 10)]
    strike: i32,
    /// Name shown on the card.
    #[arg(short, long, default_value = "Bowler")]
    name: String,
    /// Print the card as JSON instead of a text row.
    #[arg(long)]
    json: bool,
    /// Log every repair the validator applies.
    #[arg(short, long)]
    verbose: bool,
    /// Raw throw values, one per slot.
    throws: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = Opt::parse();

    // configure logging: repairs are logged at debug level
    let level = if opt.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(level)
            .finish(),
    )?;

    let config = GameConfig::new(opt.frames, opt.strike)?;
    let observer = Arc::new(CollectingObserver::new());
    let mut board = ScoreboardBuilder::new()
        .with_num_players(1)
        .with_game_config(config)
        .with_player_names([opt.name])
        .with_repair_observer(observer.clone())
        .build()?;

    let player = PlayerHandle::new(0);
    if opt.throws.len() > config.slot_count() {
        tracing::warn!(
            given = opt.throws.len(),
            slots = config.slot_count(),
            "ignoring extra throws"
        );
    }
    for (slot, raw) in opt.throws.iter().enumerate().take(config.slot_count()) {
        board.record_raw(player, slot, raw)?;
    }

    let card = board.score_card(player)?;
    if opt.json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        println!("{card}");
    }

    if !observer.is_empty() {
        println!();
        println!("repairs:");
        for repair in observer.repairs() {
            println!("  {repair}");
        }
    }

    Ok(())
}
