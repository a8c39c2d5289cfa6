//! A line-driven scoreboard for several bowlers.
//!
//! Reads commands from standard input and prints the board after each one:
//!
//! ```text
//! name <player> <name>          rename a bowler (players count from 1)
//! throw <player> <slot> <pins>  enter a throw (slots count from 1)
//! reset <frames> [strike]       start a new game
//! json                          print the board as JSON
//! quit
//! ```
//!
//! ```text
//! printf 'name 1 Ana\nthrow 1 1 10\nthrow 1 3 7\nthrow 1 4 3\n' | cargo run --example league_night -- -p 2
//! ```

use std::io::{self, BufRead, Write};

use clap::Parser;
use tenpin_tally::{GameConfig, PlayerHandle, Scoreboard, ScoreboardBuilder, TallyError};

#[derive(Parser)]
struct Opt {
    /// Number of bowlers.
    #[arg(short = 'p', long, default_value_t = 2)]
    num_players: usize,
    /// Number of frames per game.
    #[arg(short, long, default_value_t = 10)]
    frames: usize,
    /// Show debug logs, including every repair.
    #[arg(short, long)]
    verbose: bool,
}

enum Command {
    Name(PlayerHandle, String),
    Throw(PlayerHandle, usize, String),
    Reset(GameConfig),
    Json,
    Quit,
}

fn parse_index(token: Option<&str>) -> Option<usize> {
    token?.parse::<usize>().ok()?.checked_sub(1)
}

fn parse_command(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    match tokens.next()? {
        "name" => {
            let player = PlayerHandle::new(parse_index(tokens.next())?);
            let name = tokens.collect::<Vec<_>>().join(" ");
            Some(Command::Name(player, name))
        }
        "throw" => {
            let player = PlayerHandle::new(parse_index(tokens.next())?);
            let slot = parse_index(tokens.next())?;
            let raw = tokens.next().unwrap_or_default().to_owned();
            Some(Command::Throw(player, slot, raw))
        }
        "reset" => {
            let frames = tokens.next()?.parse().ok()?;
            let strike = tokens.next().map_or(Some(10), |t| t.parse().ok())?;
            Some(Command::Reset(GameConfig {
                frame_count: frames,
                strike_value: strike,
            }))
        }
        "json" => Some(Command::Json),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn apply(board: &mut Scoreboard, command: Command) -> Result<(), TallyError> {
    match command {
        Command::Name(player, name) => board.rename(player, name),
        Command::Throw(player, slot, raw) => {
            for repair in board.record_raw(player, slot, &raw)? {
                println!("  repaired {repair}");
            }
            Ok(())
        }
        Command::Reset(config) => board.reset(config),
        Command::Json | Command::Quit => Ok(()),
    }
}

fn print_board(board: &Scoreboard) {
    for card in board.score_cards() {
        println!("{card}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = Opt::parse();

    // configure logging: output Tenpin Tally logs to standard error
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if opt.verbose {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            })
            .with_writer(io::stderr)
            .finish(),
    )?;

    let mut board = ScoreboardBuilder::new()
        .with_num_players(opt.num_players)
        .with_game_config(GameConfig::short_game(opt.frames)?)
        .build()?;
    print_board(&board);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = parse_command(&line) else {
            eprintln!("unrecognised command: {line}");
            continue;
        };
        match command {
            Command::Quit => break,
            Command::Json => println!("{}", serde_json::to_string(&board.score_cards())?),
            command => match apply(&mut board, command) {
                Ok(()) => print_board(&board),
                Err(err) => eprintln!("{err}"),
            },
        }
        io::stdout().flush()?;
    }

    Ok(())
}
