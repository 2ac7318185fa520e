//! Interactive driver: a stdin loop around the sanmoku engine.
//!
//! The driver owns turn pacing, rendering, and the persisted tally; the
//! engine only computes moves and outcomes.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use sanmoku::{FileHistory, GameOutcome, HistoryStore, Match, MatchError, Turn};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!(level = %cli.level, computer_first = cli.computer_first, "starting");
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let mut game = match cli.seed {
        Some(seed) => Match::seeded(cli.level, !cli.computer_first, seed),
        None => Match::new(cli.level, !cli.computer_first),
    };
    let mut history =
        (!cli.no_history).then(|| FileHistory::new(cli.history.clone()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "You play {}, the computer plays {} ({} difficulty).",
        game.human_mark(),
        game.automated_mark(),
        game.difficulty()
    );

    loop {
        match game.turn() {
            Turn::Human => {
                println!("\n{}\n", game.board());
                print!("Your move (0-8): ");
                io::stdout().flush()?;
                let Some(line) = lines.next().transpose()? else {
                    return Ok(());
                };
                let cell: usize = match line.trim().parse() {
                    Ok(cell) => cell,
                    Err(_) => {
                        println!("Enter a cell index between 0 and 8.");
                        continue;
                    }
                };
                match game.play_human(cell) {
                    Ok(_) => {}
                    Err(MatchError::Engine(err)) => {
                        println!("{err}");
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Turn::Automated => {
                std::thread::sleep(Duration::from_millis(cli.delay_ms));
                let (cell, _) = game.play_automated()?;
                println!("Computer plays {cell}.");
            }
            Turn::Over => {
                println!("\n{}\n", game.board());
                let outcome = game.outcome();
                match outcome {
                    GameOutcome::Win(player) if player == game.human_mark() => {
                        println!("You win!");
                    }
                    GameOutcome::Win(_) => println!("Computer wins."),
                    GameOutcome::Draw => println!("Draw."),
                    GameOutcome::InProgress => unreachable!("terminal turn with open board"),
                }
                if let Some(store) = history.as_mut() {
                    store.record(outcome, game.human_mark())?;
                    let tally = store.tally()?;
                    println!(
                        "Record: {} wins, {} losses, {} draws.",
                        tally.wins, tally.losses, tally.draws
                    );
                }

                print!("Play again? [y/N] ");
                io::stdout().flush()?;
                let Some(line) = lines.next().transpose()? else {
                    return Ok(());
                };
                if line.trim().eq_ignore_ascii_case("y") {
                    game.reset();
                } else {
                    return Ok(());
                }
            }
        }
    }
}
