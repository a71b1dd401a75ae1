use pookalam::{
    cli::{describe_outcome, help_text, parse_command, print_state, Command},
    init_logging, Direction, LevelChange, Player, PlayerNode, PuzzleEngine, Session, SolverPlayer,
    AUTO_ADVANCE_DELAY, MAX_LEVEL,
};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Rotate the flower rings until the pookalam lines up", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively on the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible shuffles (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=MAX_LEVEL as u64))]
        level: u64,
        #[arg(long, default_value_t = AUTO_ADVANCE_DELAY.as_millis() as u64, help = "Pause after a solved level before the next one starts")]
        delay_ms: u64,
    },
    /// Let the built-in solver play every level and show each move.
    Solve {
        #[arg(long, help = "Fix RNG seed for reproducible shuffles (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (shuffles will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn direction_word(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "f",
        Direction::Backward => "b",
    }
}

fn prompt() -> anyhow::Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            level,
            delay_ms,
        } => {
            let rng = seeded_rng(seed);
            let session = Session::new(PuzzleEngine::new(), rng, level as usize)?
                .with_advance_delay(Duration::from_millis(delay_ms));
            run_interactive(session).await?;
        }
        Commands::Solve { seed } => {
            let rng = seeded_rng(seed);
            let session = Session::new(PuzzleEngine::new(), rng, 1)?;
            let engine = session.engine().clone();
            print_state(&engine, session.state());
            let mut node = PlayerNode::new(Box::new(SolverPlayer::new()), session);
            let summary = node.run_with(|state, mv, outcome| {
                println!(
                    "\nRing {} {:?}: {}",
                    mv.ring + 1,
                    mv.direction,
                    describe_outcome(&outcome, false)
                );
                print_state(&engine, state);
            })?;
            println!();
            for record in summary.levels.iter() {
                println!("Level {} solved in {} moves", record.level, record.moves);
            }
            println!("Total: {} moves", summary.total_moves);
        }
    }
    Ok(())
}

async fn run_interactive(mut session: Session<SmallRng>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut hinter = SolverPlayer::new();
    let mut muted = false;

    println!("{}\n", help_text());
    print_state(session.engine(), session.state());
    prompt()?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line? {
                    Some(line) => line,
                    None => break,
                };
                if line.trim().is_empty() {
                    prompt()?;
                    continue;
                }
                match parse_command(&line, session.state().level()) {
                    Err(e) => println!("✗ {}", e),
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", help_text()),
                    Ok(Command::Mute) => {
                        muted = !muted;
                        println!("Sound cues {}.", if muted { "off" } else { "on" });
                    }
                    Ok(Command::Hint) => {
                        match hinter.select_move(session.engine(), session.state()) {
                            Some(mv) => println!("Try: {} {}", mv.ring + 1, direction_word(mv.direction)),
                            None => println!("Nothing to do - this level is solved."),
                        }
                    }
                    Ok(Command::Rotate(mv)) => {
                        let outcome = match session.rotate(mv.ring, mv.direction) {
                            Ok(outcome) => outcome,
                            Err(e) => {
                                println!("✗ {}", e);
                                prompt()?;
                                continue;
                            }
                        };
                        println!("{}", describe_outcome(&outcome, muted));
                        print_state(session.engine(), session.state());
                        if session.is_won() {
                            println!("Type 'reset' to play again or 'quit' to leave.");
                        } else if session.pending_advance().is_some() {
                            println!("Next level coming up...");
                        }
                    }
                    Ok(Command::Restart) => {
                        session.restart_level()?;
                        print_state(session.engine(), session.state());
                    }
                    Ok(Command::Reset) => {
                        session.reset()?;
                        print_state(session.engine(), session.state());
                    }
                    Ok(Command::Next) => {
                        if !session.state().is_complete() {
                            println!("✗ Solve this level first.");
                        } else {
                            match session.advance_now()? {
                                LevelChange::AlreadyFinal { .. } => println!("Already at the final level."),
                                _ => print_state(session.engine(), session.state()),
                            }
                        }
                    }
                }
                prompt()?;
            }
            change = session.advance_due() => {
                if let Some(change) = change? {
                    println!("\nOn to level {}!", change.level());
                    print_state(session.engine(), session.state());
                    prompt()?;
                }
            }
        }
    }
    println!("Goodbye!");
    Ok(())
}
