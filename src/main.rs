//! Headless session runner
//!
//! Runs the simulation without any rendering: useful for smoke-testing the
//! physics and producing replays. A trivial policy steers the player back
//! toward the middle of the field until the lives run out.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use wallrush::consts::TICKS_PER_SECOND;
use wallrush::sim::{Command, GameState, advance_tick};
use wallrush::{HighScores, Replay, Settings};

const SETTINGS_PATH: &str = "data/settings.json";
const SCOREBOARD_PATH: &str = "data/highscores.json";
const REPLAY_PATH: &str = "data/replay.json";

struct Args {
    seed: u64,
    max_ticks: u64,
}

enum Parsed {
    Run(Args),
    Quit,
}

fn parse_arguments(arguments: &[String]) -> Result<Parsed, String> {
    let mut args = Args {
        seed: 0,
        max_ticks: 60 * TICKS_PER_SECOND,
    };
    let mut iter = arguments.iter();
    while let Some(argument) = iter.next() {
        match argument.as_str() {
            "--version" => {
                println!("{}", env!("CARGO_PKG_VERSION"));
                return Ok(Parsed::Quit);
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed requires a value")?;
                args.seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--ticks" => {
                let value = iter.next().ok_or("--ticks requires a value")?;
                args.max_ticks = value.parse().map_err(|_| format!("bad tick count: {value}"))?;
            }
            other => {
                return Err(format!("Unrecognized argument: {other}."));
            }
        }
    }
    Ok(Parsed::Run(args))
}

/// Steer the player back toward the middle column.
fn steer(state: &GameState) -> Command {
    let center = state.bounds.center();
    if state.player.position.x < center.x {
        Command::Right
    } else if state.player.position.x > center.x {
        Command::Left
    } else {
        Command::Center
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let arguments: Vec<String> = env::args().skip(1).collect();
    let args = match parse_arguments(&arguments) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Quit) => return ExitCode::SUCCESS,
        Err(message) => {
            log::error!("{message}");
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let settings = Settings::load(Path::new(SETTINGS_PATH));
    let mut state = GameState::new(args.seed, &settings);
    let mut replay = Replay::new(args.seed);

    let mut ticks = 0;
    while !state.is_over() && ticks < args.max_ticks {
        let command = steer(&state);
        advance_tick(&mut state, command);
        replay.record(command);
        ticks += 1;
    }

    // Survival scoring: one point per second the player stayed alive.
    state.player.score = (state.played_frames / TICKS_PER_SECOND) as u32;
    println!(
        "Session over after {ticks} ticks: score {}, {} lives left",
        state.player.score, state.player.lives
    );

    if let Err(error) = replay.save(Path::new(REPLAY_PATH)) {
        log::warn!("Could not save replay: {error}");
    }
    let mut scores = HighScores::load(Path::new(SCOREBOARD_PATH));
    if let Some(rank) = scores.add_score("headless", state.player.score) {
        println!("New high score at rank {rank}!");
        if let Err(error) = scores.save(Path::new(SCOREBOARD_PATH)) {
            log::warn!("Could not save scoreboard: {error}");
        }
    }
    ExitCode::SUCCESS
}
