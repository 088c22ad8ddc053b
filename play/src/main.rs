mod cli;

use std::io::{stdin, BufRead};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use env_logger::Env;
use log::{info, warn};
use play::{load_options, parse_line, run_perft, GameManager, Output, PlayOptions};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Play(play_args) => {
            let options = load_options(&play_args.config)?;

            run_session(options)?
        }
        Commands::Perft(perft_args) => {
            let options = load_options(&perft_args.config)?;
            let depth = perft_args.depth.unwrap_or(options.perft_depth);
            let engine = quoridor::Engine::new();

            info!("Running perft to depth {}", depth);

            let start = Instant::now();
            let count = run_perft(depth, &engine)?;

            info!("Counted {} in {:?}", count, start.elapsed());
            println!("{}", count);
        }
    }

    Ok(())
}

fn run_session(options: PlayOptions) -> Result<()> {
    let mut game_manager = GameManager::new(options);

    print!("{}", game_manager.game_state());

    for line in stdin().lock().lines() {
        let line = line?;

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(err) => {
                warn!("{:#}", err);
                continue;
            }
        };

        match game_manager.command(command) {
            Output::Message(message) => println!("{}", message.trim_end()),
            Output::Rejected(reason) => warn!("{}", reason),
            Output::Nothing => {}
            Output::Quit => break,
        }
    }

    Ok(())
}
