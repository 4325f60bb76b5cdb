use std::{env, process::ExitCode};

use colored::Colorize;
use config::Config;
use term::TermGuard;
use tracing::info;

mod app;
mod config;
mod input;
mod logging;
mod renderer;
mod size;
mod speed;
mod term;
mod ticker;

fn main() -> ExitCode {
    match run() {
        Ok(Some(generations)) => {
            println!(
                "{} after {} generations",
                "termlife stopped".green(),
                generations.to_string().bold()
            );
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:?}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// `None` when the user left the speed menu without starting a game.
fn run() -> anyhow::Result<Option<u64>> {
    let config = match env::args().nth(1) {
        Some(config_path) => Config::load(config_path)?,
        None => Config::default(),
    };

    logging::init(&config)?;

    // Everything that touches the screen happens while the guard is alive.
    let mut terminal = TermGuard::enter()?;

    let interval = match config.tick_interval() {
        Some(interval) => interval,
        None => match speed::choose(&mut terminal)? {
            Some(speed) => speed.interval(),
            None => {
                info!("no speed chosen, not starting");
                return Ok(None);
            }
        },
    };

    let (height, width) = size::measure(config.board)?;
    info!(?interval, height, width, "starting");

    let generations = app::run(&mut terminal, interval, height, width)?;
    drop(terminal);

    Ok(Some(generations))
}
