use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use config::Config;
use error::SimError;
use observer::LogObserver;
use philosopher::AgentReport;
use table::Table;
use work::{NoDelay, RandomDelay, WorkSimulator};

mod config;
mod error;
mod fork;
mod observer;
mod philosopher;
mod table;
mod work;

fn run(config: &Config) -> Result<Vec<AgentReport>, SimError> {
    config.validate()?;

    let work: Arc<dyn WorkSimulator> = if config.no_delay {
        Arc::new(NoDelay)
    } else {
        Arc::new(RandomDelay::new(config.min_delay_ms, config.max_delay_ms))
    };

    let table = Table::new(config.agents, config.meals, work, Arc::new(LogObserver))?;
    table.run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    match run(&config) {
        Ok(reports) => {
            for r in reports {
                println!(
                    "Philosopher #{}: MEALS = {} (expected = {}), MISSED = {}",
                    r.id, r.meals, config.meals, r.missed
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
