use clap::Parser;

use crate::error::SimError;

#[derive(Debug, Clone, Parser)]
#[command(name = "philosophers", about = "Dining philosophers with a non-blocking right fork")]
pub struct Config {
    /// Number of philosophers (and forks) around the table
    #[arg(short = 'n', long, default_value_t = 5)]
    pub agents: usize,

    /// Meals each philosopher eats before leaving the table
    #[arg(short, long, default_value_t = 10)]
    pub meals: usize,

    /// Lower bound of a think/eat delay in milliseconds
    #[arg(long, default_value_t = 100)]
    pub min_delay_ms: u64,

    /// Upper bound of a think/eat delay in milliseconds
    #[arg(long, default_value_t = 200)]
    pub max_delay_ms: u64,

    /// Skip think/eat delays entirely
    #[arg(long)]
    pub no_delay: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            agents: 5,
            meals: 10,
            min_delay_ms: 100,
            max_delay_ms: 200,
            no_delay: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), SimError> {
        // 1 人だと左右の箸が同じになり、永遠に食べられない
        if self.agents < 2 {
            return Err(SimError::InvalidConfig(format!(
                "at least 2 philosophers are required, got {}",
                self.agents
            )));
        }
        if !self.no_delay && self.min_delay_ms > self.max_delay_ms {
            return Err(SimError::InvalidConfig(format!(
                "min delay {}ms exceeds max delay {}ms",
                self.min_delay_ms, self.max_delay_ms
            )));
        }
        Ok(())
    }
}
