use crate::errors::{Error, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Live simulated sensor dashboard
#[derive(Debug, Clone, Parser)]
#[command(name = "dashboard", version)]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "HTTP_ADDR", default_value = "0.0.0.0:8050")]
    pub http_addr: String,

    /// Tick period in milliseconds
    #[arg(long = "tick-ms", env = "TICK_INTERVAL_MS", default_value_t = 2000)]
    pub tick_ms: u64,

    /// Seed for reproducible readings; entropy when absent
    #[arg(long, env = "SIM_SEED")]
    pub seed: Option<u64>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(Error::Config("tick period must be greater than 0 ms".to_string()));
        }
        if self.http_addr.is_empty() {
            return Err(Error::Config("HTTP address cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
