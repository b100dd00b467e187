//! Runner configuration: environment variables first, then command line flags.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

pub const SEED_ENV: &str = "TETRIS_SEED";
pub const LOG_PATH_ENV: &str = "TETRIS_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the random piece source.
    pub seed: u32,
    /// JSONL event log destination; `None` disables logging.
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Build from the process environment and `std::env::args`.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = env::args().skip(1).collect();
        let mut config = Self::from_env()?;
        config.apply_args(&args)?;
        Ok(config)
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_ENV) {
            config.seed = parse_seed(&raw).map_err(|e| anyhow!("{}: {}", SEED_ENV, e))?;
        }
        if let Some(raw) = lookup(LOG_PATH_ENV) {
            config.log_path = non_empty_path(&raw);
        }

        Ok(config)
    }

    /// Override fields from flags (program name already stripped).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = parse_seed(v).map_err(|e| anyhow!("--seed: {}", e))?;
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = non_empty_path(v);
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(())
    }
}

fn parse_seed(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("invalid seed value: {:?}", raw))
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
