//! Per-asset recent/historic price logs.
//!
//! File layout under the data directory:
//! - `<TICKER>-<FIAT>-recent.txt`: exactly one observation line, replaced
//!   wholesale on every write
//! - `<TICKER>-<FIAT>-historic.txt`: one line per observation, append-only
//!
//! Reads are deliberately forgiving: a missing, unreadable, or malformed
//! recent file is the same as "no prior data" and never an error.

use crate::error::{StoreError, StoreResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use spot_core::{Price, PriceObservation};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory the log files live in; created on demand.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    "./data/prices".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Per-asset price logs under a single data directory.
pub struct PriceLogStore {
    data_dir: PathBuf,
    fiat: String,
    price_re: Regex,
}

impl PriceLogStore {
    /// Open the store, creating the data directory if missing.
    ///
    /// A regular file already occupying the path is refused rather than
    /// clobbered.
    pub fn open(config: &StoreConfig, fiat: &str) -> StoreResult<Self> {
        let data_dir = PathBuf::from(&config.data_dir);
        if data_dir.exists() && !data_dir.is_dir() {
            return Err(StoreError::DataDirIsFile(data_dir));
        }
        fs::create_dir_all(&data_dir)?;

        let pattern = format!(r"(?i)= (.*) {}", regex::escape(fiat));
        let price_re = Regex::new(&pattern).expect("escaped fiat pattern is a valid regex");

        Ok(Self {
            data_dir,
            fiat: fiat.to_string(),
            price_re,
        })
    }

    /// Last recorded price for a ticker, if any.
    ///
    /// The price is the text between the `"= "` and `" <FIAT>"` markers of
    /// the first matching line. Read or parse failures degrade to `None`;
    /// the caller cannot distinguish them from a first run.
    pub fn read_recent_price(&self, ticker: &str) -> Option<Price> {
        let path = self.recent_path(ticker);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No readable recent log");
                return None;
            }
        };

        let raw = self.price_re.captures(&text)?.get(1)?.as_str().trim();
        match raw.parse::<Price>() {
            Ok(price) => Some(price),
            Err(e) => {
                debug!(ticker, raw, error = %e, "Unparsable price in recent log");
                None
            }
        }
    }

    /// Record an observation: overwrite the recent log with its single
    /// line, append the same line to the historic log.
    ///
    /// The historic append is newline-prefixed except when it creates the
    /// file, so N observations produce exactly N lines.
    pub fn append_observation(&self, observation: &PriceObservation) -> StoreResult<()> {
        let line = observation.log_line();

        fs::write(self.recent_path(&observation.ticker), &line)?;

        let historic = self.historic_path(&observation.ticker);
        let exists = historic.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&historic)?;
        if exists {
            write!(file, "\n{line}")?;
        } else {
            write!(file, "{line}")?;
        }

        debug!(ticker = %observation.ticker, "Recorded observation");
        Ok(())
    }

    fn recent_path(&self, ticker: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}-{}-recent.txt", ticker, self.fiat))
    }

    fn historic_path(&self, ticker: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}-{}-historic.txt", ticker, self.fiat))
    }
}
