use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Runtime configuration, sourced from the process environment.
///
/// `DATABASE_URL`, `LOGLEVEL` and `SEED` override the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
    #[serde(deserialize_with = "figment::util::bool_from_str_or_int")]
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://employee_tracker.db".to_string(),
            loglevel: "warn".to_string(),
            seed: false,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&["database_url", "loglevel", "seed"]))
    }

    pub fn from_env() -> Result<Self, TrackerError> {
        Ok(Self::figment().extract()?)
    }
}

