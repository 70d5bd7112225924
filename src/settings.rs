use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

pub const DEFAULT_OUTPUT: &str = "docs/questions.json";
const ENV_PREFIX: &str = "QUESTIONS";

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Output file, relative to the working directory unless absolute.
    pub output: PathBuf,
}

impl Settings {
    /// Defaults overlaid with `QUESTIONS_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("output", DEFAULT_OUTPUT)?
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
