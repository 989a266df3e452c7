//! Front-end settings: which engine to launch
//!
//! Layered the usual way: embedded defaults first, then `LINT_STAGED_*`
//! environment variables. Nothing here reaches [`super::NormalizedConfig`].

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;

// Embed the default settings at compile time
const DEFAULT_SETTINGS: &str = include_str!("../../default-config.toml");

/// Environment prefix for overriding settings
pub const ENV_PREFIX: &str = "LINT_STAGED_";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Engine executable name or path
    pub engine: String,

    /// Arguments passed to the engine
    #[serde(default)]
    pub engine_args: Vec<String>,
}

impl Settings {
    /// Embedded defaults merged with the process environment
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::string(DEFAULT_SETTINGS))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self> {
        figment
            .extract()
            .context("Failed to load lint-staged settings")
    }
}
