use factorial_core::{Overflow, Strategy};
use serde::Deserialize;

use super::Config;

/// Default input of a bare `factorial` run.
pub const DEFAULT_INPUT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub input: i64,
    pub strategy: Strategy,
    pub overflow: Overflow,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT,
            strategy: Strategy::default(),
            overflow: Overflow::default(),
        }
    }
}

impl Config for RunConfig {
    const PREFIX: &'static str = "RUN";
}
