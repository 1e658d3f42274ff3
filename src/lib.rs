pub mod clock;
pub mod commands;
pub mod config;
pub mod duration;
pub mod error;

pub use duration::Duration;
pub use error::{HourError, Result};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, ValueEnum, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
