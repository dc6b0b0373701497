pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::Settings;

pub use crate::core::{engine::StatisticsEngine, table::render_table};
pub use crate::domain::model::{LanguageStatistics, StatisticsTable};
pub use crate::utils::error::{Result, StatsError};
