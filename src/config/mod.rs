#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{load_env_file, CliConfig};
pub use settings::{HeadHunterSettings, HttpSettings, Settings, SuperJobSettings};
pub use toml_config::TomlConfig;
