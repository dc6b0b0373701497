use crate::config::settings::Settings;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "salary-stats")]
#[command(about = "Average programmer salaries from HeadHunter and SuperJob")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, value_delimiter = ',', help = "Languages to search for, comma separated")]
    pub languages: Vec<String>,

    #[arg(long)]
    pub hh_endpoint: Option<String>,

    #[arg(long)]
    pub sj_endpoint: Option<String>,

    #[arg(long, help = "Vacancies requested per page from both sources")]
    pub per_page: Option<u32>,

    #[arg(long)]
    pub hh_area: Option<u32>,

    #[arg(long)]
    pub sj_town: Option<u32>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, env = "TOKEN_SJ", hide_env_values = true)]
    pub sj_token: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 由工作目錄往上尋找第一個 .env 並載入，已設定的環境變數不會被覆寫
///
/// 必須在 `CliConfig::parse()` 之前呼叫，`TOKEN_SJ` 才會被 clap 讀到。
pub fn load_env_file() -> std::result::Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

impl CliConfig {
    /// 預設值 < 設定檔 < 命令列
    pub fn into_settings(self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if !self.languages.is_empty() {
            settings.languages = self.languages;
        }
        if let Some(endpoint) = self.hh_endpoint {
            settings.headhunter.endpoint = endpoint;
        }
        if let Some(endpoint) = self.sj_endpoint {
            settings.superjob.endpoint = endpoint;
        }
        if let Some(per_page) = self.per_page {
            settings.headhunter.per_page = per_page;
            settings.superjob.per_page = per_page;
        }
        if let Some(area) = self.hh_area {
            settings.headhunter.area = area;
        }
        if let Some(town) = self.sj_town {
            settings.superjob.town = town;
        }
        if self.timeout_seconds.is_some() {
            settings.http.timeout_seconds = self.timeout_seconds;
        }
        settings.superjob.api_token = self.sj_token;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_languages_and_overrides() {
        let config = CliConfig::try_parse_from([
            "salary-stats",
            "--languages",
            "Rust,C++,C#",
            "--per-page",
            "20",
            "--hh-area",
            "2",
            "--sj-token",
            "v3.r.secret",
        ])
        .unwrap();

        let settings = config.into_settings().unwrap();
        assert_eq!(settings.languages, vec!["Rust", "C++", "C#"]);
        assert_eq!(settings.headhunter.per_page, 20);
        assert_eq!(settings.superjob.per_page, 20);
        assert_eq!(settings.headhunter.area, 2);
        assert_eq!(settings.superjob.town, 4);
        assert_eq!(settings.superjob.api_token.as_deref(), Some("v3.r.secret"));
    }

    #[test]
    fn test_command_line_wins_over_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[report]\nlanguages = [\"Kotlin\"]\n\n[superjob]\ntown = 14\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let config = CliConfig::try_parse_from([
            "salary-stats",
            "--config",
            path.as_str(),
            "--sj-town",
            "25",
        ])
        .unwrap();

        let settings = config.into_settings().unwrap();
        assert_eq!(settings.languages, vec!["Kotlin"]);
        assert_eq!(settings.superjob.town, 25);
    }

    #[test]
    fn test_token_from_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        std::fs::write(&env_path, "TOKEN_SJ=v3.r.from-dotenv\n").unwrap();

        dotenvy::from_path_override(&env_path).unwrap();
        let config = CliConfig::try_parse_from(["salary-stats"]).unwrap();
        std::env::remove_var("TOKEN_SJ");

        let settings = config.into_settings().unwrap();
        assert_eq!(
            settings.superjob.api_token.as_deref(),
            Some("v3.r.from-dotenv")
        );
    }

    #[test]
    fn test_missing_env_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = dotenvy::from_path(dir.path().join(".env")).unwrap_err();
        assert!(err.not_found());
    }
}
