use crate::config::settings::Settings;
use crate::utils::error::{Result, StatsError};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub report: Option<ReportConfig>,
    pub headhunter: Option<HeadHunterConfig>,
    pub superjob: Option<SuperJobConfig>,
    pub http: Option<HttpConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadHunterConfig {
    pub endpoint: Option<String>,
    pub area: Option<u32>,
    pub per_page: Option<u32>,
    pub title: Option<String>,
}

/// 不接受 token 欄位：金鑰只能來自 TOKEN_SJ、.env 或命令列
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuperJobConfig {
    pub endpoint: Option<String>,
    pub town: Option<u32>,
    pub per_page: Option<u32>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| StatsError::ConfigError {
            message: format!(
                "Cannot read configuration file {}: {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USER_AGENT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 以設定檔中出現的欄位覆寫現有設定
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(languages) = self.report.as_ref().and_then(|r| r.languages.clone()) {
            settings.languages = languages;
        }

        if let Some(hh) = &self.headhunter {
            if let Some(endpoint) = &hh.endpoint {
                settings.headhunter.endpoint = endpoint.clone();
            }
            if let Some(area) = hh.area {
                settings.headhunter.area = area;
            }
            if let Some(per_page) = hh.per_page {
                settings.headhunter.per_page = per_page;
            }
            if let Some(title) = &hh.title {
                settings.headhunter.title = title.clone();
            }
        }

        if let Some(sj) = &self.superjob {
            if let Some(endpoint) = &sj.endpoint {
                settings.superjob.endpoint = endpoint.clone();
            }
            if let Some(town) = sj.town {
                settings.superjob.town = town;
            }
            if let Some(per_page) = sj.per_page {
                settings.superjob.per_page = per_page;
            }
            if let Some(title) = &sj.title {
                settings.superjob.title = title.clone();
            }
        }

        if let Some(http) = &self.http {
            if http.timeout_seconds.is_some() {
                settings.http.timeout_seconds = http.timeout_seconds;
            }
            if let Some(user_agent) = &http.user_agent {
                settings.http.user_agent = user_agent.clone();
            }
        }
    }
}
