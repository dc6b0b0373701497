use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_positive_number,
    validate_range, validate_required_field, validate_url, Validate,
};

pub const DEFAULT_LANGUAGES: [&str; 10] = [
    "Python",
    "Java",
    "JavaScript",
    "C++",
    "C#",
    "C",
    "TypeScript",
    "PHP",
    "Go",
    "1C",
];

pub const MAX_PER_PAGE: u32 = 100;

/// 莫斯科在 HeadHunter 為 area 1，在 SuperJob 為 town 4
const MOSCOW_HH_AREA: u32 = 1;
const MOSCOW_SJ_TOWN: u32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct HeadHunterSettings {
    pub endpoint: String,
    pub area: u32,
    pub per_page: u32,
    pub title: String,
}

impl Default for HeadHunterSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            area: MOSCOW_HH_AREA,
            per_page: MAX_PER_PAGE,
            title: "HeadHunter Moscow".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuperJobSettings {
    pub endpoint: String,
    pub town: u32,
    pub per_page: u32,
    pub title: String,
    /// 以 `X-Api-App-Id` 送出，只來自命令列、`TOKEN_SJ` 或 `.env`
    pub api_token: Option<String>,
}

impl Default for SuperJobSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            town: MOSCOW_SJ_TOWN,
            per_page: MAX_PER_PAGE,
            title: "SuperJob Moscow".to_string(),
            api_token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpSettings {
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

/// 合併預設值、設定檔與命令列之後的完整設定
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub languages: Vec<String>,
    pub headhunter: HeadHunterSettings,
    pub superjob: SuperJobSettings,
    pub http: HttpSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|name| name.to_string()).collect(),
            headhunter: HeadHunterSettings::default(),
            superjob: SuperJobSettings::default(),
            http: HttpSettings::default(),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("languages", &self.languages)?;

        validate_url("headhunter.endpoint", &self.headhunter.endpoint)?;
        validate_range("headhunter.per_page", self.headhunter.per_page, 1, MAX_PER_PAGE)?;
        validate_non_empty_string("headhunter.title", &self.headhunter.title)?;

        validate_url("superjob.endpoint", &self.superjob.endpoint)?;
        validate_range("superjob.per_page", self.superjob.per_page, 1, MAX_PER_PAGE)?;
        validate_non_empty_string("superjob.title", &self.superjob.title)?;
        let token = validate_required_field("sj_token", &self.superjob.api_token)?;
        validate_non_empty_string("sj_token", token)?;

        if let Some(timeout) = self.http.timeout_seconds {
            validate_positive_number("http.timeout_seconds", timeout, 1)?;
        }
        validate_non_empty_string("http.user_agent", &self.http.user_agent)?;

        Ok(())
    }
}
