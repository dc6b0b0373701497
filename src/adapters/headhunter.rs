use crate::adapters::{fetch_json, search_keyword};
use crate::config::HeadHunterSettings;
use crate::domain::ports::{SalaryListing, VacancySource};
use crate::domain::salary::{lenient_amount, lenient_code, predict_salary};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const SOURCE_NAME: &str = "HeadHunter";
const RUB_CURRENCY: &str = "RUR";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhSalary {
    #[serde(default, deserialize_with = "lenient_code")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub from: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub to: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhVacancy {
    #[serde(default)]
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Deserialize)]
struct HhPage {
    items: Vec<HhVacancy>,
    pages: u32,
}

#[derive(Debug, Serialize)]
struct HhSearchQuery<'a> {
    page: u32,
    per_page: u32,
    text: &'a str,
    area: u32,
}

impl SalaryListing for HhVacancy {
    fn predict_rub_salary(&self) -> Option<f64> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(RUB_CURRENCY) {
            return None;
        }
        predict_salary(salary.from, salary.to)
    }
}

pub struct HeadHunterClient {
    client: Client,
    settings: HeadHunterSettings,
}

impl HeadHunterClient {
    pub fn new(client: Client, settings: HeadHunterSettings) -> Self {
        Self { client, settings }
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    type Listing = HhVacancy;

    fn title(&self) -> &str {
        &self.settings.title
    }

    async fn fetch_vacancies(&self, language: &str) -> Result<Vec<HhVacancy>> {
        let text = search_keyword(language);
        let mut vacancies = Vec::new();
        let mut page = 0;
        let mut total_pages = 1;

        // 每次回應都可能更新總頁數，以最新值為準
        while page < total_pages {
            let query = HhSearchQuery {
                page,
                per_page: self.settings.per_page,
                text: &text,
                area: self.settings.area,
            };
            let request = self.client.get(&self.settings.endpoint).query(&query);
            let response: HhPage = fetch_json(SOURCE_NAME, request).await?;

            tracing::debug!(
                "{} '{}': page {} of {}, {} items",
                SOURCE_NAME,
                language,
                page + 1,
                response.pages,
                response.items.len()
            );

            vacancies.extend(response.items);
            total_pages = response.pages;
            page += 1;
        }

        Ok(vacancies)
    }
}
