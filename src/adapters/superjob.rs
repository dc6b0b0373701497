use crate::adapters::{fetch_json, search_keyword};
use crate::config::SuperJobSettings;
use crate::domain::ports::{SalaryListing, VacancySource};
use crate::domain::salary::{lenient_amount, lenient_code, predict_salary};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const SOURCE_NAME: &str = "SuperJob";
const RUB_CURRENCY: &str = "rub";
const APP_ID_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SjVacancy {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub payment_from: Option<f64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub payment_to: Option<f64>,
    #[serde(default, deserialize_with = "lenient_code")]
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SjPage {
    objects: Vec<SjVacancy>,
    more: bool,
}

#[derive(Debug, Serialize)]
struct SjSearchQuery<'a> {
    count: u32,
    page: u32,
    town: u32,
    keyword: &'a str,
}

impl SalaryListing for SjVacancy {
    fn predict_rub_salary(&self) -> Option<f64> {
        let estimate = predict_salary(self.payment_from, self.payment_to)?;
        if self.currency.as_deref() != Some(RUB_CURRENCY) {
            return None;
        }
        Some(estimate)
    }
}

pub struct SuperJobClient {
    client: Client,
    settings: SuperJobSettings,
    api_token: String,
}

impl SuperJobClient {
    /// Fails when no application key is configured.
    pub fn new(client: Client, settings: SuperJobSettings) -> Result<Self> {
        let api_token = validate_required_field("sj_token", &settings.api_token)?.clone();
        Ok(Self {
            client,
            settings,
            api_token,
        })
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    type Listing = SjVacancy;

    fn title(&self) -> &str {
        &self.settings.title
    }

    async fn fetch_vacancies(&self, language: &str) -> Result<Vec<SjVacancy>> {
        let keyword = search_keyword(language);
        let mut vacancies = Vec::new();
        let mut page = 0;
        let mut more = true;

        while more {
            let query = SjSearchQuery {
                count: self.settings.per_page,
                page,
                town: self.settings.town,
                keyword: &keyword,
            };
            let request = self
                .client
                .get(&self.settings.endpoint)
                .header(APP_ID_HEADER, &self.api_token)
                .query(&query);
            let response: SjPage = fetch_json(SOURCE_NAME, request).await?;

            tracing::debug!(
                "{} '{}': page {}, {} objects, more={}",
                SOURCE_NAME,
                language,
                page + 1,
                response.objects.len(),
                response.more
            );

            vacancies.extend(response.objects);
            more = response.more;
            page += 1;
        }

        Ok(vacancies)
    }
}
