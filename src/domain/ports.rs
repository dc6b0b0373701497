use crate::utils::error::Result;
use async_trait::async_trait;

/// A listing that can produce a rouble salary estimate.
pub trait SalaryListing {
    fn predict_rub_salary(&self) -> Option<f64>;
}

#[async_trait]
pub trait VacancySource: Send + Sync {
    type Listing: SalaryListing + Send;

    /// Title printed above this source's table.
    fn title(&self) -> &str;

    /// Collects every page of search results for one language.
    async fn fetch_vacancies(&self, language: &str) -> Result<Vec<Self::Listing>>;
}
