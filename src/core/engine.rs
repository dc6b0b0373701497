use crate::domain::model::StatisticsTable;
use crate::domain::ports::{SalaryListing, VacancySource};
use crate::domain::salary::aggregate;
use crate::utils::error::Result;

pub struct StatisticsEngine<S: VacancySource> {
    source: S,
}

impl<S: VacancySource> StatisticsEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn title(&self) -> &str {
        self.source.title()
    }

    /// 依設定順序逐一查詢每個語言，任何一次請求失敗即中止
    pub async fn collect(&self, languages: &[String]) -> Result<StatisticsTable> {
        let mut table = StatisticsTable::new();

        for language in languages {
            let vacancies = self.source.fetch_vacancies(language).await?;
            let statistics = aggregate(
                &vacancies,
                <S::Listing as SalaryListing>::predict_rub_salary,
            );

            tracing::info!(
                "{} {}: found {}, processed {}, average {}",
                self.source.title(),
                language,
                statistics.vacancies_found,
                statistics.vacancies_processed,
                statistics.average_salary
            );

            table.insert(language.clone(), statistics);
        }

        Ok(table)
    }
}
