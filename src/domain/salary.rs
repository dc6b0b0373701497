use crate::domain::model::LanguageStatistics;
use serde::{Deserialize, Deserializer};

const ONLY_FROM_FACTOR: f64 = 1.2;
const ONLY_TO_FACTOR: f64 = 0.8;

/// 零或負數的上下限視為沒有薪資資訊
fn known_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| *value > 0.0)
}

/// 由薪資上下限估算單一代表值
pub fn predict_salary(salary_from: Option<f64>, salary_to: Option<f64>) -> Option<f64> {
    match (known_bound(salary_from), known_bound(salary_to)) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * ONLY_FROM_FACTOR),
        (None, Some(to)) => Some(to * ONLY_TO_FACTOR),
        (None, None) => None,
    }
}

pub fn average_salary(sum_of_estimates: f64, vacancies_processed: usize) -> u64 {
    if vacancies_processed == 0 {
        return 0;
    }
    (sum_of_estimates / vacancies_processed as f64).trunc() as u64
}

pub fn aggregate<L, F>(listings: &[L], normalizer: F) -> LanguageStatistics
where
    F: Fn(&L) -> Option<f64>,
{
    let (vacancies_processed, sum_of_estimates) = listings
        .iter()
        .filter_map(normalizer)
        .fold((0usize, 0.0f64), |(count, sum), estimate| {
            (count + 1, sum + estimate)
        });

    LanguageStatistics {
        vacancies_found: listings.len(),
        vacancies_processed,
        average_salary: average_salary(sum_of_estimates, vacancies_processed),
    }
}

/// 型別不符的薪資欄位視為缺值，不讓整頁解析失敗
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| value.as_f64()))
}

pub(crate) fn lenient_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| value.as_str().map(str::to_string)))
}
