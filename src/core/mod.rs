pub mod engine;
pub mod table;

pub use crate::domain::model::{LanguageStatistics, StatisticsTable};
pub use crate::domain::ports::{SalaryListing, VacancySource};
pub use crate::utils::error::Result;
