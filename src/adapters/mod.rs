// Adapters layer: HTTP clients for the two job boards.

pub mod headhunter;
pub mod http;
pub mod superjob;

pub use headhunter::{HeadHunterClient, HhSalary, HhVacancy};
pub use http::{build_client, fetch_json};
pub use superjob::{SjVacancy, SuperJobClient};

const SEARCH_PREFIX: &str = "Программист";

/// Both boards are searched with the same Russian keyword.
pub fn search_keyword(language: &str) -> String {
    format!("{} {}", SEARCH_PREFIX, language)
}
