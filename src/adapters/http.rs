use crate::config::HttpSettings;
use crate::utils::error::{Result, StatsError};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub fn build_client(settings: &HttpSettings) -> Result<Client> {
    let mut builder = Client::builder().user_agent(settings.user_agent.clone());
    if let Some(timeout) = settings.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout));
    }
    Ok(builder.build()?)
}

/// Sends one search request; any non-2xx status is fatal for the run.
pub async fn fetch_json<T: DeserializeOwned>(
    source_name: &str,
    request: RequestBuilder,
) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();

    tracing::debug!("{} response status: {} ({})", source_name, status, response.url());

    if !status.is_success() {
        return Err(StatsError::HttpStatus {
            source_name: source_name.to_string(),
            status,
            url: response.url().to_string(),
        });
    }

    Ok(response.json::<T>().await?)
}
