use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::riot::region::Region;

/// Thin wrapper around `reqwest` holding the Riot API key and the two routing hosts.
///
/// The account host serves Account-v1, the match host serves Match-v5. Every request is
/// authenticated with the `api_key` query parameter.
#[derive(Debug, Clone)]
pub struct RiotClient {
    http: reqwest::Client,
    api_key: String,
    account_base: String,
    match_base: String,
}

impl RiotClient {
    pub fn new(api_key: String, account_region: Region, match_region: Region) -> Self {
        Self::with_base_urls(api_key, account_region.base_url(), match_region.base_url())
    }

    pub fn with_base_urls(
        api_key: String,
        account_base: impl Into<String>,
        match_base: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            account_base: account_base.into().trim_end_matches('/').to_string(),
            match_base: match_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn account_base(&self) -> &str {
        &self.account_base
    }

    pub fn match_base(&self) -> &str {
        &self.match_base
    }

    /// GET `url` with the given query parameters and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AppError> {
        tracing::trace!(url, ?query, "riot api request");

        let res = self
            .http
            .get(url)
            .query(query)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = res.status();
        if !status.is_success() {
            let body = match res.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!(err = %err.without_url(), "failed to read error body");
                    String::new()
                }
            };
            return Err(status_error(status, body));
        }

        // The request url carries the api key, keep it out of error messages.
        Ok(res.json().await.map_err(reqwest::Error::without_url)?)
    }
}

fn status_error(status: StatusCode, body: String) -> AppError {
    tracing::debug!(status = status.as_u16(), "riot api request failed");

    AppError::RiotApi {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    }
}
