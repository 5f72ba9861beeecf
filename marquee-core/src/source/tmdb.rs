use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use marquee_model::CatalogPage;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use super::{CatalogError, CatalogRequest, CatalogSource, DEFAULT_LANGUAGE};

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the TMDB v3 API.
#[derive(Clone)]
pub struct TmdbSettings {
    pub api_key: String,
    pub api_base: Url,
    pub language: String,
}

impl fmt::Debug for TmdbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbSettings")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base.as_str())
            .field("language", &self.language)
            .finish()
    }
}

impl TmdbSettings {
    pub fn new(api_key: impl Into<String>) -> Result<Self, CatalogError> {
        let api_base = Url::parse(DEFAULT_API_BASE)
            .map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            api_key: api_key.into(),
            api_base,
            language: DEFAULT_LANGUAGE.to_string(),
        })
    }

    pub fn with_api_base(mut self, api_base: Url) -> Self {
        self.api_base = api_base;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Error body TMDB returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct TmdbStatus {
    #[serde(default)]
    status_message: Option<String>,
}

pub struct TmdbCatalogSource {
    client: reqwest::Client,
    settings: TmdbSettings,
}

impl fmt::Debug for TmdbCatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbCatalogSource")
            .field("client", &"reqwest::Client")
            .field("settings", &self.settings)
            .finish()
    }
}

impl TmdbCatalogSource {
    pub fn new(settings: TmdbSettings) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &TmdbSettings {
        &self.settings
    }

    /// `{api_base}/{endpoint}?api_key=..&language=..&page=..`
    pub fn request_url(
        &self,
        request: &CatalogRequest,
    ) -> Result<Url, CatalogError> {
        let mut url = self.settings.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                CatalogError::InvalidUrl(format!(
                    "{} cannot be used as an API base",
                    self.settings.api_base
                ))
            })?
            .pop_if_empty()
            .extend(request.category.endpoint().split('/'));

        let language = if request.language.is_empty() {
            self.settings.language.as_str()
        } else {
            request.language.as_str()
        };

        url.query_pairs_mut()
            .append_pair("api_key", &self.settings.api_key)
            .append_pair("language", language)
            .append_pair("page", &request.page.max(1).to_string());
        Ok(url)
    }
}

#[async_trait]
impl CatalogSource for TmdbCatalogSource {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    async fn fetch(
        &self,
        request: &CatalogRequest,
    ) -> Result<CatalogPage, CatalogError> {
        let url = self.request_url(request)?;
        info!(
            category = %request.category,
            page = request.page,
            "fetching catalog page"
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let error = status_error(status, &body);
            warn!(
                status = status.as_u16(),
                error = %error,
                "catalog fetch failed"
            );
            return Err(error);
        }

        let body = response.bytes().await?;
        let page: CatalogPage = serde_json::from_slice(&body)?;
        info!(
            category = %request.category,
            results = page.results.len(),
            total_results = page.total_results,
            "catalog page fetched"
        );
        Ok(page)
    }
}

fn status_error(status: StatusCode, body: &[u8]) -> CatalogError {
    match status {
        StatusCode::UNAUTHORIZED => CatalogError::InvalidApiKey,
        StatusCode::NOT_FOUND => CatalogError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => CatalogError::RateLimited,
        other => {
            let message = serde_json::from_slice::<TmdbStatus>(body)
                .ok()
                .and_then(|s| s.status_message)
                .unwrap_or_else(|| {
                    other.canonical_reason().unwrap_or("unknown").to_string()
                });
            CatalogError::Api {
                status: other.as_u16(),
                message,
            }
        }
    }
}
