//! Catalog sources
//!
//! A source answers one question: "give me page N of category C". The
//! browser asks once per view mount and never caches or retries.

pub mod fixture;
pub mod tmdb;

use std::fmt;

use async_trait::async_trait;
use marquee_model::{CatalogPage, Category};

pub use fixture::StaticCatalogSource;
pub use tmdb::{DEFAULT_API_BASE, TmdbCatalogSource, TmdbSettings};

pub const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub category: Category,
    pub language: String,
    pub page: u32,
}

impl CatalogRequest {
    /// First page of `category` in the default language.
    pub fn first_page(category: Category) -> Self {
        Self {
            category,
            language: DEFAULT_LANGUAGE.to_string(),
            page: 1,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[async_trait]
pub trait CatalogSource: Send + Sync + fmt::Debug {
    /// Short name for logs ("tmdb", "fixture").
    fn name(&self) -> &'static str;

    async fn fetch(
        &self,
        request: &CatalogRequest,
    ) -> Result<CatalogPage, CatalogError>;
}
