use thiserror::Error;
use url::Url;

use crate::models::Config;

/// Smallest accepted carousel page size.
pub const MIN_PAGE_SIZE: usize = 1;
/// Largest accepted carousel page size; cards open with the keys `1`-`9`.
pub const MAX_PAGE_SIZE: usize = 9;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error(
        "carousel page size {value} is outside {min}..={max}",
        min = MIN_PAGE_SIZE,
        max = MAX_PAGE_SIZE
    )]
    PageSizeOutOfRange { value: usize },
    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("TMDB_API_KEY is required unless demo mode is enabled")]
    MissingApiKey,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    let page_size = config.carousel.page_size;
    if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(ConfigGuardRailError::PageSizeOutOfRange {
            value: page_size,
        });
    }

    let api_base = parse_url("TMDB_API_BASE", &config.tmdb.api_base)?;
    parse_url("TMDB_IMAGE_BASE", &config.tmdb.image_base)?;

    if config.demo_mode {
        warnings.push_with_hint(
            "Demo mode enabled; serving the built-in catalog",
            "Unset MARQUEE_DEMO and set TMDB_API_KEY for live listings",
        );
        return Ok(warnings);
    }

    if config.tmdb.api_key.is_none() {
        return Err(ConfigGuardRailError::MissingApiKey);
    }

    if api_base.scheme() != "https" {
        warnings.push_with_hint(
            format!(
                "TMDB_API_BASE uses {}; the API key travels in clear text",
                api_base.scheme()
            ),
            "Point TMDB_API_BASE at an https endpoint outside local testing",
        );
    }

    Ok(warnings)
}

fn parse_url(
    field: &'static str,
    value: &str,
) -> Result<Url, ConfigGuardRailError> {
    Url::parse(value).map_err(|source| ConfigGuardRailError::InvalidUrl {
        field,
        value: value.to_string(),
        source,
    })
}
