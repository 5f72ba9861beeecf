pub mod sources;

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use marquee_core::CarouselConfig;
use marquee_core::model::TMDB_IMAGE_BASE;
use marquee_core::source::{DEFAULT_API_BASE, DEFAULT_LANGUAGE};

/// Length of the page slide before the carousel accepts another advance.
pub const DEFAULT_EXIT_TRANSITION_MS: u64 = 600;

/// Log destination for interactive sessions.
pub const DEFAULT_LOG_FILE: &str = "marquee.log";

/// Fully resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub tmdb: TmdbConfig,
    pub carousel: CarouselSettings,
    pub ui: UiConfig,
    pub demo_mode: bool,
    pub metadata: ConfigMetadata,
}

impl Config {
    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig::with_page_size(self.carousel.page_size)
    }
}

#[derive(Clone)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub image_base: String,
    pub language: String,
}

impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("image_base", &self.image_base)
            .field("language", &self.language)
            .finish()
    }
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: TMDB_IMAGE_BASE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSettings {
    pub page_size: usize,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            page_size: CarouselConfig::poster_defaults().page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub exit_transition: Duration,
    pub log_file: PathBuf,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            exit_transition: Duration::from_millis(DEFAULT_EXIT_TRANSITION_MS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Where the configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
