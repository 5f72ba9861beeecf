use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub tmdb: FileTmdbConfig,
    #[serde(default)]
    pub carousel: FileCarouselConfig,
    #[serde(default)]
    pub ui: FileUiConfig,
    pub demo_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileTmdbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileUiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_transition_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Values read from the process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub tmdb_api_key: Option<String>,
    pub tmdb_api_base: Option<String>,
    pub tmdb_image_base: Option<String>,
    pub tmdb_language: Option<String>,
    pub page_size: Option<usize>,
    pub exit_transition_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub demo_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        let mut env_config = EnvConfig::default();

        env_config.config_path =
            non_empty_var("MARQUEE_CONFIG_PATH").map(PathBuf::from);

        env_config.tmdb_api_key = non_empty_var("TMDB_API_KEY");
        env_config.tmdb_api_base = non_empty_var("TMDB_API_BASE");
        env_config.tmdb_image_base = non_empty_var("TMDB_IMAGE_BASE");
        env_config.tmdb_language = non_empty_var("TMDB_LANGUAGE");

        env_config.page_size = std::env::var("MARQUEE_PAGE_SIZE")
            .ok()
            .and_then(|s| s.trim().parse().ok());
        env_config.exit_transition_ms =
            std::env::var("MARQUEE_EXIT_TRANSITION_MS")
                .ok()
                .and_then(|s| s.trim().parse().ok());
        env_config.log_file =
            non_empty_var("MARQUEE_LOG_FILE").map(PathBuf::from);

        env_config.demo_mode = parse_bool_var("MARQUEE_DEMO");

        env_config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_bool_var(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|raw| {
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        }
    })
}
