pub mod error;

use once_cell::sync::Lazy;
use std::{fs, path::PathBuf, time::Duration};

use crate::models::{
    CarouselSettings, Config, ConfigMetadata, TmdbConfig, UiConfig,
    sources::{EnvConfig, FileConfig},
};
use crate::validation::{self, ConfigWarnings};
use error::ConfigLoadError;

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("marquee.toml"),
        PathBuf::from("config/marquee.toml"),
    ]
});

/// Command-line values that beat every other source.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub demo_mode: Option<bool>,
    pub page_size: Option<usize>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.options.overrides = overrides;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let env_config = EnvConfig::gather();

        let (file_config, config_path) = self.load_file_config(&env_config)?;

        let (config, warnings) = self.compose_config(
            file_config,
            env_config,
            config_path,
            env_file_loaded,
        )?;

        for warning in warnings.iter() {
            tracing::debug!(
                message = %warning.message,
                "configuration warning"
            );
        }

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let mut source = ConfigPathSource::default();

        if let Some(explicit) = &self.options.config_path {
            source.explicit = Some(explicit.clone());
        } else if let Some(from_env) = &env_config.config_path {
            source.env = Some(from_env.clone());
        }

        if source.is_empty() {
            source.default = DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .cloned();
        }

        let Some((path, provenance)) = source.resolved_path() else {
            return Ok((None, None));
        };

        if !path.exists() {
            if provenance.is_explicit() {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents =
            fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env: EnvConfig,
        config_path: Option<PathBuf>,
        env_file_loaded: bool,
    ) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No marquee.toml detected; using environment and defaults",
                "Create marquee.toml or pass --config to pin settings",
            );
        }

        let FileConfig {
            tmdb: file_tmdb,
            carousel: file_carousel,
            ui: file_ui,
            demo_mode: file_demo_mode,
        } = file_config.unwrap_or_default();

        let defaults = Config::default();
        let overrides = &self.options.overrides;

        let tmdb = TmdbConfig {
            api_key: env.tmdb_api_key.or(file_tmdb.api_key),
            api_base: env
                .tmdb_api_base
                .or(file_tmdb.api_base)
                .unwrap_or(defaults.tmdb.api_base),
            image_base: env
                .tmdb_image_base
                .or(file_tmdb.image_base)
                .unwrap_or(defaults.tmdb.image_base),
            language: env
                .tmdb_language
                .or(file_tmdb.language)
                .unwrap_or(defaults.tmdb.language),
        };

        let carousel = CarouselSettings {
            page_size: overrides
                .page_size
                .or(env.page_size)
                .or(file_carousel.page_size)
                .unwrap_or(defaults.carousel.page_size),
        };

        let ui = UiConfig {
            exit_transition: env
                .exit_transition_ms
                .or(file_ui.exit_transition_ms)
                .map(Duration::from_millis)
                .unwrap_or(defaults.ui.exit_transition),
            log_file: env
                .log_file
                .or(file_ui.log_file)
                .unwrap_or(defaults.ui.log_file),
        };

        let demo_mode = overrides
            .demo_mode
            .or(env.demo_mode)
            .or(file_demo_mode)
            .unwrap_or(false);

        let config = Config {
            tmdb,
            carousel,
            ui,
            demo_mode,
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        };

        let guard_warnings = validation::apply_guard_rails(&config)?;
        warnings.extend(guard_warnings);

        Ok((config, warnings))
    }
}

#[derive(Debug, Default)]
struct ConfigPathSource {
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
    default: Option<PathBuf>,
}

impl ConfigPathSource {
    fn is_empty(&self) -> bool {
        self.explicit.is_none() && self.env.is_none() && self.default.is_none()
    }

    fn resolved_path(&self) -> Option<(PathBuf, ConfigPathProvenance)> {
        if let Some(path) = &self.explicit {
            return Some((path.clone(), ConfigPathProvenance::Explicit));
        }
        if let Some(path) = &self.env {
            return Some((path.clone(), ConfigPathProvenance::Env));
        }
        if let Some(path) = &self.default {
            return Some((path.clone(), ConfigPathProvenance::Default));
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigPathProvenance {
    Explicit,
    Env,
    Default,
}

impl ConfigPathProvenance {
    fn is_explicit(self) -> bool {
        matches!(
            self,
            ConfigPathProvenance::Explicit | ConfigPathProvenance::Env
        )
    }
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
