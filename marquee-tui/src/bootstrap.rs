use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use marquee_config::{
    Config, ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigOverrides,
    ConfigWarnings,
};
use marquee_core::{
    CatalogRequest, CatalogSource, StaticCatalogSource, TmdbCatalogSource,
    TmdbSettings,
};
use marquee_core::model::Category;
use tracing::{info, warn};
use url::Url;

use crate::app::AppSettings;
use crate::cli::GlobalArgs;

/// Everything a command needs once configuration is settled.
#[derive(Debug, Clone)]
pub struct Runtime {
    pub config: Config,
    pub source: Arc<dyn CatalogSource>,
}

impl Runtime {
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            carousel: self.config.carousel_config(),
            image_base: self.config.tmdb.image_base.clone(),
            exit_transition: self.config.ui.exit_transition,
        }
    }

    pub fn request(&self, category: Category) -> CatalogRequest {
        CatalogRequest::first_page(category)
            .with_language(self.config.tmdb.language.clone())
    }
}

pub fn load_config(args: &GlobalArgs) -> Result<(Config, ConfigWarnings)> {
    let options = ConfigLoaderOptions {
        config_path: args.config.clone(),
        env_file: args.env_file.clone(),
        overrides: ConfigOverrides {
            demo_mode: args.demo.then_some(true),
            page_size: args.page_size,
        },
    };
    let ConfigLoad { config, warnings } = ConfigLoader::with_options(options)
        .load()
        .context("failed to load configuration")?;
    Ok((config, warnings))
}

/// Log what the loader noticed; call once a subscriber is installed.
pub fn report(config: &Config, warnings: &ConfigWarnings) {
    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "configuration file loaded");
    }
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(
                    message = %warning.message,
                    hint = %hint,
                    "configuration warning"
                )
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
}

pub fn catalog_source(config: &Config) -> Result<Arc<dyn CatalogSource>> {
    if config.demo_mode {
        return Ok(Arc::new(StaticCatalogSource::demo()));
    }

    let api_key = config
        .tmdb
        .api_key
        .clone()
        .ok_or_else(|| anyhow!("TMDB_API_KEY is not set"))?;
    let api_base = Url::parse(&config.tmdb.api_base)
        .with_context(|| {
            format!("invalid TMDB_API_BASE {}", config.tmdb.api_base)
        })?;
    let settings = TmdbSettings::new(api_key)?
        .with_api_base(api_base)
        .with_language(config.tmdb.language.clone());
    let source = TmdbCatalogSource::new(settings)
        .context("failed to build TMDB client")?;
    Ok(Arc::new(source))
}

pub fn runtime(config: Config) -> Result<Runtime> {
    let source = catalog_source(&config)?;
    info!(
        source = source.name(),
        demo = config.demo_mode,
        "catalog source ready"
    );
    Ok(Runtime { config, source })
}
