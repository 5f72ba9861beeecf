//! Configuration for the Marquee browser.
//!
//! Values come from the environment (after an optional `.env`), then a TOML
//! file, then built-in defaults. [`ConfigLoader::load`] composes them and
//! runs the guard rails in [`validation`] before handing back a [`Config`].

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigOverrides,
    error::ConfigLoadError,
};
pub use models::{
    CarouselSettings, Config, ConfigMetadata, DEFAULT_EXIT_TRANSITION_MS,
    DEFAULT_LOG_FILE, TmdbConfig, UiConfig,
};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, MAX_PAGE_SIZE,
    MIN_PAGE_SIZE,
};
