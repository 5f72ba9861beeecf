//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod category;
pub mod error;
pub mod ids;
pub mod image;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::{CatalogItem, CatalogPage, ReleaseWindow};
pub use category::Category;
pub use error::{ModelError, Result as ModelResult};
pub use ids::CatalogItemId;
pub use image::{ImageSize, TMDB_IMAGE_BASE, image_url};
