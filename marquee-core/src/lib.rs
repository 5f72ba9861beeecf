//! Core library for the Marquee catalog browser.
//!
//! The crate holds everything a front end needs short of drawing: catalog
//! sources (TMDB over HTTPS, or an in-memory fixture), the carousel paging
//! state machine, route parsing, and the route-derived selection used by the
//! detail overlay. Front ends feed [`browse::BrowseMessage`]s in and render
//! whatever [`browse::BrowseState`] exposes.

pub mod browse;
pub mod carousel;
pub mod routes;
pub mod selection;
pub mod source;

pub use marquee_model as model;

pub use browse::{BannerView, BrowseMessage, BrowseState, LoadState};
pub use carousel::{
    AdvanceDecision, AdvanceOutcome, CarouselConfig, CarouselController,
    CarouselState, DEFAULT_PAGE_SIZE, GateState, TransitionGate,
    compute_max_page_index, compute_window, eligible_items, page_count,
};
pub use routes::{AppRoute, RouteError, SearchQuery};
pub use selection::{
    SelectionState, item_target, overlay_open, resolve, selected_id,
};
pub use source::{
    CatalogError, CatalogRequest, CatalogSource, StaticCatalogSource,
    TmdbCatalogSource, TmdbSettings,
};
