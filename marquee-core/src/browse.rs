//! Per-mount state of a catalog view.
//!
//! A front end creates one [`BrowseState`] when a category view mounts,
//! feeds it [`BrowseMessage`]s, and navigates whenever `update` hands back
//! a route.

use marquee_model::{
    CatalogItem, CatalogItemId, CatalogPage, Category, ImageSize,
    TMDB_IMAGE_BASE,
};

use crate::carousel::{AdvanceOutcome, CarouselConfig, CarouselController};
use crate::routes::AppRoute;
use crate::selection::SelectionState;

#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(CarouselController),
    Failed(String),
}

impl LoadState {
    pub fn controller(&self) -> Option<&CarouselController> {
        match self {
            LoadState::Ready(controller) => Some(controller),
            _ => None,
        }
    }
}

/// Events the view layer reports.
#[derive(Debug, Clone)]
pub enum BrowseMessage {
    /// Result of the single fetch issued on mount.
    CatalogLoaded(Result<CatalogPage, String>),
    /// "Next page" control activated.
    AdvanceRequested,
    /// The outgoing page finished sliding off screen.
    ExitTransitionFinished,
    CardClicked(CatalogItemId),
    /// Backdrop of the detail overlay clicked.
    OverlayClicked,
}

/// Render data for the hero banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub title: String,
    pub overview: String,
    pub backdrop_url: String,
}

#[derive(Debug, Clone)]
pub struct BrowseState {
    category: Category,
    config: CarouselConfig,
    image_base: String,
    load: LoadState,
}

impl BrowseState {
    pub fn new(category: Category, config: CarouselConfig) -> Self {
        Self {
            category,
            config,
            image_base: TMDB_IMAGE_BASE.to_string(),
            load: LoadState::Loading,
        }
    }

    pub fn with_image_base(mut self, image_base: impl Into<String>) -> Self {
        self.image_base = image_base.into();
        self
    }

    /// Apply one message; `Some(route)` asks the caller to navigate.
    pub fn update(&mut self, message: BrowseMessage) -> Option<AppRoute> {
        match message {
            BrowseMessage::CatalogLoaded(Ok(page)) => {
                tracing::debug!(
                    category = %self.category,
                    results = page.results.len(),
                    "catalog mounted"
                );
                match &mut self.load {
                    LoadState::Ready(controller) => {
                        controller.replace_items(page.results);
                    }
                    _ => {
                        self.load = LoadState::Ready(
                            CarouselController::with_config(
                                page.results,
                                self.config,
                            ),
                        );
                    }
                }
                None
            }
            BrowseMessage::CatalogLoaded(Err(message)) => {
                tracing::warn!(
                    category = %self.category,
                    error = %message,
                    "catalog failed to load"
                );
                self.load = LoadState::Failed(message);
                None
            }
            BrowseMessage::AdvanceRequested => {
                self.advance();
                None
            }
            BrowseMessage::ExitTransitionFinished => {
                if let LoadState::Ready(controller) = &mut self.load {
                    controller.notify_transition_complete();
                }
                None
            }
            BrowseMessage::CardClicked(id) => {
                Some(AppRoute::item(self.category, id))
            }
            BrowseMessage::OverlayClicked => {
                Some(AppRoute::listing(self.category))
            }
        }
    }

    /// Ask the carousel for the next page; `None` until the listing is ready.
    pub fn advance(&mut self) -> Option<AdvanceOutcome> {
        match &mut self.load {
            LoadState::Ready(controller) => Some(controller.advance()),
            _ => None,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn controller(&self) -> Option<&CarouselController> {
        self.load.controller()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn image_base(&self) -> &str {
        &self.image_base
    }

    /// Loaded items, empty until the fetch lands.
    pub fn items(&self) -> &[CatalogItem] {
        self.controller().map(|c| c.items()).unwrap_or_default()
    }

    /// Cards of the current carousel page.
    pub fn window(&self) -> &[CatalogItem] {
        self.controller()
            .map(|c| c.current_window())
            .unwrap_or_default()
    }

    pub fn selection<'a>(&'a self, location: &'a str) -> SelectionState<'a> {
        match self.controller() {
            Some(controller) => {
                SelectionState::derive(location, controller.items())
            }
            None => SelectionState::from_path(location),
        }
    }

    pub fn banner(&self) -> Option<BannerView> {
        let item = self.controller()?.featured()?;
        Some(BannerView {
            title: item.title.clone(),
            overview: item.overview.clone(),
            backdrop_url: item
                .backdrop_url(&self.image_base, ImageSize::banner()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u64) -> CatalogPage {
        CatalogPage::single(
            (0..n)
                .map(|i| {
                    CatalogItem::new(i + 100, format!("Item {i}"))
                        .with_backdrop(format!("/b{i}.jpg"))
                })
                .collect(),
        )
    }

    fn mounted(category: Category) -> BrowseState {
        BrowseState::new(category, CarouselConfig::default())
    }

    fn ready_in(category: Category, n: u64) -> BrowseState {
        let mut state = mounted(category);
        let loaded = BrowseMessage::CatalogLoaded(Ok(page(n)));
        assert!(state.update(loaded).is_none());
        state
    }

    fn ready(n: u64) -> BrowseState {
        ready_in(Category::MovieNowPlaying, n)
    }

    #[test]
    fn loading_view_has_no_cards_or_banner() {
        let mut state = mounted(Category::TvOnTheAir);
        assert!(state.is_loading());
        assert!(state.window().is_empty());
        assert!(state.banner().is_none());

        assert_eq!(state.advance(), None);
        state.update(BrowseMessage::AdvanceRequested);
        assert!(state.is_loading());
    }

    #[test]
    fn failed_fetch_is_kept() {
        let mut state = mounted(Category::MovieNowPlaying);
        state.update(BrowseMessage::CatalogLoaded(Err("offline".into())));
        assert_eq!(state.error(), Some("offline"));
        assert!(state.items().is_empty());
    }

    #[test]
    fn banner_uses_first_item_at_original_size() {
        let state = ready(4);
        let banner = state.banner().expect("banner");
        assert_eq!(banner.title, "Item 0");
        assert_eq!(
            banner.backdrop_url,
            "https://image.tmdb.org/t/p/original/b0.jpg"
        );
    }

    #[test]
    fn advance_is_gated_until_exit_transition_finishes() {
        let mut state = ready(19);
        let first: Vec<_> =
            state.window().iter().map(|i| i.id.get()).collect();
        assert_eq!(first, (101..107).collect::<Vec<_>>());

        state.update(BrowseMessage::AdvanceRequested);
        state.update(BrowseMessage::AdvanceRequested);
        assert_eq!(state.controller().map(|c| c.page_index()), Some(1));

        state.update(BrowseMessage::ExitTransitionFinished);
        state.update(BrowseMessage::AdvanceRequested);
        assert_eq!(state.controller().map(|c| c.page_index()), Some(2));
    }

    #[test]
    fn advance_reports_controller_outcome() {
        let mut state = ready(19);
        assert_eq!(
            state.advance(),
            Some(AdvanceOutcome::Advanced { from: 0, to: 1 })
        );
        assert_eq!(state.advance(), Some(AdvanceOutcome::Ignored));
    }

    #[test]
    fn tv_clicks_stay_in_the_tv_view() {
        let mut state = ready_in(Category::TvOnTheAir, 3);
        let route = state
            .update(BrowseMessage::CardClicked(CatalogItemId(101)))
            .expect("card navigates");
        assert_eq!(route, AppRoute::TvItem { id: "101".into() });
        assert_eq!(route.category(), Some(Category::TvOnTheAir));
        assert_eq!(
            state.update(BrowseMessage::OverlayClicked),
            Some(AppRoute::Tv)
        );
    }

    #[test]
    fn card_and_overlay_clicks_navigate() {
        let mut state = ready(3);
        assert_eq!(
            state.update(BrowseMessage::CardClicked(CatalogItemId(101))),
            Some(AppRoute::Movie { id: "101".into() })
        );
        assert_eq!(
            state.update(BrowseMessage::OverlayClicked),
            Some(AppRoute::Home)
        );
    }

    #[test]
    fn selection_tracks_loaded_items() {
        let state = ready(3);
        let hit = state.selection("/movies/100");
        assert_eq!(
            hit.selected_item.map(|i| i.title.as_str()),
            Some("Item 0")
        );

        let pending = mounted(Category::MovieNowPlaying);
        let miss = pending.selection("/movies/100");
        assert!(miss.is_open());
        assert!(miss.selected_item.is_none());
    }

    #[test]
    fn refetch_keeps_page_index_until_next_advance() {
        let mut state = ready(19);
        state.update(BrowseMessage::AdvanceRequested);
        state.update(BrowseMessage::ExitTransitionFinished);
        state.update(BrowseMessage::CatalogLoaded(Ok(page(5))));
        assert_eq!(state.controller().map(|c| c.page_index()), Some(1));
        assert!(state.window().is_empty());

        state.update(BrowseMessage::AdvanceRequested);
        assert_eq!(state.controller().map(|c| c.page_index()), Some(0));
    }
}
