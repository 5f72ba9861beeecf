//! Browser state for one terminal session.
//!
//! `App` owns the current location and the mounted [`BrowseState`]. Keys
//! become [`BrowseMessage`]s or route changes; route changes that switch
//! category remount and ask the caller to fetch.

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use marquee_core::model::{
    CatalogItem, CatalogPage, Category, TMDB_IMAGE_BASE,
};
use marquee_core::{
    AdvanceOutcome, AppRoute, BrowseMessage, BrowseState, CarouselConfig,
    SearchQuery, SelectionState,
};
use tracing::debug;

use crate::animation::{SlideAnimation, SlideFrame};

/// Rendering and timing knobs taken from configuration.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub carousel: CarouselConfig,
    pub image_base: String,
    pub exit_transition: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            image_base: TMDB_IMAGE_BASE.to_string(),
            exit_transition: Duration::from_millis(600),
        }
    }
}

/// A fetch the caller should start for the freshly mounted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    None,
    Fetch(FetchRequest),
    Quit,
}

#[derive(Debug, Default, Clone)]
pub struct SearchBox {
    pub focused: bool,
    pub input: String,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct App {
    settings: AppSettings,
    route: AppRoute,
    location: String,
    browse: Option<BrowseState>,
    generation: u64,
    slide: SlideAnimation,
    outgoing: Vec<CatalogItem>,
    search: SearchBox,
    should_quit: bool,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        let slide = SlideAnimation::new(settings.exit_transition);
        Self {
            settings,
            route: AppRoute::Home,
            location: AppRoute::Home.to_path(),
            browse: None,
            generation: 0,
            slide,
            outgoing: Vec::new(),
            search: SearchBox::default(),
            should_quit: false,
        }
    }

    /// Jump to `location`, as typed on the command line.
    pub fn open(&mut self, location: &str) -> Option<FetchRequest> {
        self.navigate(AppRoute::parse(location))
    }

    pub fn navigate(&mut self, route: AppRoute) -> Option<FetchRequest> {
        debug!(from = %self.location, to = %route, "navigate");
        self.location = route.to_path();
        let wanted = route.category();
        self.route = route;

        let mounted = self.browse.as_ref().filter(|b| b.error().is_none());
        if mounted.is_some() && mounted.map(BrowseState::category) == wanted {
            return None;
        }

        self.slide.cancel();
        self.outgoing.clear();
        self.generation += 1;

        match wanted {
            Some(category) => {
                self.browse = Some(
                    BrowseState::new(category, self.settings.carousel)
                        .with_image_base(self.settings.image_base.clone()),
                );
                Some(FetchRequest {
                    generation: self.generation,
                    category,
                })
            }
            None => {
                self.browse = None;
                None
            }
        }
    }

    /// Deliver a fetch result; results for an earlier mount are dropped.
    pub fn on_catalog(
        &mut self,
        generation: u64,
        result: Result<CatalogPage, String>,
    ) {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "dropping catalog result for unmounted view"
            );
            return;
        }
        if let Some(browse) = self.browse.as_mut() {
            browse.update(BrowseMessage::CatalogLoaded(result));
        }
    }

    /// Drive the slide; its end releases the transition gate.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(SlideFrame::Finished) = self.slide.tick(now) {
            self.outgoing.clear();
            if let Some(browse) = self.browse.as_mut() {
                browse.update(BrowseMessage::ExitTransitionFinished);
            }
        }
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) -> AppCommand {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(key, now)
            }
            _ => AppCommand::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && key.code == KeyCode::Char('c')
        {
            self.should_quit = true;
            return AppCommand::Quit;
        }

        if self.search.focused {
            return self.handle_search_key(key);
        }

        let route = match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return AppCommand::Quit;
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.advance(now);
                None
            }
            KeyCode::Char(c @ '1'..='9') => {
                let slot = c as usize - '1' as usize;
                self.open_card(slot)
            }
            KeyCode::Esc | KeyCode::Char('x') => self.close_overlay(),
            KeyCode::Char('r') => self.retry(),
            KeyCode::Char('h') => Some(AppRoute::Home),
            KeyCode::Char('t') => Some(AppRoute::Tv),
            KeyCode::Char('/') => {
                self.search.focused = true;
                self.search.error = None;
                None
            }
            _ => None,
        };

        self.follow(route)
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => {
                self.search = SearchBox::default();
                AppCommand::None
            }
            KeyCode::Enter => match SearchQuery::new(&self.search.input) {
                Ok(query) => {
                    self.search = SearchBox::default();
                    self.follow(Some(query.into_route()))
                }
                Err(err) => {
                    self.search.error = Some(err.to_string());
                    AppCommand::None
                }
            },
            KeyCode::Backspace => {
                self.search.input.pop();
                AppCommand::None
            }
            KeyCode::Char(c) => {
                self.search.input.push(c);
                self.search.error = None;
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn follow(&mut self, route: Option<AppRoute>) -> AppCommand {
        match route.and_then(|route| self.navigate(route)) {
            Some(request) => AppCommand::Fetch(request),
            None => AppCommand::None,
        }
    }

    fn advance(&mut self, now: Instant) {
        let Some(browse) = self.browse.as_mut() else {
            return;
        };
        let outgoing = browse.window().to_vec();

        if let Some(AdvanceOutcome::Advanced { .. }) = browse.advance() {
            self.outgoing = outgoing;
            self.slide.start(now);
        }
    }

    fn open_card(&mut self, slot: usize) -> Option<AppRoute> {
        if slot >= self.page_size() {
            return None;
        }
        let browse = self.browse.as_mut()?;
        let id = browse.window().get(slot)?.id;
        browse.update(BrowseMessage::CardClicked(id))
    }

    fn close_overlay(&mut self) -> Option<AppRoute> {
        match (&self.route, self.browse.as_mut()) {
            (route, Some(browse)) if route.is_item() => {
                browse.update(BrowseMessage::OverlayClicked)
            }
            (AppRoute::Search { .. }, _) => Some(AppRoute::Home),
            _ => None,
        }
    }

    /// Remount the current view after a failed fetch.
    fn retry(&mut self) -> Option<AppRoute> {
        self.browse.as_ref()?.error()?;
        Some(self.route.clone())
    }

    pub fn route(&self) -> &AppRoute {
        &self.route
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn browse(&self) -> Option<&BrowseState> {
        self.browse.as_ref()
    }

    pub fn selection(&self) -> Option<SelectionState<'_>> {
        self.browse
            .as_ref()
            .map(|browse| browse.selection(&self.location))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_sliding(&self) -> bool {
        self.slide.is_active()
    }

    pub fn slide_progress(&self) -> f32 {
        self.slide.progress()
    }

    /// Cards leaving the screen during a slide.
    pub fn outgoing(&self) -> &[CatalogItem] {
        &self.outgoing
    }

    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    pub fn page_size(&self) -> usize {
        self.settings.carousel.page_size
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
