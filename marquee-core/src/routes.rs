//! Navigation surface of the browser.
//!
//! Paths are the single source of truth for what is on screen: the mounted
//! catalog comes from [`AppRoute::category`], the open overlay from
//! [`crate::selection`].

use std::fmt;

use marquee_model::{CatalogItemId, Category};
use thiserror::Error;

use crate::selection::{item_prefix, item_target};

pub const HOME_PATH: &str = "/";
pub const TV_PATH: &str = "/tv";
pub const SEARCH_PATH: &str = "/search";
pub const KEYWORD_PARAM: &str = "keyword";

/// Shortest keyword the search box accepts.
pub const MIN_KEYWORD_CHARS: usize = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("search keyword must be at least {min} characters")]
    KeywordTooShort { min: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    #[default]
    Home,
    /// Home listing with the detail overlay open on `id`. The id is kept as
    /// the raw path token; it may not belong to any loaded item.
    Movie { id: String },
    Tv,
    /// Tv listing with the detail overlay open on `id`.
    TvItem { id: String },
    Search { keyword: String },
}

impl AppRoute {
    /// Parse a location path (optionally carrying `?query` / `#fragment`).
    ///
    /// Unknown paths fall back to [`AppRoute::Home`].
    pub fn parse(location: &str) -> Self {
        if let Some((category, id)) = item_target(location) {
            return AppRoute::item_token(category, id);
        }

        let (path, query) = match location.split_once('?') {
            Some((path, rest)) => (path, Some(strip_fragment(rest))),
            None => (strip_fragment(location), None),
        };
        let path = normalize(path);

        match path {
            "/" => AppRoute::Home,
            TV_PATH => AppRoute::Tv,
            SEARCH_PATH => AppRoute::Search {
                keyword: query
                    .and_then(keyword_from_query)
                    .unwrap_or_default(),
            },
            other => {
                tracing::debug!(path = other, "unknown route, showing home");
                AppRoute::Home
            }
        }
    }

    pub fn movie(id: CatalogItemId) -> Self {
        AppRoute::Movie { id: id.to_string() }
    }

    /// Overlay route for `id` inside the `category` view.
    pub fn item(category: Category, id: CatalogItemId) -> Self {
        Self::item_token(category, &id.to_string())
    }

    fn item_token(category: Category, id: &str) -> Self {
        let id = id.to_string();
        match category {
            Category::MovieNowPlaying => AppRoute::Movie { id },
            Category::TvOnTheAir => AppRoute::TvItem { id },
        }
    }

    /// Listing route of a catalog view, with no overlay open.
    pub fn listing(category: Category) -> Self {
        match category {
            Category::MovieNowPlaying => AppRoute::Home,
            Category::TvOnTheAir => AppRoute::Tv,
        }
    }

    /// Whether this route opens the detail overlay.
    pub fn is_item(&self) -> bool {
        matches!(self, AppRoute::Movie { .. } | AppRoute::TvItem { .. })
    }

    /// Canonical path for this route.
    pub fn to_path(&self) -> String {
        match self {
            AppRoute::Home => HOME_PATH.to_string(),
            AppRoute::Movie { id } => {
                format!("{}{id}", item_prefix(Category::MovieNowPlaying))
            }
            AppRoute::Tv => TV_PATH.to_string(),
            AppRoute::TvItem { id } => {
                format!("{}{id}", item_prefix(Category::TvOnTheAir))
            }
            AppRoute::Search { keyword } => format!(
                "{SEARCH_PATH}?{KEYWORD_PARAM}={}",
                urlencoding::encode(keyword)
            ),
        }
    }

    /// Catalog mounted under this route; `None` for the search page.
    pub fn category(&self) -> Option<Category> {
        match self {
            AppRoute::Home | AppRoute::Movie { .. } => {
                Some(Category::MovieNowPlaying)
            }
            AppRoute::Tv | AppRoute::TvItem { .. } => {
                Some(Category::TvOnTheAir)
            }
            AppRoute::Search { .. } => None,
        }
    }

    /// Header tab underline: the home tab only lights up on `/` itself.
    pub fn is_home_tab_active(&self) -> bool {
        matches!(self, AppRoute::Home)
    }

    pub fn is_tv_tab_active(&self) -> bool {
        matches!(self, AppRoute::Tv)
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// A validated search keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Result<Self, RouteError> {
        let keyword = raw.trim();
        if keyword.chars().count() < MIN_KEYWORD_CHARS {
            return Err(RouteError::KeywordTooShort {
                min: MIN_KEYWORD_CHARS,
            });
        }
        Ok(Self {
            keyword: keyword.to_string(),
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn into_route(self) -> AppRoute {
        AppRoute::Search {
            keyword: self.keyword,
        }
    }

    pub fn to_path(&self) -> String {
        self.clone().into_route().to_path()
    }
}

fn strip_fragment(raw: &str) -> &str {
    raw.split_once('#').map(|(head, _)| head).unwrap_or(raw)
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn keyword_from_query(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == KEYWORD_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::parse("/"), AppRoute::Home);
        assert_eq!(AppRoute::parse(""), AppRoute::Home);
        assert_eq!(AppRoute::parse("/tv"), AppRoute::Tv);
        assert_eq!(AppRoute::parse("/tv/"), AppRoute::Tv);
        assert_eq!(
            AppRoute::parse("/movies/42"),
            AppRoute::Movie { id: "42".into() }
        );
        assert_eq!(
            AppRoute::parse("/tv/94997"),
            AppRoute::TvItem { id: "94997".into() }
        );
        assert_eq!(
            AppRoute::parse("/search?keyword=star%20wars"),
            AppRoute::Search {
                keyword: "star wars".into()
            }
        );
        assert_eq!(
            AppRoute::parse("/search?page=2&keyword=dune+part+two#top"),
            AppRoute::Search {
                keyword: "dune part two".into()
            }
        );
    }

    #[test]
    fn unknown_and_partial_paths_fall_back_home() {
        assert_eq!(AppRoute::parse("/movies/"), AppRoute::Home);
        assert_eq!(AppRoute::parse("/nowhere"), AppRoute::Home);
        assert_eq!(
            AppRoute::parse("/search"),
            AppRoute::Search {
                keyword: String::new()
            }
        );
    }

    #[test]
    fn paths_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Tv,
            AppRoute::movie(CatalogItemId(1022789)),
            AppRoute::item(Category::TvOnTheAir, CatalogItemId(94997)),
            AppRoute::Search {
                keyword: "amélie & co?".into(),
            },
        ];
        for route in routes {
            assert_eq!(AppRoute::parse(&route.to_path()), route);
        }
    }

    #[test]
    fn category_follows_route() {
        assert_eq!(
            AppRoute::Movie { id: "1".into() }.category(),
            Some(Category::MovieNowPlaying)
        );
        assert_eq!(AppRoute::Tv.category(), Some(Category::TvOnTheAir));
        assert_eq!(
            AppRoute::TvItem { id: "1".into() }.category(),
            Some(Category::TvOnTheAir)
        );
        assert_eq!(
            AppRoute::Search {
                keyword: "x".into()
            }
            .category(),
            None
        );
    }

    #[test]
    fn tabs_match_exact_paths() {
        assert!(AppRoute::Home.is_home_tab_active());
        assert!(!AppRoute::Movie { id: "1".into() }.is_home_tab_active());
        assert!(AppRoute::Tv.is_tv_tab_active());
        assert!(!AppRoute::TvItem { id: "1".into() }.is_tv_tab_active());
    }

    #[test]
    fn item_and_listing_routes_follow_category() {
        let id = CatalogItemId(7);
        assert_eq!(
            AppRoute::item(Category::MovieNowPlaying, id).to_path(),
            "/movies/7"
        );
        assert_eq!(AppRoute::item(Category::TvOnTheAir, id).to_path(), "/tv/7");
        assert!(AppRoute::item(Category::TvOnTheAir, id).is_item());
        assert!(!AppRoute::Tv.is_item());
        assert_eq!(AppRoute::listing(Category::TvOnTheAir), AppRoute::Tv);
        assert_eq!(
            AppRoute::listing(Category::MovieNowPlaying),
            AppRoute::Home
        );
    }

    #[test]
    fn search_keyword_needs_two_characters() {
        assert_eq!(
            SearchQuery::new(" a "),
            Err(RouteError::KeywordTooShort { min: 2 })
        );
        assert!(SearchQuery::new("").is_err());

        let query = SearchQuery::new("  up ").expect("valid keyword");
        assert_eq!(query.keyword(), "up");
        assert_eq!(query.to_path(), "/search?keyword=up");
    }
}
