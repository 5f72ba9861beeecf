//! Route-derived selection for the detail overlay.
//!
//! Nothing here is stored. Every render recomputes the selection from the
//! current path and the currently loaded items, so a path change or a
//! re-fetch can never leave a stale answer behind.

use marquee_model::{CatalogItem, Category};

/// Item route prefix of the now-playing view.
pub const MOVIE_ITEM_PREFIX: &str = "/movies/";
/// Item route prefix of the tv view.
pub const TV_ITEM_PREFIX: &str = "/tv/";

/// Item route prefix for a catalog view.
pub const fn item_prefix(category: Category) -> &'static str {
    match category {
        Category::MovieNowPlaying => MOVIE_ITEM_PREFIX,
        Category::TvOnTheAir => TV_ITEM_PREFIX,
    }
}

/// Drop any `?query` or `#fragment` suffix.
fn strip_query(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

/// Category and identifier token of an item path, if the path is one.
pub fn item_target(location: &str) -> Option<(Category, &str)> {
    let path = strip_query(location);
    let (category, rest) = Category::ALL.iter().find_map(|category| {
        path.strip_prefix(item_prefix(*category))
            .map(|rest| (*category, rest))
    })?;
    let token = rest.strip_suffix('/').unwrap_or(rest);
    if token.is_empty() || token.contains('/') {
        return None;
    }
    Some((category, token))
}

/// Identifier token embedded in an item path, if the path is one.
pub fn selected_id(location: &str) -> Option<&str> {
    item_target(location).map(|(_, token)| token)
}

/// Whether the overlay is shown for `location`, loaded item or not.
pub fn overlay_open(location: &str) -> bool {
    selected_id(location).is_some()
}

/// The loaded item the path points at.
///
/// Matching is exact string equality against each id's canonical decimal
/// form, so `/movies/042` selects nothing.
pub fn resolve<'a>(
    location: &str,
    items: &'a [CatalogItem],
) -> Option<&'a CatalogItem> {
    let id = selected_id(location)?;
    items.iter().find(|item| item.id.to_string() == id)
}

/// Selection as seen by one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState<'a> {
    pub selected_id: Option<&'a str>,
    pub selected_item: Option<&'a CatalogItem>,
}

impl<'a> SelectionState<'a> {
    pub fn derive(location: &'a str, items: &'a [CatalogItem]) -> Self {
        Self {
            selected_id: selected_id(location),
            selected_item: resolve(location, items),
        }
    }

    /// No path, no items: used while the listing is still loading.
    pub fn from_path(location: &'a str) -> Self {
        Self {
            selected_id: selected_id(location),
            selected_item: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected_id.is_some()
    }
}
