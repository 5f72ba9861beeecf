//! Page index owner for one mounted listing.
//!
//! Composes the [`super::gate`] latch with the [`super::window`] arithmetic;
//! a page only moves when the gate lets a request through.

use marquee_model::CatalogItem;

use super::gate::{GateState, TransitionGate};
use super::window::{compute_max_page_index, compute_window, eligible_items};

/// Cards shown per carousel page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Static configuration for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub page_size: usize,
}

impl CarouselConfig {
    pub const fn poster_defaults() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub const fn with_page_size(page_size: usize) -> Self {
        Self { page_size }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::poster_defaults()
    }
}

/// Snapshot of the mutable carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub page_index: usize,
    pub is_transitioning: bool,
}

/// Result of [`CarouselController::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The gate accepted the request and the page index moved.
    Advanced { from: usize, to: usize },
    /// A transition is still in flight; nothing changed.
    Ignored,
}

impl AdvanceOutcome {
    pub fn is_advanced(&self) -> bool {
        matches!(self, AdvanceOutcome::Advanced { .. })
    }
}

/// Owns the page index and transition gate for one mounted listing.
#[derive(Debug, Clone)]
pub struct CarouselController {
    items: Vec<CatalogItem>,
    page_index: usize,
    page_size: usize,
    gate: TransitionGate,
}

impl CarouselController {
    pub fn new(items: Vec<CatalogItem>, page_size: usize) -> Self {
        Self {
            items,
            page_index: 0,
            page_size,
            gate: TransitionGate::new(),
        }
    }

    pub fn with_config(
        items: Vec<CatalogItem>,
        config: CarouselConfig,
    ) -> Self {
        Self::new(items, config.page_size)
    }

    /// Move to the next page, wrapping to 0 after the last full page.
    ///
    /// An index left beyond the end by [`Self::replace_items`] also resets
    /// to 0 here.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.gate.request_advance().is_proceed() {
            return AdvanceOutcome::Ignored;
        }

        let from = self.page_index;
        let max = self.max_page_index();
        let to = if from >= max { 0 } else { from + 1 };
        self.page_index = to;

        tracing::debug!(from, to, max, "carousel advanced");
        AdvanceOutcome::Advanced { from, to }
    }

    pub fn notify_transition_complete(&mut self) {
        self.gate.on_transition_complete();
    }

    pub fn current_window(&self) -> &[CatalogItem] {
        compute_window(&self.items, self.page_index, self.page_size)
    }

    /// Swap in a freshly fetched listing.
    pub fn replace_items(&mut self, items: Vec<CatalogItem>) {
        self.items = items;
        if self.page_index > self.max_page_index() {
            tracing::debug!(
                page_index = self.page_index,
                max = self.max_page_index(),
                "page index past end after item replacement"
            );
        }
    }

    /// Banner item (position 0 of the listing).
    pub fn featured(&self) -> Option<&CatalogItem> {
        self.items.first()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn eligible_count(&self) -> usize {
        eligible_items(&self.items).len()
    }

    pub fn max_page_index(&self) -> usize {
        compute_max_page_index(self.eligible_count(), self.page_size)
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_transitioning(&self) -> bool {
        self.gate.state() == GateState::Transitioning
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            page_index: self.page_index,
            is_transitioning: self.is_transitioning(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: u64) -> Vec<CatalogItem> {
        (0..n)
            .map(|i| CatalogItem::new(i, format!("Item {i}")))
            .collect()
    }

    fn advance_and_settle(controller: &mut CarouselController) -> usize {
        assert!(controller.advance().is_advanced());
        controller.notify_transition_complete();
        controller.page_index()
    }

    #[test]
    fn starts_on_first_page_idle() {
        let controller = CarouselController::with_config(
            items(19),
            CarouselConfig::default(),
        );
        assert_eq!(controller.state(), CarouselState::default());
        assert_eq!(controller.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn advance_while_transitioning_keeps_index() {
        let mut controller = CarouselController::new(items(19), 6);
        assert_eq!(
            controller.advance(),
            AdvanceOutcome::Advanced { from: 0, to: 1 }
        );
        assert!(controller.is_transitioning());

        for _ in 0..5 {
            assert_eq!(controller.advance(), AdvanceOutcome::Ignored);
            assert_eq!(controller.page_index(), 1);
        }

        controller.notify_transition_complete();
        assert!(!controller.is_transitioning());
        assert_eq!(advance_and_settle(&mut controller), 2);
    }

    #[test]
    fn wraps_after_last_full_page() {
        let mut controller = CarouselController::new(items(20), 6);
        assert_eq!(controller.max_page_index(), 2);
        let seen: Vec<_> = (0..3)
            .map(|_| advance_and_settle(&mut controller))
            .collect();
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn stale_index_resets_after_shrinking_listing() {
        let mut controller = CarouselController::new(items(19), 6);
        advance_and_settle(&mut controller);
        advance_and_settle(&mut controller);
        assert_eq!(controller.page_index(), 2);

        controller.replace_items(items(8));
        assert_eq!(controller.max_page_index(), 0);
        assert!(controller.current_window().is_empty());

        assert_eq!(
            controller.advance(),
            AdvanceOutcome::Advanced { from: 2, to: 0 }
        );
        assert_eq!(controller.current_window().len(), 6);
    }

    #[test]
    fn tiny_listing_stays_on_page_zero() {
        let mut controller = CarouselController::new(items(3), 6);
        assert_eq!(advance_and_settle(&mut controller), 0);
        assert_eq!(controller.current_window().len(), 2);

        let mut empty = CarouselController::new(Vec::new(), 6);
        assert_eq!(advance_and_settle(&mut empty), 0);
        assert!(empty.current_window().is_empty());
        assert!(empty.featured().is_none());
    }
}
