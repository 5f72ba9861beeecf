//! Carousel paging
//!
//! Three layers, leaf first: the pure window arithmetic in [`window`], the
//! two-state [`gate`] that keeps exit animations from overlapping, and the
//! [`controller`] that owns the page index and composes the other two.

pub mod controller;
pub mod gate;
pub mod window;

pub use controller::{
    AdvanceOutcome, CarouselConfig, CarouselController, CarouselState,
    DEFAULT_PAGE_SIZE,
};
pub use gate::{AdvanceDecision, GateState, TransitionGate};
pub use window::{
    compute_max_page_index, compute_window, eligible_items, page_count,
};
