//! Window arithmetic over a fetched listing.
//!
//! Position 0 of every listing belongs to the banner, so every function here
//! works on the *eligible* remainder `items[1..]`.

use marquee_model::CatalogItem;

/// The part of a listing that may appear in the carousel.
pub fn eligible_items(items: &[CatalogItem]) -> &[CatalogItem] {
    items.get(1..).unwrap_or(&[])
}

/// Slice of the eligible items visible at `page_index`.
///
/// Clipped to what exists: a short last page or an empty slice is a valid
/// answer, never a fault.
pub fn compute_window(
    items: &[CatalogItem],
    page_index: usize,
    page_size: usize,
) -> &[CatalogItem] {
    let eligible = eligible_items(items);
    let start = page_size.saturating_mul(page_index).min(eligible.len());
    let end = start.saturating_add(page_size).min(eligible.len());
    &eligible[start..end]
}

/// Last page index the wraparound rule may land on.
///
/// `floor(eligible_count / page_size) - 1`, floored at 0. A trailing partial
/// page is never visited on its own.
pub fn compute_max_page_index(
    eligible_count: usize,
    page_size: usize,
) -> usize {
    if page_size == 0 {
        return 0;
    }
    (eligible_count / page_size).saturating_sub(1)
}

/// Number of pages the carousel cycles through.
pub fn page_count(eligible_count: usize, page_size: usize) -> usize {
    compute_max_page_index(eligible_count, page_size) + 1
}
