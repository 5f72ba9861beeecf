//! Non-interactive subcommands.

use std::io::{self, Write};

use anyhow::{Context, Result};
use marquee_core::model::{CatalogPage, Category, ImageSize};
use marquee_core::{
    AppRoute, SelectionState, compute_max_page_index, compute_window,
    eligible_items, page_count,
};
use tracing::info;

use crate::bootstrap::Runtime;
use crate::cli::{ListArgs, ResolveArgs};

pub async fn list(runtime: &Runtime, args: &ListArgs) -> Result<()> {
    let category = Category::from(args.category);
    let page = fetch(runtime, category).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &page)
            .context("failed to encode listing")?;
        writeln!(out)?;
    } else {
        write_listing(
            &mut out,
            category,
            &page,
            runtime.config.carousel.page_size,
            &runtime.config.tmdb.image_base,
        )?;
    }
    Ok(())
}

pub async fn resolve(runtime: &Runtime, args: &ResolveArgs) -> Result<()> {
    let route = AppRoute::parse(&args.path);
    let category = route.category().unwrap_or_default();
    let page = fetch(runtime, category).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_resolution(&mut out, &route.to_path(), &page)?;
    Ok(())
}

async fn fetch(runtime: &Runtime, category: Category) -> Result<CatalogPage> {
    let request = runtime.request(category);
    let page = runtime
        .source
        .fetch(&request)
        .await
        .with_context(|| format!("failed to fetch {category} listing"))?;
    info!(
        category = %category,
        source = runtime.source.name(),
        results = page.results.len(),
        "listing fetched"
    );
    Ok(page)
}

pub fn write_listing(
    out: &mut impl Write,
    category: Category,
    page: &CatalogPage,
    page_size: usize,
    image_base: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{} ({} results, page {}/{})",
        category.label(),
        page.results.len(),
        page.page,
        page.total_pages.max(1)
    )?;

    let Some(banner) = page.featured() else {
        writeln!(out, "  (empty listing)")?;
        return Ok(());
    };
    writeln!(out, "Banner: {} [{}]", banner.title, banner.id)?;
    let backdrop = banner.backdrop_url(image_base, ImageSize::banner());
    if !backdrop.is_empty() {
        writeln!(out, "  {backdrop}")?;
    }

    let eligible = eligible_items(&page.results).len();
    let pages = page_count(eligible, page_size);
    for index in 0..=compute_max_page_index(eligible, page_size) {
        let window = compute_window(&page.results, index, page_size);
        if window.is_empty() {
            continue;
        }
        writeln!(out, "Page {}/{}", index + 1, pages)?;
        for (slot, item) in window.iter().enumerate() {
            writeln!(out, "  {}. {} [{}]", slot + 1, item.title, item.id)?;
        }
    }

    let shown = pages * page_size;
    if page_size > 0 && eligible > shown {
        writeln!(
            out,
            "({} items past the last full page are not paged)",
            eligible - shown
        )?;
    }
    Ok(())
}

pub fn write_resolution(
    out: &mut impl Write,
    location: &str,
    page: &CatalogPage,
) -> io::Result<()> {
    let selection = SelectionState::derive(location, &page.results);
    match (selection.selected_id, selection.selected_item) {
        (Some(_), Some(item)) => {
            writeln!(out, "{location} -> {} [{}]", item.title, item.id)?;
            if !item.overview.is_empty() {
                writeln!(out, "  {}", item.overview)?;
            }
        }
        (Some(id), None) => writeln!(
            out,
            "{location} opens the overlay for {id}, but no loaded item matches"
        )?,
        (None, _) => writeln!(out, "{location} does not select an item")?,
    }
    Ok(())
}
