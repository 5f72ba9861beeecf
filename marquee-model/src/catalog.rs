use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::CatalogItemId;
use crate::image::{ImageSize, image_url};

/// One movie or TV entry of a fetched catalog page.
///
/// Movie records carry `title`, TV records carry `name`; both land in
/// [`CatalogItem::title`]. Image paths are relative fragments and may be
/// missing, `null`, or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    #[serde(default, alias = "name", deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overview: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl CatalogItem {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: CatalogItemId(id),
            title: title.into(),
            overview: String::new(),
            backdrop_path: None,
            poster_path: None,
        }
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    pub fn with_backdrop(mut self, path: impl Into<String>) -> Self {
        self.backdrop_path = Some(path.into());
        self
    }

    pub fn with_poster(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    /// Backdrop URL at `size`, or an empty string when no backdrop exists.
    pub fn backdrop_url(&self, base: &str, size: ImageSize) -> String {
        image_url(base, self.backdrop_path.as_deref(), size)
    }

    /// Poster URL at `size`, or an empty string when no poster exists.
    pub fn poster_url(&self, base: &str, size: ImageSize) -> String {
        image_url(base, self.poster_path.as_deref(), size)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Release date bounds reported by the now-playing listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseWindow {
    pub maximum: NaiveDate,
    pub minimum: NaiveDate,
}

/// A single page of a catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub results: Vec<CatalogItem>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<ReleaseWindow>,
}

fn first_page() -> u32 {
    1
}

impl CatalogPage {
    /// Wraps an in-memory list as page 1 of 1.
    pub fn single(results: Vec<CatalogItem>) -> Self {
        let total = results.len() as u32;
        Self {
            results,
            page: 1,
            total_pages: 1,
            total_results: total,
            dates: None,
        }
    }

    /// The banner entry: always position 0 of the listing.
    pub fn featured(&self) -> Option<&CatalogItem> {
        self.results.first()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_PLAYING: &str = r#"{
        "dates": {"maximum": "2024-06-12", "minimum": "2024-04-25"},
        "page": 1,
        "results": [
            {
                "adult": false,
                "backdrop_path": "/fqv8v6AycXKsivp1T5yKtLbGXce.jpg",
                "id": 653346,
                "original_title": "Kingdom of the Planet of the Apes",
                "overview": "Several generations in the future...",
                "poster_path": "/gKkl37BQuKTanygYQG1pyYgLVgf.jpg",
                "title": "Kingdom of the Planet of the Apes",
                "vote_average": 7.2
            },
            {
                "backdrop_path": null,
                "id": 42,
                "title": "Untitled"
            }
        ],
        "total_pages": 3,
        "total_results": 58
    }"#;

    #[test]
    fn decodes_now_playing_listing() {
        let page: CatalogPage =
            serde_json::from_str(NOW_PLAYING).expect("decode page");
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_results, 58);
        assert_eq!(page.results.len(), 2);

        let dates = page.dates.expect("dates present");
        assert_eq!(
            dates.maximum,
            NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
        );

        let featured = page.featured().expect("featured");
        assert_eq!(featured.id, CatalogItemId(653346));
        assert_eq!(
            featured.poster_path.as_deref(),
            Some("/gKkl37BQuKTanygYQG1pyYgLVgf.jpg")
        );

        let sparse = &page.results[1];
        assert_eq!(sparse.overview, "");
        assert_eq!(sparse.backdrop_path, None);
        assert_eq!(sparse.poster_path, None);
    }

    #[test]
    fn null_text_fields_decode_as_empty() {
        let page: CatalogPage = serde_json::from_str(
            r#"{
                "page": 1,
                "results": [
                    {"id": 1, "title": "A", "overview": null},
                    {"id": 2, "name": null, "overview": "B"}
                ],
                "total_pages": 1,
                "total_results": 2
            }"#,
        )
        .expect("null fields are tolerated");
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].overview, "");
        assert_eq!(page.results[1].title, "");
        assert_eq!(page.results[1].overview, "B");
    }

    #[test]
    fn tv_records_use_name_as_title() {
        let item: CatalogItem = serde_json::from_str(
            r#"{"id": 1399, "name": "Game of Thrones", "overview": "x"}"#,
        )
        .expect("decode tv record");
        assert_eq!(item.title, "Game of Thrones");
    }

    #[test]
    fn missing_art_degrades_to_empty_url() {
        let item = CatalogItem::new(7, "No Art");
        assert_eq!(
            item.backdrop_url(crate::TMDB_IMAGE_BASE, ImageSize::W500),
            ""
        );
        assert_eq!(
            item.poster_url(crate::TMDB_IMAGE_BASE, ImageSize::card()),
            ""
        );

        let item = item.with_poster("/p.jpg");
        assert_eq!(
            item.poster_url(crate::TMDB_IMAGE_BASE, ImageSize::card()),
            "https://image.tmdb.org/t/p/w500/p.jpg"
        );
    }
}
