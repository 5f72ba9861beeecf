use std::fmt::{self, Display, Formatter};

/// Public TMDB image CDN root.
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Size tokens accepted by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageSize {
    W92,
    W154,
    W185,
    W342,
    W500,
    W780,
    W1280,
    #[default]
    Original,
}

impl ImageSize {
    /// Size used for the hero banner.
    pub const fn banner() -> Self {
        Self::Original
    }

    /// Size used for carousel cards and the overlay cover.
    pub const fn card() -> Self {
        Self::W500
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W92 => "w92",
            Self::W154 => "w154",
            Self::W185 => "w185",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::W780 => "w780",
            Self::W1280 => "w1280",
            Self::Original => "original",
        }
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a displayable image URL from a relative path fragment.
///
/// Absent, empty, or whitespace-only paths yield an empty string.
pub fn image_url(base: &str, path: Option<&str>, size: ImageSize) -> String {
    let Some(path) = path.map(str::trim).filter(|p| !p.is_empty()) else {
        return String::new();
    };
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{size}/{path}")
}
