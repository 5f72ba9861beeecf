use std::fmt::{self, Display, Formatter};

/// Catalog listings the browser knows how to mount.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Movies currently in theatres (home view)
    #[default]
    MovieNowPlaying,
    /// Series with an episode airing in the next week (tv view)
    TvOnTheAir,
}

impl Category {
    pub const ALL: [Category; 2] =
        [Category::MovieNowPlaying, Category::TvOnTheAir];

    /// Endpoint path relative to the API base, without leading slash.
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Category::MovieNowPlaying => "movie/now_playing",
            Category::TvOnTheAir => "tv/on_the_air",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Category::MovieNowPlaying => "Now Playing",
            Category::TvOnTheAir => "Tv Shows",
        }
    }

    /// Short token used on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::MovieNowPlaying => "movies",
            Category::TvOnTheAir => "tv",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
