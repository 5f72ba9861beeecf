use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use marquee_core::model::Category;

#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Browse now-playing movies and on-the-air TV")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to marquee.toml (default: ./marquee.toml, ./config/marquee.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a .env file loaded before reading the environment
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Cards per carousel page (overrides config)
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Use the built-in catalog instead of TMDB
    #[arg(long, global = true, default_value_t = false)]
    pub demo: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive browser (default)
    Browse(BrowseArgs),
    /// Fetch one listing and print the banner and carousel pages
    List(ListArgs),
    /// Print which loaded item a path selects
    Resolve(ResolveArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BrowseArgs {
    /// Starting location, e.g. /tv or /movies/693134
    #[arg(long, default_value = "/")]
    pub route: String,
}

impl Default for BrowseArgs {
    fn default() -> Self {
        Self {
            route: "/".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Listing to fetch
    #[arg(long, value_enum, default_value_t = CategoryArg::Movies)]
    pub category: CategoryArg,

    /// Print the fetched page as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Location to resolve, e.g. /movies/693134
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Movies,
    Tv,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Movies => Category::MovieNowPlaying,
            CategoryArg::Tv => Category::TvOnTheAir,
        }
    }
}
