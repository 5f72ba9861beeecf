//! # Marquee
//!
//! Browse TMDB's now-playing movies and on-the-air TV from the terminal:
//! a hero banner, a paged poster carousel, and a detail overlay driven by
//! the current location.

use anyhow::Result;
use clap::Parser;
use tokio::runtime::Handle;

use marquee_tui::{
    App, Fetcher, bootstrap, browser,
    cli::{BrowseArgs, Cli, Command},
    commands,
    logging::{self, LogTarget},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, warnings) = bootstrap::load_config(&cli.global)?;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Browse(BrowseArgs::default()));

    match command {
        Command::Browse(args) => {
            logging::init(LogTarget::File(&config.ui.log_file))?;
            bootstrap::report(&config, &warnings);
            let runtime = bootstrap::runtime(config)?;

            let mut app = App::new(runtime.app_settings());
            let initial = app.open(&args.route);
            let mut fetcher = Fetcher::new(
                runtime.source.clone(),
                runtime.config.tmdb.language.clone(),
                Handle::current(),
            );
            tokio::task::block_in_place(|| {
                browser::run(&mut app, &mut fetcher, initial)
            })
        }
        Command::List(args) => {
            logging::init(LogTarget::Stderr)?;
            bootstrap::report(&config, &warnings);
            let runtime = bootstrap::runtime(config)?;
            commands::list(&runtime, &args).await
        }
        Command::Resolve(args) => {
            logging::init(LogTarget::Stderr)?;
            bootstrap::report(&config, &warnings);
            let runtime = bootstrap::runtime(config)?;
            commands::resolve(&runtime, &args).await
        }
    }
}
