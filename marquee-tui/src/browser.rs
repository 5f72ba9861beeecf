//! Interactive event loop.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use marquee_core::model::CatalogPage;
use marquee_core::{CatalogRequest, CatalogSource};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::app::{App, AppCommand, FetchRequest};
use crate::events::{CrosstermEventSource, EventSource};
use crate::ui;

/// Frame budget while polling for input.
const FRAME: Duration = Duration::from_millis(33);

/// A finished fetch, tagged with the mount it was issued for.
#[derive(Debug)]
pub struct CatalogDelivery {
    pub generation: u64,
    pub result: Result<CatalogPage, String>,
}

/// Spawns catalog fetches onto the runtime and collects their results.
#[derive(Debug)]
pub struct Fetcher {
    source: Arc<dyn CatalogSource>,
    language: String,
    handle: Handle,
    tx: mpsc::UnboundedSender<CatalogDelivery>,
    rx: mpsc::UnboundedReceiver<CatalogDelivery>,
}

impl Fetcher {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        language: impl Into<String>,
        handle: Handle,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            language: language.into(),
            handle,
            tx,
            rx,
        }
    }

    pub fn spawn(&self, request: FetchRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let catalog_request = CatalogRequest::first_page(request.category)
            .with_language(self.language.clone());
        self.handle.spawn(async move {
            let result = source
                .fetch(&catalog_request)
                .await
                .map_err(|err| err.to_string());
            if let Err(err) = &result {
                warn!(
                    category = %request.category,
                    error = %err,
                    "catalog fetch failed"
                );
            }
            let delivery = CatalogDelivery {
                generation: request.generation,
                result,
            };
            if tx.send(delivery).is_err() {
                info!("browser closed before catalog arrived");
            }
        });
    }

    /// Results that arrived since the last call.
    pub fn drain(&mut self) -> Vec<CatalogDelivery> {
        let mut out = Vec::new();
        while let Ok(delivery) = self.rx.try_recv() {
            out.push(delivery);
        }
        out
    }

    /// Wait for the next result; used by tests and one-shot commands.
    pub async fn recv(&mut self) -> Option<CatalogDelivery> {
        self.rx.recv().await
    }
}

/// Take over the terminal and browse until the user quits.
pub fn run(
    app: &mut App,
    fetcher: &mut Fetcher,
    initial: Option<FetchRequest>,
) -> Result<()> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal: Terminal<CrosstermBackend<Stdout>> =
        Terminal::new(backend)?;

    let mut events = CrosstermEventSource;
    let result = run_app(&mut terminal, app, fetcher, &mut events, initial);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

/// The loop itself, generic over backend and input for tests.
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    fetcher: &mut Fetcher,
    events: &mut dyn EventSource,
    initial: Option<FetchRequest>,
) -> Result<()> {
    if let Some(request) = initial {
        fetcher.spawn(request);
    }

    loop {
        for delivery in fetcher.drain() {
            app.on_catalog(delivery.generation, delivery.result);
        }
        app.on_tick(Instant::now());

        terminal.draw(|f| ui::render(f, app))?;

        if let Some(event) = events.next(FRAME)? {
            match app.handle_event(event, Instant::now()) {
                AppCommand::Quit => return Ok(()),
                AppCommand::Fetch(request) => fetcher.spawn(request),
                AppCommand::None => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
