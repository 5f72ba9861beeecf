use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use marquee_core::model::Category;
use marquee_core::{
    CarouselConfig, CatalogRequest, CatalogSource, StaticCatalogSource,
};
use marquee_tui::events::{ScriptedEventSource, key};
use marquee_tui::{App, AppCommand, AppSettings, Fetcher, browser, ui};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tokio::runtime::Handle;

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(app: &App) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| ui::render(f, app)).expect("draw");
    buffer_text(terminal.backend().buffer())
}

async fn demo_app(location: &str) -> App {
    demo_app_with(AppSettings::default(), location).await
}

async fn demo_app_with(settings: AppSettings, location: &str) -> App {
    let source = StaticCatalogSource::demo();
    let mut app = App::new(settings);
    if let Some(request) = app.open(location) {
        let page = source
            .fetch(&CatalogRequest::first_page(request.category))
            .await
            .map_err(|err| err.to_string());
        app.on_catalog(request.generation, page);
    }
    app
}

#[tokio::test]
async fn home_shows_banner_and_first_page() {
    let app = demo_app("/").await;
    let screen = draw(&app);

    assert!(screen.contains("Inside Out 2"), "{screen}");
    assert!(screen.contains("Now Playing"), "{screen}");
    assert!(screen.contains("Kingdom of the"), "{screen}");
    assert!(screen.contains("page 1/3"), "{screen}");
    assert!(!screen.contains("Esc to close"), "{screen}");
}

#[tokio::test]
async fn loading_view_before_fetch_lands() {
    let mut app = App::new(AppSettings::default());
    app.open("/tv");
    let screen = draw(&app);
    assert!(screen.contains("Loading..."), "{screen}");
}

#[tokio::test]
async fn item_route_opens_overlay() {
    let app = demo_app("/movies/693134").await;
    let screen = draw(&app);
    assert!(screen.contains("Esc to close"), "{screen}");
    assert!(screen.contains("Dune: Part Two"), "{screen}");
}

#[tokio::test]
async fn unknown_item_still_opens_empty_overlay() {
    let app = demo_app("/movies/5").await;
    let screen = draw(&app);
    assert!(screen.contains("Esc to close"), "{screen}");
}

#[tokio::test]
async fn advancing_moves_to_the_next_page() {
    let mut app = demo_app("/").await;
    let start = Instant::now();
    assert_eq!(
        app.handle_event(key(KeyCode::Right), start),
        AppCommand::None
    );
    app.on_tick(start + Duration::from_secs(5));

    let screen = draw(&app);
    assert!(screen.contains("page 2/3"), "{screen}");
    assert!(screen.contains("Kung Fu Panda 4"), "{screen}");
    assert!(!screen.contains("Under Paris"), "{screen}");
}

#[tokio::test]
async fn failed_fetch_shows_error_line() {
    let mut app = App::new(AppSettings::default());
    let request = app.open("/").expect("home mounts");
    app.on_catalog(request.generation, Err("Invalid API key".into()));
    let screen = draw(&app);
    assert!(screen.contains("Could not load the catalog"), "{screen}");
    assert!(screen.contains("Press r to retry"), "{screen}");
}

#[tokio::test]
async fn tv_card_opens_overlay_over_tv_listing() {
    let mut app = demo_app("/tv").await;
    assert_eq!(
        app.handle_event(key(KeyCode::Char('1')), Instant::now()),
        AppCommand::None
    );
    assert!(app.location().starts_with("/tv/"), "{}", app.location());

    let screen = draw(&app);
    assert!(screen.contains("Esc to close"), "{screen}");
    assert!(screen.contains("Tv Shows"), "{screen}");
    assert!(!screen.contains("Loading..."), "{screen}");
}

#[tokio::test]
async fn cards_show_poster_urls() {
    let settings = AppSettings {
        carousel: CarouselConfig::with_page_size(1),
        ..AppSettings::default()
    };
    let app = demo_app_with(settings, "/").await;
    let screen = draw(&app);
    assert!(
        screen.contains("https://image.tmdb.org/t/p/w500/demo-poster-01.jpg"),
        "{screen}"
    );
    assert!(screen.contains("  1 open  "), "{screen}");
}

#[tokio::test(flavor = "multi_thread")]
async fn event_loop_fetches_and_quits() {
    let source: Arc<dyn CatalogSource> =
        Arc::new(StaticCatalogSource::demo());
    let mut app = App::new(AppSettings::default());
    let initial = app.open("/tv");
    assert_eq!(initial.map(|r| r.category), Some(Category::TvOnTheAir));

    let mut fetcher = Fetcher::new(source, "en-US", Handle::current());
    let mut events = ScriptedEventSource::new([key(KeyCode::Char('q'))]);
    let mut terminal =
        Terminal::new(TestBackend::new(80, 24)).expect("terminal");

    browser::run_app(
        &mut terminal,
        &mut app,
        &mut fetcher,
        &mut events,
        initial,
    )
    .expect("loop exits");
    assert!(app.should_quit());
    assert!(events.is_exhausted());

    if app.browse().is_some_and(|b| b.is_loading()) {
        let delivery = fetcher.recv().await.expect("fetch delivered");
        assert_eq!(delivery.generation, app.generation());
        app.on_catalog(delivery.generation, delivery.result);
    }
    assert_eq!(app.browse().map(|b| b.items().len()), Some(8));
}
