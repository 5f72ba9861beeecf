use marquee_core::model::{CatalogItem, ImageSize};
use marquee_core::{AppRoute, BrowseState, LoadState, page_count};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;

const CARD_ROW_HEIGHT: u16 = 7;

pub fn render(f: &mut Frame, app: &App) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    render_header(f, vertical[0], app);

    match (app.route(), app.browse()) {
        (AppRoute::Search { keyword }, _) => {
            render_search_page(f, vertical[1], keyword)
        }
        (_, Some(browse)) => render_browse(f, vertical[1], app, browse),
        (_, None) => {}
    }

    render_footer(f, vertical[2], app);

    if let Some(selection) = app.selection()
        && selection.is_open()
    {
        let image_base = app
            .browse()
            .map(BrowseState::image_base)
            .unwrap_or_default();
        render_overlay(f, selection.selected_item, image_base);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)].as_ref())
        .split(area);

    let tab = |label: &'static str, active: bool| {
        let style = if active {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(label, style)
    };

    let nav = Line::from(vec![
        Span::styled(
            "MARQUEE",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        tab("Home", app.route().is_home_tab_active()),
        Span::raw("   "),
        tab("Tv Shows", app.route().is_tv_tab_active()),
    ]);
    f.render_widget(
        Paragraph::new(nav).block(Block::default().borders(Borders::BOTTOM)),
        columns[0],
    );

    let search = app.search();
    let (text, style) = if search.focused {
        (
            format!("{}_", search.input),
            Style::default().fg(Color::White),
        )
    } else {
        (
            "search for movie or Tv show".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };
    let border = if search.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = match &search.error {
        Some(error) => Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from("/ search"),
    };
    f.render_widget(
        Paragraph::new(Span::styled(text, style)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        ),
        columns[1],
    );
}

fn render_search_page(f: &mut Frame, area: Rect, keyword: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Search: {keyword}"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press h for Home, t for Tv Shows, / to search again",
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_browse(f: &mut Frame, area: Rect, app: &App, browse: &BrowseState) {
    match browse.load_state() {
        LoadState::Loading => {
            f.render_widget(
                Paragraph::new("Loading...")
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL)),
                area,
            );
        }
        LoadState::Failed(_) => {
            f.render_widget(
                Paragraph::new(Span::styled(
                    "Could not load the catalog. Press r to retry.",
                    Style::default().fg(Color::Red),
                ))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
                area,
            );
        }
        LoadState::Ready(_) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(
                    [Constraint::Min(4), Constraint::Length(CARD_ROW_HEIGHT)]
                        .as_ref(),
                )
                .split(area);
            render_banner(f, rows[0], browse);
            render_carousel(f, rows[1], app, browse);
        }
    }
}

fn render_banner(f: &mut Frame, area: Rect, browse: &BrowseState) {
    let Some(banner) = browse.banner() else {
        f.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };
    let lines = vec![
        Line::from(Span::styled(
            banner.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(banner.overview),
        Line::default(),
        Line::from(Span::styled(
            banner.backdrop_url,
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(browse.category().label()),
            ),
        area,
    );
}

fn render_carousel(f: &mut Frame, area: Rect, app: &App, browse: &BrowseState) {
    let page_size = app.page_size().max(1);
    let card_width = area.width / page_size as u16;
    if card_width == 0 {
        return;
    }

    if app.is_sliding() {
        let shift = (app.slide_progress() * area.width as f32) as i32;
        let incoming = area.width as i32 - shift;
        render_cards(f, area, browse, app.outgoing(), -shift, card_width);
        render_cards(f, area, browse, browse.window(), incoming, card_width);
    } else {
        render_cards(f, area, browse, browse.window(), 0, card_width);
    }
}

fn render_cards(
    f: &mut Frame,
    row: Rect,
    browse: &BrowseState,
    cards: &[CatalogItem],
    offset: i32,
    card_width: u16,
) {
    for (slot, item) in cards.iter().enumerate() {
        let x = row.x as i32 + offset + slot as i32 * card_width as i32;
        let Some(rect) = clip_to_row(row, x, card_width) else {
            continue;
        };
        let poster = item.poster_url(browse.image_base(), ImageSize::card());
        let lines = vec![
            Line::from(Span::styled(
                item.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                poster,
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{}", slot + 1)),
            );
        f.render_widget(card, rect);
    }
}

fn clip_to_row(row: Rect, x: i32, width: u16) -> Option<Rect> {
    let left = x.max(row.x as i32);
    let right = (x + width as i32).min(row.x as i32 + row.width as i32);
    if right <= left {
        return None;
    }
    Some(Rect {
        x: left as u16,
        y: row.y,
        width: (right - left) as u16,
        height: row.height,
    })
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    if let Some(controller) = app.browse().and_then(BrowseState::controller) {
        spans.push(Span::styled(
            format!(
                "page {}/{}  ",
                controller.page_index() + 1,
                page_count(controller.eligible_count(), controller.page_size())
            ),
            Style::default().fg(Color::Yellow),
        ));
    }
    spans.push(Span::styled(
        key_help(app.page_size()),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_help(page_size: usize) -> String {
    let open = match page_size {
        0 | 1 => "1 open".to_string(),
        n => format!("1-{} open", n.min(9)),
    };
    format!(
        "→/n next  {open}  Esc close  r retry  h home  t tv  / search  q quit"
    )
}

fn render_overlay(f: &mut Frame, item: Option<&CatalogItem>, image_base: &str) {
    let area = centered_rect(60, 70, f.size());
    f.render_widget(Clear, area);
    let block = Block::default().borders(Borders::ALL).title("Esc to close");

    let Some(item) = item else {
        f.render_widget(block, area);
        return;
    };

    let cover = item.backdrop_url(image_base, ImageSize::card());
    let lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(cover, Style::default().fg(Color::DarkGray))),
        Line::default(),
        Line::from(item.overview.clone()),
    ];
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
