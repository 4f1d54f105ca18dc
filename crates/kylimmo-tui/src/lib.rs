// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{SetTitle, disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use kylimmo_app::{
    AppCommand, AppEvent, AppState, CATALOG_PAGE_SIZE, DocumentHead, FilterField, GeoPoint,
    LISTING_PAGE_SIZE, MAP_ZOOM, PageLink, Property, Route, ViewMode, locate, page_links,
    page_slice, search, total_pages,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Approximate logical units per terminal column; maps terminal widths onto
/// the 768-unit grid breakpoint.
const COLUMN_LOGICAL_UNITS: u32 = 8;
/// Cards per row in grid mode.
const GRID_COLUMNS: usize = 3;
/// Rows inside the rendered map box.
const MAP_ROWS: usize = 5;
/// Columns inside the rendered map box.
const MAP_COLS: usize = 28;

const BADGE_NEW: &str = "NOUVEAU";
const BADGE_FAVORITE: &str = "♥";
const MARKER: &str = "●";

/// Everything the UI reads. Implemented by the binary over loaded catalogs;
/// the trait keeps the TUI testable without terminal or files.
pub trait CatalogSource {
    /// The full ordered catalog.
    fn properties(&self) -> &[Property];
    /// The featured set shown on the home screen.
    fn featured(&self) -> &[Property];
    /// Lookup by id; `None` renders the not-found screen.
    fn get(&self, id: &str) -> Option<&Property>;
    /// Site base URL for canonical links.
    fn base_url(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct SearchUiState {
    editing: bool,
    buffer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct GotoUiState {
    visible: bool,
    buffer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct PanelUiState {
    cursor: usize,
    editing: bool,
    buffer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct DetailUiState {
    gallery_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    search: SearchUiState,
    goto_prompt: GotoUiState,
    panel_ui: PanelUiState,
    detail: DetailUiState,
    selected: usize,
    list_offset: usize,
    head: DocumentHead,
    help_visible: bool,
    status_token: u64,
}

pub fn logical_width(columns: u16) -> u32 {
    u32::from(columns) * COLUMN_LOGICAL_UNITS
}

/// Logical width of the terminal before the UI starts; seeds
/// `AppState::with_viewport_width` so the first render already has the
/// right view mode.
pub fn startup_logical_width() -> Result<u32> {
    let (columns, _) = terminal::size().context("query terminal size")?;
    Ok(logical_width(columns))
}

pub fn run_app<S: CatalogSource>(state: &mut AppState, source: &S) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    apply_head_for_route(state, source, &mut view_data);
    let mut last_title = String::new();

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if view_data.head.title != last_title {
            last_title = view_data.head.title.clone();
            if let Err(error) = execute!(io::stdout(), SetTitle(last_title.as_str())) {
                result = Err(error).context("set terminal title");
                break;
            }
        }

        if let Err(error) = terminal.draw(|frame| render(frame, state, source, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, source, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(columns, _) => {
                    state.dispatch(AppCommand::ViewportResized {
                        width: logical_width(columns),
                    });
                }
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(state: &mut AppState, view_data: &ViewData, rx: &Receiver<InternalEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<S: CatalogSource>(
    state: &mut AppState,
    source: &S,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.goto_prompt.visible {
        handle_goto_key(state, source, view_data, internal_tx, key);
        return false;
    }

    if view_data.search.editing {
        handle_search_key(state, view_data, key);
        return false;
    }

    if state.panel_open {
        handle_panel_key(state, view_data, internal_tx, key);
        return false;
    }

    if key.code == KeyCode::Char('?') {
        view_data.help_visible = true;
        return false;
    }

    if key.code == KeyCode::Char(':') {
        view_data.goto_prompt.visible = true;
        view_data.goto_prompt.buffer.clear();
        return false;
    }

    match state.route.clone() {
        Route::Home | Route::Properties => {
            handle_catalog_key(state, source, view_data, internal_tx, key);
        }
        Route::PropertyDetail(id) => {
            handle_detail_key(state, source, view_data, key, id.as_str());
        }
        Route::NotFound => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                navigate(state, source, view_data, Route::Home);
            }
        }
    }

    false
}

fn handle_goto_key<S: CatalogSource>(
    state: &mut AppState,
    source: &S,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            view_data.goto_prompt = GotoUiState::default();
        }
        KeyCode::Enter => {
            let path = view_data.goto_prompt.buffer.clone();
            view_data.goto_prompt = GotoUiState::default();
            let route = Route::parse(&path);
            if route == Route::NotFound {
                emit_status(state, view_data, internal_tx, format!("chemin inconnu: {path}"));
            }
            navigate(state, source, view_data, route);
        }
        KeyCode::Backspace => {
            view_data.goto_prompt.buffer.pop();
        }
        KeyCode::Char(c) => {
            view_data.goto_prompt.buffer.push(c);
        }
        _ => {}
    }
}

fn handle_search_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            view_data.search.editing = false;
            view_data.search.buffer = state.query.clone();
        }
        KeyCode::Enter => {
            view_data.search.editing = false;
            state.dispatch(AppCommand::SubmitSearch(view_data.search.buffer.clone()));
            view_data.selected = 0;
            view_data.list_offset = 0;
        }
        KeyCode::Backspace => {
            view_data.search.buffer.pop();
        }
        KeyCode::Char(c) => {
            view_data.search.buffer.push(c);
        }
        _ => {}
    }
}

fn handle_panel_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let fields = FilterField::ALL;

    if view_data.panel_ui.editing {
        match key.code {
            KeyCode::Esc => {
                view_data.panel_ui.editing = false;
            }
            KeyCode::Enter => {
                view_data.panel_ui.editing = false;
                let field = fields[view_data.panel_ui.cursor];
                let events = state.dispatch(AppCommand::EditFilter {
                    field,
                    value: view_data.panel_ui.buffer.clone(),
                });
                if let Some(AppEvent::FiltersChanged { active_count }) = events.first() {
                    emit_status(
                        state,
                        view_data,
                        internal_tx,
                        format!("filtres actifs: {active_count}"),
                    );
                }
            }
            KeyCode::Backspace => {
                view_data.panel_ui.buffer.pop();
            }
            KeyCode::Char(c) => {
                view_data.panel_ui.buffer.push(c);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('f') => {
            let events = state.dispatch(AppCommand::ClosePanel);
            if let Some(AppEvent::PanelClosed { restored_scroll }) = events.first() {
                view_data.list_offset = restored_scroll.unwrap_or(view_data.list_offset);
            }
            view_data.panel_ui = PanelUiState::default();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            view_data.panel_ui.cursor = (view_data.panel_ui.cursor + 1) % fields.len();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view_data.panel_ui.cursor =
                (view_data.panel_ui.cursor + fields.len() - 1) % fields.len();
        }
        KeyCode::Enter | KeyCode::Char('i') => {
            let field = fields[view_data.panel_ui.cursor];
            view_data.panel_ui.editing = true;
            view_data.panel_ui.buffer = state.panel.get(field).to_owned();
        }
        KeyCode::Char('r') => {
            state.dispatch(AppCommand::ResetFilters);
            view_data.search.buffer.clear();
            view_data.selected = 0;
            emit_status(state, view_data, internal_tx, "filtres réinitialisés");
        }
        _ => {}
    }
}

fn handle_catalog_key<S: CatalogSource>(
    state: &mut AppState,
    source: &S,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let page_size = page_size_for_route(&state.route);
    let filtered = search(source.properties(), &state.query);
    let total = total_pages(filtered.len(), page_size);
    let visible = page_slice(&filtered, page_size, state.page);

    match (key.code, key.modifiers) {
        (KeyCode::Char('/'), _) => {
            view_data.search.editing = true;
            view_data.search.buffer = state.query.clone();
        }
        (KeyCode::Char('f'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::OpenPanel {
                scroll_offset: Some(view_data.list_offset),
            });
            view_data.panel_ui = PanelUiState::default();
        }
        (KeyCode::Char('v'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::ToggleView);
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::ResetFilters);
            view_data.search.buffer.clear();
            view_data.selected = 0;
            emit_status(state, view_data, internal_tx, "filtres réinitialisés");
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => {
            let target = match state.route {
                Route::Home => Route::Properties,
                _ => Route::Home,
            };
            navigate(state, source, view_data, target);
        }
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => {
            set_page(state, view_data, state.page.saturating_sub(1), total);
        }
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => {
            set_page(state, view_data, state.page + 1, total);
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            set_page(state, view_data, 1, total);
        }
        (KeyCode::Char('G'), _) => {
            set_page(state, view_data, total, total);
        }
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
            if !visible.is_empty() {
                view_data.selected = (view_data.selected + 1).min(visible.len() - 1);
            }
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
            view_data.selected = view_data.selected.saturating_sub(1);
        }
        (KeyCode::Enter, _) => {
            if let Some(property) = visible.get(view_data.selected) {
                let id = property.id.clone();
                navigate(state, source, view_data, Route::PropertyDetail(id));
            }
        }
        (KeyCode::Esc, _) => {
            if state.route == Route::Properties {
                navigate(state, source, view_data, Route::Home);
            }
        }
        _ => {}
    }
}

fn handle_detail_key<S: CatalogSource>(
    state: &mut AppState,
    source: &S,
    view_data: &mut ViewData,
    key: KeyEvent,
    id: &str,
) {
    let gallery_len = source.get(id).map(|p| p.images.len()).unwrap_or(0);

    match key.code {
        KeyCode::Esc | KeyCode::Char('b') => {
            navigate(state, source, view_data, Route::Home);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            view_data.detail.gallery_index = view_data.detail.gallery_index.saturating_sub(1);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if gallery_len > 0 {
                view_data.detail.gallery_index =
                    (view_data.detail.gallery_index + 1).min(gallery_len - 1);
            }
        }
        _ => {}
    }
}

fn navigate<S: CatalogSource>(
    state: &mut AppState,
    source: &S,
    view_data: &mut ViewData,
    route: Route,
) {
    state.dispatch(AppCommand::Navigate(route));
    view_data.selected = 0;
    view_data.detail = DetailUiState::default();
    apply_head_for_route(state, source, view_data);
}

/// Head metadata is a document-level side table overwritten idempotently on
/// each page visit.
fn apply_head_for_route<S: CatalogSource>(state: &AppState, source: &S, view_data: &mut ViewData) {
    match &state.route {
        Route::Properties => {
            view_data.head.apply_listing(source.base_url());
        }
        Route::PropertyDetail(id) => {
            if let Some(property) = source.get(id.as_str()) {
                view_data.head.apply_property(property, source.base_url());
            }
        }
        Route::Home | Route::NotFound => {}
    }
}

fn set_page(state: &mut AppState, view_data: &mut ViewData, requested: usize, total: usize) {
    state.dispatch(AppCommand::SetPage {
        requested,
        total_pages: total,
    });
    view_data.selected = 0;
}

fn page_size_for_route(route: &Route) -> usize {
    match route {
        Route::Properties => LISTING_PAGE_SIZE,
        _ => CATALOG_PAGE_SIZE,
    }
}

fn render<S: CatalogSource>(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    source: &S,
    view_data: &ViewData,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_text(state, view_data))
        .block(Block::default().title("kylimmo").borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    match &state.route {
        Route::Home => render_home(frame, layout[1], state, source, view_data),
        Route::Properties => render_catalog_screen(frame, layout[1], state, source, view_data),
        Route::PropertyDetail(id) => {
            render_detail(frame, layout[1], source, view_data, id.as_str());
        }
        Route::NotFound => {
            let body = Paragraph::new(not_found_text())
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("introuvable"));
            frame.render_widget(body, layout[1]);
        }
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if state.panel_open {
        let area = centered_rect(52, 70, frame.area());
        frame.render_widget(Clear, area);
        let panel = Paragraph::new(panel_overlay_text(state, view_data)).block(
            Block::default()
                .title("filtres de recherche")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(panel, area);
    }

    if view_data.goto_prompt.visible {
        let area = centered_rect(48, 18, frame.area());
        frame.render_widget(Clear, area);
        let prompt = Paragraph::new(format!(
            "chemin: {}\n\nenter ouvrir | esc fermer",
            view_data.goto_prompt.buffer
        ))
        .block(Block::default().title("aller à").borders(Borders::ALL));
        frame.render_widget(prompt, area);
    }

    if view_data.help_visible {
        let area = centered_rect(76, 64, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("aide").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn header_text(state: &AppState, view_data: &ViewData) -> String {
    let search = if view_data.search.editing {
        format!("recherche: {}▌", view_data.search.buffer)
    } else if state.query.is_empty() {
        "recherche: (rechercher un bien, une ville...)".to_owned()
    } else {
        format!("recherche: {}", state.query)
    };

    let badge = match state.panel.active_count() {
        0 => "filtres".to_owned(),
        count => format!("filtres({count})"),
    };

    format!(
        "{} | {search} | {badge} | vue: {}",
        state.route.label(),
        state.view.as_str()
    )
}

fn render_home<S: CatalogSource>(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    source: &S,
    view_data: &ViewData,
) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(1),
        ])
        .split(area);

    let hero = Paragraph::new(
        "Trouvez votre bien idéal\n\
         Achat, vente, location - Votre partenaire immobilier de confiance",
    )
    .style(Style::default().add_modifier(Modifier::BOLD))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hero, sections[0]);

    let featured = Paragraph::new(featured_text(source.featured()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("biens en vedette"),
        );
    frame.render_widget(featured, sections[1]);

    render_catalog_screen(frame, sections[2], state, source, view_data);
}

fn featured_text(featured: &[Property]) -> String {
    if featured.is_empty() {
        return "aucune sélection".to_owned();
    }
    featured
        .iter()
        .map(|property| {
            format!(
                "{} | {} | {}",
                property.title, property.location, property.price
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_catalog_screen<S: CatalogSource>(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    source: &S,
    view_data: &ViewData,
) {
    let page_size = page_size_for_route(&state.route);
    let filtered = search(source.properties(), &state.query);
    let total = total_pages(filtered.len(), page_size);
    let visible = page_slice(&filtered, page_size, state.page);

    let show_pagination = total > 1;
    let constraints = if show_pagination {
        vec![Constraint::Min(1), Constraint::Length(1)]
    } else {
        vec![Constraint::Min(1)]
    };
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if visible.is_empty() {
        let empty = Paragraph::new("Aucun bien ne correspond à votre recherche.")
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(catalog_title(
                state,
                filtered.len(),
            )));
        frame.render_widget(empty, sections[0]);
    } else {
        match state.view {
            ViewMode::Grid => {
                render_grid(frame, sections[0], state, &visible, view_data, filtered.len());
            }
            ViewMode::List => {
                render_list(frame, sections[0], state, &visible, view_data, filtered.len());
            }
        }
    }

    if show_pagination {
        let bar = Paragraph::new(pagination_text(state.page, total))
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(bar, sections[1]);
    }
}

fn catalog_title(state: &AppState, filtered_count: usize) -> String {
    format!(
        "{} ({filtered_count} biens, page {})",
        match state.route {
            Route::Properties => "tous les biens",
            _ => "catalogue",
        },
        state.page
    )
}

fn render_grid(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    visible: &[&Property],
    view_data: &ViewData,
    filtered_count: usize,
) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(catalog_title(state, filtered_count));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let row_count = visible.len().div_ceil(GRID_COLUMNS);
    if row_count == 0 || inner.height == 0 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(4); row_count])
        .split(inner);

    for (row_index, row_area) in rows.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, GRID_COLUMNS as u32);
                GRID_COLUMNS
            ])
            .split(*row_area);
        for column_index in 0..GRID_COLUMNS {
            let index = row_index * GRID_COLUMNS + column_index;
            let Some(property) = visible.get(index) else {
                continue;
            };
            let selected = index == view_data.selected;
            let style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let card = Paragraph::new(card_text(property))
                .style(style)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(card, columns[column_index]);
        }
    }
}

/// Clamps the stored list offset into the window that keeps the selected
/// row visible for the given row capacity.
fn list_window_offset(offset: usize, selected: usize, height: usize) -> usize {
    if height == 0 {
        return offset;
    }
    let offset = offset.min(selected);
    if selected >= offset + height {
        selected + 1 - height
    } else {
        offset
    }
}

fn render_list(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    visible: &[&Property],
    view_data: &ViewData,
    filtered_count: usize,
) {
    let height = usize::from(area.height.saturating_sub(2));
    let offset = list_window_offset(view_data.list_offset, view_data.selected, height);
    let lines: Vec<String> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(index, property)| {
            let marker = if index == view_data.selected { "> " } else { "  " };
            format!("{marker}{}", list_row_text(property))
        })
        .collect();

    let list = Paragraph::new(lines.join("\n")).block(
        Block::default()
            .borders(Borders::ALL)
            .title(catalog_title(state, filtered_count)),
    );
    frame.render_widget(list, area);
}

fn card_text(property: &Property) -> String {
    let mut badges = Vec::new();
    if property.badge_new() {
        badges.push(BADGE_NEW);
    }
    if property.badge_favorite() {
        badges.push(BADGE_FAVORITE);
    }
    let badge_line = if badges.is_empty() {
        String::new()
    } else {
        format!(" [{}]", badges.join(" "))
    };

    format!(
        "{}{badge_line}\n{} | {}\n{} | {}",
        property.title, property.location, property.kind, property.price, property.surface
    )
}

fn list_row_text(property: &Property) -> String {
    let rooms = match (property.bedrooms, property.bathrooms) {
        (Some(bedrooms), Some(bathrooms)) => format!(" | {bedrooms} ch, {bathrooms} sdb"),
        (Some(bedrooms), None) => format!(" | {bedrooms} ch"),
        (None, Some(bathrooms)) => format!(" | {bathrooms} sdb"),
        (None, None) => String::new(),
    };
    let mut row = format!(
        "{} | {} | {} | {}{rooms}",
        property.title, property.kind, property.location, property.price
    );
    if property.badge_new() {
        row.push_str(" [");
        row.push_str(BADGE_NEW);
        row.push(']');
    }
    if property.badge_favorite() {
        row.push(' ');
        row.push_str(BADGE_FAVORITE);
    }
    row
}

fn pagination_text(current: usize, total: usize) -> String {
    let mut parts = vec!["«".to_owned()];
    for link in page_links(current, total) {
        match link {
            PageLink::Page { number, current: true } => parts.push(format!("[{number}]")),
            PageLink::Page { number, .. } => parts.push(number.to_string()),
            PageLink::Ellipsis => parts.push("…".to_owned()),
        }
    }
    parts.push("»".to_owned());
    parts.join(" ")
}

fn render_detail<S: CatalogSource>(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    source: &S,
    view_data: &ViewData,
    id: &str,
) {
    let Some(property) = source.get(id) else {
        let body = Paragraph::new(not_found_text())
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("introuvable"));
        frame.render_widget(body, area);
        return;
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length((MAP_ROWS + 2) as u16),
        ])
        .split(area);

    let gallery = Paragraph::new(gallery_text(property, view_data.detail.gallery_index))
        .block(Block::default().borders(Borders::ALL).title("galerie"));
    frame.render_widget(gallery, sections[0]);

    let details = Paragraph::new(detail_text(property))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(property.title.clone()),
        );
    frame.render_widget(details, sections[1]);

    let point = locate(&property.location);
    let map = Paragraph::new(map_text(point)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("carte (zoom {MAP_ZOOM})")),
    );
    frame.render_widget(map, sections[2]);
}

fn gallery_text(property: &Property, gallery_index: usize) -> String {
    let index = gallery_index.min(property.images.len().saturating_sub(1));
    property
        .images
        .iter()
        .enumerate()
        .map(|(image_index, image)| {
            if image_index == index {
                format!("[{image}]")
            } else {
                image.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn detail_text(property: &Property) -> String {
    let mut lines = vec![
        property.location.clone(),
        format!("prix: {}", property.price),
        format!("surface: {} | type: {}", property.surface, property.kind),
    ];
    if let Some(bedrooms) = property.bedrooms {
        lines.push(format!("chambres: {bedrooms}"));
    }
    if let Some(bathrooms) = property.bathrooms {
        lines.push(format!("salles de bain: {bathrooms}"));
    }
    lines.push(String::new());
    lines.push(
        "Découvrez ce bien idéalement situé, offrant un excellent compromis entre \
         confort et praticité."
            .to_owned(),
    );
    lines.join("\n")
}

/// Single-marker map over the coordinate range the city table spans. Purely
/// cosmetic; the point itself is what tests pin down.
fn map_text(point: GeoPoint) -> String {
    const LAT_MIN: f64 = 5.0;
    const LAT_MAX: f64 = 8.0;
    const LNG_MIN: f64 = -5.5;
    const LNG_MAX: f64 = -3.5;

    let row_fraction = ((LAT_MAX - point.lat) / (LAT_MAX - LAT_MIN)).clamp(0.0, 1.0);
    let col_fraction = ((point.lng - LNG_MIN) / (LNG_MAX - LNG_MIN)).clamp(0.0, 1.0);
    let marker_row = ((MAP_ROWS - 1) as f64 * row_fraction).round() as usize;
    let marker_col = ((MAP_COLS - 1) as f64 * col_fraction).round() as usize;

    let mut rows = Vec::with_capacity(MAP_ROWS + 1);
    for row in 0..MAP_ROWS {
        let mut line = String::with_capacity(MAP_COLS);
        for col in 0..MAP_COLS {
            if row == marker_row && col == marker_col {
                line.push_str(MARKER);
            } else {
                line.push('·');
            }
        }
        rows.push(line);
    }
    rows.push(format!("({:.4}, {:.4})", point.lat, point.lng));
    rows.join("\n")
}

fn not_found_text() -> &'static str {
    "Bien introuvable\n\nLe bien demandé n'existe pas ou a été déplacé.\n\nesc retour aux annonces"
}

fn panel_overlay_text(state: &AppState, view_data: &ViewData) -> String {
    let mut lines = vec![format!("filtres actifs: {}", state.panel.active_count()), String::new()];
    for (index, field) in FilterField::ALL.iter().enumerate() {
        let cursor = if index == view_data.panel_ui.cursor { "> " } else { "  " };
        let value = if index == view_data.panel_ui.cursor && view_data.panel_ui.editing {
            format!("{}▌", view_data.panel_ui.buffer)
        } else {
            state.panel.get(*field).to_owned()
        };
        lines.push(format!("{cursor}{}: {value}", field.label()));
    }
    lines.push(String::new());
    lines.push("j/k champ | enter éditer | r réinitialiser | esc fermer".to_owned());
    lines.join("\n")
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if view_data.help_visible || view_data.goto_prompt.visible {
        return String::new();
    }

    let default = match &state.route {
        Route::Home => "/ rechercher | f filtres | v vue | h/l page | j/k enter | a tous | : aller | ? aide | ctrl+q",
        Route::Properties => "/ rechercher | h/l page | j/k enter | esc accueil | : aller | ? aide | ctrl+q",
        Route::PropertyDetail(_) => "h/l galerie | esc retour | : aller | ? aide | ctrl+q",
        Route::NotFound => "esc retour | : aller | ? aide | ctrl+q",
    };

    match &state.status_line {
        Some(status) => format!("{status} | {default}"),
        None => default.to_owned(),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quitter | : aller à un chemin (/biens/3) | ? aide\n\
catalogue: / rechercher (enter valider) | f panneau filtres | v grille/liste\n\
catalogue: h/l ou ←/→ page | g/G première/dernière page | j/k sélection | enter détail\n\
catalogue: a tous les biens | r réinitialiser filtres et recherche\n\
filtres: j/k champ | enter éditer puis enter valider | r réinitialiser | esc fermer\n\
détail: h/l galerie | esc retour\n\
introuvable: esc retour"
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
