// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::ViewMode;
use crate::page::clamp_page;
use crate::panel::{FilterField, FilterPanel};
use crate::route::Route;
use crate::view::{initial_view_mode, view_mode_after_resize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub route: Route,
    pub query: String,
    pub page: usize,
    pub view: ViewMode,
    pub panel_open: bool,
    pub panel: FilterPanel,
    pub saved_scroll: Option<usize>,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Home,
            query: String::new(),
            page: 1,
            view: ViewMode::Grid,
            panel_open: false,
            panel: FilterPanel::new(),
            saved_scroll: None,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Navigate(Route),
    SubmitSearch(String),
    SetPage { requested: usize, total_pages: usize },
    ToggleView,
    ViewportResized { width: u32 },
    OpenPanel { scroll_offset: Option<usize> },
    ClosePanel,
    EditFilter { field: FilterField, value: String },
    ResetFilters,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    RouteChanged(Route),
    QueryChanged(String),
    PageChanged(usize),
    ViewChanged(ViewMode),
    PanelOpened,
    PanelClosed { restored_scroll: Option<usize> },
    FiltersChanged { active_count: usize },
    FiltersReset,
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    /// State seeded from the first-render viewport width.
    pub fn with_viewport_width(width: u32) -> Self {
        Self {
            view: initial_view_mode(width),
            ..Self::default()
        }
    }

    /// Route change with no queued animation state; the presentation layer
    /// handles transitions on its own.
    pub fn navigate_with_transition(&mut self, path: &str) -> Vec<AppEvent> {
        self.dispatch(AppCommand::Navigate(Route::parse(path)))
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::Navigate(route) => {
                self.route = route.clone();
                vec![AppEvent::RouteChanged(route)]
            }
            AppCommand::SubmitSearch(query) => {
                self.query = query.trim().to_owned();
                self.page = 1;
                vec![
                    AppEvent::QueryChanged(self.query.clone()),
                    AppEvent::PageChanged(1),
                ]
            }
            AppCommand::SetPage {
                requested,
                total_pages,
            } => {
                self.page = clamp_page(requested, total_pages);
                vec![AppEvent::PageChanged(self.page)]
            }
            AppCommand::ToggleView => {
                self.view = self.view.toggled();
                vec![
                    AppEvent::ViewChanged(self.view),
                    self.set_status(self.view.as_str()),
                ]
            }
            AppCommand::ViewportResized { width } => {
                let next = view_mode_after_resize(self.view, width);
                if next == self.view {
                    return Vec::new();
                }
                self.view = next;
                vec![AppEvent::ViewChanged(self.view)]
            }
            AppCommand::OpenPanel { scroll_offset } => {
                self.panel_open = true;
                self.saved_scroll = scroll_offset;
                vec![AppEvent::PanelOpened]
            }
            AppCommand::ClosePanel => {
                self.panel_open = false;
                // Panel state lives only while the panel is open; closing
                // discards every field value.
                self.panel = FilterPanel::new();
                let restored_scroll = self.saved_scroll.take();
                vec![AppEvent::PanelClosed { restored_scroll }]
            }
            AppCommand::EditFilter { field, value } => {
                self.panel.set(field, value);
                vec![AppEvent::FiltersChanged {
                    active_count: self.panel.active_count(),
                }]
            }
            AppCommand::ResetFilters => {
                self.panel.reset();
                self.query.clear();
                self.page = 1;
                vec![
                    AppEvent::FiltersReset,
                    AppEvent::QueryChanged(String::new()),
                    AppEvent::PageChanged(1),
                    self.set_status("filtres réinitialisés"),
                ]
            }
            AppCommand::SetStatus(message) => {
                vec![self.set_status(&message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppState};
    use crate::model::ViewMode;
    use crate::panel::FilterField;
    use crate::route::Route;

    #[test]
    fn viewport_seeds_initial_view_mode() {
        assert_eq!(AppState::with_viewport_width(500).view, ViewMode::List);
        assert_eq!(AppState::with_viewport_width(1200).view, ViewMode::Grid);
    }

    #[test]
    fn search_submit_resets_pagination() {
        let mut state = AppState {
            page: 2,
            ..AppState::default()
        };
        let events = state.dispatch(AppCommand::SubmitSearch("  Villa ".to_owned()));
        assert_eq!(state.query, "Villa");
        assert_eq!(state.page, 1);
        assert_eq!(
            events,
            vec![
                AppEvent::QueryChanged("Villa".to_owned()),
                AppEvent::PageChanged(1),
            ]
        );
    }

    #[test]
    fn page_requests_are_clamped() {
        let mut state = AppState::default();

        state.dispatch(AppCommand::SetPage {
            requested: 0,
            total_pages: 2,
        });
        assert_eq!(state.page, 1);

        state.dispatch(AppCommand::SetPage {
            requested: 7,
            total_pages: 2,
        });
        assert_eq!(state.page, 2);
    }

    #[test]
    fn resize_downgrades_but_never_upgrades() {
        let mut state = AppState::with_viewport_width(1200);
        assert_eq!(state.view, ViewMode::Grid);

        let events = state.dispatch(AppCommand::ViewportResized { width: 500 });
        assert_eq!(state.view, ViewMode::List);
        assert_eq!(events, vec![AppEvent::ViewChanged(ViewMode::List)]);

        let events = state.dispatch(AppCommand::ViewportResized { width: 1200 });
        assert_eq!(state.view, ViewMode::List);
        assert!(events.is_empty());
    }

    #[test]
    fn manual_toggle_takes_precedence_until_next_downward_resize() {
        let mut state = AppState::with_viewport_width(500);
        state.dispatch(AppCommand::ToggleView);
        assert_eq!(state.view, ViewMode::Grid);

        state.dispatch(AppCommand::ViewportResized { width: 1200 });
        assert_eq!(state.view, ViewMode::Grid);

        state.dispatch(AppCommand::ViewportResized { width: 400 });
        assert_eq!(state.view, ViewMode::List);
    }

    #[test]
    fn panel_close_restores_saved_scroll() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenPanel {
            scroll_offset: Some(42),
        });
        assert!(state.panel_open);

        let events = state.dispatch(AppCommand::ClosePanel);
        assert!(!state.panel_open);
        assert_eq!(
            events,
            vec![AppEvent::PanelClosed {
                restored_scroll: Some(42),
            }]
        );
        assert_eq!(state.saved_scroll, None);
    }

    #[test]
    fn panel_fields_are_discarded_on_close() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenPanel {
            scroll_offset: None,
        });
        state.dispatch(AppCommand::EditFilter {
            field: FilterField::Location,
            value: "Abidjan".to_owned(),
        });
        assert_eq!(state.panel.active_count(), 1);

        state.dispatch(AppCommand::ClosePanel);
        assert_eq!(state.panel.get(FilterField::Location), "");
        assert_eq!(state.panel.active_count(), 0);

        state.dispatch(AppCommand::OpenPanel {
            scroll_offset: None,
        });
        assert_eq!(state.panel.active_count(), 0);
    }

    #[test]
    fn filter_edits_report_active_count() {
        let mut state = AppState::default();
        let events = state.dispatch(AppCommand::EditFilter {
            field: FilterField::Location,
            value: "Abidjan".to_owned(),
        });
        assert_eq!(events, vec![AppEvent::FiltersChanged { active_count: 1 }]);
    }

    #[test]
    fn reset_clears_filters_query_and_page() {
        let mut state = AppState {
            query: "villa".to_owned(),
            page: 2,
            ..AppState::default()
        };
        state.dispatch(AppCommand::EditFilter {
            field: FilterField::Bedrooms,
            value: "3".to_owned(),
        });

        let events = state.dispatch(AppCommand::ResetFilters);
        assert_eq!(state.panel.active_count(), 0);
        assert!(state.query.is_empty());
        assert_eq!(state.page, 1);
        assert!(events.contains(&AppEvent::FiltersReset));
        assert!(events.contains(&AppEvent::QueryChanged(String::new())));
        assert!(events.contains(&AppEvent::PageChanged(1)));
    }

    #[test]
    fn navigation_delegates_to_route_parsing() {
        let mut state = AppState::default();
        let events = state.navigate_with_transition("/biens/999");
        assert_eq!(
            state.route,
            Route::PropertyDetail("999".into())
        );
        assert_eq!(events.len(), 1);

        state.navigate_with_transition("/nulle-part");
        assert_eq!(state.route, Route::NotFound);
    }
}
