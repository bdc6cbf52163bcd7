// Admin dashboard - tabbed shell around overview, CRUD, and analytics
//
// Tabs mirror the admin area's sections: Overview, Manage Events,
// Registrations, Analytics, Settings. Digits jump straight to a tab; each
// tab's state lives in its own module.

use crate::config::Config;
use crate::data::DataSource;
use crate::models::RegistrationStatus;
use crate::tui::app::App;
use crate::tui::components::formatters::month_index;
use crate::tui::components::{chart, event_card, stat_tile, stat_tile::StatTile};
use crate::tui::views::{
    analytics, manage_events, registrations, settings, Handled, ManageEventsPage,
    RegistrationsPage,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Tabs},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashTab {
    #[default]
    Overview,
    ManageEvents,
    Registrations,
    Analytics,
    Settings,
}

impl DashTab {
    const ALL: [DashTab; 5] = [
        DashTab::Overview,
        DashTab::ManageEvents,
        DashTab::Registrations,
        DashTab::Analytics,
        DashTab::Settings,
    ];

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

pub struct DashboardPage {
    pub tab: DashTab,
    pub manage: ManageEventsPage,
    pub registrations: RegistrationsPage,
    pub settings: settings::SettingsState,
}

impl DashboardPage {
    pub fn new(config: &Config, data: &dyn DataSource) -> Self {
        Self {
            tab: DashTab::default(),
            manage: ManageEventsPage::new(config, data),
            registrations: RegistrationsPage::new(config, data),
            settings: settings::SettingsState::default(),
        }
    }

    /// Re-snapshot the catalog for every tab (route entry, after mutations)
    pub fn refresh(&mut self, data: &dyn DataSource) {
        self.manage.refresh(data);
        self.registrations.refresh(data);
    }

    pub fn is_editing(&self) -> bool {
        self.manage.is_editing() || self.registrations.is_editing()
    }

    pub fn has_pending(&self) -> bool {
        self.manage.has_pending()
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Handled {
    // Digit shortcuts switch tabs unless a form/search is capturing text
    if !app.dashboard.is_editing() {
        if let KeyCode::Char(c @ '1'..='5') = key.code {
            let idx = (c as usize) - ('1' as usize);
            app.dashboard.tab = DashTab::ALL[idx];
            return Handled::Yes;
        }
    }

    match app.dashboard.tab {
        DashTab::Overview => Handled::No,
        DashTab::ManageEvents => manage_events::handle_key(app, key),
        DashTab::Registrations => registrations::handle_key(app, key),
        DashTab::Analytics => Handled::No,
        DashTab::Settings => settings::handle_key(app, key),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_tab_bar(f, chunks[0], app);

    match app.dashboard.tab {
        DashTab::Overview => render_overview(f, chunks[1], app),
        DashTab::ManageEvents => manage_events::render(f, chunks[1], app),
        DashTab::Registrations => registrations::render(f, chunks[1], app),
        DashTab::Analytics => analytics::render(f, chunks[1], app),
        DashTab::Settings => settings::render(f, chunks[1], app),
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let titles = vec![
        " 1│Overview ",
        " 2│Manage Events ",
        " 3│Registrations ",
        " 4│Analytics ",
        " 5│Settings ",
    ];

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border)),
        )
        .select(app.dashboard.tab.index())
        .style(Style::default().fg(theme.muted))
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn render_overview(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let events = app.data.events();
    let registrations = app.data.registrations();
    let departments = app.data.departments();

    let now = chrono::Utc::now();
    let upcoming = events.iter().filter(|e| e.start_at > now).count() as u64;
    let total_seated: u64 = events.iter().map(|e| e.registered_count as u64).sum();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // stat tiles
            Constraint::Min(5),    // recent events
            Constraint::Length(5), // monthly trend
        ])
        .split(area);

    let tiles = [
        StatTile::new("Total Events", events.len() as u64, theme.accent),
        StatTile::new("Upcoming", upcoming, theme.success),
        StatTile::new("Registrations", total_seated, theme.info),
        StatTile::new("Departments", departments.len() as u64, theme.warning),
    ];
    stat_tile::render_row(f, chunks[0], theme, &tiles);

    // Recent events: highest registration counts first
    let mut recent = events.clone();
    recent.sort_by(|a, b| b.registered_count.cmp(&a.registered_count));
    let width = chunks[1].width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = recent
        .iter()
        .take(5)
        .map(|event| {
            let line = event_card::event_line(event, width);
            ListItem::new(line).style(Style::default().fg(theme.foreground))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Top Events by Registrations "),
    );
    f.render_widget(list, chunks[1]);

    // Monthly registration trend from actual timestamps
    let mut by_month = [0u64; 12];
    for registration in &registrations {
        if registration.status != RegistrationStatus::Cancelled {
            by_month[month_index(registration.timestamp)] += 1;
        }
    }
    chart::render_sparkline(
        f,
        chunks[2],
        theme,
        "Registrations by Month",
        &by_month,
        theme.accent,
    );
}
