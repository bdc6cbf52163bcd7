// Application state
//
// App owns the current route, per-page controller state, the injected data
// source, and the shared chrome (theme, toast, modal, input tracking).
// Navigation pushes onto a small back stack so Esc walks backwards the way
// a browser would; entering a route resets that page's scroll/selection,
// which reproduces the scroll-to-top-on-navigation behavior.

use crate::backend::{StubBackend, SubmitError, SubmitKind, SubmitOutcome};
use crate::config::Config;
use crate::data::DataSource;
use crate::logging::LogBuffer;
use crate::models::User;
use crate::tui::components::Toast;
use crate::tui::input::InputHandler;
use crate::tui::modal::Modal;
use crate::tui::theme::{Theme, ThemeKind};
use crate::tui::views::{
    AuthPages, DashboardPage, DepartmentsPage, EventDetailPage, EventsPage, HomePage, InfoPage,
    ProfilePage,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Top-level navigation surface. Each variant is a screen; the five tabs in
/// NAV_TABS are reachable from the navbar, the rest through flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Events,
    EventDetail,
    Departments,
    Dashboard,
    Profile,
    About,
    Contact,
    Login,
    Signup,
    ForgotPassword,
    NotFound,
}

impl Route {
    /// Routes shown in the navbar, in display order
    pub const NAV_TABS: [Route; 5] = [
        Route::Home,
        Route::Events,
        Route::Departments,
        Route::Dashboard,
        Route::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Events => "Events",
            Route::EventDetail => "Event",
            Route::Departments => "Departments",
            Route::Dashboard => "Dashboard",
            Route::Profile => "Profile",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::Login => "Sign In",
            Route::Signup => "Sign Up",
            Route::ForgotPassword => "Reset Password",
            Route::NotFound => "Not Found",
        }
    }

    /// The navbar tab this route highlights (detail pages highlight their
    /// parent tab)
    pub fn nav_tab(&self) -> Option<Route> {
        match self {
            Route::Home | Route::About | Route::Contact => Some(Route::Home),
            Route::Events | Route::EventDetail => Some(Route::Events),
            Route::Departments => Some(Route::Departments),
            Route::Dashboard => Some(Route::Dashboard),
            Route::Profile => Some(Route::Profile),
            _ => None,
        }
    }
}

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub theme_kind: ThemeKind,
    pub use_theme_background: bool,

    pub data: Arc<dyn DataSource>,
    pub backend: StubBackend,
    /// Cloned into every spawned submission so outcomes come back to the loop
    pub outcome_tx: mpsc::Sender<SubmitOutcome>,

    pub log_buffer: LogBuffer,
    pub should_quit: bool,

    pub route: Route,
    back_stack: Vec<Route>,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    input: InputHandler,
    pub animation_frame: usize,

    /// Logged-in user, if any. The stub backend always "succeeds", so this
    /// is set from the data source's profile user on login/signup.
    pub session: Option<User>,

    // Per-route controller state
    pub home: HomePage,
    pub events_page: EventsPage,
    pub detail: EventDetailPage,
    pub departments_page: DepartmentsPage,
    pub dashboard: DashboardPage,
    pub profile_page: ProfilePage,
    pub auth: AuthPages,
    pub info: InfoPage,
}

impl App {
    pub fn new(
        config: Config,
        data: Arc<dyn DataSource>,
        log_buffer: LogBuffer,
        outcome_tx: mpsc::Sender<SubmitOutcome>,
    ) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        let backend =
            StubBackend::new(std::time::Duration::from_millis(config.submit_latency_ms));

        let events_page = EventsPage::new(&config, data.as_ref());
        let dashboard = DashboardPage::new(&config, data.as_ref());
        let profile_page = ProfilePage::new(data.as_ref());

        Self {
            theme: theme_kind.theme(),
            theme_kind,
            use_theme_background: config.use_theme_background,
            backend,
            data,
            outcome_tx,
            log_buffer,
            should_quit: false,
            route: Route::default(),
            back_stack: Vec::new(),
            modal: None,
            toast: None,
            input: InputHandler::default(),
            animation_frame: 0,
            session: None,
            home: HomePage::default(),
            events_page,
            detail: EventDetailPage::default(),
            departments_page: DepartmentsPage::default(),
            dashboard,
            profile_page,
            auth: AuthPages::default(),
            info: InfoPage::default(),
            config,
        }
    }

    // ─── Navigation ──────────────────────────────────────────

    /// Switch to a route, remembering where we came from
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.back_stack.push(self.route);
        if self.back_stack.len() > 16 {
            self.back_stack.remove(0);
        }
        self.route = route;
        self.on_enter_route();
    }

    /// Esc behavior: walk back through visited routes, Home as the floor
    pub fn go_back(&mut self) {
        let previous = self.back_stack.pop().unwrap_or(Route::Home);
        self.route = previous;
        self.on_enter_route();
    }

    /// Open the detail screen for an event id. Unknown ids land on the
    /// NotFound screen instead of silently showing some fixed record.
    pub fn open_event(&mut self, event_id: &str) {
        match self.data.event(event_id) {
            Ok(event) => {
                self.detail.load(event);
                self.navigate(Route::EventDetail);
            }
            Err(err) => {
                tracing::warn!(%event_id, %err, "event lookup failed");
                self.navigate(Route::NotFound);
            }
        }
    }

    /// Per-route entry housekeeping: scroll restoration and data refresh
    fn on_enter_route(&mut self) {
        match self.route {
            Route::Home => self.home.reset_scroll(),
            Route::Events => self.events_page.refresh(self.data.as_ref()),
            Route::Departments => self.departments_page.reset_scroll(),
            Route::Dashboard => self.dashboard.refresh(self.data.as_ref()),
            Route::Profile => self.profile_page.reload(self.data.as_ref()),
            Route::About | Route::Contact => self.info.reset_scroll(),
            _ => {}
        }
    }

    // ─── Chrome ──────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Advance the spinner frame (called on each tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    pub fn prev_theme(&mut self) {
        self.theme_kind = self.theme_kind.prev();
        self.theme = self.theme_kind.theme();
    }

    // ─── Input bookkeeping ───────────────────────────────────

    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input.handle_key_release(key);
    }

    /// Whether the focused view is capturing raw text (search box, form).
    /// Global shortcuts are suspended while this is true.
    pub fn in_text_entry(&self) -> bool {
        match self.route {
            Route::Events => self.events_page.is_editing(),
            Route::EventDetail => self.detail.is_editing(),
            Route::Dashboard => self.dashboard.is_editing(),
            Route::Profile => self.profile_page.is_editing(),
            Route::Login | Route::Signup | Route::ForgotPassword => true,
            _ => false,
        }
    }

    /// True while any submission is in flight (spinner in the status bar)
    pub fn has_pending_submission(&self) -> bool {
        self.detail.has_pending()
            || self.dashboard.has_pending()
            || self.profile_page.has_pending()
            || self.auth.has_pending()
    }

    // ─── Submission outcomes ─────────────────────────────────

    /// Route a finished submission back to the page that started it
    pub fn handle_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome.kind {
            SubmitKind::Login | SubmitKind::Signup => {
                self.auth.clear_pending();
                match outcome.result {
                    Ok(message) => {
                        self.session = Some(self.data.current_user());
                        self.auth.reset_forms();
                        self.show_toast(format!("✓ {message}"));
                        self.navigate(Route::Home);
                    }
                    Err(err) => self.fail_auth(outcome.kind, err),
                }
            }
            SubmitKind::PasswordReset => {
                self.auth.clear_pending();
                match outcome.result {
                    Ok(message) => {
                        self.show_toast(format!("✓ {message}"));
                        self.navigate(Route::Login);
                    }
                    Err(err) => self.fail_auth(outcome.kind, err),
                }
            }
            SubmitKind::EventRegistration => {
                self.detail.clear_pending();
                match outcome.result {
                    Ok(message) => {
                        self.detail.close_form();
                        // Pull the bumped registered count back in
                        if let Some(id) = self.detail.event_id() {
                            if let Ok(event) = self.data.event(&id) {
                                self.detail.load(event);
                            }
                        }
                        self.show_toast(format!("✓ {message}"));
                    }
                    Err(err) => self.detail.set_form_error(&err),
                }
            }
            SubmitKind::ProfileSave => {
                self.profile_page.clear_pending();
                match outcome.result {
                    Ok(message) => {
                        self.profile_page.finish_edit(self.data.as_ref());
                        if self.session.is_some() {
                            self.session = Some(self.data.current_user());
                        }
                        self.show_toast(format!("✓ {message}"));
                    }
                    Err(err) => self.profile_page.set_form_error(&err),
                }
            }
            SubmitKind::EventSave => {
                self.dashboard.manage.clear_pending();
                match outcome.result {
                    Ok(message) => {
                        self.dashboard.manage.close_editor();
                        self.dashboard.refresh(self.data.as_ref());
                        self.show_toast(format!("✓ {message}"));
                    }
                    Err(err) => self.dashboard.manage.set_editor_error(&err),
                }
            }
        }
    }

    fn fail_auth(&mut self, kind: SubmitKind, err: SubmitError) {
        self.auth.set_error(kind, &err);
        self.show_toast(format!("✗ {err}"));
    }
}
