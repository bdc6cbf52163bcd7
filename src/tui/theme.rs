// Theme system - bundled named themes with semantic colors
//
// Views never pick raw colors; they ask the theme for the meaning they are
// rendering (event type chip, registration status, focused border). Themes
// are bundled and selected by name from config, cyclable at runtime from
// the dashboard settings tab.

use crate::models::{EventStatus, EventType, RegistrationStatus};
use ratatui::style::Color;
use ratatui::widgets::BorderType;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Base ────────────────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── Chrome ──────────────────────────────────────────────
    pub border: Color,
    pub highlight: Color, // focused border / active tab
    pub selection: Color, // selected row background
    pub selection_fg: Color,
    pub title: Color,
    pub status_bar: Color,
    pub border_type: BorderType,

    // ─── Semantic accents ────────────────────────────────────
    pub accent: Color, // primary actions, links
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
}

impl Theme {
    /// Chip color for an event type
    pub fn event_type_color(&self, kind: EventType) -> Color {
        match kind {
            EventType::Tech => self.success,
            EventType::Cultural => self.info,
            EventType::Workshop => self.accent,
            EventType::Seminar => self.warning,
            EventType::Competition => self.danger,
            EventType::Hackathon => self.highlight,
            EventType::Other => self.muted,
        }
    }

    /// Chip color for an event lifecycle status
    pub fn event_status_color(&self, status: EventStatus) -> Color {
        match status {
            EventStatus::Draft => self.muted,
            EventStatus::Upcoming => self.accent,
            EventStatus::Ongoing => self.success,
            EventStatus::Completed => self.danger,
        }
    }

    /// Chip color for a registration status
    pub fn registration_status_color(&self, status: RegistrationStatus) -> Color {
        match status {
            RegistrationStatus::Registered => self.accent,
            RegistrationStatus::Attended => self.success,
            RegistrationStatus::Cancelled => self.danger,
        }
    }
}

/// Bundled themes, cycled in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    CampusDark,
    CampusLight,
    Terminal,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [
        ThemeKind::CampusDark,
        ThemeKind::CampusLight,
        ThemeKind::Terminal,
    ];

    /// Resolve a configured theme name, falling back to the default
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.theme().name.eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        match self {
            ThemeKind::CampusDark => ThemeKind::CampusLight,
            ThemeKind::CampusLight => ThemeKind::Terminal,
            ThemeKind::Terminal => ThemeKind::CampusDark,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ThemeKind::CampusDark => ThemeKind::Terminal,
            ThemeKind::CampusLight => ThemeKind::CampusDark,
            ThemeKind::Terminal => ThemeKind::CampusLight,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::CampusDark => campus_dark(),
            ThemeKind::CampusLight => campus_light(),
            ThemeKind::Terminal => terminal_ansi(),
        }
    }
}

fn campus_dark() -> Theme {
    Theme {
        name: "Campus Dark",
        background: Color::Rgb(15, 18, 25),
        foreground: Color::Rgb(225, 228, 234),
        muted: Color::Rgb(120, 130, 150),
        border: Color::Rgb(55, 62, 78),
        highlight: Color::Rgb(255, 140, 90),
        selection: Color::Rgb(48, 56, 74),
        selection_fg: Color::Rgb(240, 242, 246),
        title: Color::Rgb(255, 140, 90),
        status_bar: Color::Rgb(150, 158, 176),
        border_type: BorderType::Rounded,
        accent: Color::Rgb(110, 168, 255),
        success: Color::Rgb(120, 200, 130),
        warning: Color::Rgb(235, 190, 90),
        danger: Color::Rgb(235, 105, 100),
        info: Color::Rgb(190, 140, 240),
    }
}

fn campus_light() -> Theme {
    Theme {
        name: "Campus Light",
        background: Color::Rgb(248, 248, 245),
        foreground: Color::Rgb(40, 44, 52),
        muted: Color::Rgb(130, 135, 145),
        border: Color::Rgb(200, 202, 208),
        highlight: Color::Rgb(205, 92, 45),
        selection: Color::Rgb(222, 228, 240),
        selection_fg: Color::Rgb(30, 34, 42),
        title: Color::Rgb(205, 92, 45),
        status_bar: Color::Rgb(110, 115, 125),
        border_type: BorderType::Rounded,
        accent: Color::Rgb(40, 100, 200),
        success: Color::Rgb(35, 140, 70),
        warning: Color::Rgb(180, 130, 20),
        danger: Color::Rgb(190, 50, 50),
        info: Color::Rgb(130, 70, 190),
    }
}

/// Pure ANSI palette for terminals with custom color schemes
fn terminal_ansi() -> Theme {
    Theme {
        name: "Terminal",
        background: Color::Reset,
        foreground: Color::Reset,
        muted: Color::DarkGray,
        border: Color::DarkGray,
        highlight: Color::Yellow,
        selection: Color::Blue,
        selection_fg: Color::White,
        title: Color::Yellow,
        status_bar: Color::Gray,
        border_type: BorderType::Plain,
        accent: Color::Blue,
        success: Color::Green,
        warning: Color::Yellow,
        danger: Color::Red,
        info: Color::Magenta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_matches_case_insensitively() {
        assert_eq!(ThemeKind::from_name("campus light"), ThemeKind::CampusLight);
        assert_eq!(ThemeKind::from_name("Terminal"), ThemeKind::Terminal);
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(ThemeKind::from_name("dracula"), ThemeKind::CampusDark);
    }

    #[test]
    fn cycle_visits_every_theme_and_wraps() {
        let mut kind = ThemeKind::default();
        let mut seen = vec![kind];
        for _ in 0..ThemeKind::ALL.len() {
            kind = kind.next();
            seen.push(kind);
        }
        assert_eq!(seen.first(), seen.last());
        for k in ThemeKind::ALL {
            assert!(seen.contains(&k));
        }
        assert_eq!(ThemeKind::CampusDark.next().prev(), ThemeKind::CampusDark);
    }
}
