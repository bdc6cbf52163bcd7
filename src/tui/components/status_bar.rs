// Status bar - bottom line with key hints and submission spinner

use crate::tui::app::{App, Route};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Key hints for the current route, trimmed on narrow terminals
fn hints(app: &App) -> &'static str {
    match app.route {
        Route::Home => "↑↓:browse  Enter:open  [ ]:switch screen  ?:help  q:quit",
        Route::Events => {
            "/:search  d/t:facets  c:clear  ←→:page  ↑↓:select  Enter:detail  v:view  ?:help"
        }
        Route::EventDetail => "r:register  ↑↓:scroll  y:copy  Esc:back",
        Route::Departments => "↑↓:select  ←→:page  Enter:browse events  Esc:back",
        Route::Dashboard => "1-5:tabs  /:search  ↑↓:select  ?:help  Esc:back",
        Route::Profile => "e:edit  ↑↓:rows  Esc:back",
        Route::About | Route::Contact => "↑↓:scroll  Esc:back",
        Route::Login | Route::Signup | Route::ForgotPassword => {
            "Tab:next field  Enter:submit  Esc:back"
        }
        Route::NotFound => "Esc:back  F1:home",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let spinner = if app.has_pending_submission() {
        format!("{} submitting…  │ ", app.spinner_char())
    } else {
        String::new()
    };

    let text = if bp.at_least(Breakpoint::Normal) {
        format!(" {} │ {}{}", app.route.label(), spinner, hints(app))
    } else {
        format!(" {} │ {}?:help q:quit", app.route.label(), spinner)
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(theme.status_bar))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );

    f.render_widget(status, area);
}
