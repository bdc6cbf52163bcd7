// Analytics - charts computed from the data source
//
// Aggregates are derived from the actual catalog and registration rows at
// render time rather than from frozen chart arrays, so the charts move when
// admins mutate data. The aggregate functions are pure and unit-tested.

use crate::models::{Event, Registration, RegistrationStatus};
use crate::tui::app::App;
use crate::tui::components::chart;
use crate::tui::components::formatters::{month_abbrev, month_index};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Event counts per department label, first-seen order
pub fn events_by_department(events: &[Event]) -> Vec<(String, u64)> {
    let mut out: Vec<(String, u64)> = Vec::new();
    for event in events {
        match out.iter_mut().find(|(label, _)| label == &event.department) {
            Some((_, count)) => *count += 1,
            None => out.push((event.department.clone(), 1)),
        }
    }
    out
}

/// Event counts per type, most frequent first
pub fn events_by_type(events: &[Event]) -> Vec<(String, u64)> {
    let mut out: Vec<(String, u64)> = Vec::new();
    for event in events {
        let label = event.kind.label().to_string();
        match out.iter_mut().find(|(l, _)| l == &label) {
            Some((_, count)) => *count += 1,
            None => out.push((label, 1)),
        }
    }
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Non-cancelled registrations bucketed into 12 months
pub fn registrations_by_month(registrations: &[Registration]) -> [u64; 12] {
    let mut buckets = [0u64; 12];
    for registration in registrations {
        if registration.status != RegistrationStatus::Cancelled {
            buckets[month_index(registration.timestamp)] += 1;
        }
    }
    buckets
}

/// Row counts per registration status, fixed enum order
pub fn registrations_by_status(registrations: &[Registration]) -> Vec<(String, u64)> {
    RegistrationStatus::ALL
        .iter()
        .map(|status| {
            let count = registrations.iter().filter(|r| r.status == *status).count() as u64;
            (status.label().to_string(), count)
        })
        .collect()
}

/// The events with the highest fill rate (registered/capacity)
pub fn top_fill_rates(events: &[Event], limit: usize) -> Vec<(String, f64)> {
    let mut rates: Vec<(String, f64)> = events
        .iter()
        .map(|e| (e.title.clone(), e.fill_percent()))
        .collect();
    rates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    rates.truncate(limit);
    rates
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let events = app.data.events();
    let registrations = app.data.registrations();

    let by_department = events_by_department(&events);
    let by_type = events_by_type(&events);
    let by_month = registrations_by_month(&registrations);
    let by_status = registrations_by_status(&registrations);
    let fill = top_fill_rates(&events, 3);

    // Title the trend with its peak month so the sparkline reads at a glance
    let peak = by_month
        .iter()
        .enumerate()
        .max_by_key(|(_, count)| **count)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    let trend_title = format!("Registrations by Month · peak {}", month_abbrev(peak as u32 + 1));

    let wide = Breakpoint::from_width(area.width).at_least(Breakpoint::Normal);

    if wide {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        chart::render_bar_chart(
            f,
            top[0],
            theme,
            "Events by Department",
            &by_department,
            theme.accent,
        );
        chart::render_bar_chart(f, top[1], theme, "Events by Type", &by_type, theme.info);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ])
            .split(rows[1]);
        chart::render_sparkline(
            f,
            bottom[0],
            theme,
            &trend_title,
            &by_month,
            theme.success,
        );
        chart::render_bar_chart(
            f,
            bottom[1],
            theme,
            "Registrations by Status",
            &by_status,
            theme.warning,
        );
        render_fill_gauges(f, bottom[2], app, &fill);
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ])
            .split(area);
        chart::render_bar_chart(
            f,
            rows[0],
            theme,
            "Events by Department",
            &by_department,
            theme.accent,
        );
        chart::render_sparkline(
            f,
            rows[1],
            theme,
            &trend_title,
            &by_month,
            theme.success,
        );
        chart::render_bar_chart(
            f,
            rows[2],
            theme,
            "Registrations by Status",
            &by_status,
            theme.warning,
        );
    }
}

fn render_fill_gauges(f: &mut Frame, area: Rect, app: &App, fill: &[(String, f64)]) {
    if fill.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = fill.iter().map(|_| Constraint::Length(3)).collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for ((title, percent), chunk) in fill.iter().zip(chunks.iter()) {
        chart::render_gauge(f, *chunk, &app.theme, title, *percent, app.theme.highlight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataSource, InMemoryDataSource};

    #[test]
    fn department_counts_cover_the_seed() {
        let data = InMemoryDataSource::seeded();
        let counts = events_by_department(&data.events());

        let get = |label: &str| {
            counts
                .iter()
                .find(|(l, _)| l == label)
                .map(|(_, c)| *c)
                .unwrap_or(0)
        };
        assert_eq!(get("Computer Science"), 2);
        assert_eq!(get("Business"), 2);
        assert_eq!(get("Electronics"), 1);
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<u64>(), 8);
    }

    #[test]
    fn type_counts_sort_descending() {
        let data = InMemoryDataSource::seeded();
        let counts = events_by_type(&data.events());
        assert_eq!(counts[0].0, "Tech");
        assert_eq!(counts[0].1, 4);
        for pair in counts.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn monthly_buckets_skip_cancelled_rows() {
        let data = InMemoryDataSource::seeded();
        let buckets = registrations_by_month(&data.registrations());
        // 7 rows, 1 cancelled; seed timestamps fall in Sep and Oct
        assert_eq!(buckets.iter().sum::<u64>(), 6);
        assert_eq!(buckets[8], 1); // September
        assert_eq!(buckets[9], 5); // October
    }

    #[test]
    fn status_counts_match_the_seed() {
        let data = InMemoryDataSource::seeded();
        let counts = registrations_by_status(&data.registrations());
        assert_eq!(
            counts,
            vec![
                ("Registered".to_string(), 4),
                ("Attended".to_string(), 2),
                ("Cancelled".to_string(), 1),
            ]
        );
    }

    #[test]
    fn fill_rates_rank_the_fullest_events() {
        let data = InMemoryDataSource::seeded();
        let top = top_fill_rates(&data.events(), 2);
        assert_eq!(top.len(), 2);
        // Web Development Bootcamp is the fullest seed event (29/35)
        assert_eq!(top[0].0, "Web Development Bootcamp");
        assert!(top[0].1 >= top[1].1);
    }
}
