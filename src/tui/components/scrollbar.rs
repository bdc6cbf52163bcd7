//! Scrollbar rendering helper
//!
//! One function shared by every scrollable panel instead of copy-pasted
//! scrollbar math. Renders nothing when content fits the viewport.

use ratatui::{
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render a vertical scrollbar on the right edge of `area`
pub fn render_scrollbar(f: &mut Frame, area: Rect, total: usize, viewport: usize, offset: usize) {
    if total <= viewport {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None);

    let content_length = total.saturating_sub(viewport);
    let mut state = ScrollbarState::new(content_length).position(offset.min(content_length));

    f.render_stateful_widget(scrollbar, area, &mut state);
}
