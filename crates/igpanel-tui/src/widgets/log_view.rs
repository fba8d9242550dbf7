//! Scrollable log view colored by severity

use igpanel_app::log_view_state::LogViewState;
use igpanel_app::Placeholder;
use igpanel_core::LogEntry;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

use crate::theme::{palette, styles};

pub struct LogView<'a> {
    entries: &'a [LogEntry],
    placeholder: Option<Placeholder>,
    show_timestamps: bool,
}

impl<'a> LogView<'a> {
    pub fn new(entries: &'a [LogEntry]) -> Self {
        Self {
            entries,
            placeholder: None,
            show_timestamps: true,
        }
    }

    pub fn placeholder(mut self, placeholder: Option<Placeholder>) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn show_timestamps(mut self, show: bool) -> Self {
        self.show_timestamps = show;
        self
    }

    fn format_entry(&self, entry: &'a LogEntry) -> Line<'a> {
        let mut spans = Vec::with_capacity(2);
        if self.show_timestamps {
            spans.push(Span::styled(
                format!("{} ", entry.formatted_time()),
                styles::text_muted(),
            ));
        }
        spans.push(Span::styled(
            entry.line.as_str(),
            styles::severity(entry.severity),
        ));
        Line::from(spans)
    }

    fn render_placeholder(&self, area: Rect, buf: &mut Buffer) {
        let text = self
            .placeholder
            .unwrap_or(Placeholder::Empty)
            .text();
        let y = area.y + area.height / 2;
        Paragraph::new(Span::styled(text, styles::text_muted()))
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, y, area.width, 1.min(area.height)), buf);
    }
}

impl StatefulWidget for LogView<'_> {
    type State = LogViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = format!(" Logs ({}) ", self.entries.len());
        let block = styles::glass_block(false)
            .title(Span::styled(title, styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        state.update_content_size(self.entries.len(), inner.height as usize);

        if self.entries.is_empty() {
            self.render_placeholder(inner, buf);
            return;
        }

        let (start, end) = state.visible_range();
        let lines: Vec<Line> = self.entries[start..end]
            .iter()
            .map(|entry| self.format_entry(entry))
            .collect();
        Paragraph::new(lines).render(inner, buf);

        if state.total_lines > state.visible_lines {
            let max_offset = state.total_lines.saturating_sub(state.visible_lines);
            let mut scrollbar_state = ScrollbarState::new(max_offset).position(state.offset);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .render(area, buf, &mut scrollbar_state);
        }
    }
}
