//! Modal prompt shown when initialization settles

use igpanel_app::Prompt;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::modal_overlay::{centered_rect, dim_background};
use super::text;
use crate::theme::{palette, styles};

const DIALOG_WIDTH: u16 = 56;

pub struct PromptDialog<'a> {
    prompt: &'a Prompt,
}

impl<'a> PromptDialog<'a> {
    pub fn new(prompt: &'a Prompt) -> Self {
        Self { prompt }
    }

    /// Wrapped line count of the message, with one spare line for word breaks
    fn message_lines(&self, text_width: u16) -> u16 {
        let width = text_width.max(1) as usize;
        let columns = text::display_width(&self.prompt.message);
        columns.div_ceil(width) as u16 + 1
    }

    fn dialog_rect(&self, area: Rect) -> Rect {
        let width = DIALOG_WIDTH.min(area.width);
        // borders, padding above and below the text, footer
        let height = self.message_lines(width.saturating_sub(4)) + 5;
        centered_rect(width, height, area)
    }
}

impl Widget for PromptDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let dialog = self.dialog_rect(area);
        Clear.render(dialog, buf);

        let accent = styles::prompt(self.prompt.kind);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(accent)
            .title(Span::styled(
                format!(" {} ", self.prompt.title),
                accent.add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        Paragraph::new(Line::from(Span::styled(
            self.prompt.message.as_str(),
            styles::text_primary(),
        )))
        .wrap(Wrap { trim: true })
        .render(body.inner(Margin::new(1, 1)), buf);

        Paragraph::new(Line::from(vec![
            Span::styled("[Enter]", styles::keybinding()),
            Span::styled(" OK", styles::text_secondary()),
        ]))
        .alignment(Alignment::Center)
        .render(footer, buf);
    }
}
