//! Transient notifications stacked in the top-right corner

use igpanel_app::{Toast, ToastQueue};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::text;
use crate::theme::{palette, styles};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

pub struct ToastStack<'a> {
    queue: &'a ToastQueue,
}

impl<'a> ToastStack<'a> {
    pub fn new(queue: &'a ToastQueue) -> Self {
        Self { queue }
    }

    fn render_toast(toast: &Toast, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let style = styles::toast(toast.kind);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        // Single line; overlong messages are cut with an ellipsis
        let room = inner.width as usize;
        let label = format!("{} ", toast.kind.label());
        let budget = room.saturating_sub(text::display_width(&label));
        let message = text::truncate(&toast.message, budget);

        Paragraph::new(Line::from(vec![
            Span::styled(label, style),
            Span::styled(message, styles::text_primary()),
        ]))
        .render(inner, buf);
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        let x = area.x + area.width.saturating_sub(width + 1);
        let mut y = area.y;

        // Newest on top
        for toast in self.queue.visible().collect::<Vec<_>>().into_iter().rev() {
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }
            Self::render_toast(toast, Rect::new(x, y, width, TOAST_HEIGHT), buf);
            y += TOAST_HEIGHT;
        }
    }
}
