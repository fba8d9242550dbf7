//! Header bar widget
//!
//! Shows the app title, the current page, the backend URL and the log
//! stream connection state.

use igpanel_app::ConnectionState;
use igpanel_core::Page;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct MainHeader<'a> {
    page: Page,
    server: &'a str,
    connection: ConnectionState,
}

impl<'a> MainHeader<'a> {
    pub fn new(page: Page, server: &'a str, connection: ConnectionState) -> Self {
        Self {
            page,
            server,
            connection,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(" igpanel ", styles::accent_bold()),
            Span::styled("│ ", styles::text_muted()),
            Span::styled(self.page.title(), styles::text_primary()),
        ]);
        Paragraph::new(title).render(inner, buf);

        let (icon, icon_style) = styles::connection_indicator(self.connection);
        let status = Line::from(vec![
            Span::styled(self.server, styles::text_secondary()),
            Span::raw("  "),
            Span::styled(icon, icon_style),
            Span::raw(" "),
            Span::styled(self.connection.label(), icon_style),
            Span::raw(" "),
        ]);
        Paragraph::new(status)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
