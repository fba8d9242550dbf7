//! Init page status panel

use igpanel_core::InitState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct InitPanel {
    state: InitState,
    trigger_enabled: bool,
    in_flight: bool,
}

impl InitPanel {
    pub fn new(state: InitState, trigger_enabled: bool, in_flight: bool) -> Self {
        Self {
            state,
            trigger_enabled,
            in_flight,
        }
    }

    fn state_label(&self) -> &'static str {
        match self.state {
            InitState::Pending => "Waiting for initialization",
            InitState::Succeeded => "Application is ready",
            InitState::Failed => "Application cannot work",
        }
    }

    fn trigger_line(&self) -> Line<'static> {
        if self.in_flight {
            return Line::from(Span::styled(
                "Starting initialization...",
                styles::text_secondary(),
            ));
        }
        if self.trigger_enabled {
            Line::from(vec![
                Span::styled("[Enter]", styles::keybinding()),
                Span::styled(" Start initialization", styles::text_primary()),
            ])
        } else {
            Line::from(Span::styled(
                "Initialization in progress, follow the log below",
                styles::text_muted(),
            ))
        }
    }
}

impl Widget for InitPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.trigger_enabled)
            .title(Span::styled(" Initialization ", styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(vec![
                Span::styled("Status: ", styles::text_secondary()),
                Span::styled(self.state_label(), styles::init_state(self.state)),
            ]),
            Line::default(),
            self.trigger_line(),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
