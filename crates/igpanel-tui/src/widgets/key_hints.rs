//! Footer with the key bindings of the current page

use igpanel_app::ActionKind;
use igpanel_core::Page;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct KeyHints {
    page: Page,
    prompt_open: bool,
}

impl KeyHints {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            prompt_open: false,
        }
    }

    pub fn prompt_open(mut self, open: bool) -> Self {
        self.prompt_open = open;
        self
    }

    fn hints(&self) -> Vec<(String, &'static str)> {
        if self.prompt_open {
            return vec![("Enter".into(), "Dismiss")];
        }
        match self.page {
            Page::Init => vec![
                ("Enter".into(), "Start"),
                ("c".into(), "Clear"),
                ("↑↓".into(), "Scroll"),
                ("q".into(), "Quit"),
            ],
            Page::Dashboard => {
                let mut hints: Vec<(String, &'static str)> = ActionKind::DASHBOARD
                    .iter()
                    .enumerate()
                    .map(|(i, kind)| (format!("F{}", i + 1), kind.label()))
                    .collect();
                hints.push(("F9".into(), "Refresh"));
                hints.push(("F10".into(), "Clear"));
                hints.push(("Tab".into(), "Field"));
                hints.push(("Esc".into(), "Quit"));
                hints
            }
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
