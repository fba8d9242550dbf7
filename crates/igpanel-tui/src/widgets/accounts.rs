//! Dashboard account list

use igpanel_core::AccountStatusSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub struct AccountsPanel<'a> {
    snapshot: Option<&'a AccountStatusSnapshot>,
}

impl<'a> AccountsPanel<'a> {
    pub fn new(snapshot: Option<&'a AccountStatusSnapshot>) -> Self {
        Self { snapshot }
    }
}

impl Widget for AccountsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.snapshot {
            Some(s) => format!(" Accounts {}/{} ", s.logged_in_count(), s.accounts.len()),
            None => " Accounts ".to_string(),
        };
        let block = styles::glass_block(false)
            .title(Span::styled(title, styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(snapshot) = self.snapshot else {
            Paragraph::new(Span::styled("Loading accounts...", styles::text_muted()))
                .render(inner, buf);
            return;
        };

        if snapshot.is_empty() {
            let text = snapshot.message.as_deref().unwrap_or("No accounts");
            Paragraph::new(Span::styled(text, styles::text_muted()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = snapshot
            .accounts
            .iter()
            .map(|account| {
                let (icon, label, style) = if account.logged_in {
                    ("●", "logged in", Style::default().fg(palette::STATUS_GREEN))
                } else {
                    ("○", "logged out", Style::default().fg(palette::STATUS_RED))
                };
                let mut spans = vec![
                    Span::styled(icon, style),
                    Span::raw(" "),
                    Span::styled(account.username.as_str(), styles::text_primary()),
                    Span::raw(" "),
                    Span::styled(label, style),
                ];
                if let Some(status) = &account.status {
                    spans.push(Span::styled(format!(" {status}"), styles::text_muted()));
                }
                Line::from(spans)
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use igpanel_core::AccountStatus;

    fn area() -> Rect {
        Rect::new(0, 0, 40, 8)
    }

    #[test]
    fn test_loading_state() {
        let mut term = TestTerminal::new();
        term.render_widget(AccountsPanel::new(None), area());
        assert!(term.buffer_contains("Loading accounts"));
    }

    #[test]
    fn test_lists_accounts() {
        let snapshot = AccountStatusSnapshot {
            initialized: true,
            accounts: vec![
                AccountStatus {
                    username: "alice".into(),
                    logged_in: true,
                    status: None,
                },
                AccountStatus {
                    username: "bob".into(),
                    logged_in: false,
                    status: Some("challenge".into()),
                },
            ],
            message: None,
        };
        let mut term = TestTerminal::new();
        term.render_widget(AccountsPanel::new(Some(&snapshot)), area());

        assert!(term.buffer_contains("Accounts 1/2"));
        assert!(term.line_contains(1, "alice logged in"));
        assert!(term.line_contains(2, "bob logged out challenge"));
    }

    #[test]
    fn test_empty_shows_backend_message() {
        let snapshot = AccountStatusSnapshot {
            initialized: false,
            accounts: Vec::new(),
            message: Some("No manager".into()),
        };
        let mut term = TestTerminal::new();
        term.render_widget(AccountsPanel::new(Some(&snapshot)), area());
        assert!(term.buffer_contains("No manager"));
    }
}
