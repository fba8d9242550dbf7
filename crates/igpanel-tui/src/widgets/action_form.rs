//! Dashboard action form

use igpanel_app::{ActionForm, FormField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::text;
use crate::theme::{palette, styles};

const LABEL_WIDTH: usize = 10;

pub struct ActionFormView<'a> {
    form: &'a ActionForm,
    pending: usize,
}

impl<'a> ActionFormView<'a> {
    pub fn new(form: &'a ActionForm) -> Self {
        Self { form, pending: 0 }
    }

    /// Number of requests in flight, shown in the title
    pub fn pending(mut self, pending: usize) -> Self {
        self.pending = pending;
        self
    }

    fn field_line(&self, field: FormField, width: usize) -> Line<'a> {
        let focused = self.form.focus == field;
        let label = format!("{:<LABEL_WIDTH$}", field.label());
        let value = self.form.value(field);

        // Keep the end of long values (and the cursor) visible
        let room = width.saturating_sub(LABEL_WIDTH + 1);
        let shown = text::tail(value, room).to_string();

        let value_style = if focused {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        let mut spans = vec![
            Span::styled(
                label,
                if focused {
                    styles::accent()
                } else {
                    styles::text_secondary()
                },
            ),
            Span::styled(shown, value_style),
        ];
        if focused {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }
}

impl Widget for ActionFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.pending > 0 {
            format!(" Action ({} running) ", self.pending)
        } else {
            " Action ".to_string()
        };
        let block = styles::glass_block(true)
            .title(Span::styled(title, styles::text_secondary()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let lines: Vec<Line> = FormField::ALL
            .iter()
            .map(|field| self.field_line(*field, width))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
