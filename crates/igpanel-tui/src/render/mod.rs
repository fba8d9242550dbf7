//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use igpanel_app::AppState;
use igpanel_core::Page;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI
///
/// Only the log view's scroll state is written back to `state`.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.page);

    frame.render_widget(
        widgets::MainHeader::new(state.page, &state.settings.server.base_url, state.connection),
        areas.header,
    );

    match state.page {
        Page::Init => {
            frame.render_widget(
                widgets::InitPanel::new(
                    state.init.state(),
                    state.init_trigger_enabled,
                    state.init_in_flight,
                ),
                areas.panel,
            );
        }
        Page::Dashboard => {
            frame.render_widget(
                widgets::AccountsPanel::new(state.accounts.as_ref()),
                areas.panel,
            );
            if let Some(form_area) = areas.form {
                frame.render_widget(
                    widgets::ActionFormView::new(&state.form).pending(state.pending_actions),
                    form_area,
                );
            }
        }
    }

    let placeholder = state.log_sink.placeholder();
    let show_timestamps = state.settings.ui.show_timestamps;
    let (entries, view_state) = state.log_sink.view_parts();
    frame.render_stateful_widget(
        widgets::LogView::new(entries)
            .placeholder(placeholder)
            .show_timestamps(show_timestamps),
        areas.logs,
        view_state,
    );

    frame.render_widget(
        widgets::KeyHints::new(state.page).prompt_open(state.prompt.is_some()),
        areas.footer,
    );

    if !state.toasts.is_empty() {
        frame.render_widget(widgets::ToastStack::new(&state.toasts), areas.logs);
    }

    if let Some(prompt) = &state.prompt {
        frame.render_widget(widgets::PromptDialog::new(prompt), area);
    }
}
