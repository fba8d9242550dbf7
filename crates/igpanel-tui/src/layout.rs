//! Screen layout definitions for the TUI

use igpanel_core::Page;
use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the init page's status panel (borders included)
pub const INIT_PANEL_HEIGHT: u16 = 5;

/// Height of the dashboard action form (three inputs plus borders)
pub const FORM_HEIGHT: u16 = 5;

/// Width of the dashboard side column
pub const SIDE_WIDTH: u16 = 40;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, page and connection state
    pub header: Rect,

    /// Init status panel or account list
    pub panel: Rect,

    /// Action form (dashboard only)
    pub form: Option<Rect>,

    /// Log view
    pub logs: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Split the screen for `page`
pub fn create(area: Rect, page: Page) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    match page {
        Page::Init => {
            let [panel, logs] =
                Layout::vertical([Constraint::Length(INIT_PANEL_HEIGHT), Constraint::Min(3)])
                    .areas(body);
            ScreenAreas {
                header,
                panel,
                form: None,
                logs,
                footer,
            }
        }
        Page::Dashboard => {
            let [side, logs] =
                Layout::horizontal([Constraint::Length(SIDE_WIDTH), Constraint::Min(20)])
                    .areas(body);
            let [panel, form] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(FORM_HEIGHT)])
                    .areas(side);
            ScreenAreas {
                header,
                panel,
                form: Some(form),
                logs,
                footer,
            }
        }
    }
}
