//! Semantic style builders

use igpanel_app::{ConnectionState, PromptKind, ToastKind};
use igpanel_core::{InitState, Severity};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" for the focused input
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Domain styles ---

/// Foreground for a log line of the given severity
pub fn severity(severity: Severity) -> Style {
    let color = match severity {
        Severity::Success => palette::LOG_SUCCESS,
        Severity::Error => palette::LOG_ERROR,
        Severity::Warning => palette::LOG_WARNING,
        Severity::Info => palette::LOG_INFO,
        Severity::Neutral => palette::LOG_NEUTRAL,
    };
    Style::default().fg(color)
}

/// Icon and style for the stream connection indicator
pub fn connection_indicator(state: ConnectionState) -> (&'static str, Style) {
    match state {
        ConnectionState::Open => ("●", Style::default().fg(palette::STATUS_GREEN)),
        ConnectionState::Connecting | ConnectionState::ClosedPendingRetry => {
            ("◐", Style::default().fg(palette::STATUS_YELLOW))
        }
        ConnectionState::Idle | ConnectionState::Closed => ("○", text_muted()),
    }
}

pub fn init_state(state: InitState) -> Style {
    match state {
        InitState::Pending => Style::default().fg(palette::STATUS_YELLOW),
        InitState::Succeeded => Style::default()
            .fg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD),
        InitState::Failed => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    }
}

pub fn toast(kind: ToastKind) -> Style {
    let color = match kind {
        ToastKind::Success => palette::STATUS_GREEN,
        ToastKind::Error => palette::STATUS_RED,
        ToastKind::Warning => palette::STATUS_YELLOW,
        ToastKind::Info => palette::STATUS_BLUE,
    };
    Style::default().fg(color)
}

pub fn prompt(kind: PromptKind) -> Style {
    match kind {
        PromptKind::Success => Style::default().fg(palette::STATUS_GREEN),
        PromptKind::Error => Style::default().fg(palette::STATUS_RED),
    }
}
