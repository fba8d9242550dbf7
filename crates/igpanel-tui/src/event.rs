//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use igpanel_app::{InputKey, Message};
use igpanel_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Poll for terminal events with timeout (50ms, 20 FPS)
pub fn poll() -> Result<Vec<Message>> {
    let polled = if event::poll(Duration::from_millis(50))? {
        Some(event::read()?)
    } else {
        None
    };
    Ok(messages_for(polled))
}

/// Messages for one poll: the key press, if any, then a `Tick`
///
/// Every poll ticks, so typing cannot hold back toast expiry or init timers.
fn messages_for(polled: Option<Event>) -> Vec<Message> {
    let mut messages = Vec::with_capacity(2);
    if let Some(Event::Key(key)) = polled {
        if key.kind == event::KeyEventKind::Press {
            messages.extend(key_event_to_input(key).map(Message::Key));
        }
    }
    messages.push(Message::Tick);
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    #[test]
    fn test_idle_poll_ticks() {
        assert!(matches!(messages_for(None).as_slice(), [Message::Tick]));
        assert!(matches!(
            messages_for(Some(Event::Resize(80, 24))).as_slice(),
            [Message::Tick]
        ));
    }

    #[test]
    fn test_key_press_still_ticks() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        let messages = messages_for(Some(Event::Key(key)));
        assert!(matches!(
            messages.as_slice(),
            [Message::Key(InputKey::Char('x')), Message::Tick]
        ));
    }

    #[test]
    fn test_key_release_only_ticks() {
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert!(matches!(
            messages_for(Some(Event::Key(key))).as_slice(),
            [Message::Tick]
        ));
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_cyrillic_char_passes_through() {
        let key = KeyEvent::new(KeyCode::Char('ж'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('ж')));
    }

    #[test]
    fn test_form_editing_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            Some(InputKey::Tab)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            Some(InputKey::BackTab)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE)),
            Some(InputKey::BackTab)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(InputKey::Backspace)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE)),
            Some(InputKey::Delete)
        );
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE)),
            Some(InputKey::PageUp)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::End, KeyModifiers::NONE)),
            Some(InputKey::End)
        );
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)),
            Some(InputKey::F(1))
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::F(10), KeyModifiers::NONE)),
            Some(InputKey::F(10))
        );
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }
}
