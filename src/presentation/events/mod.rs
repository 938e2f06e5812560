//! Key classification.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Helpers classifying key events.
pub struct EventHandler;

impl EventHandler {
    /// Only presses are handled; repeats and releases are ignored.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }

    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Esc closes the modal or dismisses an alert.
    #[must_use]
    pub fn is_cancel_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Esc,
                ..
            }
        )
    }

    /// Checks if key opens the directory picker.
    #[must_use]
    pub fn is_pick_directory_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('o'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key reloads the graph list.
    #[must_use]
    pub fn is_refresh_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('r'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::F(5),
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test_case(KeyCode::Char('a'), KeyModifiers::NONE ; "letter")]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE ; "enter")]
    #[test_case(KeyCode::Esc, KeyModifiers::NONE ; "escape")]
    #[test_case(KeyCode::Char('Q'), KeyModifiers::SHIFT ; "shifted")]
    fn test_non_quit_events(code: KeyCode, modifiers: KeyModifiers) {
        assert!(!EventHandler::is_quit_event(&make_key_event(code, modifiers)));
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_pick_directory_event() {
        assert!(EventHandler::is_pick_directory_event(&make_key_event(
            KeyCode::Char('o'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_pick_directory_event(&make_key_event(
            KeyCode::Char('o'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_refresh_event() {
        assert!(EventHandler::is_refresh_event(&make_key_event(
            KeyCode::F(5),
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_refresh_event(&make_key_event(
            KeyCode::Char('r'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_release_is_not_press() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!EventHandler::is_press(&release));
        assert!(EventHandler::is_press(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
    }
}
