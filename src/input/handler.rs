use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Processed input events for the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Close help (any key when help is shown)
    CloseHelp,
    /// Show or hide the message log
    ToggleMessageLog,
    /// Drop all message log entries
    ClearMessageLog,
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// No event
    None,
}

/// Input handler for processing terminal events
pub struct InputHandler {
    help_visible: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            help_visible: false,
        }
    }

    /// Set help visibility state
    pub fn set_help_visible(&mut self, visible: bool) {
        self.help_visible = visible;
    }

    /// Poll for input events with timeout
    pub fn poll(&mut self, timeout: Duration) -> Option<InputEvent> {
        if event::poll(timeout).ok()? {
            match event::read().ok()? {
                Event::Key(key_event) => Some(self.handle_key(key_event)),
                Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
                _ => None,
            }
        } else {
            None
        }
    }

    /// Handle keyboard input
    fn handle_key(&self, event: KeyEvent) -> InputEvent {
        // If help is visible, any key closes it
        if self.help_visible {
            return InputEvent::CloseHelp;
        }

        match event.code {
            KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputEvent::Quit
            }
            KeyCode::Char('?') => InputEvent::ToggleHelp,
            KeyCode::Char('l') => InputEvent::ToggleMessageLog,
            KeyCode::Char('c') => InputEvent::ClearMessageLog,
            _ => InputEvent::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), InputEvent::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Char('l'))), InputEvent::ToggleMessageLog);
        assert_eq!(handler.handle_key(key(KeyCode::Char('c'))), InputEvent::ClearMessageLog);
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), InputEvent::None);
        assert_eq!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputEvent::Quit
        );
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut handler = InputHandler::new();
        handler.set_help_visible(true);
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), InputEvent::CloseHelp);
    }
}
