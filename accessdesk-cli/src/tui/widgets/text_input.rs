//! Single-line text input state (value + cursor).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    value: String,
    cursor: usize, // byte offset, always on a char boundary
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Character column of the cursor, for rendering.
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.cursor)
    }

    /// Apply an editing key. Returns true if the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let changed = !self.value.is_empty();
                self.clear();
                changed
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let at = self.prev_boundary();
                    self.value.remove(at);
                    self.cursor = at;
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                self.cursor = self.prev_boundary();
                false
            }
            KeyCode::Right => {
                self.cursor = self.next_boundary();
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut TextInputState, text: &str) {
        for c in text.chars() {
            input.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut input = TextInputState::new();
        type_str(&mut input, "admin");
        assert_eq!(input.value(), "admin");
        assert_eq!(input.cursor_column(), 5);
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let mut input = TextInputState::with_value("abc");
        input.handle_key(press(KeyCode::Backspace));
        assert_eq!(input.value(), "ab");
        assert!(!input.handle_key(press(KeyCode::Left)));
        input.handle_key(press(KeyCode::Backspace));
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_insert_mid_string() {
        let mut input = TextInputState::with_value("ad");
        input.handle_key(press(KeyCode::Left));
        type_str(&mut input, "min-a");
        assert_eq!(input.value(), "amin-ad");
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = TextInputState::with_value("query");
        let changed = input.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(changed);
        assert!(input.is_blank());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInputState::new();
        type_str(&mut input, "café");
        input.handle_key(press(KeyCode::Backspace));
        assert_eq!(input.value(), "caf");
    }
}
