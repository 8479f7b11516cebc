//! Single-line editor with cursor movement and command history.
//!
//! Pure state machine: it owns the buffer, cursor, and history list, and
//! reports whether an edit actually changed anything so the session layer
//! can skip redraws. The cursor is a character offset, not a byte offset.

/// Decoded keyboard input, produced by the host key handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Up,
    Down,
    Enter,
    Tab,
    Interrupt,
}

/// Line editor state: the in-progress buffer plus submitted history.
///
/// `history_index` ranges over `0..=history.len()`; the value `history.len()`
/// denotes the live (not yet submitted) input line.
#[derive(Debug, Default)]
pub struct LineEditor {
    buffer: String,
    cursor: usize,
    history: Vec<String>,
    history_index: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Character count of the buffer.
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Byte offset of the cursor within the buffer.
    fn cursor_byte(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.cursor_byte();
        self.buffer.insert(at, ch);
        self.cursor += 1;
    }

    /// Remove the character before the cursor. Returns false at offset 0.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.cursor_byte();
        self.buffer.remove(at);
        true
    }

    /// Remove the character under the cursor. Returns false at end of line.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.cursor_byte();
        self.buffer.remove(at);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn move_home(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = 0;
        true
    }

    pub fn move_end(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.cursor = self.len();
        true
    }

    /// Recall the previous history entry. Returns true if the buffer changed.
    pub fn history_up(&mut self) -> bool {
        if self.history_index == 0 {
            return false;
        }
        self.history_index -= 1;
        self.set_line(self.history[self.history_index].clone());
        true
    }

    /// Move forward through history; stepping past the newest entry clears
    /// back to an empty live line.
    pub fn history_down(&mut self) -> bool {
        if self.history_index >= self.history.len() {
            return false;
        }
        self.history_index += 1;
        if self.history_index == self.history.len() {
            self.set_line(String::new());
        } else {
            self.set_line(self.history[self.history_index].clone());
        }
        true
    }

    /// Replace the whole line, cursor at end. Used by history recall and
    /// tab completion.
    pub fn set_line(&mut self, line: String) {
        self.buffer = line;
        self.cursor = self.len();
    }

    /// Finish the line: trim it, record non-empty lines in history, and
    /// reset for the next prompt.
    pub fn submit(&mut self) -> String {
        let line = self.buffer.trim().to_string();
        if !line.is_empty() {
            self.history.push(line.clone());
        }
        self.history_index = self.history.len();
        self.buffer.clear();
        self.cursor = 0;
        line
    }

    /// Abandon the line without recording it (Ctrl+C).
    pub fn cancel(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.history_index = self.history.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> LineEditor {
        let mut ed = LineEditor::new();
        for ch in text.chars() {
            ed.insert(ch);
        }
        ed
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut ed = typed("ls bn");
        ed.move_left();
        ed.insert('i');
        assert_eq!(ed.buffer(), "ls bin");
        assert_eq!(ed.cursor(), 5);
    }

    #[test]
    fn test_backspace_and_delete_clamp() {
        let mut ed = typed("ab");
        ed.move_home();
        assert!(!ed.backspace());
        assert!(ed.delete());
        assert_eq!(ed.buffer(), "b");
        ed.move_end();
        assert!(!ed.delete());
    }

    #[test]
    fn test_cursor_moves_clamp() {
        let mut ed = typed("ab");
        assert!(!ed.move_right());
        assert!(ed.move_home());
        assert!(!ed.move_left());
        assert!(ed.move_end());
        assert!(!ed.move_end());
    }

    #[test]
    fn test_multibyte_buffer() {
        let mut ed = typed("é你");
        assert_eq!(ed.len(), 2);
        ed.move_left();
        ed.insert('x');
        assert_eq!(ed.buffer(), "éx你");
        assert!(ed.backspace());
        assert_eq!(ed.buffer(), "é你");
    }

    #[test]
    fn test_submit_trims_and_records() {
        let mut ed = typed("  ls  ");
        assert_eq!(ed.submit(), "ls");
        assert!(ed.is_empty());
        assert!(ed.history_up());
        assert_eq!(ed.buffer(), "ls");
    }

    #[test]
    fn test_empty_submit_not_recorded() {
        let mut ed = typed("   ");
        assert_eq!(ed.submit(), "");
        assert!(!ed.history_up());
    }

    #[test]
    fn test_history_walk() {
        let mut ed = LineEditor::new();
        for line in ["a", "b", "c"] {
            ed.set_line(line.to_string());
            ed.submit();
        }

        assert!(ed.history_up());
        assert!(ed.history_up());
        assert!(ed.history_up());
        assert_eq!(ed.buffer(), "a");
        assert!(!ed.history_up());

        assert!(ed.history_down());
        assert_eq!(ed.buffer(), "b");
        assert!(ed.history_down());
        assert_eq!(ed.buffer(), "c");
        assert!(ed.history_down());
        assert_eq!(ed.buffer(), "");
        assert!(!ed.history_down());
    }

    #[test]
    fn test_cancel_clears_without_recording() {
        let mut ed = typed("secret");
        ed.cancel();
        assert!(ed.is_empty());
        assert!(!ed.history_up());
    }
}
