use crate::markup::Selection;
use crate::markup::selection::floor_char_boundary;
use crate::util::unicode;

/// Caret and selection anchor of an editable text field.
///
/// The text itself lives in the task draft; every editing method takes the
/// buffer explicitly. Offsets are byte offsets on grapheme boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCursor {
    pub cursor: usize,
    /// Other end of the selection, if one is active
    pub anchor: Option<usize>,
}

impl FieldCursor {
    /// Caret at the end of `text`, no selection
    pub fn at_end(text: &str) -> Self {
        FieldCursor {
            cursor: text.len(),
            anchor: None,
        }
    }

    /// The current selection (collapsed to the caret when there is no anchor)
    pub fn selection(&self) -> Selection {
        Selection::new(self.anchor.unwrap_or(self.cursor), self.cursor)
    }

    pub fn has_selection(&self) -> bool {
        self.anchor.is_some_and(|a| a != self.cursor)
    }

    /// Select `sel` with the caret at its end. Offsets are clamped to `text`.
    pub fn set_selection(&mut self, text: &str, sel: Selection) {
        let sel = sel.clamp_to(text);
        self.cursor = sel.end;
        self.anchor = if sel.is_empty() { None } else { Some(sel.start) };
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    pub fn select_all(&mut self, text: &str) {
        self.set_selection(text, Selection::new(0, text.len()));
    }

    /// Start or drop the selection anchor before a movement.
    /// Shift-movements extend; plain movements collapse.
    pub fn prepare_move(&mut self, extend: bool) {
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
    }

    /// Remove the selected text, if any. Returns true if something was removed.
    pub fn delete_selection(&mut self, text: &mut String) -> bool {
        if !self.has_selection() {
            self.anchor = None;
            return false;
        }
        let sel = self.selection().clamp_to(text);
        text.drain(sel.start..sel.end);
        self.cursor = sel.start;
        self.anchor = None;
        true
    }

    /// Insert `s` at the caret, replacing the selection.
    pub fn insert(&mut self, text: &mut String, s: &str) {
        self.delete_selection(text);
        self.cursor = floor_char_boundary(text, self.cursor);
        text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub fn backspace(&mut self, text: &mut String) {
        if self.delete_selection(text) {
            return;
        }
        if let Some(prev) = unicode::prev_grapheme_boundary(text, self.cursor) {
            text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self, text: &mut String) {
        if self.delete_selection(text) {
            return;
        }
        if let Some(next) = unicode::next_grapheme_boundary(text, self.cursor) {
            text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self, text: &str, extend: bool) {
        if !extend && self.has_selection() {
            self.cursor = self.selection().start;
            self.anchor = None;
            return;
        }
        self.prepare_move(extend);
        if let Some(prev) = unicode::prev_grapheme_boundary(text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self, text: &str, extend: bool) {
        if !extend && self.has_selection() {
            self.cursor = self.selection().end;
            self.anchor = None;
            return;
        }
        self.prepare_move(extend);
        if let Some(next) = unicode::next_grapheme_boundary(text, self.cursor) {
            self.cursor = next;
        }
    }

    /// Start of the caret's line
    pub fn move_home(&mut self, text: &str, extend: bool) {
        self.prepare_move(extend);
        self.cursor = unicode::line_start(text, self.cursor);
    }

    /// End of the caret's line
    pub fn move_end(&mut self, text: &str, extend: bool) {
        self.prepare_move(extend);
        self.cursor = unicode::line_end(text, self.cursor);
    }

    /// Move to the previous line, keeping the display column where possible.
    /// Returns false if already on the first line.
    pub fn move_up(&mut self, text: &str, extend: bool) -> bool {
        let (line, col) = unicode::line_and_col(text, self.cursor);
        if line == 0 {
            return false;
        }
        self.prepare_move(extend);
        self.cursor = unicode::offset_at_line_col(text, line - 1, col);
        true
    }

    /// Move to the next line. Returns false if already on the last line.
    pub fn move_down(&mut self, text: &str, extend: bool) -> bool {
        let (line, col) = unicode::line_and_col(text, self.cursor);
        if line >= text.matches('\n').count() {
            return false;
        }
        self.prepare_move(extend);
        self.cursor = unicode::offset_at_line_col(text, line + 1, col);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace() {
        let mut text = String::from("helo");
        let mut fc = FieldCursor {
            cursor: 3,
            anchor: None,
        };
        fc.insert(&mut text, "l");
        assert_eq!(text, "hello");
        assert_eq!(fc.cursor, 4);
        fc.backspace(&mut text);
        assert_eq!(text, "helo");
        assert_eq!(fc.cursor, 3);
    }

    #[test]
    fn insert_replaces_selection() {
        let mut text = String::from("hello world");
        let mut fc = FieldCursor::default();
        fc.set_selection(&text, Selection::new(6, 11));
        fc.insert(&mut text, "there");
        assert_eq!(text, "hello there");
        assert_eq!(fc.cursor, 11);
        assert!(!fc.has_selection());
    }

    #[test]
    fn shift_arrows_extend_selection() {
        let text = "hello";
        let mut fc = FieldCursor::default();
        fc.move_right(text, true);
        fc.move_right(text, true);
        assert_eq!(fc.selection(), Selection::new(0, 2));
        // Plain arrow collapses to the selection edge
        fc.move_left(text, false);
        assert_eq!(fc.cursor, 0);
        assert!(!fc.has_selection());
    }

    #[test]
    fn selection_is_ordered_when_extending_left() {
        let text = "hello";
        let mut fc = FieldCursor::at_end(text);
        fc.move_left(text, true);
        fc.move_left(text, true);
        assert_eq!(fc.selection(), Selection::new(3, 5));
    }

    #[test]
    fn set_selection_clamps_stale_offsets() {
        let text = "short";
        let mut fc = FieldCursor::default();
        fc.set_selection(text, Selection::new(2, 40));
        assert_eq!(fc.selection(), Selection::new(2, 5));
        fc.set_selection(text, Selection::new(30, 40));
        assert_eq!(fc.cursor, 5);
        assert!(fc.anchor.is_none());
    }

    #[test]
    fn delete_forward_removes_grapheme() {
        let mut text = String::from("ae\u{301}x");
        let mut fc = FieldCursor {
            cursor: 1,
            anchor: None,
        };
        fc.delete_forward(&mut text);
        assert_eq!(text, "ax");
        assert_eq!(fc.cursor, 1);
    }

    #[test]
    fn vertical_movement_keeps_column() {
        let text = "first\nab\nthird";
        let mut fc = FieldCursor {
            cursor: 4,
            anchor: None,
        };
        assert!(fc.move_down(text, false));
        assert_eq!(fc.cursor, 8); // end of "ab"
        assert!(fc.move_down(text, false));
        assert_eq!(fc.cursor, 11);
        assert!(!fc.move_down(text, false));
        assert!(fc.move_up(text, true));
        assert_eq!(fc.selection(), Selection::new(8, 11));
    }

    #[test]
    fn home_end_are_line_relative() {
        let text = "one\ntwo";
        let mut fc = FieldCursor {
            cursor: 5,
            anchor: None,
        };
        fc.move_home(text, false);
        assert_eq!(fc.cursor, 4);
        fc.move_end(text, true);
        assert_eq!(fc.selection(), Selection::new(4, 7));
    }
}
