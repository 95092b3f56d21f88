use serde::{Deserialize, Serialize};

/// A selected byte range in a text buffer. Always `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Build a selection from two endpoints in either order
    /// (e.g. an anchor and a caret).
    pub fn new(a: usize, b: usize) -> Self {
        Selection {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection (a bare caret).
    pub fn caret(pos: usize) -> Self {
        Selection {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both endpoints into `text`, snapping each down to a char boundary.
    pub fn clamp_to(self, text: &str) -> Self {
        let end = floor_char_boundary(text, self.end);
        let start = floor_char_boundary(text, self.start.min(end));
        Selection { start, end }
    }

    /// The selected slice of `text`. Offsets are clamped first.
    pub fn slice(self, text: &str) -> &str {
        let s = self.clamp_to(text);
        &text[s.start..s.end]
    }
}

/// Largest char boundary in `text` that is `<= offset`.
pub fn floor_char_boundary(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    let mut i = offset;
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_endpoints() {
        assert_eq!(Selection::new(7, 2), Selection { start: 2, end: 7 });
        assert_eq!(Selection::new(2, 7).len(), 5);
    }

    #[test]
    fn caret_is_empty() {
        assert!(Selection::caret(3).is_empty());
        assert!(!Selection::new(3, 4).is_empty());
    }

    #[test]
    fn clamp_past_end() {
        let s = Selection::new(4, 100).clamp_to("hello");
        assert_eq!(s, Selection { start: 4, end: 5 });
        let s = Selection::new(50, 100).clamp_to("hello");
        assert_eq!(s, Selection { start: 5, end: 5 });
    }

    #[test]
    fn clamp_snaps_to_char_boundary() {
        // "é" is two bytes; offset 2 is inside it
        let text = "aé b";
        let s = Selection::new(2, 4).clamp_to(text);
        assert_eq!(s, Selection { start: 1, end: 4 });
        assert_eq!(s.slice(text), "é ");
    }

    #[test]
    fn floor_char_boundary_at_edges() {
        assert_eq!(floor_char_boundary("", 0), 0);
        assert_eq!(floor_char_boundary("abc", 3), 3);
        assert_eq!(floor_char_boundary("日本", 4), 3);
    }
}
