use ratatui::layout::{Position, Rect};

/// Tracks the screen region of an overlay so that pointer presses outside
/// of it can be told apart from presses inside.
///
/// The region is re-registered by the renderer every frame; an overlay that
/// is not drawn leaves it cleared.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutsideDetector {
    region: Option<Rect>,
}

impl OutsideDetector {
    pub fn register(&mut self, area: Rect) {
        self.region = Some(area);
    }

    pub fn clear(&mut self) {
        self.region = None;
    }

    pub fn region(&self) -> Option<Rect> {
        self.region
    }

    /// True if a region is registered and `(column, row)` lies outside it.
    pub fn is_outside(&self, column: u16, row: u16) -> bool {
        self.region
            .is_some_and(|r| !r.contains(Position::new(column, row)))
    }
}
