use log::trace;

/// Vertical scroll position of the page.
/// Like FocusState, this is owned by the caller and persists across frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    content_height: usize,
    viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Record the sizes of the latest render and clamp the offset to them.
    /// Call this after rendering, before reading the offset.
    pub fn fit(&mut self, content_height: usize, viewport_height: usize) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll by `delta` rows within the last fitted sizes.
    /// Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let new_offset = self.offset.saturating_add_signed(delta).min(self.max_offset());
        if new_offset == self.offset {
            return false;
        }
        trace!("Scroll {} -> {}", self.offset, new_offset);
        self.offset = new_offset;
        true
    }

    /// Scroll the least distance that puts `row` on screen.
    pub fn scroll_into_view(&mut self, row: usize) {
        if self.viewport_height == 0 {
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.viewport_height {
            self.offset = row + 1 - self.viewport_height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
