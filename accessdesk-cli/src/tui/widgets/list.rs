//! Cursor and scroll state for list views.
//!
//! Selection membership never lives here: multi-selected items belong to
//! the relevant selection store, and each row's checked state is derived
//! from that store on every render. The widget only tracks the cursor
//! position and scrolling.

use crossterm::event::KeyCode;

#[derive(Debug, Clone)]
pub struct ListState {
    cursor: Option<usize>,
    scroll_offset: usize,
    scroll_off: usize, // Rows from edge before scrolling (like vim scrolloff)
    wrap_around: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            cursor: None,
            scroll_offset: 0,
            scroll_off: 3,
            wrap_around: true,
        }
    }

    pub fn with_cursor() -> Self {
        Self {
            cursor: Some(0),
            ..Self::new()
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Clamp the cursor after the backing list shrank (e.g. a filter
    /// narrowed). An empty list clears the cursor.
    pub fn clamp(&mut self, item_count: usize) {
        if item_count == 0 {
            self.cursor = None;
            self.scroll_offset = 0;
        } else if let Some(cursor) = self.cursor {
            if cursor >= item_count {
                self.cursor = Some(item_count - 1);
            }
        }
        self.scroll_offset = self.scroll_offset.min(item_count.saturating_sub(1));
    }

    /// Handle a navigation key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyCode, item_count: usize, visible_height: usize) -> bool {
        if item_count == 0 {
            return false;
        }
        let last = item_count - 1;
        let cursor = self.cursor.unwrap_or(0);
        let next = match key {
            KeyCode::Up | KeyCode::Char('k') => {
                if cursor == 0 {
                    if self.wrap_around { last } else { 0 }
                } else {
                    cursor - 1
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if cursor >= last {
                    if self.wrap_around { 0 } else { last }
                } else {
                    cursor + 1
                }
            }
            KeyCode::PageUp => cursor.saturating_sub(visible_height.max(1)),
            KeyCode::PageDown => (cursor + visible_height.max(1)).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => return false,
        };
        self.cursor = Some(next);
        self.update_scroll(visible_height, item_count);
        true
    }

    fn update_scroll(&mut self, visible_height: usize, item_count: usize) {
        let Some(cursor) = self.cursor else {
            return;
        };
        if visible_height == 0 || item_count <= visible_height {
            self.scroll_offset = 0;
            return;
        }
        let max_offset = item_count - visible_height;
        // Keep scroll_off rows visible above and below the cursor.
        let top_bound = self.scroll_offset + self.scroll_off;
        let bottom_bound = (self.scroll_offset + visible_height).saturating_sub(self.scroll_off + 1);
        if cursor < top_bound {
            self.scroll_offset = cursor.saturating_sub(self.scroll_off);
        } else if cursor > bottom_bound {
            self.scroll_offset = (cursor + self.scroll_off + 1)
                .saturating_sub(visible_height)
                .min(max_offset);
        }
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Indices of the rows visible in a viewport of `visible_height`.
    pub fn visible_range(&self, item_count: usize, visible_height: usize) -> std::ops::Range<usize> {
        let start = self.scroll_offset.min(item_count);
        let end = (start + visible_height).min(item_count);
        start..end
    }
}
