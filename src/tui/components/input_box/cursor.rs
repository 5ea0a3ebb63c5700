//! Cursor position tracking for the single-line InputBox.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll
//! offset. All methods take `buffer: &str` explicitly; the text is owned by
//! `InputBox`.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Left border of the input block.
pub(super) const BORDER_OFFSET: u16 = 1;
/// Left + right border.
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;

/// Usable text columns inside a bordered block of `area_width`.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

pub(super) fn prev_char_boundary(buffer: &str, pos: usize) -> usize {
    buffer[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(buffer: &str, pos: usize) -> usize {
    buffer[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(buffer.len())
}

/// Cursor and scroll state, separated from the text buffer.
pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Display columns hidden to the left when the text is wider than the box
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Display column of the cursor, counting wide characters as two.
    pub fn column(&self, buffer: &str) -> u16 {
        buffer[..self.pos].width() as u16
    }

    /// Keep the cursor inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16) {
        let width = inner_width(area_width);
        if width == 0 {
            self.scroll_offset = 0;
            return;
        }
        let col = self.column(buffer);
        if col < self.scroll_offset {
            self.scroll_offset = col;
        } else if col >= self.scroll_offset + width {
            self.scroll_offset = col + 1 - width;
        }
    }

    /// The part of `buffer` that fits between the borders at the current scroll.
    pub fn visible_slice<'a>(&self, buffer: &'a str, area_width: u16) -> &'a str {
        let width = inner_width(area_width) as usize;
        let skip = self.scroll_offset as usize;

        let mut start = buffer.len();
        let mut end = buffer.len();
        let mut col = 0usize;
        for (i, c) in buffer.char_indices() {
            if col >= skip && start == buffer.len() {
                start = i;
            }
            let w = c.width().unwrap_or(0);
            if col + w > skip + width {
                end = i;
                break;
            }
            col += w;
        }
        if start > end {
            return "";
        }
        &buffer[start..end]
    }

    /// Absolute screen position of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let col = self.column(buffer).saturating_sub(self.scroll_offset);
        let max_x = area.x + area.width.saturating_sub(2);
        ((area.x + BORDER_OFFSET + col).min(max_x), area.y + 1)
    }
}
