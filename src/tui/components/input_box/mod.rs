//! # InputBox Component
//!
//! Single-line text field for the repository name.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - Report submission (Enter)
//! - Show a placeholder while empty
//!
//! ## State Management
//!
//! The buffer mirrors `App::input`. Edits are reported upward as
//! `InputEvent::Changed` and the event loop writes the controller's value
//! back with [`InputBox::sync`] each frame, so a clear after a completed
//! submission shows up here. Cursor position and horizontal scroll live in
//! `CursorState`.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary};

pub const PLACEHOLDER: &str = "Enter repository name";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User asked to submit (Enter pressed). The buffer is left untouched.
    Submit,
    /// Text content changed; carries the new buffer
    Changed(String),
}

/// Text input component. It is the only focusable widget, so the cursor is
/// always drawn in it.
///
/// # State
///
/// - `buffer`: Current text
/// - `cursor`: Cursor position and horizontal scroll (see `CursorState`)
pub struct InputBox {
    pub buffer: String,
    cursor: CursorState,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: CursorState::new(),
        }
    }

    /// Replace the buffer with the controller's value if it differs.
    /// The cursor moves to the end of the new text.
    pub fn sync(&mut self, text: &str) {
        if self.buffer == text {
            return;
        }
        self.buffer = text.to_string();
        if self.buffer.is_empty() {
            self.cursor.reset();
        } else {
            self.cursor.pos = self.buffer.len();
        }
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::Changed(self.buffer.clone()))
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Repository");

        let input = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(self.cursor.visible_slice(&self.buffer, area.width))
                .style(Style::default().fg(Color::White))
        };

        frame.render_widget(input.block(block), area);

        frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            // Single line: newlines never enter the buffer
            TuiEvent::InputChar('\n') | TuiEvent::InputChar('\r') => None,
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                if line.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor.pos, &line);
                self.cursor.pos += line.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    self.changed()
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
