//! # SubmitButton Component
//!
//! The submit control. Disabled (dimmed, with a spinner) while a request is
//! in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const SUBMIT_LABEL: &str = "Submit the repository";
pub const SUBMITTING_LABEL: &str = "Submitting...";

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Button width including borders, sized for the longer label plus spinner.
pub const BUTTON_WIDTH: u16 = SUBMIT_LABEL.len() as u16 + 6;

pub struct SubmitButton {
    pub disabled: bool,
    pub spinner_frame: usize,
}

impl SubmitButton {
    pub fn new(disabled: bool, spinner_frame: usize) -> Self {
        Self {
            disabled,
            spinner_frame,
        }
    }

    pub fn label(&self) -> String {
        if self.disabled {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            format!("{spinner} {SUBMITTING_LABEL}")
        } else {
            SUBMIT_LABEL.to_string()
        }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.disabled {
            Style::default()
                .fg(Color::Rgb(0x6e, 0x40, 0xc9))
                .add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x6e, 0x40, 0xc9))
                .add_modifier(Modifier::BOLD)
        };

        let button = Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_type(BorderType::Rounded));

        frame.render_widget(button, area);
    }
}
