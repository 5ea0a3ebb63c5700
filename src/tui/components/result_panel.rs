//! # ResultPanel Component
//!
//! Shows a completed submission: a status dot, the repository name as a
//! link, the service message and a badge with the raw status.
//!
//! Colors come from the status category only. A "Failed" job renders red
//! even though the submission itself completed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::status::{StatusCategory, classify};
use crate::service::SubmissionResponse;
use crate::tui::component::Component;

const FAILURE_RED: Color = Color::Rgb(0xf8, 0x51, 0x49);
const SUCCESS_GREEN: Color = Color::Rgb(0x23, 0x86, 0x36);
const NEUTRAL_BLUE: Color = Color::Rgb(0x2f, 0x81, 0xf7);
const LINK_BLUE: Color = Color::Rgb(0x58, 0xa6, 0xff);
const MUTED: Color = Color::Rgb(0x7d, 0x85, 0x90);

/// Color of the dot left of the repository name.
pub fn indicator_color(category: StatusCategory) -> Color {
    match category {
        StatusCategory::Failure => FAILURE_RED,
        StatusCategory::Other => SUCCESS_GREEN,
    }
}

/// Style of the status badge.
pub fn badge_style(category: StatusCategory) -> Style {
    let fg = match category {
        StatusCategory::Failure => FAILURE_RED,
        StatusCategory::Other => NEUTRAL_BLUE,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Height needed for the panel, borders included.
pub const PANEL_HEIGHT: u16 = 7;

pub struct ResultPanel<'a> {
    pub response: &'a SubmissionResponse,
}

impl<'a> ResultPanel<'a> {
    pub fn new(response: &'a SubmissionResponse) -> Self {
        Self { response }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let response = self.response;
        let category = classify(&response.status);
        vec![
            Line::from(vec![
                Span::styled("● ", Style::default().fg(indicator_color(category))),
                // The link target is the name itself
                Span::styled(
                    response.repository_name.as_str(),
                    Style::default()
                        .fg(LINK_BLUE)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
            ]),
            Line::raw(""),
            Line::styled(response.message.as_str(), Style::default().fg(MUTED)),
            Line::raw(""),
            Line::from(Span::styled(
                format!(" {} ", response.status),
                badge_style(category),
            )),
        ]
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panel = Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Rgb(0x30, 0x36, 0x3d))),
            );
        frame.render_widget(panel, area);
    }
}
