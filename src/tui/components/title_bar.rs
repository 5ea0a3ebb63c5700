//! # TitleBar Component
//!
//! Top status bar showing the application, the service endpoint and a short
//! phase label.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.endpoint().to_string(), "Submitting...".to_string());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Format
//!
//! `"repo-submit v0.1.0 (endpoint: http://…) | Submitting..."`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Top status bar component.
///
/// # Props
///
/// - `endpoint`: Where submissions are posted
/// - `status_message`: Short phase label
pub struct TitleBar {
    pub endpoint: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(endpoint: String, status_message: String) -> Self {
        Self {
            endpoint,
            status_message,
        }
    }

    fn text(&self) -> String {
        format!(
            "repo-submit v{} (endpoint: {}) | {}",
            env!("CARGO_PKG_VERSION"),
            self.endpoint,
            self.status_message
        )
    }
}

impl Component for TitleBar {
    /// Always a single line. A plain Span, no Block.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::Gray)),
            area,
        );
    }
}
