use crate::core::state::{App, SubmissionState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::result_panel::PANEL_HEIGHT;
use crate::tui::components::submit_button::BUTTON_WIDTH;
use crate::tui::components::{ResultPanel, SubmitButton, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

pub const HEADING: &str = "Let's build Automate README PR";
const HELP: &str = "Enter submit · ←/→ move · Esc quit";
const FORM_WIDTH: u16 = 80;

/// Short phase label for the title bar.
pub fn status_label(state: &SubmissionState) -> &'static str {
    match state {
        SubmissionState::Idle => "Ready",
        SubmissionState::Submitting => "Submitting...",
        SubmissionState::Failed(_) => "Error",
        SubmissionState::Completed(_) => "Done",
    }
}

/// Render the whole screen as a function of `App` plus TUI presentation state.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(app.endpoint().to_string(), status_label(&app.state).to_string())
        .render(frame, title_area);

    let [column] = Layout::horizontal([Constraint::Max(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(main_area);

    // Failed and Completed are exclusive, so the error and the result panel
    // share the space below the form
    let [_, heading_area, _, form_area, body_area] =
        Layout::vertical([Length(1), Length(1), Length(1), Length(3), Min(0)]).areas(column);

    let heading = Paragraph::new(HEADING)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(heading, heading_area);

    draw_form(frame, form_area, app, tui, spinner_frame);

    if let Some(message) = app.state.error() {
        draw_error_line(frame, body_area, message);
    }

    if let Some(response) = app.state.response() {
        let [result_area, _] = Layout::vertical([Length(PANEL_HEIGHT), Min(0)]).areas(body_area);
        ResultPanel::new(response).render(frame, result_area);
    }

    let help = Paragraph::new(HELP)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .spacing(1)
            .areas(area);

    tui.input_box.render(frame, input_area);
    SubmitButton::new(app.state.is_submitting(), spinner_frame).render(frame, button_area);
}

fn draw_error_line(frame: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(Line::from(message))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    frame.render_widget(error, area);
}
