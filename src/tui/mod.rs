//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One thread owns the `App` and is the only place `update()` runs. The
//! network call is spawned on the tokio runtime; its outcome comes back as
//! an `Action` over a channel and is applied on the next loop turn, so the
//! form keeps redrawing while a request is in flight.
//!
//! - **Submitting**: draws every ~80ms to animate the spinner.
//! - **Otherwise**: sleeps up to 500ms, only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::service::{HttpSubmissionClient, SubmissionClient, SubmissionRequest};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBar
        )?;
        info!("Terminal modes enabled (bracketed paste, steady bar cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Build the submission client for the resolved endpoint.
pub fn build_client(config: &ResolvedConfig) -> Arc<dyn SubmissionClient> {
    Arc::new(HttpSubmissionClient::new(config.endpoint.clone()))
}

/// Perform one submission and wrap the outcome as the action the
/// controller expects.
pub async fn perform_submission(
    client: Arc<dyn SubmissionClient>,
    request: SubmissionRequest,
) -> Action {
    Action::SubmissionFinished(client.submit(&request).await)
}

/// Route one terminal event. Returns the effect of any `update()` it caused.
fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    if matches!(event, TuiEvent::Quit) {
        return update(app, Action::Quit);
    }

    match tui.input_box.handle_event(event) {
        Some(InputEvent::Changed(text)) => update(app, Action::EditInput(text)),
        Some(InputEvent::Submit) => update(app, Action::Submit),
        None => Effect::None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = build_client(&config);
    let mut app = App::new(client);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        // The controller owns the input text; mirror it into the component
        tui.input_box.sync(&app.input);

        let animating = app.state.is_submitting();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut app, &mut tui, &event) {
                Effect::Quit => break 'event_loop,
                Effect::Submit(request) => spawn_submission(&app, request, tx.clone()),
                Effect::None => {}
            }
        }

        // Handle background task actions (submission results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => break 'event_loop,
                Effect::Submit(request) => spawn_submission(&app, request, tx.clone()),
                Effect::None => {}
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

fn spawn_submission(app: &App, request: SubmissionRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning submission for '{}'", request.repository_name);
    let client = app.client.clone();
    tokio::spawn(async move {
        let action = perform_submission(client, request).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver submission result: receiver dropped");
        }
    });
}
