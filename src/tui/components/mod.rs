//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing endpoint and phase
//! - `SubmitButton`: Submit control, disabled while in flight
//! - `ResultPanel`: Completed submission with status badge
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: Repository name field
//!
//! Components receive external data as props (struct fields), never by
//! reaching into `App`. Each file holds its state, events, rendering and
//! tests.

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub use input_box::{InputBox, InputEvent};
pub mod result_panel;
pub use result_panel::ResultPanel;
pub mod submit_button;
pub use submit_button::SubmitButton;
