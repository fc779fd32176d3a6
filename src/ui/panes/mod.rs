//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over data owned by
//! [`App`](crate::ui::App):
//!
//! - [`input`]: the numbers text field, with placeholder and cursor
//! - [`array`]: the current snapshot drawn as one box per array slot
//! - [`status`]: status bar with step counter, message and keybindings

mod utils;

pub mod array;
pub mod input;
pub mod status;

pub use array::render_array_pane;
pub use input::render_input_pane;
pub use status::{render_status_bar, StatusRenderData};
