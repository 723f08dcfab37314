pub mod view_command;
pub mod view_state;

pub use view_command::{ParseViewCommandError, ViewCommand};
pub use view_state::ViewState;
