pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use config::{ConfigError, ExplorerConfig, parse_args};
pub use controllers::cli::{CliRenderController, CliRenderError};
pub use controllers::interactive::{CommandOutcome, ExplorerSession, ExportEvent, OverlayText};
pub use crate::core::actions::render_view::{FractalRenderer, render_view};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::view::{ViewCommand, ViewState};
pub use presenters::file::file_presenter_for_path;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::presenter::PixelsPresenter;
