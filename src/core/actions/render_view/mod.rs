pub mod render_view;

pub use render_view::{FractalRenderer, RenderViewError, render_view};
