//! GUI input adapter for interactive fractal exploration.
//!
//! A fixed-size winit window whose key presses become view commands. Frames
//! are drawn through `pixels`, the overlay through `egui`.

pub mod app;
pub mod commands;
pub mod events;
