//! Interactive exploration session.
//!
//! Owns the view state and renderer, publishes completed frames, and hands
//! save requests to a background export worker. Results flow out through the
//! ports in [`ports`].

pub mod data;
pub mod events;
mod export_worker;
mod overlay;
pub mod ports;
mod session;

pub use events::export_event::ExportEvent;
pub use export_worker::ExportWorker;
pub use overlay::OverlayText;
pub use ports::presenter::ExportPresenterPort;
pub use session::{CommandOutcome, ExplorerSession, ExplorerSessionError};
