use crate::controllers::interactive::{ExportEvent, ExportPresenterPort};
use crate::input::gui::events::GuiEvent;
use std::sync::{Mutex, PoisonError};
use winit::event_loop::EventLoopProxy;

/// Hands export results from the worker thread to the UI thread.
pub struct PixelsAdapter {
    export_event: Mutex<Option<ExportEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl ExportPresenterPort for PixelsAdapter {
    fn present(&self, event: ExportEvent) {
        *self
            .export_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(event);

        // The event loop is gone once the window closes; nothing left to wake.
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            export_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_export_event(&self) -> Option<ExportEvent> {
        self.export_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
