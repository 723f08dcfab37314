use crate::controllers::interactive::events::export_event::ExportEvent;

/// Receives export results from the background worker thread.
pub trait ExportPresenterPort: Send + Sync {
    fn present(&self, event: ExportEvent);
}
