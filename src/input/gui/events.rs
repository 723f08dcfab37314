/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The export worker has a result waiting in the presenter adapter.
    Wake,
}
