use std::sync::Arc;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::{ExportEvent, ExportPresenterPort};
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterPort: Sized {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        buffer_width: u32,
        buffer_height: u32,
    ) -> Result<Self, pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn ExportPresenterPort>;
    fn take_export_event(&mut self) -> Option<ExportEvent>;
    fn present_frame(&mut self, frame: &FrameData);
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
