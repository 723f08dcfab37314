use std::error::Error;
use std::marker::PhantomData;

use crate::config::ExplorerConfig;
use crate::controllers::interactive::ExplorerSession;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::file::file_presenter_for_path;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

/// Opens the explorer window and blocks until it is closed.
pub struct RunGuiCommand<P: GuiPresenterPort> {
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<P: GuiPresenterPort> RunGuiCommand<P> {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // pixels needs a 'static surface target
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = P::new(
            window,
            event_loop_proxy,
            self.config.width,
            self.config.height,
        )?;

        let session = ExplorerSession::new(
            &self.config,
            file_presenter_for_path(&self.config.output_path),
            presenter.share_adapter(),
        )?;

        log::info!(
            "Opened {}x{} explorer window, saving to {}",
            self.config.width,
            self.config.height,
            self.config.output_path.display()
        );

        let app = GuiApp::new(window, &event_loop, presenter, session);
        app.run(window, event_loop)?;

        Ok(())
    }
}
