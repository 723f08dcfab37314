use crate::controllers::interactive::{CommandOutcome, ExplorerSession, OverlayText};
use crate::input::gui::app::key_input::decode_key;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    session: ExplorerSession,
    overlay: OverlayText,
    status_message: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        mut presenter: T,
        session: ExplorerSession,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        if let Some(frame) = session.latest_frame() {
            presenter.present_frame(&frame);
        }

        Self {
            presenter,
            overlay: OverlayText::from_state(session.state()),
            session,
            status_message: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Applies the command bound to `key_code`. Returns whether a redraw is needed.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        let Some(command) = decode_key(key_code) else {
            return false;
        };

        match self.session.apply(command) {
            Ok(CommandOutcome::Rendered) => {
                if let Some(frame) = self.session.latest_frame() {
                    self.presenter.present_frame(&frame);
                }
            }
            Ok(CommandOutcome::SaveQueued) => {
                self.status_message =
                    Some(format!("Saving {}", self.session.output_path().display()));
            }
            Ok(CommandOutcome::NothingToSave) => {
                self.status_message = Some("Nothing to save".to_string());
            }
            Ok(CommandOutcome::ExportsStopped) => {
                self.status_message = Some("Exports have stopped".to_string());
            }
            Ok(CommandOutcome::Redraw) => {}
            Err(err) => {
                log::error!("Render after {} failed: {}", command, err);
                self.status_message = Some(err.to_string());
            }
        }

        self.overlay = OverlayText::from_state(self.session.state());

        true
    }

    /// Picks up a finished export. Returns whether the status line changed.
    pub fn poll_export_events(&mut self) -> bool {
        match self.presenter.take_export_event() {
            Some(event) => {
                self.status_message = Some(event.summary());
                true
            }
            None => false,
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let overlay_visible = self.session.state().overlay_visible();
        let overlay = &self.overlay;
        let status_message = self.status_message.as_deref();
        let render_time = self
            .session
            .latest_frame()
            .map(|frame| format!("Last render: {} ms", frame.render_duration.as_millis()));

        self.egui_ctx.run(raw_input, |ctx| {
            if !overlay_visible {
                return;
            }

            egui::Area::new(egui::Id::new("overlay"))
                .fixed_pos(egui::pos2(8.0, 8.0))
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(egui::Color32::from_black_alpha(160))
                        .inner_margin(egui::Margin::same(6.0))
                        .show(ui, |ui| {
                            for line in overlay.lines() {
                                ui.label(
                                    egui::RichText::new(line)
                                        .monospace()
                                        .color(egui::Color32::WHITE),
                                );
                            }

                            if let Some(render_time) = &render_time {
                                ui.label(
                                    egui::RichText::new(render_time)
                                        .monospace()
                                        .color(egui::Color32::LIGHT_GRAY),
                                );
                            }

                            if let Some(message) = status_message {
                                ui.separator();
                                ui.label(
                                    egui::RichText::new(message)
                                        .monospace()
                                        .color(egui::Color32::LIGHT_YELLOW),
                                );
                            }
                        });
                });
        })
    }

    pub fn run(mut self, window: &'static Window, event_loop: EventLoop<GuiEvent>) -> Result<(), winit::error::EventLoopError> {
        let mut redraw_pending = true;

        let result = event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let response = self.egui_state.on_window_event(window, event);

                if response.repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key_code),
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } => {
                        if self.handle_key(*key_code) {
                            redraw_pending = true;
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = self.update_ui(window);
                        self.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
                            log::error!("Render error: {}", err);
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = self.presenter.resize_surface(size.width, size.height) {
                            log::error!("Resize error: {}", err);
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(err) = self.presenter.resize_surface(size.width, size.height) {
                            log::error!("Resize error: {}", err);
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::UserEvent(GuiEvent::Wake) => {
                if self.poll_export_events() {
                    redraw_pending = true;
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        });

        self.session.finish_exports();

        result
    }
}
