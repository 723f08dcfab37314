use crate::config::ExplorerConfig;
use crate::controllers::interactive::data::export_job::ExportJob;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::export_worker::ExportWorker;
use crate::controllers::interactive::ports::presenter::ExportPresenterPort;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_view::{FractalRenderer, RenderViewError};
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::view::{ViewCommand, ViewState};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, PartialEq)]
pub enum ExplorerSessionError {
    Size(PixelRectError),
    Render(RenderViewError),
}

impl fmt::Display for ExplorerSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(err) => write!(f, "invalid render size: {}", err),
            Self::Render(err) => write!(f, "initial render failed: {}", err),
        }
    }
}

impl Error for ExplorerSessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Size(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<PixelRectError> for ExplorerSessionError {
    fn from(err: PixelRectError) -> Self {
        Self::Size(err)
    }
}

impl From<RenderViewError> for ExplorerSessionError {
    fn from(err: RenderViewError) -> Self {
        Self::Render(err)
    }
}

/// What the display needs to do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A new frame replaced the previous one.
    Rendered,
    /// Only overlay content changed.
    Redraw,
    SaveQueued,
    /// The last render failed, so there is no frame matching the view.
    NothingToSave,
    /// [`ExplorerSession::finish_exports`] has run; the frame was not queued.
    ExportsStopped,
}

/// The single owner of an interactive view.
///
/// Commands mutate the [`ViewState`], re-render when they affect the image,
/// and publish each finished frame as an `Arc<FrameData>` that the display
/// and the export worker read without copying.
pub struct ExplorerSession {
    state: ViewState,
    renderer: FractalRenderer,
    generation: u64,
    latest_frame: Option<Arc<FrameData>>,
    output_path: PathBuf,
    export_worker: ExportWorker,
}

impl ExplorerSession {
    pub fn new(
        config: &ExplorerConfig,
        file_presenter: Arc<dyn FilePresenterPort>,
        export_presenter: Arc<dyn ExportPresenterPort>,
    ) -> Result<Self, ExplorerSessionError> {
        let renderer = FractalRenderer::new(config.width, config.height)?;

        let mut session = Self {
            state: ViewState::default(),
            renderer,
            generation: 0,
            latest_frame: None,
            output_path: config.output_path.clone(),
            export_worker: ExportWorker::new(file_presenter, export_presenter),
        };

        session.render()?;

        Ok(session)
    }

    /// Applies `command`, re-rendering if it changes the image.
    ///
    /// A failed render leaves the state mutated but clears the latest frame,
    /// so a later save reports [`CommandOutcome::NothingToSave`].
    pub fn apply(&mut self, command: ViewCommand) -> Result<CommandOutcome, RenderViewError> {
        log::debug!("Applying command {}", command);

        if command == ViewCommand::Save {
            return Ok(self.save());
        }

        self.state.apply(command);

        if !command.requires_render() {
            return Ok(CommandOutcome::Redraw);
        }

        match self.render() {
            Ok(()) => Ok(CommandOutcome::Rendered),
            Err(err) => {
                self.latest_frame = None;
                Err(err)
            }
        }
    }

    /// Hands the latest frame to the export worker.
    pub fn save(&mut self) -> CommandOutcome {
        let Some(frame) = &self.latest_frame else {
            log::debug!("Save requested with no completed frame");
            return CommandOutcome::NothingToSave;
        };

        let queued = self.export_worker.submit(ExportJob {
            frame: Arc::clone(frame),
            path: self.output_path.clone(),
        });

        if queued {
            CommandOutcome::SaveQueued
        } else {
            CommandOutcome::ExportsStopped
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn latest_frame(&self) -> Option<Arc<FrameData>> {
        self.latest_frame.as_ref().map(Arc::clone)
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Blocks until every queued export has been written. Later saves
    /// report [`CommandOutcome::ExportsStopped`].
    pub fn finish_exports(&mut self) {
        self.export_worker.shutdown();
    }

    fn render(&mut self) -> Result<(), RenderViewError> {
        let start = Instant::now();
        let pixel_buffer = self.renderer.render(&self.state)?;
        let render_duration = start.elapsed();

        self.generation += 1;

        log::debug!(
            "Rendered frame {} ({}x{}) in {:?}",
            self.generation,
            pixel_buffer.width(),
            pixel_buffer.height(),
            render_duration
        );

        self.latest_frame = Some(Arc::new(FrameData {
            generation: self.generation,
            pixel_buffer,
            render_duration,
        }));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::events::export_event::ExportEvent;
    use crate::controllers::ports::file_presenter::ExportError;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::point::Point;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingFilePresenter {
        written: Mutex<Vec<PixelBuffer>>,
    }

    impl FilePresenterPort for RecordingFilePresenter {
        fn present(&self, buffer: &PixelBuffer, _filepath: &Path) -> Result<(), ExportError> {
            self.written.lock().unwrap().push(buffer.clone());
            Ok(())
        }

        fn format_name(&self) -> &str {
            "recording"
        }
    }

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<ExportEvent>>,
    }

    impl ExportPresenterPort for MockPresenterPort {
        fn present(&self, event: ExportEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn create_session(
        width: u32,
        height: u32,
    ) -> (ExplorerSession, Arc<RecordingFilePresenter>, Arc<MockPresenterPort>) {
        let config = ExplorerConfig {
            width,
            height,
            ..ExplorerConfig::default()
        };
        let file_presenter = Arc::new(RecordingFilePresenter::default());
        let presenter_port = Arc::new(MockPresenterPort::default());
        let session = ExplorerSession::new(
            &config,
            Arc::clone(&file_presenter) as Arc<dyn FilePresenterPort>,
            Arc::clone(&presenter_port) as Arc<dyn ExportPresenterPort>,
        )
        .unwrap();

        (session, file_presenter, presenter_port)
    }

    #[test]
    fn test_new_renders_first_frame() {
        let (session, _, _) = create_session(8, 8);

        let frame = session.latest_frame().unwrap();

        assert_eq!(frame.generation, 1);
        assert_eq!(frame.pixel_buffer.width(), 8);
        assert_eq!(frame.pixel_buffer.height(), 8);
        assert_eq!(session.state(), &ViewState::default());
    }

    #[test]
    fn test_new_rejects_zero_size() {
        let config = ExplorerConfig {
            width: 0,
            ..ExplorerConfig::default()
        };

        let result = ExplorerSession::new(
            &config,
            Arc::new(RecordingFilePresenter::default()),
            Arc::new(MockPresenterPort::default()),
        );

        assert!(matches!(result, Err(ExplorerSessionError::Size(_))));
    }

    #[test]
    fn test_view_commands_render_new_generation() {
        let (mut session, _, _) = create_session(8, 8);

        assert_eq!(session.apply(ViewCommand::ZoomIn), Ok(CommandOutcome::Rendered));
        assert_eq!(session.apply(ViewCommand::HueUp), Ok(CommandOutcome::Rendered));

        assert_eq!(session.generation(), 3);
        assert_eq!(session.latest_frame().unwrap().generation, 3);
        assert_eq!(session.state().scale(), 2.0);
    }

    #[test]
    fn test_overlay_and_step_commands_only_redraw() {
        let (mut session, _, _) = create_session(8, 8);

        assert_eq!(session.apply(ViewCommand::ToggleOverlay), Ok(CommandOutcome::Redraw));
        assert_eq!(session.apply(ViewCommand::PanStepXUp), Ok(CommandOutcome::Redraw));

        assert_eq!(session.generation(), 1);
        assert!(!session.state().overlay_visible());
        assert_eq!(session.state().horizontal_step(), 1.0);
    }

    #[test]
    fn test_frame_matches_direct_render() {
        let (mut session, _, _) = create_session(12, 12);
        session.apply(ViewCommand::PanLeft).unwrap();
        session.apply(ViewCommand::IterationsUp).unwrap();

        let expected = FractalRenderer::new(12, 12)
            .unwrap()
            .render(session.state())
            .unwrap();

        assert_eq!(session.latest_frame().unwrap().pixel_buffer, expected);
    }

    #[test]
    fn test_save_writes_latest_frame() {
        let (mut session, file_presenter, presenter_port) = create_session(4, 4);
        session.apply(ViewCommand::ZoomIn).unwrap();
        let frame = session.latest_frame().unwrap();

        assert_eq!(session.apply(ViewCommand::Save), Ok(CommandOutcome::SaveQueued));
        session.finish_exports();

        let written = file_presenter.written.lock().unwrap();
        assert_eq!(written.as_slice(), &[frame.pixel_buffer.clone()]);
        assert_eq!(
            *presenter_port.events.lock().unwrap(),
            vec![ExportEvent::Saved {
                generation: 2,
                path: PathBuf::from("pic.png")
            }]
        );
    }

    #[test]
    fn test_save_does_not_change_view() {
        let (mut session, _, _) = create_session(4, 4);
        let before = *session.state();

        session.apply(ViewCommand::Save).unwrap();

        assert_eq!(session.state(), &before);
        assert_eq!(session.generation(), 1);
        session.finish_exports();
    }

    #[test]
    fn test_save_after_finish_exports_is_not_queued() {
        let (mut session, file_presenter, presenter_port) = create_session(4, 4);
        session.finish_exports();

        assert_eq!(session.apply(ViewCommand::Save), Ok(CommandOutcome::ExportsStopped));
        assert!(file_presenter.written.lock().unwrap().is_empty());
        assert!(presenter_port.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_origin_pixel_is_black_after_commands() {
        let (mut session, _, _) = create_session(4, 4);
        session.apply(ViewCommand::SaturationDown).unwrap();
        session.apply(ViewCommand::HueDown).unwrap();

        let frame = session.latest_frame().unwrap();

        assert_eq!(frame.pixel_buffer.packed_rgb(Point { x: 2, y: 2 }), Some(0x000000));
    }
}
