use crate::config::ExplorerConfig;
use crate::controllers::interactive::{
    CommandOutcome, ExplorerSession, ExportEvent, ExportPresenterPort,
};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::view::ViewCommand;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliRenderError {
    NothingToSave,
    ExportFailed { path: PathBuf, message: String },
    NoExportResult,
}

impl fmt::Display for CliRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToSave => write!(f, "no frame was rendered"),
            Self::ExportFailed { path, message } => {
                write!(f, "could not save {}: {}", path.display(), message)
            }
            Self::NoExportResult => write!(f, "export worker stopped without a result"),
        }
    }
}

impl Error for CliRenderError {}

struct ChannelExportPresenter {
    sender: Mutex<Sender<ExportEvent>>,
}

impl ExportPresenterPort for ChannelExportPresenter {
    fn present(&self, event: ExportEvent) {
        // A closed receiver means the controller has already given up waiting.
        let _ = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .send(event);
    }
}

/// One-shot headless render: apply commands, save, wait for the file.
pub struct CliRenderController {
    session: ExplorerSession,
    commands: Vec<ViewCommand>,
    export_events: Receiver<ExportEvent>,
}

impl CliRenderController {
    pub fn new(
        config: &ExplorerConfig,
        file_presenter: Arc<dyn FilePresenterPort>,
    ) -> Result<Self, Box<dyn Error>> {
        let (sender, export_events) = mpsc::channel();
        let presenter = Arc::new(ChannelExportPresenter {
            sender: Mutex::new(sender),
        });
        let session = ExplorerSession::new(config, file_presenter, presenter)?;

        Ok(Self {
            session,
            commands: config.commands.clone(),
            export_events,
        })
    }

    /// Runs the configured commands and returns the path that was written.
    pub fn run(mut self) -> Result<PathBuf, Box<dyn Error>> {
        for &command in &self.commands {
            self.session.apply(command)?;
        }

        if let Some(frame) = self.session.latest_frame() {
            log::info!(
                "Frame {} rendered in {} ms",
                frame.generation,
                frame.render_duration.as_millis()
            );
        }

        match self.session.save() {
            CommandOutcome::NothingToSave => return Err(Box::new(CliRenderError::NothingToSave)),
            CommandOutcome::ExportsStopped => return Err(Box::new(CliRenderError::NoExportResult)),
            _ => {}
        }

        self.session.finish_exports();

        // Commands may include saves of their own; the final save is reported last.
        let last_event = self
            .export_events
            .try_iter()
            .last()
            .ok_or(CliRenderError::NoExportResult)?;

        match last_event {
            ExportEvent::Saved { path, .. } => Ok(path),
            ExportEvent::Failed { path, message, .. } => {
                Err(Box::new(CliRenderError::ExportFailed { path, message }))
            }
        }
    }

    #[must_use]
    pub fn session(&self) -> &ExplorerSession {
        &self.session
    }
}
