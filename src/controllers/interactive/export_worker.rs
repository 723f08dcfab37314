use crate::controllers::interactive::data::export_job::ExportJob;
use crate::controllers::interactive::events::export_event::ExportEvent;
use crate::controllers::interactive::ports::presenter::ExportPresenterPort;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    pending_job: Mutex<Option<ExportJob>>,
    wake: Condvar,
    shutdown: AtomicBool,
    file_presenter: Arc<dyn FilePresenterPort>,
    presenter_port: Arc<dyn ExportPresenterPort>,
}

/// Writes frames to disk on a background thread.
///
/// Holds at most one pending job: submitting while a job is queued replaces
/// it, so a burst of save requests writes only the newest frame. A job that
/// is queued when the worker shuts down is still written.
pub struct ExportWorker {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl ExportWorker {
    pub fn new(
        file_presenter: Arc<dyn FilePresenterPort>,
        presenter_port: Arc<dyn ExportPresenterPort>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            pending_job: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            file_presenter,
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `job`. Returns `false` without queueing once the worker has
    /// been shut down.
    pub fn submit(&self, job: ExportJob) -> bool {
        {
            let mut guard = self
                .shared
                .pending_job
                .lock()
                .unwrap_or_else(PoisonError::into_inner);

            if self.shared.shutdown.load(Ordering::Acquire) {
                log::warn!(
                    "Export of frame {} refused: worker has stopped",
                    job.frame.generation
                );
                return false;
            }

            if let Some(replaced) = guard.replace(job) {
                log::debug!(
                    "Export of frame {} superseded before it started",
                    replaced.frame.generation
                );
            }
        }

        self.shared.wake.notify_one();

        true
    }

    /// Stops the worker after it has written any pending job.
    pub fn shutdown(&mut self) {
        {
            // Held so the flag cannot land between the worker's check and its wait.
            let _guard = self
                .shared
                .pending_job
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("Export worker panicked");
            }
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let job = {
                let mut guard = shared
                    .pending_job
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if let Some(job) = guard.take() {
                        break job;
                    }

                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let event = Self::export(shared.file_presenter.as_ref(), &job);
            shared.presenter_port.present(event);
        }
    }

    fn export(file_presenter: &dyn FilePresenterPort, job: &ExportJob) -> ExportEvent {
        let generation = job.frame.generation;
        let start = Instant::now();

        match file_presenter.present(&job.frame.pixel_buffer, &job.path) {
            Ok(()) => {
                log::info!(
                    "Saved frame {} to {} as {} in {:?}",
                    generation,
                    job.path.display(),
                    file_presenter.format_name(),
                    start.elapsed()
                );

                ExportEvent::Saved {
                    generation,
                    path: job.path.clone(),
                }
            }
            Err(error) => {
                log::error!("Export of frame {} failed: {}", generation, error);

                ExportEvent::Failed {
                    generation,
                    path: job.path.clone(),
                    message: error.to_string(),
                }
            }
        }
    }
}

impl Drop for ExportWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
