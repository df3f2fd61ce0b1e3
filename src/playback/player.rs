use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::config::PlaybackSettings;

use super::thread::spawn_progress_thread;
use super::types::{ProgressCmd, ProgressHandle, ProgressInfo};

/// Owner of the single progress worker.
pub struct ProgressTimer {
    tx: Sender<ProgressCmd>,
    info: ProgressHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl ProgressTimer {
    pub fn new(settings: PlaybackSettings) -> Self {
        let (tx, rx) = mpsc::channel::<ProgressCmd>();
        let info: ProgressHandle = Arc::new(Mutex::new(ProgressInfo::default()));

        let worker = spawn_progress_thread(rx, info.clone(), settings);

        Self {
            tx,
            info,
            join: Mutex::new(Some(worker)),
        }
    }

    /// Shared handle used to observe the simulated progress.
    pub fn handle(&self) -> ProgressHandle {
        self.info.clone()
    }

    pub fn send(&self, cmd: ProgressCmd) -> Result<(), mpsc::SendError<ProgressCmd>> {
        self.tx.send(cmd)
    }

    /// Stop the worker and wait for it to exit.
    pub fn quit(&self) {
        let _ = self.send(ProgressCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
