use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::PlaybackSettings;

use super::types::{ProgressCmd, ProgressHandle, advance};

pub(super) fn spawn_progress_thread(
    rx: Receiver<ProgressCmd>,
    info: ProgressHandle,
    settings: PlaybackSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let tick = Duration::from_millis(settings.tick_ms.max(1));
        let mut ticking = false;

        loop {
            match rx.recv_timeout(tick) {
                Ok(ProgressCmd::Start(id)) => {
                    ticking = true;
                    if let Ok(mut info) = info.lock() {
                        info.song_id = Some(id);
                        info.progress = 0.0;
                        info.playing = true;
                    }
                }
                Ok(ProgressCmd::Cancel) => {
                    ticking = false;
                    if let Ok(mut info) = info.lock() {
                        info.song_id = None;
                        info.progress = 0.0;
                        info.playing = false;
                    }
                }
                Ok(ProgressCmd::Quit) => break,
                Err(RecvTimeoutError::Timeout) => {
                    // Commands arriving between ticks are handled before the
                    // next advance, so a cancel always wins over its tick.
                    if ticking {
                        if let Ok(mut info) = info.lock() {
                            info.progress = advance(info.progress, settings.step);
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
