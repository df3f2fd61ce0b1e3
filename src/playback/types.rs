//! Small types shared by the progress worker and its owners.

use std::sync::{Arc, Mutex};

/// Progress saturates here and holds; reaching the cap neither stops
/// playback nor advances to the next song.
pub const PROGRESS_MAX: f64 = 100.0;

#[derive(Debug)]
pub enum ProgressCmd {
    /// Begin ticking for the given song id, restarting progress at zero.
    /// Supersedes whatever the worker was doing before.
    Start(String),
    /// Halt ticking and clear the current song.
    Cancel,
    /// Shut the worker down.
    Quit,
}

/// Simulated playback state shared with the UI and MPRIS.
#[derive(Debug, Clone, Default)]
pub struct ProgressInfo {
    /// Id of the song currently "playing", if any.
    pub song_id: Option<String>,
    /// 0 to [`PROGRESS_MAX`].
    pub progress: f64,
    pub playing: bool,
}

pub type ProgressHandle = Arc<Mutex<ProgressInfo>>;

/// One tick: grow by `step`, saturating at [`PROGRESS_MAX`].
pub fn advance(progress: f64, step: f64) -> f64 {
    if progress >= PROGRESS_MAX {
        PROGRESS_MAX
    } else {
        (progress + step).min(PROGRESS_MAX)
    }
}
