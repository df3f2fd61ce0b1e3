//! Simulated playback.
//!
//! There is no audio pipeline: "playing" a song only advances a shared
//! progress value on a fixed interval. A single command-driven worker owns
//! that value; starting, switching or cancelling goes through its command
//! channel, so there is never more than one live tick source and a cancelled
//! tick can never advance progress again.

mod player;
mod thread;
mod types;

pub use player::ProgressTimer;
pub use types::{PROGRESS_MAX, ProgressCmd, ProgressHandle, ProgressInfo, advance};
