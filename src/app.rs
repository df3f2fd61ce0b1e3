//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog, the derived
//! view state (search, category, sort, cursor) and the simulated playback
//! state.

mod editor;
mod model;

pub use editor::*;
pub use model::*;

#[cfg(test)]
mod tests;
