//! Application model types: `App`, `PlaybackState` and `TickEffect`.
//!
//! The `App` struct owns the catalog and the view state derived from it.
//! Transition methods mutate the model and report the [`TickEffect`] the
//! caller must forward to the progress worker, so the worker never outlives
//! the state that started it.

use crate::auth::Session;
use crate::library::{self, CategoryFilter, Song, SongField, SortDirection};
use crate::playback::ProgressHandle;

use super::editor::Editor;

/// The playback state of the application. There is no pause: toggling a
/// playing song stops it outright.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// What the progress worker should do after a model transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEffect {
    /// (Re)start ticking for this song id, from zero.
    Start(String),
    /// Halt the tick and clear progress.
    Cancel,
    /// Nothing changed for the worker.
    None,
}

/// The main application model.
pub struct App {
    pub songs: Vec<Song>,
    /// Catalog index of the cursor row.
    pub selected: usize,
    /// Id of the song currently "playing", if any. Always references an id
    /// present in `songs`.
    pub playing: Option<String>,
    pub progress_handle: Option<ProgressHandle>,

    pub search_term: String,
    pub search_mode: bool,
    pub category: CategoryFilter,
    pub sort: Option<(SongField, SortDirection)>,

    pub session: Session,
    pub editor: Option<Editor>,

    /// Year splitting the `newest`/`oldest` pills.
    pub cutoff_year: i32,
    /// Truncation used by the `latest` pill.
    pub latest_limit: usize,
}

impl App {
    /// Create a new `App` over the provided catalog.
    pub fn new(songs: Vec<Song>, session: Session) -> Self {
        Self {
            songs,
            selected: 0,
            playing: None,
            progress_handle: None,

            search_term: String::new(),
            search_mode: false,
            category: CategoryFilter::All,
            sort: None,

            session,
            editor: None,

            cutoff_year: 1980,
            latest_limit: 5,
        }
    }

    /// Attach the handle used to observe simulated progress.
    pub fn set_progress_handle(&mut self, h: ProgressHandle) {
        self.progress_handle = Some(h);
    }

    pub fn has_songs(&self) -> bool {
        !self.songs.is_empty()
    }

    pub fn playback(&self) -> PlaybackState {
        if self.playing.is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Stopped
        }
    }

    /// Catalog position of a song id.
    pub fn song_index(&self, id: &str) -> Option<usize> {
        self.songs.iter().position(|s| s.id == id)
    }

    pub fn song_by_id(&self, id: &str) -> Option<&Song> {
        self.song_index(id).map(|i| &self.songs[i])
    }

    /// The song currently "playing", resolved against the catalog.
    pub fn playing_song(&self) -> Option<&Song> {
        self.playing.as_deref().and_then(|id| self.song_by_id(id))
    }

    /// Return the catalog indices currently on display: search narrows the
    /// catalog, the category pill narrows the search result, and the
    /// optional sort reorders what is left.
    pub fn visible_indices(&self) -> Vec<usize> {
        let found = library::search(&self.songs, &self.search_term);
        let narrowed = library::category(
            &self.songs,
            &found,
            self.category,
            self.cutoff_year,
            self.latest_limit,
        );
        match self.sort {
            Some((field, direction)) => library::sort(&self.songs, &narrowed, field, direction),
            None => narrowed,
        }
    }

    // ---- playback transitions ----

    /// Toggle a song: playing it stops it, anything else starts it from
    /// zero (discarding whatever progress the previous song had).
    pub fn toggle_play(&mut self, id: &str) -> TickEffect {
        if self.playing.as_deref() == Some(id) {
            self.playing = None;
            return TickEffect::Cancel;
        }
        if self.song_index(id).is_none() {
            return TickEffect::None;
        }
        self.playing = Some(id.to_string());
        TickEffect::Start(id.to_string())
    }

    /// Move to the next catalog entry after the playing song. No wraparound:
    /// at the end of the list nothing happens.
    pub fn play_next(&mut self) -> TickEffect {
        let Some(idx) = self.playing.as_deref().and_then(|id| self.song_index(id)) else {
            return TickEffect::None;
        };
        if idx + 1 >= self.songs.len() {
            return TickEffect::None;
        }
        let id = self.songs[idx + 1].id.clone();
        self.playing = Some(id.clone());
        TickEffect::Start(id)
    }

    /// Move to the previous catalog entry. No wraparound at the front.
    pub fn play_previous(&mut self) -> TickEffect {
        let Some(idx) = self.playing.as_deref().and_then(|id| self.song_index(id)) else {
            return TickEffect::None;
        };
        if idx == 0 {
            return TickEffect::None;
        }
        let id = self.songs[idx - 1].id.clone();
        self.playing = Some(id.clone());
        TickEffect::Start(id)
    }

    // ---- catalog mutation (admin-gated) ----

    /// Insert or replace by id. Returns whether the catalog changed so the
    /// caller can write it through the store.
    pub fn upsert_song(&mut self, song: Song) -> bool {
        if !self.session.is_admin() {
            return false;
        }
        match self.song_index(&song.id) {
            Some(i) => self.songs[i] = song,
            None => self.songs.push(song),
        }
        self.ensure_selected_visible();
        true
    }

    /// Delete by id. Deleting the playing song stops playback so the
    /// current-song reference never dangles.
    pub fn delete_song(&mut self, id: &str) -> (bool, TickEffect) {
        if !self.session.is_admin() {
            return (false, TickEffect::None);
        }
        let before = self.songs.len();
        self.songs.retain(|s| s.id != id);
        if self.songs.len() == before {
            return (false, TickEffect::None);
        }

        let effect = if self.playing.as_deref() == Some(id) {
            self.playing = None;
            TickEffect::Cancel
        } else {
            TickEffect::None
        };

        self.ensure_selected_visible();
        (true, effect)
    }

    // ---- search ----

    /// Enter search mode; keystrokes then edit the term.
    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
        self.ensure_selected_visible();
    }

    /// Leave search mode, keeping the current term applied.
    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Drop the term and leave search mode.
    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.search_mode = false;
        self.ensure_selected_visible();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
        self.ensure_selected_visible();
    }

    pub fn pop_search_char(&mut self) {
        self.search_term.pop();
        self.ensure_selected_visible();
    }

    // ---- category & sort ----

    pub fn cycle_category(&mut self) {
        self.category = self.category.cycle();
        self.ensure_selected_visible();
    }

    /// Cycle the sort key: unsorted -> title -> ... -> genre -> unsorted.
    /// The direction survives key changes.
    pub fn cycle_sort_field(&mut self) {
        self.sort = match self.sort {
            None => Some((SongField::Title, SortDirection::Asc)),
            Some((SongField::Genre, _)) => None,
            Some((field, direction)) => Some((field.cycle(), direction)),
        };
        self.ensure_selected_visible();
    }

    pub fn toggle_sort_direction(&mut self) {
        if let Some((field, direction)) = self.sort {
            self.sort = Some((field, direction.toggle()));
        }
    }

    // ---- cursor ----

    /// Set the cursor and keep it inside the visible list.
    pub fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
        self.ensure_selected_visible();
    }

    pub fn selected_song(&self) -> Option<&Song> {
        self.songs.get(self.selected)
    }

    /// Move the cursor to the next visible row, wrapping around.
    pub fn select_next(&mut self) {
        let visible = self.visible_indices();
        if visible.is_empty() {
            return;
        }
        let pos = visible.iter().position(|&i| i == self.selected);
        self.selected = match pos {
            Some(p) => visible[(p + 1) % visible.len()],
            None => visible[0],
        };
    }

    /// Move the cursor to the previous visible row, wrapping around.
    pub fn select_prev(&mut self) {
        let visible = self.visible_indices();
        if visible.is_empty() {
            return;
        }
        let pos = visible.iter().position(|&i| i == self.selected);
        self.selected = match pos {
            Some(0) | None => visible[visible.len() - 1],
            Some(p) => visible[p - 1],
        };
    }

    /// Ensure that `selected` is part of the current view, otherwise move
    /// the cursor to the first visible row.
    fn ensure_selected_visible(&mut self) {
        let visible = self.visible_indices();
        if visible.is_empty() {
            self.selected = 0;
            return;
        }
        if !visible.contains(&self.selected) {
            self.selected = visible[0];
        }
    }

    // ---- editor ----

    /// Open the add form. Admin only; others get a silent no-op, same as
    /// every other mutation path.
    pub fn open_add_editor(&mut self, id: String, suggested_year: i32) {
        if !self.session.is_admin() {
            return;
        }
        self.editor = Some(Editor::for_new(id, suggested_year));
    }

    /// Open the edit form for the cursor row. Admin only.
    pub fn open_edit_editor(&mut self) {
        if !self.session.is_admin() {
            return;
        }
        if let Some(song) = self.selected_song() {
            self.editor = Some(Editor::from_song(song));
        }
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Commit the open form into the catalog. Returns whether the catalog
    /// changed (false when no editor is open or the session may not write).
    pub fn save_editor(&mut self) -> bool {
        let Some(editor) = self.editor.take() else {
            return false;
        };
        self.upsert_song(editor.to_song())
    }
}
