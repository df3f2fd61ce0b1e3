use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, PlaybackState, TickEffect};
use crate::config;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::playback::{ProgressCmd, ProgressTimer};
use crate::runtime::mpris_sync::update_mpris;
use crate::runtime::startup;
use crate::store::{KvStore, save_songs};
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Last-known playing id as emitted to MPRIS.
    pub last_mpris_id: Option<String>,
    /// Last-known playback state as emitted to MPRIS.
    pub last_mpris_playback: PlaybackState,
}

impl EventLoopState {
    /// Construct a new `EventLoopState` seeded from `app`.
    pub fn new(app: &App) -> Self {
        Self {
            last_mpris_id: app.playing.clone(),
            last_mpris_playback: app.playback(),
        }
    }
}

/// Main terminal event loop: handles input, UI drawing, write-through
/// persistence and sync with the progress worker and MPRIS. Returns
/// `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    timer: &ProgressTimer,
    store: &dyn KvStore,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Keep MPRIS in sync even when transitions came from media keys.
        if app.playing != state.last_mpris_id || app.playback() != state.last_mpris_playback {
            update_mpris(mpris, app);
            state.last_mpris_id = app.playing.clone();
            state.last_mpris_playback = app.playback();
        }

        // The position property follows the simulated needle.
        if let Some(handle) = &app.progress_handle {
            if let Ok(info) = handle.lock() {
                mpris.set_progress(info.progress);
            }
        }

        let visible = app.visible_indices();
        terminal.draw(|f| ui::draw(f, app, &visible, &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, app, timer, mpris)? {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, timer, store, mpris)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Forward a model transition's effect to the progress worker.
fn apply_tick_effect(timer: &ProgressTimer, effect: TickEffect) {
    match effect {
        TickEffect::Start(id) => {
            let _ = timer.send(ProgressCmd::Start(id));
        }
        TickEffect::Cancel => {
            let _ = timer.send(ProgressCmd::Cancel);
        }
        TickEffect::None => {}
    }
}

/// Write the catalog through the store. Failures are reported and
/// swallowed: the in-memory catalog stays authoritative.
fn persist_catalog(store: &dyn KvStore, app: &App) {
    if let Err(e) = save_songs(store, &app.songs) {
        eprintln!("adagio: failed to save songs: {e}");
    }
}

fn handle_control_cmd(
    cmd: ControlCmd,
    app: &mut App,
    timer: &ProgressTimer,
    mpris: &MprisHandle,
) -> Result<bool, Box<dyn std::error::Error>> {
    match cmd {
        ControlCmd::Quit => {
            timer.quit();
            return Ok(true);
        }
        ControlCmd::Play => {
            if app.playback() == PlaybackState::Stopped {
                if let Some(id) = app.selected_song().map(|s| s.id.clone()) {
                    let effect = app.toggle_play(&id);
                    apply_tick_effect(timer, effect);
                    update_mpris(mpris, app);
                }
            }
        }
        ControlCmd::Stop => {
            if let Some(id) = app.playing.clone() {
                let effect = app.toggle_play(&id);
                apply_tick_effect(timer, effect);
                update_mpris(mpris, app);
            }
        }
        ControlCmd::PlayPause => {
            let id = app
                .playing
                .clone()
                .or_else(|| app.selected_song().map(|s| s.id.clone()));
            if let Some(id) = id {
                let effect = app.toggle_play(&id);
                apply_tick_effect(timer, effect);
                update_mpris(mpris, app);
            }
        }
        ControlCmd::Next => {
            let effect = app.play_next();
            apply_tick_effect(timer, effect);
            update_mpris(mpris, app);
        }
        ControlCmd::Prev => {
            let effect = app.play_previous();
            apply_tick_effect(timer, effect);
            update_mpris(mpris, app);
        }
    }

    Ok(false)
}

fn handle_key_event(
    key: KeyEvent,
    app: &mut App,
    timer: &ProgressTimer,
    store: &dyn KvStore,
    mpris: &MprisHandle,
) -> Result<bool, Box<dyn std::error::Error>> {
    // The edit form swallows everything while it is open.
    if app.editor.is_some() {
        match key.code {
            KeyCode::Esc => app.close_editor(),
            KeyCode::Tab | KeyCode::Down => {
                if let Some(editor) = app.editor.as_mut() {
                    editor.focus_next();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(editor) = app.editor.as_mut() {
                    editor.focus_prev();
                }
            }
            KeyCode::Backspace => {
                if let Some(editor) = app.editor.as_mut() {
                    editor.pop_char();
                }
            }
            KeyCode::Enter => {
                if app.save_editor() {
                    persist_catalog(store, app);
                    update_mpris(mpris, app);
                }
            }
            KeyCode::Char(c) => {
                if !c.is_control() {
                    if let Some(editor) = app.editor.as_mut() {
                        editor.push_char(c);
                    }
                }
            }
            _ => {}
        }

        return Ok(false);
    }

    if app.search_mode {
        match key.code {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Enter => app.exit_search_mode(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Down => app.select_next(),
            KeyCode::Up => app.select_prev(),
            KeyCode::Char(c) => {
                if !c.is_control() {
                    app.push_search_char(c);
                }
            }
            _ => {}
        }

        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => {
            timer.quit();
            return Ok(true);
        }
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Char('f') => app.cycle_category(),
        KeyCode::Char('o') => app.cycle_sort_field(),
        KeyCode::Char('O') => app.toggle_sort_direction(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') => {
            let visible = app.visible_indices();
            if let Some(&first) = visible.first() {
                app.set_selected(first);
            }
        }
        KeyCode::Char('G') => {
            let visible = app.visible_indices();
            if let Some(&last) = visible.last() {
                app.set_selected(last);
            }
        }
        KeyCode::Enter => {
            if let Some(id) = app.selected_song().map(|s| s.id.clone()) {
                let effect = app.toggle_play(&id);
                apply_tick_effect(timer, effect);
                update_mpris(mpris, app);
            }
        }
        KeyCode::Char(' ') => {
            let id = app
                .playing
                .clone()
                .or_else(|| app.selected_song().map(|s| s.id.clone()));
            if let Some(id) = id {
                let effect = app.toggle_play(&id);
                apply_tick_effect(timer, effect);
                update_mpris(mpris, app);
            }
        }
        KeyCode::Char('l') => {
            let effect = app.play_next();
            apply_tick_effect(timer, effect);
            update_mpris(mpris, app);
        }
        KeyCode::Char('h') => {
            let effect = app.play_previous();
            apply_tick_effect(timer, effect);
            update_mpris(mpris, app);
        }
        KeyCode::Char('a') => {
            app.open_add_editor(startup::next_song_id(), startup::suggested_year());
        }
        KeyCode::Char('e') => app.open_edit_editor(),
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_song().map(|s| s.id.clone()) {
                let (changed, effect) = app.delete_song(&id);
                apply_tick_effect(timer, effect);
                if changed {
                    persist_catalog(store, app);
                    update_mpris(mpris, app);
                }
            }
        }
        _ => {}
    }

    Ok(false)
}
