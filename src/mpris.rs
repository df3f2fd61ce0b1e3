//! MPRIS (D-Bus) transport surface.
//!
//! Media keys and `playerctl` drive the simulated player through the same
//! `ControlCmd` channel the keyboard uses. The D-Bus service runs on its own
//! thread; the runtime mirrors playback state into `MprisHandle` after every
//! transition.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};

use async_io::{Timer, block_on};
use zbus::{Connection, interface};
use zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value};

use crate::app::PlaybackState;
use crate::library::Song;

#[derive(Clone, Debug)]
pub enum ControlCmd {
    Quit,
    /// Start the cursor row (or restart the current song).
    Play,
    Stop,
    /// Toggle the current song: playing stops, stopped starts.
    PlayPause,
    Next,
    Prev,
}

#[derive(Debug, Default)]
struct SharedState {
    playback: PlaybackState,
    title: Option<String>,
    artist: Vec<String>,
    album: Option<String>,
    track_id: Option<OwnedObjectPath>,
    length_micros: Option<i64>,
    /// Simulated progress, 0-100.
    progress: f64,
}

pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl MprisHandle {
    pub fn set_playback(&self, playback: PlaybackState) {
        if let Ok(mut s) = self.state.lock() {
            s.playback = playback;
        }
    }

    /// Publish (or clear) the now-playing song's metadata.
    pub fn set_song_metadata(&self, song: Option<&Song>) {
        if let Ok(mut s) = self.state.lock() {
            match song {
                Some(song) => {
                    s.title = Some(song.title.clone());
                    s.artist = vec![song.artist.clone()];
                    s.album = Some(song.album.clone());
                    s.track_id = track_object_path(&song.id);
                    s.length_micros = duration_micros(&song.duration);
                }
                None => {
                    s.title = None;
                    s.artist.clear();
                    s.album = None;
                    s.track_id = None;
                    s.length_micros = None;
                    s.progress = 0.0;
                }
            }
        }
    }

    pub fn set_progress(&self, progress: f64) {
        if let Ok(mut s) = self.state.lock() {
            s.progress = progress;
        }
    }
}

/// Song ids are free-form text; object paths are not. Anything outside
/// `[A-Za-z0-9_]` flattens to an underscore.
fn track_object_path(id: &str) -> Option<OwnedObjectPath> {
    let safe: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    ObjectPath::try_from(format!("/org/mpris/MediaPlayer2/track/{safe}"))
        .ok()
        .map(|p| p.into())
}

/// Parse the free-form "m:ss" duration text into microseconds. Text that
/// does not look like a duration yields no length at all.
fn duration_micros(text: &str) -> Option<i64> {
    let (m, s) = text.trim().split_once(':')?;
    let m: i64 = m.parse().ok()?;
    let s: i64 = s.parse().ok()?;
    if m < 0 || !(0..60).contains(&s) {
        return None;
    }
    Some((m * 60 + s) * 1_000_000)
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No-op for TUI.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "adagio"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        // No pause state in a simulated player: pausing stops.
        let _ = self.tx.send(ControlCmd::Stop);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Stop);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Stopped";
        };
        match s.playback {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
        }
    }

    #[zbus(property)]
    fn position(&self) -> i64 {
        let Ok(s) = self.state.lock() else {
            return 0;
        };
        position_micros(s.length_micros, s.progress)
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_seek(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();

        let Ok(s) = self.state.lock() else {
            return map;
        };

        if let Some(track_id) = &s.track_id {
            insert_value(
                &mut map,
                "mpris:trackid",
                Value::ObjectPath(track_id.clone().into_inner()),
            );
        }
        if let Some(title) = &s.title {
            insert_value(&mut map, "xesam:title", Value::from(title.clone()));
        }
        if !s.artist.is_empty() {
            insert_value(&mut map, "xesam:artist", Value::from(s.artist.clone()));
        }
        if let Some(album) = &s.album {
            insert_value(&mut map, "xesam:album", Value::from(album.clone()));
        }
        if let Some(length) = s.length_micros {
            insert_value(&mut map, "mpris:length", Value::from(length));
        }

        map
    }
}

/// Where the simulated needle is, scaled into the song's length.
fn position_micros(length_micros: Option<i64>, progress: f64) -> i64 {
    let Some(length) = length_micros else {
        return 0;
    };
    ((length as f64) * (progress / 100.0).clamp(0.0, 1.0)) as i64
}

fn insert_value(map: &mut HashMap<String, OwnedValue>, key: &str, value: Value<'_>) {
    if let Ok(owned) = OwnedValue::try_from(value) {
        map.insert(key.to_string(), owned);
    }
}

pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        block_on(async move {
            let path = "/org/mpris/MediaPlayer2";

            let connection = match Connection::session().await {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("MPRIS: failed to connect to session bus: {e}");
                    return;
                }
            };

            if let Err(e) = connection
                .request_name("org.mpris.MediaPlayer2.adagio")
                .await
            {
                eprintln!("MPRIS: failed to acquire name: {e}");
                return;
            }

            let object_server = connection.object_server();

            if let Err(e) = object_server.at(path, RootIface { tx: tx.clone() }).await {
                eprintln!("MPRIS: failed to register root iface: {e}");
                return;
            }

            if let Err(e) = object_server
                .at(
                    path,
                    PlayerIface {
                        tx,
                        state: state_for_thread,
                    },
                )
                .await
            {
                eprintln!("MPRIS: failed to register player iface: {e}");
                return;
            }

            // Keep the service alive.
            loop {
                Timer::after(std::time::Duration::from_secs(3600)).await;
            }
        });
    });

    MprisHandle { state }
}
