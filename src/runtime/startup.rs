use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::Session;
use crate::library::{Song, sample_songs};
use crate::store::{FileStore, KvStore, MemoryStore, load_songs};

/// Open the default file-backed store, falling back to a memory store so
/// the app always starts; only persistence is lost.
pub fn open_store() -> Box<dyn KvStore> {
    match FileStore::open_default() {
        Ok(Some(store)) => Box::new(store),
        Ok(None) => {
            eprintln!("adagio: no data directory; changes will not persist");
            Box::new(MemoryStore::default())
        }
        Err(e) => {
            eprintln!("adagio: failed to open data directory, changes will not persist: {e}");
            Box::new(MemoryStore::default())
        }
    }
}

/// Read the catalog once: a saved catalog wins, anything else (nothing
/// saved, or a catalog that no longer parses) means the built-in songs.
pub fn load_catalog(store: &dyn KvStore) -> Vec<Song> {
    match load_songs(store) {
        Ok(Some(songs)) => songs,
        Ok(None) => sample_songs(),
        Err(e) => {
            eprintln!("adagio: ignoring saved songs: {e}");
            sample_songs()
        }
    }
}

pub fn load_session(store: &dyn KvStore) -> Session {
    match Session::from_store(store) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("adagio: could not read saved role: {e}");
            Session::default()
        }
    }
}

/// Id for a song created in this session: milliseconds since the epoch.
/// Unique enough for one catalog.
pub fn next_song_id() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

/// Default year for the add form. The Gregorian average year length is
/// close enough for a pre-filled, editable field.
pub fn suggested_year() -> i32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    1970 + (secs / 31_556_952) as i32
}
