use crate::library::Song;

use super::port::{KvStore, StoreError};

/// Store key holding the serialized catalog (a JSON array of songs).
pub const SONGS_KEY: &str = "songs";
/// Store key holding the session role as a plain string.
pub const USER_ROLE_KEY: &str = "userRole";

/// Read the persisted catalog once at startup. `Ok(None)` means nothing was
/// ever saved; malformed JSON is an error for the caller to report.
pub fn load_songs<S: KvStore + ?Sized>(store: &S) -> Result<Option<Vec<Song>>, StoreError> {
    match store.get(SONGS_KEY)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Write the whole catalog; runs after every add, edit-save and delete.
pub fn save_songs<S: KvStore + ?Sized>(store: &S, songs: &[Song]) -> Result<(), StoreError> {
    store.set(SONGS_KEY, &serde_json::to_string(songs)?)
}

pub fn load_role<S: KvStore + ?Sized>(store: &S) -> Result<Option<String>, StoreError> {
    store.get(USER_ROLE_KEY)
}

pub fn save_role<S: KvStore + ?Sized>(store: &S, role: &str) -> Result<(), StoreError> {
    store.set(USER_ROLE_KEY, role)
}
