//! Persistence port.
//!
//! A small key-value abstraction decouples the catalog from the storage
//! mechanism. The store is a write-through cache, never the authority: the
//! in-memory catalog wins whenever the two disagree.

mod file;
mod port;
mod songs;

pub use file::{FileStore, default_data_path, resolve_data_path};
pub use port::{KvStore, MemoryStore, StoreError};
pub use songs::{SONGS_KEY, USER_ROLE_KEY, load_role, load_songs, save_role, save_songs};

#[cfg(test)]
mod tests;
