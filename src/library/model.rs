use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Identity is `id`; every other field may change through edit-save. The
/// serialized form uses camelCase keys and omits absent optional fields, so
/// catalogs written by earlier versions keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: i32,
    /// Free-form "m:ss" text, rendered as-is.
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_src: Option<String>,
}

impl Song {
    /// "Artist - Title" line used by list rows and MPRIS metadata.
    pub fn display(&self) -> String {
        let artist = self.artist.trim();
        if artist.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", artist, self.title)
        }
    }
}
