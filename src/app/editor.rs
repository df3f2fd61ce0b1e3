//! Edit-popup state for adding and editing songs.

use crate::library::Song;

/// Which form field currently has input focus.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EditField {
    Title,
    Artist,
    Album,
    Year,
    Duration,
    Genre,
}

impl EditField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Artist,
            Self::Artist => Self::Album,
            Self::Album => Self::Year,
            Self::Year => Self::Duration,
            Self::Duration => Self::Genre,
            Self::Genre => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Artist => Self::Title,
            Self::Album => Self::Artist,
            Self::Year => Self::Album,
            Self::Duration => Self::Year,
            Self::Genre => Self::Duration,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Artist => "Artist",
            Self::Album => "Album",
            Self::Year => "Year",
            Self::Duration => "Duration",
            Self::Genre => "Genre",
        }
    }
}

/// In-flight add/edit form. Every field is edited as text; `year` parses on
/// save. Cover and audio fields are not editable here and ride along
/// untouched.
#[derive(Debug, Clone)]
pub struct Editor {
    pub id: String,
    pub is_new: bool,
    pub field: EditField,

    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub duration: String,
    pub genre: String,

    cover_url: Option<String>,
    audio_src: Option<String>,
}

impl Editor {
    /// Blank form for a new song.
    pub fn for_new(id: String, suggested_year: i32) -> Self {
        Self {
            id,
            is_new: true,
            field: EditField::Title,
            title: String::new(),
            artist: String::new(),
            album: String::new(),
            year: suggested_year.to_string(),
            duration: "0:00".to_string(),
            genre: String::new(),
            cover_url: None,
            audio_src: None,
        }
    }

    /// Form pre-filled from an existing song.
    pub fn from_song(song: &Song) -> Self {
        Self {
            id: song.id.clone(),
            is_new: false,
            field: EditField::Title,
            title: song.title.clone(),
            artist: song.artist.clone(),
            album: song.album.clone(),
            year: song.year.to_string(),
            duration: song.duration.clone(),
            genre: song.genre.clone().unwrap_or_default(),
            cover_url: song.cover_url.clone(),
            audio_src: song.audio_src.clone(),
        }
    }

    pub fn focus_next(&mut self) {
        self.field = self.field.next();
    }

    pub fn focus_prev(&mut self) {
        self.field = self.field.prev();
    }

    /// Append a character to the focused field. The year field only takes
    /// digits so it always parses on save.
    pub fn push_char(&mut self, c: char) {
        if self.field == EditField::Year && !c.is_ascii_digit() {
            return;
        }
        self.field_text_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.field_text_mut().pop();
    }

    pub fn field_text(&self, field: EditField) -> &str {
        match field {
            EditField::Title => &self.title,
            EditField::Artist => &self.artist,
            EditField::Album => &self.album,
            EditField::Year => &self.year,
            EditField::Duration => &self.duration,
            EditField::Genre => &self.genre,
        }
    }

    fn field_text_mut(&mut self) -> &mut String {
        match self.field {
            EditField::Title => &mut self.title,
            EditField::Artist => &mut self.artist,
            EditField::Album => &mut self.album,
            EditField::Year => &mut self.year,
            EditField::Duration => &mut self.duration,
            EditField::Genre => &mut self.genre,
        }
    }

    /// Materialize the form. An empty genre field clears the genre; an
    /// empty year parses to 0 rather than failing the save.
    pub fn to_song(&self) -> Song {
        Song {
            id: self.id.clone(),
            title: self.title.trim().to_string(),
            artist: self.artist.trim().to_string(),
            album: self.album.trim().to_string(),
            year: self.year.trim().parse().unwrap_or(0),
            duration: self.duration.trim().to_string(),
            genre: match self.genre.trim() {
                "" => None,
                g => Some(g.to_string()),
            },
            cover_url: self.cover_url.clone(),
            audio_src: self.audio_src.clone(),
        }
    }
}
