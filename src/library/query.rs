//! Pure query functions over the catalog.
//!
//! Every function is total and leaves the catalog untouched: callers pass a
//! slice and get back lists of indices into it (a map of index lists for
//! grouping), so the catalog itself is never cloned or reordered.

use std::cmp::{Ordering, Reverse};
use std::collections::BTreeMap;

use serde::Deserialize;

use super::model::Song;

/// Category pills shown above the list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    All,
    Newest,
    Oldest,
    Latest,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::All
    }
}

impl CategoryFilter {
    /// Next pill in display order, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Self::All => Self::Newest,
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Latest,
            Self::Latest => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Latest => "latest",
        }
    }
}

/// A song field usable as a sort key or a grouping key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SongField {
    Title,
    Artist,
    Album,
    Year,
    Duration,
    Genre,
}

impl SongField {
    pub fn cycle(self) -> Self {
        match self {
            Self::Title => Self::Artist,
            Self::Artist => Self::Album,
            Self::Album => Self::Year,
            Self::Year => Self::Duration,
            Self::Duration => Self::Genre,
            Self::Genre => Self::Title,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Year => "year",
            Self::Duration => "duration",
            Self::Genre => "genre",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Bucket key for songs whose grouping field is absent. Every such song
/// lands in this one bucket.
pub const MISSING_GROUP_KEY: &str = "undefined";

/// Case-insensitive substring match against title, artist and album.
/// An empty term matches the whole catalog.
pub fn search(songs: &[Song], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..songs.len()).collect();
    }

    let term = term.to_lowercase();
    songs
        .iter()
        .enumerate()
        .filter(|(_, s)| {
            s.title.to_lowercase().contains(&term)
                || s.artist.to_lowercase().contains(&term)
                || s.album.to_lowercase().contains(&term)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Apply a category pill to an already-computed index list (search runs
/// first; the category narrows its result).
///
/// `newest`/`oldest` partition at `cutoff_year`; `latest` keeps the
/// `latest_limit` most recent songs, year-descending with ties in incoming
/// order.
pub fn category(
    songs: &[Song],
    indices: &[usize],
    filter: CategoryFilter,
    cutoff_year: i32,
    latest_limit: usize,
) -> Vec<usize> {
    match filter {
        CategoryFilter::All => indices.to_vec(),
        CategoryFilter::Newest => indices
            .iter()
            .copied()
            .filter(|&i| songs[i].year >= cutoff_year)
            .collect(),
        CategoryFilter::Oldest => indices
            .iter()
            .copied()
            .filter(|&i| songs[i].year < cutoff_year)
            .collect(),
        CategoryFilter::Latest => {
            let mut out = indices.to_vec();
            out.sort_by_key(|&i| Reverse(songs[i].year));
            out.truncate(latest_limit);
            out
        }
    }
}

/// Stable sort of an index list by a song field.
///
/// Text fields compare by Unicode lowercase, `year` numerically. When either
/// side of an optional field is absent the comparator yields `Equal`, so the
/// incoming relative order survives.
pub fn sort(
    songs: &[Song],
    indices: &[usize],
    field: SongField,
    direction: SortDirection,
) -> Vec<usize> {
    let mut out = indices.to_vec();
    out.sort_by(|&a, &b| {
        let ord = compare_field(&songs[a], &songs[b], field);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    out
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare_field(a: &Song, b: &Song, field: SongField) -> Ordering {
    match field {
        SongField::Title => text_cmp(&a.title, &b.title),
        SongField::Artist => text_cmp(&a.artist, &b.artist),
        SongField::Album => text_cmp(&a.album, &b.album),
        SongField::Year => a.year.cmp(&b.year),
        SongField::Duration => text_cmp(&a.duration, &b.duration),
        SongField::Genre => match (a.genre.as_deref(), b.genre.as_deref()) {
            (Some(x), Some(y)) => text_cmp(x, y),
            _ => Ordering::Equal,
        },
    }
}

/// Partition the catalog into buckets keyed by the string form of `field`.
///
/// Bucket membership follows catalog order; songs missing the field all land
/// under [`MISSING_GROUP_KEY`].
pub fn group(songs: &[Song], field: SongField) -> BTreeMap<String, Vec<usize>> {
    let mut buckets: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, song) in songs.iter().enumerate() {
        buckets.entry(group_key(song, field)).or_default().push(i);
    }
    buckets
}

fn group_key(song: &Song, field: SongField) -> String {
    match field {
        SongField::Title => song.title.clone(),
        SongField::Artist => song.artist.clone(),
        SongField::Album => song.album.clone(),
        SongField::Year => song.year.to_string(),
        SongField::Duration => song.duration.clone(),
        SongField::Genre => song
            .genre
            .clone()
            .unwrap_or_else(|| MISSING_GROUP_KEY.to_string()),
    }
}

/// Inclusive year bounds, each side independently optional.
pub fn year_range(songs: &[Song], min_year: Option<i32>, max_year: Option<i32>) -> Vec<usize> {
    songs
        .iter()
        .enumerate()
        .filter(|(_, s)| {
            min_year.map_or(true, |m| s.year >= m) && max_year.map_or(true, |m| s.year <= m)
        })
        .map(|(i, _)| i)
        .collect()
}
