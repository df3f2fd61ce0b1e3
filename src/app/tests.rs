use super::*;
use crate::auth::{ADMIN_ROLE, Session};
use crate::library::{CategoryFilter, SongField, SortDirection, sample_songs};
use crate::store::MemoryStore;

fn admin_session() -> Session {
    let store = MemoryStore::default();
    let mut s = Session::from_store(&store).unwrap();
    s.login(&store, "curator", ADMIN_ROLE).unwrap();
    s
}

fn admin_app() -> App {
    App::new(sample_songs(), admin_session())
}

fn viewer_app() -> App {
    App::new(sample_songs(), Session::default())
}

#[test]
fn toggle_play_twice_returns_to_stopped() {
    let mut app = admin_app();

    assert_eq!(app.toggle_play("3"), TickEffect::Start("3".into()));
    assert_eq!(app.playback(), PlaybackState::Playing);
    assert_eq!(app.playing.as_deref(), Some("3"));

    assert_eq!(app.toggle_play("3"), TickEffect::Cancel);
    assert_eq!(app.playback(), PlaybackState::Stopped);
    assert_eq!(app.playing, None);

    // Playing again starts over; the worker restarts progress at zero.
    assert_eq!(app.toggle_play("3"), TickEffect::Start("3".into()));
}

#[test]
fn toggle_play_switches_songs_directly() {
    let mut app = admin_app();
    app.toggle_play("1");
    assert_eq!(app.toggle_play("2"), TickEffect::Start("2".into()));
    assert_eq!(app.playing.as_deref(), Some("2"));
}

#[test]
fn toggle_play_ignores_ids_outside_the_catalog() {
    let mut app = admin_app();
    assert_eq!(app.toggle_play("404"), TickEffect::None);
    assert_eq!(app.playing, None);
}

#[test]
fn play_next_moves_by_catalog_position() {
    let mut app = admin_app();
    app.toggle_play("2");

    assert_eq!(app.play_next(), TickEffect::Start("3".into()));
    assert_eq!(app.playing.as_deref(), Some("3"));
}

#[test]
fn play_next_is_a_noop_on_the_last_song() {
    let mut app = admin_app();
    app.toggle_play("6");

    assert_eq!(app.play_next(), TickEffect::None);
    assert_eq!(app.playing.as_deref(), Some("6"));
    assert_eq!(app.playback(), PlaybackState::Playing);
}

#[test]
fn play_previous_is_a_noop_on_the_first_song() {
    let mut app = admin_app();
    app.toggle_play("1");

    assert_eq!(app.play_previous(), TickEffect::None);
    assert_eq!(app.playing.as_deref(), Some("1"));
}

#[test]
fn transport_requires_a_playing_song() {
    let mut app = admin_app();
    assert_eq!(app.play_next(), TickEffect::None);
    assert_eq!(app.play_previous(), TickEffect::None);
    assert_eq!(app.playing, None);
}

#[test]
fn deleting_the_playing_song_stops_playback() {
    let mut app = admin_app();
    app.toggle_play("4");

    let (changed, effect) = app.delete_song("4");
    assert!(changed);
    assert_eq!(effect, TickEffect::Cancel);
    assert_eq!(app.playing, None);
    assert!(app.playing_song().is_none());
    assert!(app.song_index("4").is_none());
}

#[test]
fn deleting_another_song_keeps_playback() {
    let mut app = admin_app();
    app.toggle_play("4");

    let (changed, effect) = app.delete_song("2");
    assert!(changed);
    assert_eq!(effect, TickEffect::None);
    assert_eq!(app.playing.as_deref(), Some("4"));
}

#[test]
fn non_admin_sessions_cannot_mutate_the_catalog() {
    let mut app = viewer_app();
    let before = app.songs.clone();

    let (changed, _) = app.delete_song("1");
    assert!(!changed);

    let mut edited = before[0].clone();
    edited.title = "Renamed".into();
    assert!(!app.upsert_song(edited));

    app.open_edit_editor();
    assert!(app.editor.is_none());
    app.open_add_editor("7".into(), 2024);
    assert!(app.editor.is_none());

    assert_eq!(app.songs, before);
}

#[test]
fn admin_upsert_adds_then_edits_by_id() {
    let mut app = admin_app();
    let mut song = app.songs[0].clone();
    song.id = "7".into();
    song.title = "New One".into();

    assert!(app.upsert_song(song.clone()));
    assert_eq!(app.songs.len(), 7);

    song.title = "New One (edit)".into();
    assert!(app.upsert_song(song));
    assert_eq!(app.songs.len(), 7);
    assert_eq!(app.song_by_id("7").unwrap().title, "New One (edit)");
}

#[test]
fn editor_round_trips_the_selected_song() {
    let mut app = admin_app();
    app.set_selected(2);
    app.open_edit_editor();

    {
        let editor = app.editor.as_mut().unwrap();
        assert!(!editor.is_new);
        assert_eq!(editor.title, "Starboy");
        editor.focus_next(); // artist
        editor.push_char('!');
    }

    assert!(app.save_editor());
    assert!(app.editor.is_none());
    assert_eq!(app.song_by_id("3").unwrap().artist, "The Weeknd, Daft Punk!");
    // Untouched optional fields ride along.
    assert!(app.song_by_id("3").unwrap().cover_url.is_some());
}

#[test]
fn editor_year_field_only_accepts_digits_and_parses_on_save() {
    let mut editor = Editor::for_new("9".into(), 2024);
    assert_eq!(editor.year, "2024");

    editor.field = EditField::Year;
    editor.pop_char();
    editor.pop_char();
    editor.push_char('x');
    editor.push_char('9');
    assert_eq!(editor.year, "209");

    let song = editor.to_song();
    assert_eq!(song.year, 209);
    assert!(song.genre.is_none());
}

#[test]
fn visible_indices_compose_search_category_and_sort() {
    let mut app = admin_app();
    app.search_term = "the weeknd".into();
    app.category = CategoryFilter::Newest;
    app.sort = Some((SongField::Year, SortDirection::Desc));

    let visible = app.visible_indices();
    let ids: Vec<&str> = visible.iter().map(|&i| app.songs[i].id.as_str()).collect();
    assert_eq!(ids, vec!["4", "3"]);
}

#[test]
fn narrowing_the_view_pulls_the_cursor_back_in() {
    let mut app = admin_app();
    app.set_selected(5);

    app.push_search_char('s');
    app.push_search_char('t');
    app.push_search_char('a');
    app.push_search_char('r');

    let visible = app.visible_indices();
    assert!(visible.contains(&app.selected));
}

#[test]
fn select_next_and_prev_wrap_within_the_view() {
    let mut app = admin_app();
    app.search_term = "weeknd".into();
    app.set_selected(2);

    app.select_next();
    assert_eq!(app.selected, 3);
    app.select_next();
    assert_eq!(app.selected, 2);
    app.select_prev();
    assert_eq!(app.selected, 3);
}

#[test]
fn cycle_sort_field_walks_back_to_unsorted() {
    let mut app = admin_app();
    assert!(app.sort.is_none());

    app.cycle_sort_field();
    assert_eq!(app.sort, Some((SongField::Title, SortDirection::Asc)));

    app.toggle_sort_direction();
    assert_eq!(app.sort, Some((SongField::Title, SortDirection::Desc)));

    // Direction sticks while the field cycles.
    app.cycle_sort_field();
    assert_eq!(app.sort, Some((SongField::Artist, SortDirection::Desc)));

    for _ in 0..4 {
        app.cycle_sort_field();
    }
    assert_eq!(app.sort, Some((SongField::Genre, SortDirection::Desc)));
    app.cycle_sort_field();
    assert!(app.sort.is_none());
}

#[test]
fn toggle_sort_direction_without_a_sort_is_a_noop() {
    let mut app = admin_app();
    app.toggle_sort_direction();
    assert!(app.sort.is_none());
}
