use super::model::Song;

/// The built-in catalog, used whenever the store has no `songs` entry yet.
pub fn sample_songs() -> Vec<Song> {
    vec![
        Song {
            id: "1".to_string(),
            title: "Dil Ka Kya".to_string(),
            artist: "Pritam, Arijit Singh".to_string(),
            album: "Metro In Dino".to_string(),
            year: 2023,
            duration: "5:55".to_string(),
            genre: Some("Bollywood".to_string()),
            cover_url: Some(
                "https://i.scdn.co/image/ab67616d0000b273e6f407c7f3a0ec98845e4431".to_string(),
            ),
            audio_src: Some("/music/128-Dil Ka Kya - Metro In Dino 128 Kbps.mp3".to_string()),
        },
        Song {
            id: "2".to_string(),
            title: "You're Not Alone".to_string(),
            artist: "Josh A".to_string(),
            album: "Fearless".to_string(),
            year: 2022,
            duration: "3:45".to_string(),
            genre: Some("Hip-Hop".to_string()),
            cover_url: Some(
                "https://i.scdn.co/image/ab67616d0000b273e6f407c7f3a0ec98845e4431".to_string(),
            ),
            audio_src: None,
        },
        Song {
            id: "3".to_string(),
            title: "Starboy".to_string(),
            artist: "The Weeknd, Daft Punk".to_string(),
            album: "Starboy".to_string(),
            year: 2016,
            duration: "3:50".to_string(),
            genre: Some("R&B".to_string()),
            cover_url: Some(
                "https://i.scdn.co/image/ab67616d0000b2734718e2b124f79258be7bc452".to_string(),
            ),
            audio_src: None,
        },
        Song {
            id: "4".to_string(),
            title: "Blinding Lights".to_string(),
            artist: "The Weeknd".to_string(),
            album: "After Hours".to_string(),
            year: 2020,
            duration: "3:20".to_string(),
            genre: Some("Synth-pop".to_string()),
            cover_url: Some(
                "https://i.scdn.co/image/ab67616d0000b273c8b444df094279e70d0ed856".to_string(),
            ),
            audio_src: None,
        },
        Song {
            id: "5".to_string(),
            title: "Heat Waves".to_string(),
            artist: "Glass Animals".to_string(),
            album: "Dreamland".to_string(),
            year: 2020,
            duration: "3:59".to_string(),
            genre: Some("Indie Pop".to_string()),
            cover_url: Some(
                "https://i.scdn.co/image/ab67616d0000b273712701c5e263efc8726b1464".to_string(),
            ),
            audio_src: None,
        },
        Song {
            id: "6".to_string(),
            title: "Dynamite".to_string(),
            artist: "BTS".to_string(),
            album: "BE".to_string(),
            year: 2020,
            duration: "3:19".to_string(),
            genre: Some("K-pop".to_string()),
            cover_url: Some(
                "https://i.scdn.co/image/ab67616d0000b273a048415db06a5b6fa7ec4e1a".to_string(),
            ),
            audio_src: None,
        },
    ]
}
