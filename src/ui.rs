//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, EditField, Editor, PlaybackState};
use crate::config::UiSettings;
use crate::library::CategoryFilter;

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("j/k".to_string(), "up/down".to_string());
    map.insert("enter".to_string(), "play/stop selected".to_string());
    map.insert("space".to_string(), "play/stop current".to_string());
    map.insert("h/l".to_string(), "prev/next song".to_string());
    map.insert("/".to_string(), "search".to_string());
    map.insert("f".to_string(), "category".to_string());
    map.insert("o/O".to_string(), "sort/direction".to_string());
    map.insert("a".to_string(), "add".to_string());
    map.insert("e".to_string(), "edit".to_string());
    map.insert("d".to_string(), "delete".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

/// Render the controls help text. Mutating keys only show up for admins.
fn controls_text(is_admin: bool) -> String {
    let order = [
        "j/k", "enter", "space", "h/l", "/", "f", "o/O", "a", "e", "d", "q",
    ];
    order
        .iter()
        .filter(|k| is_admin || !matches!(**k, "a" | "e" | "d"))
        .filter_map(|k| CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// One list row: "Artist - Title · Album (Year) [m:ss]", with a needle
/// marker on the playing row.
fn song_row(app: &App, index: usize) -> String {
    let song = &app.songs[index];
    let marker = if app.playing.as_deref() == Some(song.id.as_str()) {
        "♪ "
    } else {
        "  "
    };
    format!(
        "{}{} · {} ({}) [{}]",
        marker,
        song.display(),
        song.album,
        song.year,
        song.duration
    )
}

/// The category pill row, with the active pill bracketed.
fn category_pills(active: CategoryFilter) -> String {
    [
        CategoryFilter::All,
        CategoryFilter::Newest,
        CategoryFilter::Oldest,
        CategoryFilter::Latest,
    ]
    .iter()
    .map(|&f| {
        if f == active {
            format!("[{}]", f.label())
        } else {
            f.label().to_string()
        }
    })
    .collect::<Vec<String>>()
    .join(" ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    // Keep the popup smaller and avoid covering the entire UI.
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the entire UI into the provided `frame` using `app` state.
pub fn draw(frame: &mut Frame, app: &App, visible: &[usize], ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" adagio ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();

        let role_text = if app.session.is_authenticated() {
            app.session.role().unwrap_or("member")
        } else {
            "guest"
        };
        parts.push(format!("ROLE: {role_text}"));

        parts.push(format!("PILLS: {}", category_pills(app.category)));

        match app.sort {
            Some((field, direction)) => {
                parts.push(format!("SORT: {} {}", field.label(), direction.label()));
            }
            None => parts.push("SORT: catalog order".to_string()),
        }

        if app.search_mode || !app.search_term.is_empty() {
            let mut search_part = String::from("SEARCH:");
            if !app.search_term.is_empty() {
                search_part.push(' ');
                search_part.push_str(&app.search_term);
            }
            if app.search_mode {
                search_part.push('_');
            }
            parts.push(search_part);
        }

        parts.push(format!("{}/{} songs", visible.len(), app.songs.len()));

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Main list (or the empty state when nothing survives the filters)
    if visible.is_empty() {
        let empty = Paragraph::new("No songs found\nTry adjusting your search or filters")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" songs "));
        frame.render_widget(empty, chunks[2]);
    } else {
        // Center the selected item when possible by creating a visible window.
        let total = visible.len();
        let list_height = chunks[2].height as usize;
        let sel_pos = visible
            .iter()
            .position(|&i| i == app.selected)
            .unwrap_or(0);
        let (start, end, selected_pos_in_window) = if total <= list_height || list_height == 0 {
            (0, total, sel_pos)
        } else {
            let half = list_height / 2;
            let mut start = if sel_pos > half { sel_pos - half } else { 0 };
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height, sel_pos - start)
        };

        let rows: Vec<ListItem> = visible[start..end]
            .iter()
            .map(|&i| ListItem::new(song_row(app, i)))
            .collect();

        let list = List::new(rows)
            .block(Block::default().borders(Borders::ALL).title(" songs "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if total > 0 {
            state.select(Some(selected_pos_in_window));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Now-playing bar
    {
        let (label, ratio) = match (app.playback(), app.playing_song()) {
            (PlaybackState::Playing, Some(song)) => {
                let progress = app
                    .progress_handle
                    .as_ref()
                    .and_then(|h| h.lock().ok().map(|i| i.progress))
                    .unwrap_or(0.0);
                (
                    format!("{} [{:.0}%]", song.display(), progress),
                    (progress / 100.0).clamp(0.0, 1.0),
                )
            }
            _ => ("Stopped".to_string(), 0.0),
        };

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" now playing "))
            .ratio(ratio)
            .label(label);
        frame.render_widget(gauge, chunks[3]);
    }

    // Controls footer
    let footer = Paragraph::new(controls_text(app.session.is_admin()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    // Overlay the edit form (keeps the list visible under it)
    if let Some(editor) = &app.editor {
        draw_editor(frame, editor, chunks[2]);
    }
}

fn draw_editor(frame: &mut Frame, editor: &Editor, list_area: Rect) {
    let popup_area = centered_rect_sized(48, 10, list_area);
    frame.render_widget(Clear, popup_area);

    let fields = [
        EditField::Title,
        EditField::Artist,
        EditField::Album,
        EditField::Year,
        EditField::Duration,
        EditField::Genre,
    ];
    let body = fields
        .iter()
        .map(|&f| {
            let marker = if f == editor.field { "> " } else { "  " };
            format!("{}{}: {}", marker, f.label(), editor.field_text(f))
        })
        .collect::<Vec<String>>()
        .join("\n");

    let title = if editor.is_new {
        " add song (enter saves, esc closes) "
    } else {
        " edit song (enter saves, esc closes) "
    };

    let form = Paragraph::new(body)
        .block(
            Block::default()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .borders(Borders::ALL)
                .title(title),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(form, popup_area);
}
