use crate::app::App;
use crate::mpris::MprisHandle;

/// Mirror the model's playback state into the MPRIS surface.
pub fn update_mpris(mpris: &MprisHandle, app: &App) {
    mpris.set_song_metadata(app.playing_song());
    mpris.set_playback(app.playback());
}
