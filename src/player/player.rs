use super::{AudioBackend, PlaybackState, RodioBackend};
use anyhow::Result;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::info;

/// The playback session: the playlist, the cursor into it, and the thin
/// state machine driving the audio engine.
///
/// Invariant: `current_index < playlist.len()` whenever the playlist is
/// non-empty. Every mutation goes through the methods below; the UI shell
/// only reads.
pub struct Player {
    backend: Box<dyn AudioBackend>,
    playlist: Vec<PathBuf>,
    current_index: usize,
    state: PlaybackState,
    seeking: bool,
}

impl Player {
    pub fn new() -> Result<Self> {
        Ok(Self::with_backend(Box::new(RodioBackend::new()?)))
    }

    pub fn with_backend(backend: Box<dyn AudioBackend>) -> Self {
        Player {
            backend,
            playlist: Vec::new(),
            current_index: 0,
            state: PlaybackState::Stopped,
            seeking: false,
        }
    }

    /// Replace the playlist wholesale and rewind the session to track 0.
    pub fn set_playlist(&mut self, tracks: Vec<PathBuf>) {
        self.backend.stop();
        self.playlist = tracks;
        self.current_index = 0;
        self.state = PlaybackState::Stopped;
        self.seeking = false;
    }

    /// Start or resume playback.
    ///
    /// Out of `Paused` the engine is unmuted in place, keeping its position.
    /// From any other state the current track is loaded fresh and starts
    /// from zero. With an empty playlist this does nothing.
    pub fn play(&mut self) -> Result<()> {
        let Some(track) = self.playlist.get(self.current_index) else {
            return Ok(());
        };

        match self.state {
            PlaybackState::Paused => self.backend.resume(),
            _ => {
                self.backend.load(track)?;
                info!(track = %track.display(), "playback started");
            }
        }

        self.state = PlaybackState::Playing;
        Ok(())
    }

    /// Mute playback in place, but only while the engine still holds an
    /// active track.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing && !self.backend.track_ended() {
            self.backend.pause();
            self.state = PlaybackState::Paused;
        }
    }

    /// Step to the following track and play it fresh, even out of a paused
    /// session. Clamped: on the final track the whole call is a no-op.
    /// Returns whether the current track changed.
    pub fn next(&mut self) -> Result<bool> {
        if self.current_index + 1 >= self.playlist.len() {
            return Ok(false);
        }

        self.current_index += 1;
        self.start_current()?;
        Ok(true)
    }

    /// Counterpart to [`Self::next`], clamped at track 0.
    pub fn prev(&mut self) -> Result<bool> {
        if self.current_index == 0 || self.playlist.is_empty() {
            return Ok(false);
        }

        self.current_index -= 1;
        self.start_current()?;
        Ok(true)
    }

    fn start_current(&mut self) -> Result<()> {
        // Leaving Paused here forces play() to reload instead of resuming
        self.state = PlaybackState::Stopped;
        self.play()
    }

    /// Mark the start of a drag on the progress control. While set, the
    /// shell stops mirroring engine positions into the UI so the drag does
    /// not fight the poll.
    pub fn begin_seek(&mut self) {
        self.seeking = true;
    }

    /// Finish a drag gesture and continue playback from `pos`.
    pub fn end_seek(&mut self, pos: Duration) -> Result<()> {
        self.seeking = false;
        self.seek(pos)
    }

    /// Stop the engine, reload the current track and play it from `pos`.
    pub fn seek(&mut self, pos: Duration) -> Result<()> {
        let Some(track) = self.playlist.get(self.current_index) else {
            return Ok(());
        };

        self.backend.stop();
        self.backend.load(track)?;
        self.backend.seek_to(pos)?;
        self.state = PlaybackState::Playing;
        Ok(())
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.backend.set_volume(volume.clamp(0.0, 1.0));
    }

    pub fn volume(&self) -> f32 {
        self.backend.volume()
    }

    pub fn position(&self) -> Duration {
        self.backend.position()
    }

    /// Drain the engine's end-of-track signal.
    ///
    /// A finished non-final track advances the session via [`Self::next`];
    /// the final track running out parks the session on it, index unchanged.
    /// Returns whether the current track changed.
    pub fn poll(&mut self) -> Result<bool> {
        if self.state == PlaybackState::Playing && self.backend.track_ended() {
            if self.next()? {
                return Ok(true);
            }
            self.state = PlaybackState::Stopped;
        }
        Ok(false)
    }

    pub fn current_track(&self) -> Option<&Path> {
        self.playlist.get(self.current_index).map(PathBuf::as_path)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_seeking(&self) -> bool {
        self.seeking
    }
}
