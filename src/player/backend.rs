use anyhow::Result;
use std::{path::Path, time::Duration};

/// Seam between the playback state machine and the audio engine.
///
/// Every call is fire-and-forget from the caller's perspective; the engine
/// does its decoding and mixing on its own threads.
pub trait AudioBackend {
    /// Drop whatever is loaded, load `track` and start it from zero.
    fn load(&mut self, track: &Path) -> Result<()>;

    /// Mute the loaded track in place, keeping its position.
    fn pause(&mut self);

    /// Unmute a paused track in place.
    fn resume(&mut self);

    /// Halt playback and unload the track.
    fn stop(&mut self);

    /// Jump the loaded track to `pos`.
    fn seek_to(&mut self, pos: Duration) -> Result<()>;

    /// Offset into the loaded track.
    fn position(&self) -> Duration;

    fn set_volume(&mut self, volume: f32);

    fn volume(&self) -> f32;

    /// True once the loaded track has drained out of the engine.
    fn track_ended(&self) -> bool;
}
