use std::time::Duration;

pub mod app_core;
pub mod library;
pub mod metadata;
pub mod player;

pub use metadata::TrackInfo;
pub use player::Player;

/// Interval between playback polls while the window is idle.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Render a duration as `m:ss` for the time labels.
pub fn get_readable_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{}:{:02}", total / 60, total % 60)
}
