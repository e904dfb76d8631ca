mod backend;
mod backend_rodio;
mod player;

pub use backend::AudioBackend;
pub use backend_rodio::RodioBackend;
pub use player::Player;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}
