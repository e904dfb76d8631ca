mod reader;

pub use reader::{read_track_info, CoverArt, TrackInfo, ART_SIZE};
