use image::{imageops::FilterType, RgbaImage};
use lofty::{
    prelude::{Accessor, AudioFile, TaggedFileExt},
    probe::Probe,
};
use std::{path::Path, time::Duration};
use tracing::debug;

/// Edge length of the album-art raster shown in the UI.
pub const ART_SIZE: u32 = 200;

/// Embedded cover art, decoded and scaled to [`ART_SIZE`].
///
/// A missing tag, a tag without pictures, and a picture that fails to decode
/// all collapse into `Missing`. Nothing in this module returns an error for
/// artwork problems.
pub enum CoverArt {
    Embedded(RgbaImage),
    Missing,
}

/// What the UI shows for the loaded track.
pub struct TrackInfo {
    pub title: String,
    pub duration: Duration,
    pub artwork: CoverArt,
}

/// Read title, duration and cover art from a track's tag container.
///
/// Infallible by design: when the container cannot be read at all, the file
/// stem stands in for the title and the duration reports zero.
pub fn read_track_info(path: &Path) -> TrackInfo {
    match read_tagged(path) {
        Ok(info) => info,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable tag container");
            TrackInfo {
                title: title_from_path(path),
                duration: Duration::ZERO,
                artwork: CoverArt::Missing,
            }
        }
    }
}

fn read_tagged(path: &Path) -> anyhow::Result<TrackInfo> {
    let tagged = Probe::open(path)?.guess_file_type()?.read()?;

    let tag = tagged.primary_tag().or_else(|| tagged.first_tag());

    let title = tag
        .and_then(|t| t.title().map(|s| s.to_string()))
        .unwrap_or_else(|| title_from_path(path));

    let artwork = tag
        .and_then(|t| t.pictures().first().map(|pic| decode_cover(pic.data())))
        .unwrap_or(CoverArt::Missing);

    Ok(TrackInfo {
        title,
        duration: tagged.properties().duration(),
        artwork,
    })
}

fn decode_cover(data: &[u8]) -> CoverArt {
    match image::load_from_memory(data) {
        Ok(img) => {
            let scaled = img.resize_exact(ART_SIZE, ART_SIZE, FilterType::Triangle);
            CoverArt::Embedded(scaled.to_rgba8())
        }
        Err(e) => {
            debug!(error = %e, "discarding undecodable cover art");
            CoverArt::Missing
        }
    }
}

fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn garbage_file_falls_back_to_stem_and_no_art() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Not A Song.mp3");
        fs::write(&path, b"definitely not an mp3 frame").unwrap();

        let info = read_track_info(&path);
        assert_eq!(info.title, "Not A Song");
        assert_eq!(info.duration, Duration::ZERO);
        assert!(matches!(info.artwork, CoverArt::Missing));
    }

    #[test]
    fn valid_picture_is_scaled_to_fixed_raster() {
        let mut png = Vec::new();
        RgbaImage::from_pixel(7, 13, image::Rgba([10, 20, 30, 255]))
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        match decode_cover(&png) {
            CoverArt::Embedded(img) => {
                assert_eq!(img.width(), ART_SIZE);
                assert_eq!(img.height(), ART_SIZE);
            }
            CoverArt::Missing => panic!("expected decoded artwork"),
        }
    }

    #[test]
    fn undecodable_picture_bytes_become_missing() {
        assert!(matches!(decode_cover(b"\x89PNG but not really"), CoverArt::Missing));
    }
}
