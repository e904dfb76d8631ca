use super::LEGAL_EXTENSION;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect playable files beneath a folder.
///
/// Walks the tree depth-first with entries sorted by file name, so the
/// resulting order is stable across runs. Extension matching is
/// case-insensitive. An unreadable directory is indistinguishable from an
/// empty one: both come back as an empty playlist.
pub fn scan_folder(dir: impl AsRef<Path>) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| LEGAL_EXTENSION.contains(ext.to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: PathBuf) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn scan_is_recursive_and_filters_by_extension() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("a.mp3"));
        touch(tmp.path().join("cover.png"));
        touch(tmp.path().join("notes.txt"));
        touch(tmp.path().join("disc_one").join("b.mp3"));
        touch(tmp.path().join("disc_one").join("deeper").join("c.mp3"));

        let playlist = scan_folder(tmp.path());
        assert_eq!(playlist.len(), 3);
        assert!(playlist.iter().all(|p| p.extension().unwrap() == "mp3"));
    }

    #[test]
    fn scan_matches_extensions_case_insensitively() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("loud.MP3"));
        touch(tmp.path().join("quiet.Mp3"));

        assert_eq!(scan_folder(tmp.path()).len(), 2);
    }

    #[test]
    fn scan_order_is_deterministic() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("b.mp3"));
        touch(tmp.path().join("a.mp3"));
        touch(tmp.path().join("c.mp3"));

        let first = scan_folder(tmp.path());
        let second = scan_folder(tmp.path());
        assert_eq!(first, second);

        let names: Vec<_> = first
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, ["a.mp3", "b.mp3", "c.mp3"]);
    }

    #[test]
    fn missing_directory_yields_empty_playlist() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("never_created");
        assert!(scan_folder(gone).is_empty());
    }

    #[test]
    fn files_without_extension_are_skipped() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path().join("mp3"));
        touch(tmp.path().join("track"));
        assert!(scan_folder(tmp.path()).is_empty());
    }
}
