mod library;

pub use library::scan_folder;

static LEGAL_EXTENSION: std::sync::LazyLock<std::collections::HashSet<&'static str>> =
    std::sync::LazyLock::new(|| std::collections::HashSet::from(["mp3"]));
