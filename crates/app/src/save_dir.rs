use std::path::PathBuf;

use directories::ProjectDirs;

/// Platform save location; falls back to a local `saves/` directory when no
/// home can be resolved.
pub fn default_save_dir() -> PathBuf {
    ProjectDirs::from("", "", "Warren")
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from("saves"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_save_dir_ends_with_saves() {
        assert_eq!(default_save_dir().file_name().and_then(|n| n.to_str()), Some("saves"));
    }
}
