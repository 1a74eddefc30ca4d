//! Save-file helpers rooted at the platform config directory.
//!
//! All persisted state shares one root: the binary stats file and the
//! achievements JSON both live under the directory returned by `config_dir`.

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The save directory, created on first use.
pub fn config_dir() -> io::Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "oddball").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine config directory",
        )
    })?;
    let dir = project_dirs.config_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path of a save file under the config directory.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(config_dir()?.join(filename))
}

/// Load JSON from an explicit path, falling back to `T::default()` when the
/// file is missing or does not parse.
pub fn load_json_from<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Load a JSON save file from the config directory.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    match save_path(filename) {
        Ok(path) => load_json_from(&path),
        Err(_) => T::default(),
    }
}

/// Write a value as pretty-printed JSON to an explicit path.
pub fn save_json_to<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

/// Write a JSON save file into the config directory.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    save_json_to(&save_path(filename)?, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("oddball_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_save_path_appends_filename() {
        let path = save_path("test.json").expect("save_path should succeed");
        assert!(path.ends_with("test.json"));
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_from(&temp_file("missing_nonexistent"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_garbage_returns_default() {
        let path = temp_file("garbage");
        fs::write(&path, "not json {{{").unwrap();
        let val: Vec<String> = load_json_from(&path);
        assert!(val.is_empty());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_file("roundtrip");
        let data = vec!["left".to_string(), "right".to_string()];
        save_json_to(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_from(&path);
        assert_eq!(loaded, data);
        fs::remove_file(path).ok();
    }
}
