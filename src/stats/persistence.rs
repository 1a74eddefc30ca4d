//! Progress persistence with a checksummed binary format.

use super::types::ProgressState;
use crate::core::constants::STATS_VERSION_MAGIC;
use crate::utils::persistence;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Saves and loads progress state with checksum verification.
///
/// File format:
/// - Version magic (8 bytes)
/// - Data length (4 bytes)
/// - Serialized progress state (variable length)
/// - SHA256 checksum (32 bytes)
pub struct StatsManager {
    save_path: PathBuf,
}

impl StatsManager {
    /// Create a manager writing to the shared config directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            save_path: persistence::save_path("stats.dat")?,
        })
    }

    /// Create a manager writing to an explicit path (tests).
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save(&self, progress: &ProgressState) -> io::Result<()> {
        let data = bincode::serialize(progress)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        // Checksum covers version + length + data
        let mut hasher = Sha256::new();
        hasher.update(STATS_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut payload = Vec::with_capacity(12 + data.len() + 32);
        payload.extend_from_slice(&STATS_VERSION_MAGIC.to_le_bytes());
        payload.extend_from_slice(&data_len.to_le_bytes());
        payload.extend_from_slice(&data);
        payload.extend_from_slice(&checksum);
        fs::write(&self.save_path, payload)
    }

    pub fn load(&self) -> io::Result<ProgressState> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut magic_bytes = [0u8; 8];
        file.read_exact(&mut magic_bytes)?;
        if u64::from_le_bytes(magic_bytes) != STATS_VERSION_MAGIC {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "bad save version"));
        }

        let mut len_bytes = [0u8; 4];
        file.read_exact(&mut len_bytes)?;
        let data_len = u32::from_le_bytes(len_bytes) as usize;

        let mut data = vec![0u8; data_len];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut trailing = Vec::new();
        file.read_to_end(&mut trailing)?;
        if !trailing.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "save length mismatch"));
        }

        let mut hasher = Sha256::new();
        hasher.update(magic_bytes);
        hasher.update(len_bytes);
        hasher.update(&data);
        if hasher.finalize().as_slice() != stored_checksum {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "checksum mismatch"));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Load progress, falling back to defaults when the file is missing or
    /// corrupt. Losing the most recent update on corruption is acceptable.
    pub fn load_or_default(&self) -> ProgressState {
        self.load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_manager(name: &str) -> StatsManager {
        StatsManager::with_path(env::temp_dir().join(format!("oddball_{}_{}.dat", name, std::process::id())))
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let manager = temp_manager("roundtrip");
        let progress = ProgressState {
            best_score: Some(3),
            streak: 4,
            games_played: 12,
            wins: 9,
            total_weighings: 40,
        };

        manager.save(&progress).unwrap();
        assert_eq!(manager.load().unwrap(), progress);

        fs::remove_file(&manager.save_path).ok();
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let manager = temp_manager("missing_nonexistent");
        fs::remove_file(&manager.save_path).ok();
        assert_eq!(manager.load_or_default(), ProgressState::default());
    }

    #[test]
    fn test_corrupt_data_rejected() {
        let manager = temp_manager("corrupt");
        let progress = ProgressState {
            best_score: Some(1),
            ..Default::default()
        };
        manager.save(&progress).unwrap();

        // Flip a byte inside the payload
        let mut contents = fs::read(&manager.save_path).unwrap();
        contents[13] ^= 0xFF;
        fs::write(&manager.save_path, contents).unwrap();

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default(), ProgressState::default());

        fs::remove_file(&manager.save_path).ok();
    }

    #[test]
    fn test_truncated_file_rejected() {
        let manager = temp_manager("truncated");
        manager.save(&ProgressState::default()).unwrap();

        let contents = fs::read(&manager.save_path).unwrap();
        fs::write(&manager.save_path, &contents[..contents.len() - 10]).unwrap();

        assert!(manager.load().is_err());
        fs::remove_file(&manager.save_path).ok();
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let manager = temp_manager("trailing");
        manager.save(&ProgressState::default()).unwrap();

        let mut contents = fs::read(&manager.save_path).unwrap();
        contents.extend_from_slice(b"junk");
        fs::write(&manager.save_path, contents).unwrap();

        assert!(manager.load().is_err());
        fs::remove_file(&manager.save_path).ok();
    }

    #[test]
    fn test_bad_magic_rejected() {
        let manager = temp_manager("magic");
        manager.save(&ProgressState::default()).unwrap();

        let mut contents = fs::read(&manager.save_path).unwrap();
        contents[0] ^= 0xFF;
        fs::write(&manager.save_path, contents).unwrap();

        assert!(manager.load().is_err());
        fs::remove_file(&manager.save_path).ok();
    }
}
