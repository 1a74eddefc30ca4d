//! Achievement persistence (load/save as JSON in the config directory).

use super::types::Achievements;
use crate::core::constants::ACHIEVEMENTS_FILE;
use crate::utils::persistence::{load_json_or_default, save_json};
use std::io;

/// Load achievements from disk, or return default if missing or invalid.
pub fn load_achievements() -> Achievements {
    load_json_or_default(ACHIEVEMENTS_FILE)
}

/// Save achievements to disk.
pub fn save_achievements(achievements: &Achievements) -> io::Result<()> {
    save_json(ACHIEVEMENTS_FILE, achievements)
}
