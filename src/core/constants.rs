// Weighing model constants
pub const BASE_WEIGHT: u32 = 10;
/// Delta applied to odd balloons in known-heavier mode.
pub const WEIGHT_DELTA: u32 = 1;
/// Maximum delta magnitude rolled in unknown-direction mode.
/// Must stay below BASE_WEIGHT so a lighter balloon never reaches baseline.
pub const MAX_WEIGHT_DELTA: u32 = 4;

// Scoring constants
pub const TIME_BONUS_MAX: u32 = 200;
pub const TIME_PENALTY_PER_SECOND: u32 = 2;
pub const MOVE_BONUS_MAX: u32 = 150;
pub const MOVE_PENALTY_PER_WEIGHING: u32 = 25;

// Achievement thresholds
pub const SPEED_DEMON_SECONDS: u64 = 30;
pub const EFFICIENT_WEIGHINGS: u32 = 2;
pub const STREAK_TARGET: u32 = 5;

// Save system constants
pub const STATS_VERSION_MAGIC: u64 = 0x4F4444_42414C4C00; // "ODDBALL\0" in hex
pub const ACHIEVEMENTS_FILE: &str = "achievements.json";
