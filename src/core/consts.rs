/// Number of scores returned with a map's leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;
pub const INPUT_POLL_MILLIS: u64 = 50;
pub const STORE_VERSION: u32 = 1;
pub const DEFAULT_STORE_PATH: &str = "sokoban_maps.json";
pub const DEFAULT_LOG_PATH: &str = "sokoban.log";
