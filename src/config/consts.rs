// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://games.espn.com/flb/";
pub const STATS_PATH: &str = "activestats";
pub const USER_AGENT: &str = "fantasy_archive/0.4";
pub const TIMEOUT_SECS: u64 = 30;

// League defaults (the archive this tool was first written for)
pub const DEFAULT_LEAGUE: u32 = 4779;
pub const DEFAULT_FIRST_SEASON: u16 = 2007;
pub const DEFAULT_LAST_SEASON: u16 = 2016;
pub const DEFAULT_TEAM_COUNT: u32 = 12;

// Page markup
pub const HEADER_ROW_CLASSES: &str = "playerTableBgRowSubhead tableSubHead";
pub const PLAYER_ROW_CLASS: &str = "pncPlayerRow";
pub const ROW_ID_ATTR: &str = "id";
pub const ROW_ID_PREFIX: &str = "plyr";
pub const NESTED_ID_ATTR: &str = "playerid";
pub const ZERO_SENTINEL: &str = "--";
pub const NBSP: char = '\u{a0}';
pub const FLAG_MARKER: char = '*';

// Identity columns, in order
pub const IDENTITY_LABELS: [&str; 6] = ["PLAYER", "ID", "YEAR", "FANTASYTEAM", "MLBTEAM", "POS"];
pub const IDENTITY_COLS: usize = IDENTITY_LABELS.len();

// Local cache
pub const STORE_DIR: &str = ".store";
pub const PAGES_SUBDIR: &str = "pages";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_HITTING_FILE: &str = "hit_indiv.csv";
pub const DEFAULT_PITCHING_FILE: &str = "pitch_indiv.csv";
