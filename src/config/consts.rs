// src/config/consts.rs

// Net config
pub const RESULTS_URL: &str = "https://milgram.jp/judge/result/season_3";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// Scrape
/// Glyph the results page puts after each "do not forgive" share (U+2015).
pub const VOTE_SEPARATOR: char = '―';
pub const FALLBACK_MIN_PCT: f64 = 5.0;
pub const FALLBACK_MAX_PCT: f64 = 95.0;
pub const FALLBACK_EXCLUDED_PCT: f64 = 50.0;

// Export
pub const DEFAULT_FILE: &str = "milgram_voting_data";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const COLUMNS: [&str; 5] = ["Name", "Date", "Time", "Innocent %", "Guilty %"];

// Identities tracked in season 3
pub const SEASON_3: [(&str, &str); 3] = [
    ("002", "Yuno"),
    ("003", "Fuuta"),
    ("004", "Muu"),
];
