// src/config/consts.rs

// Bundled assets
pub const DEFAULT_CSV_PATH: &str = "assets/data/testimonials.csv";
pub const DEFAULT_SITE_PATH: &str = "assets/site/index.html";

// Env overrides
pub const ENV_CSV: &str = "UNIFHORCE_CSV";
pub const ENV_SITE: &str = "UNIFHORCE_SITE";

// Net config
pub const HTTP_PORT: u16 = 80;
pub const NET_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "unifhorce/0.1";

// Audit
pub const AUDIT_DELAY_MS: u64 = 1000; // first automatic run after startup

// Local log
pub const LOG_FILE: &str = ".unifhorce/debug.log";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
