// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::core::source::Source;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub audit: AuditOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            audit: AuditOptions::default(),
        }
    }
}

impl AppOptions {
    /// Apply explicit overrides (CLI flags, env values). Unparsable values are
    /// logged and leave the default in place.
    pub fn with_overrides(mut self, csv: Option<&str>, site: Option<&str>) -> Self {
        if let Some(v) = csv.map(str::trim).filter(|v| !v.is_empty()) {
            match Source::parse(v) {
                Ok(src) => self.source.csv = src,
                Err(e) => loge!("Config: Ignoring csv override {v:?}: {e}"),
            }
        }
        if let Some(v) = site.map(str::trim).filter(|v| !v.is_empty()) {
            match Source::parse(v) {
                Ok(src) => self.audit.target = src,
                Err(e) => loge!("Config: Ignoring site override {v:?}: {e}"),
            }
        }
        self
    }

    /// Defaults, then `UNIFHORCE_CSV` / `UNIFHORCE_SITE` if set.
    pub fn from_env() -> Self {
        let csv = std::env::var(ENV_CSV).ok();
        let site = std::env::var(ENV_SITE).ok();
        Self::default().with_overrides(csv.as_deref(), site.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    /// Where the testimonial CSV is read from.
    pub csv: Source,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { csv: Source::File(PathBuf::from(DEFAULT_CSV_PATH)) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditOptions {
    /// Page to audit.
    pub target: Source,
    /// Run once automatically shortly after startup.
    pub auto_run: bool,
    pub delay_ms: u64,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            target: Source::File(PathBuf::from(DEFAULT_SITE_PATH)),
            auto_run: cfg!(debug_assertions),
            delay_ms: AUDIT_DELAY_MS,
        }
    }
}
