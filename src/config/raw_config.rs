use std::path::PathBuf;

use serde::Deserialize;

use super::{Config, Hotkey};

/// On-disk shape of [`Config`] before validation.
///
/// Missing fields fall back to [`Config::default`] values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub hotkey_convert_ml: Option<Hotkey>,
    pub hotkey_convert_fml: Option<Hotkey>,
    pub hotkey_pause: Option<Hotkey>,

    pub capture_attempts: u32,
    pub capture_poll_ms: u32,
    pub clear_settle_ms: u32,
    pub paste_settle_ms: u32,

    pub start_paused: bool,
    pub log_dir: Option<PathBuf>,
}

impl Default for RawConfig {
    fn default() -> Self {
        let Config {
            hotkey_convert_ml,
            hotkey_convert_fml,
            hotkey_pause,
            capture_attempts,
            capture_poll_ms,
            clear_settle_ms,
            paste_settle_ms,
            start_paused,
            log_dir,
        } = Config::default();

        Self {
            hotkey_convert_ml,
            hotkey_convert_fml,
            hotkey_pause,
            capture_attempts,
            capture_poll_ms,
            clear_settle_ms,
            paste_settle_ms,
            start_paused,
            log_dir,
        }
    }
}
