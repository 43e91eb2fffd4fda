mod config_validator;
pub mod constants;
pub mod raw_config;

use std::{
    io,
    path::{Path, PathBuf},
    time::Duration,
};

pub use config_validator::find_duplicate_hotkeys;
pub use constants::{MOD_ALT, MOD_CONTROL, MOD_NOREPEAT, MOD_SHIFT, MOD_WIN};
pub use raw_config::RawConfig;
use serde::{Deserialize, Deserializer, Serialize};

use crate::conversion::Timings;

const APP_DIR: &str = "AksharaShift";
const CONFIG_FILE: &str = "config.toml";
const LOG_DIR: &str = "logs";

/// Upper bound for `capture_attempts`; keeps a missing selection from stalling the worker.
pub const MAX_CAPTURE_ATTEMPTS: u32 = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hotkey {
    pub vk: u32,
    pub mods: u32,
}

impl Hotkey {
    pub const fn new(mods: u32, vk: u32) -> Self {
        Self { vk, mods }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
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

impl Default for Config {
    fn default() -> Self {
        Self {
            // Ctrl+Alt+1 / Ctrl+Alt+2
            hotkey_convert_ml: Some(Hotkey::new(MOD_CONTROL | MOD_ALT, 0x31)),
            hotkey_convert_fml: Some(Hotkey::new(MOD_CONTROL | MOD_ALT, 0x32)),
            hotkey_pause: None,

            capture_attempts: 3,
            capture_poll_ms: 100,
            clear_settle_ms: 50,
            paste_settle_ms: 100,

            start_paused: false,
            log_dir: None,
        }
    }
}

fn app_dir() -> io::Result<PathBuf> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "APPDATA is not set"))?;

    Ok(PathBuf::from(appdata).join(APP_DIR))
}

pub fn config_path() -> io::Result<PathBuf> {
    Ok(app_dir()?.join(CONFIG_FILE))
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    std::fs::create_dir_all(dir)
}

fn confy_err(e: confy::ConfyError) -> io::Error {
    io::Error::other(e)
}

pub fn load() -> io::Result<Config> {
    let path = config_path()?;
    ensure_parent_dir(&path)?;

    confy::load_path(&path).map_err(confy_err)
}

pub fn save(cfg: &Config) -> io::Result<()> {
    cfg.validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let path = config_path()?;
    ensure_parent_dir(&path)?;
    confy::store_path(path, cfg).map_err(confy_err)
}

impl TryFrom<RawConfig> for Config {
    type Error = String;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let cfg = Self {
            hotkey_convert_ml: raw.hotkey_convert_ml,
            hotkey_convert_fml: raw.hotkey_convert_fml,
            hotkey_pause: raw.hotkey_pause,
            capture_attempts: raw.capture_attempts,
            capture_poll_ms: raw.capture_poll_ms,
            clear_settle_ms: raw.clear_settle_ms,
            paste_settle_ms: raw.paste_settle_ms,
            start_paused: raw.start_paused,
            log_dir: raw.log_dir,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawConfig::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Config {
    pub fn timings(&self) -> Timings {
        Timings {
            capture_attempts: self.capture_attempts,
            capture_poll: Duration::from_millis(u64::from(self.capture_poll_ms)),
            clear_settle: Duration::from_millis(u64::from(self.clear_settle_ms)),
            paste_settle: Duration::from_millis(u64::from(self.paste_settle_ms)),
        }
    }

    /// Directory of the rolling diagnostic log.
    ///
    /// Falls back to `./logs` when neither `log_dir` nor `APPDATA` is available.
    pub fn resolved_log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }
        app_dir()
            .map(|d| d.join(LOG_DIR))
            .unwrap_or_else(|_| PathBuf::from(".").join(LOG_DIR))
    }
}
