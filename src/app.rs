//! Process entry: configuration, logging, tables, then the platform host.

use akshara_shift_core::{EncodingTag, ProfileError, ProfileSet};

use crate::{config, utils::tracing::init_tracing};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("mapping tables are inconsistent: {0}")]
    Profile(#[from] ProfileError),
    #[cfg(windows)]
    #[error("win32 error: {0}")]
    Win32(#[from] windows::core::Error),
    #[cfg(not(windows))]
    #[error("AksharaShift only runs on Windows")]
    Unsupported,
}

/// Loads configuration, falling back to defaults when the file is unreadable or invalid.
fn load_config() -> (config::Config, Option<std::io::Error>) {
    match config::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (config::Config::default(), Some(e)),
    }
}

pub fn run() -> Result<(), AppError> {
    let (cfg, load_error) = load_config();

    let log_dir = cfg.resolved_log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let _log_guard = init_tracing(&log_dir);

    if let Some(e) = load_error {
        tracing::warn!(error = %e, "config load failed, using defaults");
    }

    let profiles = ProfileSet::builtin()?;
    tracing::info!(
        ml_codepoints = profiles.get(EncodingTag::Ml).codepoint_count(),
        fml_codepoints = profiles.get(EncodingTag::Fml).codepoint_count(),
        "encoding profiles loaded"
    );

    run_platform(&cfg, profiles)
}

#[cfg(windows)]
fn run_platform(cfg: &config::Config, profiles: ProfileSet) -> Result<(), AppError> {
    let Some(_guard) = crate::helpers::single_instance_guard()? else {
        tracing::info!("another instance is running");
        return Ok(());
    };

    crate::platform::win::run(cfg, profiles)
}

#[cfg(not(windows))]
fn run_platform(_cfg: &config::Config, _profiles: ProfileSet) -> Result<(), AppError> {
    Err(AppError::Unsupported)
}
