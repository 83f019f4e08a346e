//! File logging; the terminal itself belongs to the UI.

use std::{env, fs::File, path::PathBuf};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// Log to `$FOURIER_LAB_LOG` (default: `fourier_lab.log` in the temp dir)
/// at the level named by `$LOG_LEVEL`.
pub fn init_logger() -> EyreResult<PathBuf> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_level = match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    let path = env::var_os("FOURIER_LAB_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("fourier_lab.log"));
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    WriteLogger::init(log_level, Config::default(), file).wrap_err("failed to initialize logger")?;
    Ok(path)
}
