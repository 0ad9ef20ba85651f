//! Process-wide logger
//!
//! Writes to `%LOCALAPPDATA%\FreeSpaceReport\logs`. Standard output is
//! reserved for the report itself, so console echo (debug builds only)
//! goes to stderr.

use crate::constants::{APP_DIR_NAME, ENV_ENABLE_LOGGING, ENV_LOG_VERBOSE, MAX_LOG_BYTES};
use chrono::{SecondsFormat, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

struct Logger {
    path: PathBuf,
    verbose: bool,
    enabled: bool,
}

impl Logger {
    fn init() -> Self {
        let base = std::env::var("LOCALAPPDATA").unwrap_or_else(|_| ".".to_string());
        let dir = PathBuf::from(base).join(APP_DIR_NAME).join("logs");

        let filename = if cfg!(debug_assertions) {
            "freespace-report-dev.log"
        } else {
            "freespace-report.log"
        };
        let path = dir.join(filename);

        let verbose = env_flag(ENV_LOG_VERBOSE);

        // Release builds only write the file when explicitly asked to
        let enabled = !cfg!(test) && (cfg!(debug_assertions) || env_flag(ENV_ENABLE_LOGGING));

        if enabled {
            let _ = fs::create_dir_all(&dir);
        }

        Self {
            path,
            verbose,
            enabled,
        }
    }

    fn rotate_if_needed(&self) {
        if let Ok(meta) = fs::metadata(&self.path) {
            if meta.len() > MAX_LOG_BYTES {
                let backup = self.path.with_extension("log.bak");
                let _ = fs::remove_file(&backup);
                let _ = fs::rename(&self.path, &backup);
            }
        }
    }

    fn timestamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn log(&self, level: &str, message: &str) {
        if !self.enabled {
            return;
        }

        self.rotate_if_needed();
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            let _ = writeln!(file, "{} [{}] {}", Self::timestamp(), level, message);
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| v == "1").unwrap_or(false)
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::init)
}

pub fn init_logger() {
    let _ = get_logger();
}

pub fn log_debug(message: &str) {
    log_internal("DEBUG", message, false);
}

pub fn log_debug_verbose(message: &str) {
    log_internal("DEBUG", message, true);
}

pub fn log_info(message: &str) {
    log_internal("INFO", message, false);
}

pub fn log_warn(message: &str) {
    log_internal("WARN", message, false);
}

pub fn log_error(message: &str) {
    log_internal("ERROR", message, false);
}

fn log_internal(level: &str, message: &str, verbose_only: bool) {
    let logger = get_logger();
    if verbose_only && !logger.verbose {
        return;
    }

    #[cfg(debug_assertions)]
    {
        eprintln!("[{}] {}", level, message);
    }

    logger.log(level, message);
}
