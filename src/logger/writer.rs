//! Log writer module
//!
//! Thread-safe diagnostic output to stderr or an append-mode file.
//! Standard output is reserved for response bodies and is never a target.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use super::Level;

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    Stderr,
    File(Mutex<File>),
}

/// Thread-safe log writer
pub struct LogWriter {
    target: LogTarget,
    level: Level,
}

impl LogWriter {
    /// Create a new log writer with an optional file path
    fn new(error_log_file: Option<&str>, level: Level) -> io::Result<Self> {
        let target = match error_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stderr,
        };
        Ok(Self { target, level })
    }

    /// Write a message if `level` passes the configured filter
    pub fn write(&self, level: Level, message: &str) {
        if level <= self.level {
            write_to_target(&self.target, message);
        }
    }

    /// Write an access log line; only `off` suppresses it
    pub fn write_access(&self, message: &str) {
        if self.level != Level::Off {
            write_to_target(&self.target, message);
        }
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

fn write_to_target(target: &LogTarget, message: &str) {
    match target {
        LogTarget::Stderr => {
            eprintln!("{message}");
        }
        LogTarget::File(file) => {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{message}");
            }
        }
    }
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
/// Returns error if the log file cannot be opened.
pub fn init(error_log_file: Option<&str>, level: Level) -> io::Result<()> {
    let writer = LogWriter::new(error_log_file, level)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer, if initialized
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_target_appends() {
        let path = std::env::temp_dir()
            .join(format!("cgi-scripts-writer-{}", std::process::id()))
            .join("error.log");
        let path_str = path.to_string_lossy().to_string();

        let writer = LogWriter::new(Some(&path_str), Level::Info).unwrap();
        writer.write(Level::Error, "first");
        writer.write(Level::Debug, "filtered out");
        writer.write(Level::Info, "second");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
