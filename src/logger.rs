use chrono::NaiveDateTime;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Open the log file once. Later calls keep the first file.
pub fn init(path: &Path) -> std::io::Result<()> {
    let mut logger = LOGGER.lock().unwrap_or_else(|e| e.into_inner());
    if logger.is_none() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        *logger = Some(file);
    }
    Ok(())
}

/// Append a timestamped line. Does nothing before `init`.
pub fn log(message: &str) {
    let mut logger = LOGGER.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(file) = logger.as_mut() {
        let _ = write_line(file, chrono::Local::now().naive_local(), message);
    }
}

fn write_line(out: &mut impl Write, at: NaiveDateTime, message: &str) -> std::io::Result<()> {
    writeln!(out, "[{}] {}", at.format("%Y-%m-%d %H:%M:%S"), message)
}
