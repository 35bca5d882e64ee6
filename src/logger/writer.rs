//! File writer for the logger

use crate::logger::config::FileConfig;
use crate::logger::error::LoggerError;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

/// Log file shared by every event of the run
pub struct LogFileWriter {
    file: Mutex<File>,
}

impl LogFileWriter {
    /// Opens (and if needed creates) the configured log file
    pub fn open(config: &FileConfig) -> Result<Self, LoggerError> {
        if let Some(parent) = config.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| LoggerError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(config.append)
            .truncate(!config.append)
            .open(&config.path)
            .map_err(|source| LoggerError::OpenFile {
                path: config.path.clone(),
                source,
            })?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

/// Exclusive handle to the log file for a single event
pub struct LogFileHandle<'a>(MutexGuard<'a, File>);

impl Write for LogFileHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = LogFileHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        // A poisoned lock only means another thread panicked mid-write
        LogFileHandle(self.file.lock().unwrap_or_else(|e| e.into_inner()))
    }
}
