use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::{writer::MakeWriterExt, MakeWriter};

/// Optional log file mirror. The subscriber is installed once; the file
/// behind it can be swapped at any time.
#[derive(Clone, Default)]
struct LogFile {
    slot: Arc<Mutex<Option<File>>>,
}

struct LogFileWriter {
    slot: Arc<Mutex<Option<File>>>,
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter {
            slot: self.slot.clone(),
        }
    }
}

/// File errors are dropped so a full disk never breaks stderr logging.
impl Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut slot) = self.slot.lock() {
            if let Some(file) = slot.as_mut() {
                let _ = file.write_all(buf);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Ok(mut slot) = self.slot.lock() {
            if let Some(file) = slot.as_mut() {
                let _ = file.flush();
            }
        }
        Ok(())
    }
}

static LOG_FILE: OnceLock<LogFile> = OnceLock::new();

/// Install the global subscriber (`RUST_LOG`, default `info`) writing to
/// stderr and the optional log file, and bridge `log` records into it.
/// Later calls only swap the log file.
pub fn init(log_file: Option<&Path>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file = LOG_FILE.get_or_init(LogFile::default).clone();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr.and(file))
        .finish();
    if ::tracing::subscriber::set_global_default(subscriber).is_ok() {
        let _ = tracing_log::LogTracer::init();
    }

    set_log_file(log_file);
}

pub fn set_log_file(log_file: Option<&Path>) {
    let Some(target) = LOG_FILE.get() else {
        return;
    };
    let opened = log_file.and_then(|path| {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            let _ = std::fs::create_dir_all(parent);
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });
    if let Ok(mut slot) = target.slot.lock() {
        *slot = opened;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic_and_opens_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("quotesync.log");

        init(None);
        init(Some(path.as_path()));
        log::error!("mirrored line");

        assert!(path.exists());
        set_log_file(None);
    }
}
