//! Per-session append-only log file.

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{Datelike, Local, Timelike};
use tracing::warn;

/// Append-only text log, one file per console run.
///
/// Every line is written through a fresh append-mode open and flushed before
/// returning; durability over throughput. A failed write is logged and
/// swallowed so the console keeps printing.
#[derive(Debug)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    /// Creates the log folder (if missing) and the session file, named from
    /// the startup timestamp: `<prefix> [<Y>_<M>_<D>-<h>_<m>_<s>].txt`.
    pub fn create(dir: &Path, prefix: &str) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        let now = Local::now();
        // Field order and (absent) zero padding match the files existing
        // clients already produce alongside this tool.
        let name = format!(
            "{} [{}_{}_{}-{}_{}_{}].txt",
            prefix,
            now.year(),
            now.month(),
            now.day(),
            now.hour(),
            now.minute(),
            now.second()
        );
        let path = dir.join(name);
        OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one line; flushed before returning. Errors are swallowed
    /// with a warning.
    pub fn append(&self, line: &str) {
        if let Err(err) = self.try_append(line) {
            warn!(
                target: "console::session_log",
                "failed to append to {}: {err}",
                self.path.display()
            );
        }
    }

    fn try_append(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{line}")?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_the_file_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let log = SessionLog::create(dir.path(), "client_log").unwrap();
        assert!(log.path().exists());

        let name = log.path().file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("client_log ["));
        assert!(name.ends_with("].txt"));
    }

    #[test]
    fn creates_the_log_folder_if_missing() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Logs");
        let log = SessionLog::create(&nested, "client_log").unwrap();
        assert!(nested.is_dir());
        assert!(log.path().starts_with(&nested));
    }

    #[test]
    fn appends_one_line_per_message() {
        let dir = tempfile::tempdir().unwrap();
        let log = SessionLog::create(dir.path(), "client_log").unwrap();
        log.append("boom");
        log.append("second");

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents, "boom\nsecond\n");
    }
}
