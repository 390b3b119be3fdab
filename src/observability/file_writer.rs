//! Size-rotated append-only trace file.
//!
//! The exporter writes one OTLP document per line. Left alone, that file
//! grows for as long as the plugin runs, so [`FileWriter`] rotates it once it
//! passes a size limit and keeps only a few backups next to it.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the trace file is rotated (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live one.
pub const MAX_BACKUP_FILES: usize = 3;

/// Line writer that rotates its file once it grows past a size limit.
///
/// # Thread Safety
///
/// The open handle sits behind a `Mutex`, so a shared `FileWriter` can be
/// written from several threads. A poisoned lock surfaces as an I/O error.
///
/// # Rotation Strategy
///
/// 1. The file is opened lazily, in append mode, on the first write
/// 2. Before every write the current size is compared to the limit
/// 3. An oversized file is renamed to `<name>.<unix-seconds>`, with a
///    `.<n>` suffix when that name is taken in the same second
/// 4. Backups beyond the retention count are deleted, oldest first
///
/// # Example
///
/// ```rust,ignore
/// let writer = FileWriter::new(PathBuf::from("/tmp/authorgrid-otlp.json"));
/// writer.write_line(r#"{"resourceSpans":[]}"#)?;
/// ```
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits: [`MAX_FILE_SIZE_BYTES`] and
    /// [`MAX_BACKUP_FILES`].
    ///
    /// # Parameters
    ///
    /// * `file_path` - Live trace file, created on the first write
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit rotation limits.
    ///
    /// # Parameters
    ///
    /// * `file_path` - Live trace file, created on the first write
    /// * `max_bytes` - Size above which the file is rotated before a write
    /// * `max_backups` - Rotated files kept; older ones are deleted
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Live trace file path.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// Rotates first when the file is already over the limit, so a single
    /// long line can push the live file past `max_bytes` until the next
    /// write.
    ///
    /// # Returns
    ///
    /// `Ok(())` once the line is flushed to disk.
    ///
    /// # Errors
    ///
    /// Any I/O failure while rotating, opening or writing, and a poisoned
    /// lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        // Several rotations inside one second must not overwrite each other.
        let mut backup = self.file_path.with_extension(format!("json.{stamp}"));
        let mut n = 1;
        while backup.exists() {
            backup = self.file_path.with_extension(format!("json.{stamp}.{n}"));
            n += 1;
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup)?;
        }
        self.prune_backups()
    }

    /// Deletes rotated files beyond `max_backups`.
    ///
    /// Backups are matched by the `<name>.` prefix and ordered by
    /// modification time. Individual delete failures are ignored.
    fn prune_backups(&self) -> io::Result<()> {
        let Some(dir) = self.file_path.parent() else {
            return Ok(());
        };
        let Some(prefix) = self
            .file_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| format!("{n}."))
        else {
            return Ok(());
        };

        let mut backups: Vec<(std::time::SystemTime, PathBuf)> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .map(|path| {
                let modified = fs::metadata(&path)
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::UNIX_EPOCH);
                (modified, path)
            })
            .collect();

        // Newest first; name breaks ties so same-second backups keep their order.
        backups.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

        for (_, stale) in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
