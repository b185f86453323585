//! The append-only record writer.

use std::collections::BTreeSet;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::{Clock, LocalClock, Rating, SubmitError, SurveyRecord, Technology, ValidationError};

/// File name used when no other target is configured.
pub const DEFAULT_RESULTS_FILE: &str = "survey_results.txt";

/// Configuration for a [`RecordWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// File the records are appended to.
    path: PathBuf,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl WriterConfig {
    /// Target `survey_results.txt` in the working directory.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_RESULTS_FILE),
        }
    }

    /// Set the file records are appended to.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Validates a submission, formats it and appends it to the results file.
///
/// The writer holds no open handle between calls: every successful
/// [`submit`](Self::submit) opens the file, writes one block and closes it.
pub struct RecordWriter {
    config: WriterConfig,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for RecordWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordWriter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for RecordWriter {
    fn default() -> Self {
        Self::new(WriterConfig::default())
    }
}

impl RecordWriter {
    /// Create a writer stamping records with local wall-clock time.
    pub fn new(config: WriterConfig) -> Self {
        Self {
            config,
            clock: Box::new(LocalClock),
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The file this writer appends to.
    pub fn path(&self) -> &Path {
        self.config.path()
    }

    /// Validate and append one record.
    ///
    /// `name` and `comment` are trimmed. An empty name is rejected with
    /// [`ValidationError::NameRequired`] before the file is touched. Age and
    /// rating are written as given; their bounds belong to the caller.
    pub fn submit(
        &self,
        name: &str,
        age: u32,
        rating: Option<Rating>,
        technologies: &BTreeSet<Technology>,
        comment: &str,
    ) -> Result<(), SubmitError> {
        let record = self.build(name, age, rating, technologies, comment)?;
        self.append(&record)
    }

    fn build(
        &self,
        name: &str,
        age: u32,
        rating: Option<Rating>,
        technologies: &BTreeSet<Technology>,
        comment: &str,
    ) -> Result<SurveyRecord, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            warn!("rejected survey submission: {}", ValidationError::NameRequired);
            return Err(ValidationError::NameRequired);
        }

        Ok(SurveyRecord {
            name: name.to_string(),
            age,
            rating,
            technologies: technologies.clone(),
            comment: comment.trim().to_string(),
            timestamp: self.clock.now(),
        })
    }

    fn append(&self, record: &SurveyRecord) -> Result<(), SubmitError> {
        let path = self.path();
        let block = record.render();

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| write_block(&mut file, block.as_bytes()));

        match result {
            Ok(()) => {
                info!(
                    "appended survey record ({} bytes) to {}",
                    block.len(),
                    path.display()
                );
                Ok(())
            }
            Err(source) => {
                error!("could not write survey record to {}: {source}", path.display());
                Err(SubmitError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

/// Destination that can be cut back after a failed append.
trait AppendTarget: Write {
    fn current_len(&mut self) -> std::io::Result<u64>;
    fn truncate_to(&mut self, len: u64) -> std::io::Result<()>;
}

impl AppendTarget for File {
    fn current_len(&mut self) -> std::io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn truncate_to(&mut self, len: u64) -> std::io::Result<()> {
        self.set_len(len)
    }
}

/// Write the whole block or put the target back to its previous length.
fn write_block(target: &mut impl AppendTarget, block: &[u8]) -> std::io::Result<()> {
    let len = target.current_len()?;
    if let Err(err) = target.write_all(block) {
        if let Err(rollback) = target.truncate_to(len) {
            error!("could not roll back partial survey record: {rollback}");
        }
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_creation() {
        let _default = RecordWriter::default();
        let writer = RecordWriter::new(WriterConfig::new().with_path("out/records.txt"));
        assert_eq!(writer.path(), Path::new("out/records.txt"));
    }

    #[test]
    fn default_config_targets_results_file() {
        assert_eq!(WriterConfig::default().path(), Path::new(DEFAULT_RESULTS_FILE));
        assert_eq!(DEFAULT_RESULTS_FILE, "survey_results.txt");
    }

    #[test]
    fn blank_name_is_rejected_without_touching_disk() {
        let writer = RecordWriter::new(
            WriterConfig::new().with_path("/nonexistent-directory/never-created.txt"),
        );
        let err = writer
            .submit("   \t ", 25, Some(Rating::Five), &BTreeSet::new(), "")
            .unwrap_err();
        assert!(err.is_validation());
    }

    /// Accepts `room` more bytes, then fails like a full disk.
    struct FillingTarget {
        data: Vec<u8>,
        room: usize,
        truncate_fails: bool,
    }

    impl Write for FillingTarget {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.room == 0 {
                return Err(std::io::Error::other("no space left on device"));
            }
            let n = buf.len().min(self.room);
            self.data.extend_from_slice(&buf[..n]);
            self.room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl AppendTarget for FillingTarget {
        fn current_len(&mut self) -> std::io::Result<u64> {
            Ok(self.data.len() as u64)
        }

        fn truncate_to(&mut self, len: u64) -> std::io::Result<()> {
            if self.truncate_fails {
                return Err(std::io::Error::other("read-only"));
            }
            self.data.truncate(len as usize);
            Ok(())
        }
    }

    #[test]
    fn failed_write_leaves_previous_content_intact() {
        let existing = "--- Survey Record 2025-01-01 00:00:00 ---\nстарий запис\n".as_bytes();
        let mut target = FillingTarget {
            data: existing.to_vec(),
            room: 10,
            truncate_fails: false,
        };

        let err = write_block(&mut target, "Користувач: Алекс Коваль\n".as_bytes()).unwrap_err();

        assert_eq!(err.to_string(), "no space left on device");
        assert_eq!(target.data, existing);
    }

    #[test]
    fn failed_rollback_still_reports_the_write_error() {
        let mut target = FillingTarget {
            data: b"old\n".to_vec(),
            room: 2,
            truncate_fails: true,
        };

        let err = write_block(&mut target, b"new record\n").unwrap_err();

        assert_eq!(err.to_string(), "no space left on device");
    }

    #[test]
    fn complete_write_appends_block() {
        let mut target = FillingTarget {
            data: b"old\n".to_vec(),
            room: 64,
            truncate_fails: false,
        };

        write_block(&mut target, b"new\n").unwrap();

        assert_eq!(target.data, b"old\nnew\n");
    }

    #[test]
    fn file_rollback_restores_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survey_results.txt");
        std::fs::write(&path, "перший запис\n").unwrap();
        let before = std::fs::read(&path).unwrap();

        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        let len = file.current_len().unwrap();
        file.write_all(b"partial").unwrap();
        file.truncate_to(len).unwrap();
        drop(file);

        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[test]
    fn debug_shows_config() {
        let writer = RecordWriter::default();
        assert!(format!("{writer:?}").contains("survey_results.txt"));
    }
}
