//! Destinations for the rendered commit message.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::git::{GitRepository, SHORT_HASH_LEN};

/// Receives the finished commit message.
pub trait CommitSink {
    /// Hands over the message; called once per session.
    fn commit(&mut self, message: &str) -> Result<()>;
}

/// Writes the message to a stream, typically stdout.
///
/// The message is followed by one newline so the last line is terminated on
/// a terminal. [`FileSink`] writes the message byte for byte instead.
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CommitSink for WriterSink<W> {
    fn commit(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}").context("Failed to write commit message")?;
        self.writer.flush().context("Failed to flush commit message")
    }
}

/// Writes the message to a file, e.g. the path git passes to a
/// `prepare-commit-msg` hook.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Creates a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CommitSink for FileSink {
    fn commit(&mut self, message: &str) -> Result<()> {
        fs::write(&self.path, message)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

/// Commits the staged changes with the message.
pub struct GitCommitSink {
    repo: GitRepository,
}

impl GitCommitSink {
    /// Creates a sink committing into `repo`.
    pub fn new(repo: GitRepository) -> Self {
        Self { repo }
    }
}

impl CommitSink for GitCommitSink {
    fn commit(&mut self, message: &str) -> Result<()> {
        let oid = self.repo.commit_staged(message)?;
        let hash = oid.to_string();
        let subject = message.lines().next().unwrap_or_default();
        println!("✅ [{}] {subject}", &hash[..SHORT_HASH_LEN]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writer_sink_prints_message() -> Result<()> {
        let mut sink = WriterSink::new(Vec::new());
        sink.commit("feat: add\n\n\n\n")?;
        assert_eq!(String::from_utf8(sink.into_inner())?, "feat: add\n\n\n\n\n");
        Ok(())
    }

    #[test]
    fn writer_sink_terminates_footer_line() -> Result<()> {
        let mut sink = WriterSink::new(Vec::new());
        sink.commit("feat: add\n\nbody\n\nBREAKING CHANGE: none")?;
        assert_eq!(
            String::from_utf8(sink.into_inner())?,
            "feat: add\n\nbody\n\nBREAKING CHANGE: none\n"
        );
        Ok(())
    }

    #[test]
    fn file_sink_writes_message_verbatim() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, "# placeholder from git\n")?;

        FileSink::new(&path).commit("fix(api): retry [#12]\n\nbody\n\n")?;
        assert_eq!(fs::read_to_string(&path)?, "fix(api): retry [#12]\n\nbody\n\n");
        Ok(())
    }

    #[test]
    fn file_sink_reports_unwritable_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("missing").join("msg");
        let err = FileSink::new(&path).commit("feat: x").unwrap_err();
        assert!(err.to_string().starts_with("Failed to write"));
        Ok(())
    }
}
