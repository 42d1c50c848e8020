use crate::domain::ports::LineSource;
use crate::utils::error::{Result, SimError};
use std::fs::File;
use std::io::{BufRead, BufReader, StdinLock};
use std::path::{Path, PathBuf};

/// Every line of a file, blank lines included.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unreadable(&self, source: std::io::Error) -> SimError {
        SimError::FileUnreadable {
            path: self.path.clone(),
            source,
        }
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&mut self) -> Result<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| self.unreadable(e))?;
        BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| self.unreadable(e))
    }
}

/// Interactive input: stops at the first empty line or at end of input.
pub struct ConsoleLineSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ConsoleLineSource<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for ConsoleLineSource<R> {
    fn read_lines(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        let mut buf = String::new();

        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                break;
            }
            let line = buf.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                break;
            }
            lines.push(line.to_string());
        }

        Ok(lines)
    }
}

/// Lines held in memory. Drained by the first read.
#[derive(Debug, Clone, Default)]
pub struct StaticLineSource {
    lines: Vec<String>,
}

impl StaticLineSource {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn from_strs(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|line| line.to_string()).collect())
    }
}

impl LineSource for StaticLineSource {
    fn read_lines(&mut self) -> Result<Vec<String>> {
        Ok(std::mem::take(&mut self.lines))
    }
}
