//! Lazy manifest reader

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::domain::entities::QuestEntry;
use crate::error::{QuestError, QuestResult};

/// Lazy, ordered sequence of manifest entries.
///
/// Lines are decoded lossily so a stray non-UTF-8 byte never aborts the run.
/// Rereading requires opening the manifest again.
pub struct ManifestReader<R> {
    reader: R,
    line: usize,
    buf: Vec<u8>,
}

impl ManifestReader<BufReader<File>> {
    /// Open a manifest file. Fails with `ManifestNotFound` if it does not exist.
    pub fn open(path: &Path) -> QuestResult<Self> {
        if !path.is_file() {
            return Err(QuestError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: Read> ManifestReader<BufReader<R>> {
    /// Wrap an arbitrary reader (used by tests)
    pub fn new(reader: R) -> Self {
        Self::from_reader(BufReader::new(reader))
    }
}

impl<R: BufRead> ManifestReader<R> {
    fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for ManifestReader<R> {
    type Item = QuestResult<QuestEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let raw = String::from_utf8_lossy(&self.buf);
                    if let Some(entry) = QuestEntry::from_manifest_line(&raw, self.line) {
                        return Some(Ok(entry));
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Read the whole manifest into memory, preserving order.
pub fn load_manifest(path: &Path) -> QuestResult<Vec<QuestEntry>> {
    ManifestReader::open(path)?.collect()
}
