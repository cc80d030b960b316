//! Chunked digit extraction from input files.
//!
//! Input files hold digit sequences far too large to load whole, so
//! reading happens in fixed-size chunks with O(chunk size) working
//! memory. Every pass opens a fresh file handle, which keeps the two
//! analysis passes independent of each other.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while streaming digits.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),
}

/// A restartable source of decimal digits backed by a file.
///
/// Each call to [`digits`](DigitStream::digits) opens a fresh handle
/// and replays the file from the start, so multiple independent
/// passes over the same input are possible.
#[derive(Debug, Clone)]
pub struct DigitStream {
    path: PathBuf,
    chunk_size: usize,
}

impl DigitStream {
    /// Creates a stream over the given path.
    pub fn new(path: impl Into<PathBuf>, chunk_size: usize) -> Self {
        Self {
            path: path.into(),
            chunk_size: chunk_size.max(1),
        }
    }

    /// Returns the input path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Starts a fresh pass over the file, yielding digit values 0-9.
    ///
    /// Non-digit bytes are silently dropped.
    pub fn digits(&self) -> Result<Digits<File>, StreamError> {
        let file = File::open(&self.path).map_err(|e| StreamError::Open {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %self.path.display(), "opened digit stream");
        Ok(Digits::from_reader(file, self.chunk_size))
    }

    /// Computes the SHA-256 digest of the raw file bytes.
    ///
    /// Used to tie a report to the exact input it describes. Reads the
    /// file in chunks, never holding more than one chunk in memory.
    pub fn digest(&self) -> Result<String, StreamError> {
        let mut file = File::open(&self.path).map_err(|e| StreamError::Open {
            path: self.path.clone(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; self.chunk_size];
        loop {
            let read = file.read(&mut buf)?;
            if read == 0 {
                break;
            }
            hasher.update(&buf[..read]);
        }

        Ok(hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect())
    }
}

/// Iterator over the digit values of a byte source.
///
/// Generic over [`Read`] so tests can drive it from in-memory buffers.
pub struct Digits<R> {
    reader: R,
    buf: Vec<u8>,
    len: usize,
    pos: usize,
    done: bool,
}

impl<R: Read> Digits<R> {
    /// Wraps an arbitrary reader with the chunked digit filter.
    pub fn from_reader(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            buf: vec![0u8; chunk_size.max(1)],
            len: 0,
            pos: 0,
            done: false,
        }
    }

    /// Reads the next chunk. Returns false at end of input.
    fn refill(&mut self) -> Result<bool, StreamError> {
        loop {
            match self.reader.read(&mut self.buf) {
                Ok(0) => return Ok(false),
                Ok(read) => {
                    self.len = read;
                    self.pos = 0;
                    return Ok(true);
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<R: Read> Iterator for Digits<R> {
    type Item = Result<u8, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while self.pos < self.len {
                let byte = self.buf[self.pos];
                self.pos += 1;
                if byte.is_ascii_digit() {
                    return Some(Ok(byte - b'0'));
                }
            }

            if self.done {
                return None;
            }
            match self.refill() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
