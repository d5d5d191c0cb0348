//! Decompressing line reader.
//!
//! Opens the input archive and exposes it as a sequence of decoded UTF-8
//! lines. The decoder is selected from the file extension: `.zst` for zstd,
//! `.gz` for gzip, anything else is read as plain text. Stream-level failures
//! (unreadable path, corrupt compressed data, invalid UTF-8) are fatal for
//! the whole run -- the stream position cannot be trusted afterwards.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use thiserror::Error;

/// Error types for the input stream.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input path could not be opened.
    #[error("Failed to open input file {}: {source}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The stream failed mid-read (corrupt compressed data or invalid UTF-8).
    #[error("Input stream {} is corrupt or truncated: {source}", path.display())]
    Decode {
        /// Path being read when the stream failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Lazy line reader over a possibly-compressed file.
///
/// Restartable only by reopening the file.
pub struct LineReader {
    path: PathBuf,
    inner: Box<dyn BufRead>,
}

impl LineReader {
    /// Opens `path` and wires up the decoder matching its extension.
    pub fn open(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path).map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let inner: Box<dyn BufRead> = match extension {
            "zst" => {
                let mut decoder =
                    zstd::stream::read::Decoder::new(file).map_err(|source| InputError::Decode {
                        path: path.to_path_buf(),
                        source,
                    })?;
                // Archives produced with long-distance matching need a wider window
                decoder
                    .window_log_max(31)
                    .map_err(|source| InputError::Decode {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Box::new(BufReader::new(decoder))
            }
            "gz" => Box::new(BufReader::new(GzDecoder::new(file))),
            _ => Box::new(BufReader::new(file)),
        };

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    /// Returns the next decoded line without its terminator, or `None` at end
    /// of stream. A read error is fatal, not per-line recoverable.
    pub fn next_line(&mut self) -> Result<Option<String>, InputError> {
        let mut buf = String::new();
        match self.inner.read_line(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => {
                while buf.ends_with('\n') || buf.ends_with('\r') {
                    buf.pop();
                }
                Ok(Some(buf))
            }
            Err(source) => Err(InputError::Decode {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
