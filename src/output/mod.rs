//! Output container.
//!
//! The filtered records are persisted to a single file: four magic bytes,
//! a little-endian u16 format version, then a bincode-encoded `Vec` of the
//! records' compact JSON texts. Storing the original JSON keeps the records
//! schema-free on the way back out. Writing overwrites any existing file;
//! the whole set is written in one terminal pass.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use bincode::Options;
use thiserror::Error;

use crate::record::{ParseError, Record};

const MAGIC: [u8; 4] = *b"GSF1";
const FORMAT_VERSION: u16 = 1;

/// Error types for container I/O.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The container file could not be created.
    #[error("Failed to create output file {}: {source}", path.display())]
    Create {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The container file could not be opened for reading.
    #[error("Failed to open container {}: {source}", path.display())]
    Open {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Raw I/O failure while reading or writing the container.
    #[error("Container I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The record payload could not be encoded or decoded.
    #[error("Container payload error on {}: {source}", path.display())]
    Payload {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying bincode error.
        source: bincode::Error,
    },

    /// The file does not start with the container magic.
    #[error("{} is not a geo_sift container", path.display())]
    BadMagic {
        /// Path that was rejected.
        path: PathBuf,
    },

    /// The container was written by an unknown format version.
    #[error("Unsupported container version {version} in {}", path.display())]
    UnsupportedVersion {
        /// Path that was rejected.
        path: PathBuf,
        /// Version found in the header.
        version: u16,
    },

    /// A stored record is not a valid JSON object.
    #[error("Container {} holds an invalid record: {source}", path.display())]
    InvalidRecord {
        /// Path being read.
        path: PathBuf,
        /// Underlying parse error.
        source: ParseError,
    },
}

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new()
}

/// Serializes `records` to a container at `path`, overwriting any existing
/// file.
pub fn write_container(path: &Path, records: &[Record]) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&MAGIC).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    writer
        .write_all(&FORMAT_VERSION.to_le_bytes())
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let texts: Vec<String> = records.iter().map(Record::to_json_string).collect();
    bincode_options()
        .serialize_into(&mut writer, &texts)
        .map_err(|source| OutputError::Payload {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a container back into records.
///
/// Used by tests and downstream consumers to verify what a run persisted.
pub fn read_container(path: &Path) -> Result<Vec<Record>, OutputError> {
    let file = File::open(path).map_err(|source| OutputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    reader
        .read_exact(&mut magic)
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    if magic != MAGIC {
        return Err(OutputError::BadMagic {
            path: path.to_path_buf(),
        });
    }

    let mut version_bytes = [0u8; 2];
    reader
        .read_exact(&mut version_bytes)
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let version = u16::from_le_bytes(version_bytes);
    if version != FORMAT_VERSION {
        return Err(OutputError::UnsupportedVersion {
            path: path.to_path_buf(),
            version,
        });
    }

    let texts: Vec<String> =
        bincode_options()
            .deserialize_from(&mut reader)
            .map_err(|source| OutputError::Payload {
                path: path.to_path_buf(),
                source,
            })?;

    texts
        .iter()
        .map(|text| {
            Record::parse(text).map_err(|source| OutputError::InvalidRecord {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(lines: &[&str]) -> Vec<Record> {
        lines
            .iter()
            .map(|line| Record::parse(line).expect("Should parse test record"))
            .collect()
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("out.bin");

        let original = records(&[
            r#"{"id": 1, "text": "a", "coordinates": {"coordinates": [7.49, 9.06]}}"#,
            r#"{"id": 2, "text": "b"}"#,
        ]);
        write_container(&path, &original).expect("Should write container");

        let restored = read_container(&path).expect("Should read container");
        assert_eq!(restored, original);
    }

    #[test]
    fn test_empty_set_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("out.bin");

        write_container(&path, &[]).expect("Should write empty container");
        let restored = read_container(&path).expect("Should read empty container");
        assert!(restored.is_empty());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("out.bin");

        write_container(&path, &records(&[r#"{"id": 1}"#, r#"{"id": 2}"#]))
            .expect("Should write first container");
        write_container(&path, &records(&[r#"{"id": 3}"#]))
            .expect("Should overwrite container");

        let restored = read_container(&path).expect("Should read container");
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].as_value()["id"], 3);
    }

    #[test]
    fn test_bad_magic_rejected() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("out.bin");
        std::fs::write(&path, b"NOPE rest of the file").expect("Failed to write file");

        assert!(matches!(
            read_container(&path),
            Err(OutputError::BadMagic { .. })
        ));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("out.bin");
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&99u16.to_le_bytes());
        std::fs::write(&path, bytes).expect("Failed to write file");

        assert!(matches!(
            read_container(&path),
            Err(OutputError::UnsupportedVersion { version: 99, .. })
        ));
    }

    #[test]
    fn test_truncated_payload_rejected() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("out.bin");
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        // Header only, no payload
        std::fs::write(&path, bytes).expect("Failed to write file");

        assert!(matches!(
            read_container(&path),
            Err(OutputError::Payload { .. })
        ));
    }

    #[test]
    fn test_missing_file_rejected() {
        let result = read_container(Path::new("/nonexistent/out.bin"));
        assert!(matches!(result, Err(OutputError::Open { .. })));
    }
}
