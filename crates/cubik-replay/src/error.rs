//! Error types for state records and move logs.

use std::fmt;
use std::io;

use cubik_core::CubeError;
use cubik_engine::SubmitError;

/// Errors that can occur while encoding, decoding, or replaying.
#[derive(Debug)]
pub enum ReplayError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The stream does not start with the expected magic bytes.
    InvalidMagic {
        /// The magic this reader expected.
        expected: [u8; 4],
    },
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the stream.
        found: u8,
    },
    /// A record or frame could not be decoded (truncated or corrupt data).
    MalformedRecord {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A face or origin tag is not recognized.
    UnknownTag {
        /// What the tag was meant to identify.
        kind: &'static str,
        /// The unrecognized tag.
        tag: u8,
    },
    /// A decoded record or move was rejected by the cube.
    State(CubeError),
    /// A logged move could not be queued during replay.
    Submit(SubmitError),
    /// A replayed state hash differs from the logged one.
    HashMismatch {
        /// Frame index (0 is the header's initial state).
        index: u64,
        /// Hash from the log.
        recorded: u64,
        /// Hash of the replayed state.
        replayed: u64,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic { expected } => write!(
                f,
                "invalid magic bytes (expected {:?})",
                String::from_utf8_lossy(expected)
            ),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::MalformedRecord { detail } => write!(f, "malformed record: {detail}"),
            Self::UnknownTag { kind, tag } => write!(f, "unknown {kind} tag {tag}"),
            Self::State(e) => write!(f, "cube rejected replayed data: {e}"),
            Self::Submit(e) => write!(f, "replayed move not accepted: {e}"),
            Self::HashMismatch {
                index,
                recorded,
                replayed,
            } => write!(
                f,
                "state hash mismatch at frame {index}: \
                 recorded={recorded:#018x}, replayed={replayed:#018x}"
            ),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::State(e) => Some(e),
            Self::Submit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReplayError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<CubeError> for ReplayError {
    fn from(e: CubeError) -> Self {
        Self::State(e)
    }
}

impl From<SubmitError> for ReplayError {
    fn from(e: SubmitError) -> Self {
        Self::Submit(e)
    }
}
