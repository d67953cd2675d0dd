//! State records, move logs, and deterministic replay for Cubik sessions.
//!
//! Two binary formats share one codec:
//!
//! - a **state record** file holds one [`StateRecord`](cubik_core::StateRecord)
//!   (size, every cubie's facelets, recorded history), for export/import;
//! - a **move log** holds a header and one frame per committed move, each
//!   with an FNV-1a hash of the post-commit state, for determinism checks.
//!
//! # Architecture
//!
//! - [`codec::encode_record`] / [`codec::decode_record`] handle state records
//! - [`MoveLogWriter`] records frames to any `Write` sink
//! - [`MoveLogReader`] plays back frames from any `Read` source
//! - [`compare_state`], [`replay_and_compare`], [`replay_session`] and
//!   [`verify_log`] check that a replay reproduces the logged states
//!
//! # Format
//!
//! ```text
//! [MAGIC "CUBE"] [VERSION u8] [LogHeader]
//! [Frame 1] [Frame 2] ... [Frame N]
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod compare;
pub mod error;
pub mod hash;
pub mod reader;
pub mod types;
pub mod writer;

pub use codec::{decode_record, encode_record};
pub use compare::{
    compare_state, replay_and_compare, replay_session, verify_log, DivergenceReport,
    SlotDivergence,
};
pub use error::ReplayError;
pub use hash::state_hash;
pub use reader::{FrameIter, MoveLogReader};
pub use types::{LogFrame, LogHeader};
pub use writer::{record_until_idle, MoveLogWriter};

/// Magic bytes at the start of every move log.
pub const LOG_MAGIC: [u8; 4] = *b"CUBE";

/// Magic bytes at the start of every state record file.
pub const RECORD_MAGIC: [u8; 4] = *b"CUBR";

/// Current binary format version, shared by both file kinds.
pub const FORMAT_VERSION: u8 = 1;
