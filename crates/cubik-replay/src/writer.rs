//! Move-log writer.
//!
//! [`MoveLogWriter`] streams committed moves to any `Write` sink. The
//! header is written immediately on construction.

use std::io::Write;

use cubik_core::CubeView;
use cubik_engine::{CubeSession, MoveReport};

use crate::codec::{encode_frame, encode_header};
use crate::error::ReplayError;
use crate::hash::state_hash;
use crate::types::{LogFrame, LogHeader};

impl LogHeader {
    /// Header describing `session` as it is now.
    pub fn for_session(session: &CubeSession) -> Self {
        Self {
            size: session.size().get(),
            seed: session.config().seed,
            initial_hash: state_hash(session.state()),
            cubik_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Writes a move log to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use cubik_core::{FaceLabel, Move};
/// use cubik_engine::{CubeConfig, CubeSession};
/// use cubik_replay::{LogHeader, MoveLogReader, MoveLogWriter};
///
/// let mut session = CubeSession::new(CubeConfig::default()).unwrap();
/// let mut buf = Vec::new();
/// let mut log = MoveLogWriter::new(&mut buf, &LogHeader::for_session(&session)).unwrap();
///
/// session.submit(Move::new(FaceLabel::Up, 2, 1), true).unwrap();
/// while let Some(report) = session.step().unwrap() {
///     log.write_report(&report, session.state()).unwrap();
/// }
/// assert_eq!(log.frames_written(), 1);
/// drop(log);
///
/// let mut reader = MoveLogReader::open(buf.as_slice()).unwrap();
/// assert_eq!(reader.header().size, 3);
/// let frame = reader.next_frame().unwrap().unwrap();
/// assert_eq!(frame.mv, Move::new(FaceLabel::Up, 2, 1));
/// assert!(reader.next_frame().unwrap().is_none());
/// ```
pub struct MoveLogWriter<W: Write> {
    writer: W,
    frames_written: u64,
}

impl<W: Write> MoveLogWriter<W> {
    /// Create a new writer, immediately writing the header.
    pub fn new(mut writer: W, header: &LogHeader) -> Result<Self, ReplayError> {
        encode_header(&mut writer, header)?;
        Ok(Self {
            writer,
            frames_written: 0,
        })
    }

    /// Record a commit: hash the post-commit state and write the frame.
    pub fn write_report(
        &mut self,
        report: &MoveReport,
        state: &dyn CubeView,
    ) -> Result<(), ReplayError> {
        let frame = LogFrame {
            seq: report.seq,
            origin: report.origin,
            mv: report.mv,
            state_hash: state_hash(state),
        };
        self.write_raw_frame(&frame)
    }

    /// Write a pre-built frame directly.
    pub fn write_raw_frame(&mut self, frame: &LogFrame) -> Result<(), ReplayError> {
        encode_frame(&mut self.writer, frame)?;
        self.frames_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), ReplayError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Run every queued move of `session` to completion, logging each commit.
/// Returns how many moves ran.
pub fn record_until_idle<W: Write>(
    session: &mut CubeSession,
    log: &mut MoveLogWriter<W>,
) -> Result<usize, ReplayError> {
    let mut ran = 0;
    while let Some(report) = session.step()? {
        log.write_report(&report, session.state())?;
        ran += 1;
    }
    Ok(ran)
}
