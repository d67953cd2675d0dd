//! Binary encode/decode for state records and move logs.
//!
//! All integers are little-endian. Strings are length-prefixed with a `u32`.
//! Faces and origins are single-byte tags. The format is intentionally
//! simple: no compression, no alignment padding, no self-describing schema.
//!
//! ```text
//! record: [RECORD_MAGIC "CUBR"] [VERSION u8] [size u32]
//!         [cubie count u32] { [x u32] [y u32] [z u32] [n u8] { [label u8] [color u8] [index u16] }×n }
//!         [move count u32] { move }
//! log:    [LOG_MAGIC "CUBE"] [VERSION u8] [size u32] [seed u64] [initial hash u64] [version str]
//!         { [seq u64] [origin u8] move [state hash u64] }
//! move:   [face u8] [layer u32] [turns i8]
//! ```

use std::io::{Read, Write};

use cubik_core::{CubieRecord, FaceLabel, FaceletId, Move, Position, StateRecord};
use cubik_engine::MoveOrigin;
use smallvec::SmallVec;

use crate::error::ReplayError;
use crate::types::*;
use crate::{FORMAT_VERSION, LOG_MAGIC, RECORD_MAGIC};

/// Upper bound on speculative preallocation from a decoded count.
const MAX_PREALLOC: usize = 4096;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), ReplayError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u16.
pub fn write_u16_le(w: &mut dyn Write, v: u16) -> Result<(), ReplayError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), ReplayError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), ReplayError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(w: &mut dyn Write, s: &str) -> Result<(), ReplayError> {
    write_len(w, s.len())?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

fn write_len(w: &mut dyn Write, len: usize) -> Result<(), ReplayError> {
    let len = u32::try_from(len).map_err(|_| ReplayError::MalformedRecord {
        detail: format!("length {len} does not fit in u32"),
    })?;
    write_u32_le(w, len)
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, ReplayError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u16.
pub fn read_u16_le(r: &mut dyn Read) -> Result<u16, ReplayError> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, ReplayError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read) -> Result<u64, ReplayError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string.
pub fn read_length_prefixed_str(r: &mut dyn Read) -> Result<String, ReplayError> {
    let len = read_u32_le(r)? as usize;
    let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
    (&mut *r).take(len as u64).read_to_end(&mut buf)?;
    if buf.len() != len {
        return Err(ReplayError::MalformedRecord {
            detail: format!("truncated string: got {} of {len} bytes", buf.len()),
        });
    }
    String::from_utf8(buf).map_err(|e| ReplayError::MalformedRecord {
        detail: format!("invalid UTF-8 string: {e}"),
    })
}

// ── Tags ────────────────────────────────────────────────────────

fn face_tag(face: FaceLabel) -> u8 {
    face.index() as u8
}

fn face_from_tag(tag: u8) -> Result<FaceLabel, ReplayError> {
    FaceLabel::from_index(usize::from(tag)).ok_or(ReplayError::UnknownTag { kind: "face", tag })
}

fn origin_tag(origin: MoveOrigin) -> u8 {
    match origin {
        MoveOrigin::New => ORIGIN_NEW,
        MoveOrigin::Redo => ORIGIN_REDO,
        MoveOrigin::Unrecorded => ORIGIN_UNRECORDED,
    }
}

fn origin_from_tag(tag: u8) -> Result<MoveOrigin, ReplayError> {
    match tag {
        ORIGIN_NEW => Ok(MoveOrigin::New),
        ORIGIN_REDO => Ok(MoveOrigin::Redo),
        ORIGIN_UNRECORDED => Ok(MoveOrigin::Unrecorded),
        tag => Err(ReplayError::UnknownTag {
            kind: "origin",
            tag,
        }),
    }
}

// ── Moves ───────────────────────────────────────────────────────

/// Encode a move as face tag, layer, and signed turns.
pub fn encode_move(w: &mut dyn Write, mv: Move) -> Result<(), ReplayError> {
    write_u8(w, face_tag(mv.face()))?;
    write_u32_le(w, mv.layer())?;
    write_u8(w, mv.turns() as u8)
}

/// Decode a move. Turns outside `[-2, 2]` are rejected rather than
/// canonicalized, since a conforming writer never produces them.
pub fn decode_move(r: &mut dyn Read) -> Result<Move, ReplayError> {
    let face = face_from_tag(read_u8(r)?)?;
    let layer = read_u32_le(r)?;
    let turns = read_u8(r)? as i8;
    if !(-2..=2).contains(&turns) {
        return Err(ReplayError::MalformedRecord {
            detail: format!("turn count {turns} outside -2..=2"),
        });
    }
    Ok(Move::new(face, layer, i32::from(turns)))
}

fn check_preamble(r: &mut dyn Read, expected: [u8; 4]) -> Result<(), ReplayError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != expected {
        return Err(ReplayError::InvalidMagic { expected });
    }
    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(ReplayError::UnsupportedVersion { found: version });
    }
    Ok(())
}

// ── State records ───────────────────────────────────────────────

/// Encode a full state record.
///
/// # Examples
///
/// ```
/// use cubik_core::{FaceLabel, Move, StateRecord};
/// use cubik_replay::codec::{decode_record, encode_record};
///
/// let record = StateRecord {
///     size: 2,
///     cubies: vec![],
///     history: vec![Move::new(FaceLabel::Up, 1, -1)],
/// };
/// let mut buf = Vec::new();
/// encode_record(&mut buf, &record).unwrap();
/// assert_eq!(decode_record(&mut buf.as_slice()).unwrap(), record);
/// ```
pub fn encode_record(w: &mut dyn Write, record: &StateRecord) -> Result<(), ReplayError> {
    w.write_all(&RECORD_MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u32_le(w, record.size)?;

    write_len(w, record.cubies.len())?;
    for cubie in &record.cubies {
        let Position { x, y, z } = cubie.position;
        write_u32_le(w, x)?;
        write_u32_le(w, y)?;
        write_u32_le(w, z)?;
        write_u8(w, cubie.facelets.len() as u8)?;
        for &(label, id) in &cubie.facelets {
            write_u8(w, face_tag(label))?;
            write_u8(w, face_tag(id.color))?;
            write_u16_le(w, id.index)?;
        }
    }

    write_len(w, record.history.len())?;
    for &mv in &record.history {
        encode_move(w, mv)?;
    }
    Ok(())
}

/// Decode a state record.
///
/// Only the encoding is checked here. Whether the record describes a
/// valid cube is decided by the import that installs it.
pub fn decode_record(r: &mut dyn Read) -> Result<StateRecord, ReplayError> {
    check_preamble(r, RECORD_MAGIC)?;
    let size = read_u32_le(r)?;

    let cubie_count = read_u32_le(r)? as usize;
    let mut cubies = Vec::with_capacity(cubie_count.min(MAX_PREALLOC));
    for _ in 0..cubie_count {
        let position = Position::new(read_u32_le(r)?, read_u32_le(r)?, read_u32_le(r)?);
        let n = read_u8(r)?;
        if usize::from(n) > FaceLabel::ALL.len() {
            return Err(ReplayError::MalformedRecord {
                detail: format!("cubie {position} lists {n} facelets"),
            });
        }
        let mut facelets = SmallVec::new();
        for _ in 0..n {
            let label = face_from_tag(read_u8(r)?)?;
            let color = face_from_tag(read_u8(r)?)?;
            let index = read_u16_le(r)?;
            facelets.push((label, FaceletId::new(color, index)));
        }
        cubies.push(CubieRecord { position, facelets });
    }

    let move_count = read_u32_le(r)? as usize;
    let mut history = Vec::with_capacity(move_count.min(MAX_PREALLOC));
    for _ in 0..move_count {
        history.push(decode_move(r)?);
    }

    Ok(StateRecord {
        size,
        cubies,
        history,
    })
}

// ── Move logs ───────────────────────────────────────────────────

/// Encode the move-log header.
pub fn encode_header(w: &mut dyn Write, header: &LogHeader) -> Result<(), ReplayError> {
    w.write_all(&LOG_MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u32_le(w, header.size)?;
    write_u64_le(w, header.seed)?;
    write_u64_le(w, header.initial_hash)?;
    write_length_prefixed_str(w, &header.cubik_version)?;
    Ok(())
}

/// Decode and validate the move-log header.
pub fn decode_header(r: &mut dyn Read) -> Result<LogHeader, ReplayError> {
    check_preamble(r, LOG_MAGIC)?;
    Ok(LogHeader {
        size: read_u32_le(r)?,
        seed: read_u64_le(r)?,
        initial_hash: read_u64_le(r)?,
        cubik_version: read_length_prefixed_str(r)?,
    })
}

/// Encode one committed move.
pub fn encode_frame(w: &mut dyn Write, frame: &LogFrame) -> Result<(), ReplayError> {
    write_u64_le(w, frame.seq)?;
    write_u8(w, origin_tag(frame.origin))?;
    encode_move(w, frame.mv)?;
    write_u64_le(w, frame.state_hash)?;
    Ok(())
}

/// Decode one committed move.
///
/// Returns `Ok(None)` on clean EOF (no bytes available), `Ok(Some(frame))`
/// on success, or an error on truncated/corrupt data.
pub fn decode_frame(r: &mut dyn Read) -> Result<Option<LogFrame>, ReplayError> {
    // Read the sequence number byte-by-byte to tell a clean EOF (zero
    // bytes) from truncation (1-7 bytes).
    let mut seq_buf = [0u8; 8];
    let mut filled = 0;
    while filled < 8 {
        match r.read(&mut seq_buf[filled..]) {
            Ok(0) => {
                if filled == 0 {
                    return Ok(None);
                }
                return Err(ReplayError::MalformedRecord {
                    detail: format!("truncated frame: got {filled} of 8 bytes for seq"),
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ReplayError::Io(e)),
        }
    }

    Ok(Some(LogFrame {
        seq: u64::from_le_bytes(seq_buf),
        origin: origin_from_tag(read_u8(r)?)?,
        mv: decode_move(r)?,
        state_hash: read_u64_le(r)?,
    }))
}
