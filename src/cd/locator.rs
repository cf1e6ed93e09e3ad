// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! <https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316>
//!
//! As with other ZIP libraries, we face the predicament that the end of central directory record may contain a
//! variable-length file comment. As a result, we cannot just make the assumption that the start of this record is
//! 22 bytes (the length of the EOCDR with its signature) offset from the end of the data - we must locate it ourselves.
//!
//! The EOCDR can never start further back than the length of a record carrying the longest possible comment, so we
//! read that trailing window in one go and search it in reverse. The window is sized to hold a maximal record in full
//! (4 + 18 + 65535 bytes), signature included, so a 65535-byte comment is always reachable. The rightmost match wins: the true trailer is always
//! last, and an earlier occurrence of the signature bytes (inside entry data, or a stale trailer) is never considered.
//!
//! A comment which itself ends with the signature followed by 18 plausible bytes is indistinguishable from a genuine
//! trailer. That ambiguity is inherent to the format and no attempt is made to repair it.

use crate::error::{Result as ZipResult, ZipError};
use crate::spec::consts::{EOCDR_SIGNATURE, MAX_EOCDR_SIZE};

use std::io::{Read, Seek, SeekFrom};

/// The trailing bytes of a stream which follow the rightmost EOCDR signature.
#[derive(Debug)]
pub(crate) struct LocatedEocdr {
    /// The absolute offset of the first byte after the signature.
    pub(crate) offset: u64,
    /// The total length of the stream.
    pub(crate) stream_length: u64,
    /// Every byte from `offset` up to the end of the stream.
    pub(crate) buffer: Vec<u8>,
}

/// Locate the `end of central directory record` within the trailing window of the given reader.
///
/// The returned buffer excludes the signature (4 bytes).
#[tracing::instrument(skip(reader))]
pub(crate) fn eocdr<R>(reader: &mut R) -> ZipResult<LocatedEocdr>
where
    R: Read + Seek,
{
    let stream_length = reader.seek(SeekFrom::End(0))?;
    let window_start = stream_length.saturating_sub(MAX_EOCDR_SIZE as u64);

    reader.seek(SeekFrom::Start(window_start))?;

    let mut window = Vec::with_capacity((stream_length - window_start) as usize);
    reader.read_to_end(&mut window)?;

    let signature = &EOCDR_SIGNATURE.to_le_bytes();
    let match_index = reverse_search_buffer(&window, signature).ok_or(ZipError::UnableToLocateEOCDR)?;

    // The search yields the index of the signature's last byte.
    let buffer = window.split_off(match_index + 1);
    let offset = window_start + (match_index + 1) as u64;

    tracing::debug!(offset, stream_length, "located end of central directory signature");
    Ok(LocatedEocdr { offset, stream_length, buffer })
}

/// A naive reverse linear search along the buffer for the specified signature bytes.
///
/// Returns the index of the last byte of the rightmost match.
pub(crate) fn reverse_search_buffer(buffer: &[u8], signature: &[u8]) -> Option<usize> {
    'outer: for index in (0..buffer.len()).rev() {
        for (signature_index, signature_byte) in signature.iter().rev().enumerate() {
            if let Some(next_index) = index.checked_sub(signature_index) {
                if buffer[next_index] != *signature_byte {
                    continue 'outer;
                }
            } else {
                break 'outer;
            }
        }
        return Some(index);
    }
    None
}
