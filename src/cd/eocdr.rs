// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};
use crate::spec::consts::{EOCDR_LENGTH, EOCDR_SIGNATURE};
use crate::spec::header::EndOfCentralDirectoryHeader;
use crate::utils::write_u32;

use std::io::Write;

/// The end of central directory record: the fixed-layout trailer of a ZIP file plus its comment.
///
/// This is a transient value, built while writing and parsed while reading a central directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndOfCentralDirectoryRecord {
    pub(crate) disk_number: u16,
    pub(crate) disk_with_start: u16,
    pub(crate) entries_on_this_disk: u16,
    pub(crate) total_entries: u16,
    pub(crate) central_directory_size: u32,
    pub(crate) central_directory_offset: u32,
    pub(crate) comment: Vec<u8>,
}

impl EndOfCentralDirectoryRecord {
    /// Decodes a record from the bytes which follow its signature.
    ///
    /// A stored comment length of zero is treated as "the comment is whatever remains of the buffer". This is
    /// non-standard, and exists for producers which write a zero length alongside a present comment. Otherwise up to
    /// the stored number of comment bytes is consumed; a comment cut short by the end of the stream keeps what remains.
    ///
    /// The buffer must be consumed in full, as leftover bytes mean the signature was matched at the wrong position.
    #[tracing::instrument(skip(buffer), fields(length = buffer.len()))]
    pub fn from_buffer(buffer: &[u8]) -> Result<Self> {
        if buffer.len() < EOCDR_LENGTH {
            return Err(ZipError::InconsistentEOCDR);
        }

        let (fixed, remainder) = buffer.split_at(EOCDR_LENGTH);
        let mut raw = [0; EOCDR_LENGTH];
        raw.copy_from_slice(fixed);
        let header = EndOfCentralDirectoryHeader::from(raw);

        let comment = match header.file_comm_length as usize {
            0 => {
                if !remainder.is_empty() {
                    tracing::warn!(
                        length = remainder.len(),
                        "comment length stored as zero, treating the remaining bytes as the comment"
                    );
                }
                remainder.to_vec()
            }
            length if length == remainder.len() => remainder.to_vec(),
            length if length > remainder.len() => {
                tracing::debug!(length, remaining = remainder.len(), "comment cut short, keeping the bytes present");
                remainder.to_vec()
            }
            length => {
                tracing::debug!(length, remaining = remainder.len(), "bytes left over after the comment");
                return Err(ZipError::InconsistentEOCDR);
            }
        };

        Ok(EndOfCentralDirectoryRecord {
            disk_number: header.disk_num,
            disk_with_start: header.start_cent_dir_disk,
            entries_on_this_disk: header.num_of_entries_disk,
            total_entries: header.num_of_entries,
            central_directory_size: header.size_cent_dir,
            central_directory_offset: header.cent_dir_offset,
            comment,
        })
    }

    /// Encodes this record, excluding its signature.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let header = EndOfCentralDirectoryHeader {
            disk_num: self.disk_number,
            start_cent_dir_disk: self.disk_with_start,
            num_of_entries_disk: self.entries_on_this_disk,
            num_of_entries: self.total_entries,
            size_cent_dir: self.central_directory_size,
            cent_dir_offset: self.central_directory_offset,
            file_comm_length: comment_length(&self.comment)?,
        };

        let mut bytes = Vec::with_capacity(EOCDR_LENGTH + self.comment.len());
        bytes.extend_from_slice(&header.as_slice());
        bytes.extend_from_slice(&self.comment);

        Ok(bytes)
    }

    /// Writes the end of central directory record to the given writer.
    ///
    /// This function does so by:
    /// - writing the signature of the end of central directory record
    /// - writing the raw end of central directory record
    /// - writing the zip file comment
    #[tracing::instrument(skip(self, writer))]
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let bytes = self.to_bytes()?;

        write_u32(writer, EOCDR_SIGNATURE)?;
        writer.write_all(&bytes)?;

        Ok(())
    }

    /// Returns the number of the disk holding this record.
    pub fn disk_number(&self) -> u16 {
        self.disk_number
    }

    /// Returns the number of the disk on which the central directory starts.
    pub fn disk_with_start(&self) -> u16 {
        self.disk_with_start
    }

    /// Returns the number of central directory entries on this disk.
    pub fn entries_on_this_disk(&self) -> u16 {
        self.entries_on_this_disk
    }

    /// Returns the total number of central directory entries.
    pub fn total_entries(&self) -> u16 {
        self.total_entries
    }

    /// Returns the size of the central directory in bytes, excluding this record.
    pub fn central_directory_size(&self) -> u32 {
        self.central_directory_size
    }

    /// Returns the absolute offset of the central directory's first record.
    pub fn central_directory_offset(&self) -> u32 {
        self.central_directory_offset
    }

    /// Returns the zip file comment.
    pub fn comment(&self) -> &[u8] {
        &self.comment
    }
}

/// Converts a zip file comment's length into the u16 stored on the wire.
pub(crate) fn comment_length(comment: &[u8]) -> Result<u16> {
    u16::try_from(comment.len()).map_err(|_| ZipError::CommentTooLong(comment.len()))
}
