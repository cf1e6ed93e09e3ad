// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports reading and writing a ZIP file's central directory.

pub mod eocdr;
pub(crate) mod locator;

use crate::cd::eocdr::{comment_length, EndOfCentralDirectoryRecord};
use crate::entry::set::EntrySet;
use crate::entry::{DirectoryRecord, ZipEntry};
use crate::error::{Result, ZipError};

use std::io::{Read, Seek, SeekFrom, Write};

/// A ZIP file's central directory: its entries, in order, plus the trailing zip file comment.
///
/// # Reading
/// [`CentralDirectory::read_from`] locates the end of central directory record within the trailing bytes of a
/// seekable source, then reads exactly as many records as it declares from the offset it declares.
///
/// # Writing
/// [`CentralDirectory::write_to`] writes every record from the writer's current position, followed by an end of
/// central directory record describing them. Nothing is buffered, and the writer is neither flushed nor closed.
///
/// # Equality
/// Two central directories are equal if they hold the same entries, regardless of order, and the same comment.
#[derive(Debug, Clone)]
pub struct CentralDirectory<E = ZipEntry> {
    entries: EntrySet<E>,
    comment: Vec<u8>,
}

impl<E> Default for CentralDirectory<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> CentralDirectory<E> {
    /// Constructs an empty central directory with an empty comment.
    pub fn new() -> Self {
        Self { entries: EntrySet::new(), comment: Vec::new() }
    }

    /// Constructs a central directory from the provided entries and comment.
    ///
    /// Fails if the comment is longer than 65535 bytes.
    pub fn with_entries(entries: impl IntoIterator<Item = E>, comment: impl Into<Vec<u8>>) -> Result<Self> {
        let mut directory = Self { entries: entries.into_iter().collect(), comment: Vec::new() };
        directory.set_comment(comment)?;
        Ok(directory)
    }

    /// Returns this central directory's entries.
    pub fn entries(&self) -> &EntrySet<E> {
        &self.entries
    }

    /// Returns this central directory's entries for modification before a later write.
    pub fn entries_mut(&mut self) -> &mut EntrySet<E> {
        &mut self.entries
    }

    /// Returns the zip file comment.
    pub fn comment(&self) -> &[u8] {
        &self.comment
    }

    /// Replaces the zip file comment.
    ///
    /// Fails, leaving the current comment in place, if the comment is longer than 65535 bytes.
    pub fn set_comment(&mut self, comment: impl Into<Vec<u8>>) -> Result<()> {
        let comment = comment.into();
        comment_length(&comment)?;

        self.comment = comment;
        Ok(())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether or not there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }
}

impl<E: DirectoryRecord> CentralDirectory<E> {
    /// Writes this central directory to the given writer, starting at its current position.
    ///
    /// This function does so by:
    /// - writing each entry's central directory record, in collection order
    /// - writing the end of central directory record, which records the writer's starting position
    ///
    /// Archives which would need ZIP64 (more than 65535 entries, or an offset or size beyond 4GiB) are rejected before
    /// anything is written.
    #[tracing::instrument(skip(self, writer), fields(entries = self.entries.len()))]
    pub fn write_to<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write + Seek,
    {
        let offset = writer.stream_position()?;
        let eocdr = self.end_of_central_directory(offset)?;

        for entry in &self.entries {
            entry.write_directory_record(writer)?;
        }

        eocdr.write(writer)?;

        tracing::debug!(offset, size = eocdr.central_directory_size, "wrote central directory");
        Ok(())
    }

    /// Reads a central directory from the given reader, replacing this one's entries and comment.
    ///
    /// This function does so by:
    /// - locating the end of central directory record within the trailing bytes of the reader
    /// - parsing the end of central directory record
    /// - seeking to the offset it records
    /// - reading the number of entries it records
    ///
    /// On failure, this central directory is left untouched.
    #[tracing::instrument(skip(self, reader))]
    pub fn read_from<R>(&mut self, reader: &mut R) -> Result<()>
    where
        R: Read + Seek,
    {
        let located = locator::eocdr(reader)?;
        let eocdr = EndOfCentralDirectoryRecord::from_buffer(&located.buffer)?;

        let offset = eocdr.central_directory_offset;
        if u64::from(offset) > located.stream_length {
            return Err(ZipError::InconsistentCentralDirectoryOffset(offset));
        }

        reader.seek(SeekFrom::Start(offset.into())).map_err(|_| ZipError::InconsistentCentralDirectoryOffset(offset))?;

        let mut entries = EntrySet::with_capacity(eocdr.total_entries.into());
        for _ in 0..eocdr.total_entries {
            entries.push(E::read_directory_record(reader)?);
        }

        tracing::debug!(
            offset,
            eocdr_offset = located.offset,
            entries = entries.len(),
            "read central directory"
        );

        self.entries = entries;
        self.comment = eocdr.comment;

        Ok(())
    }

    /// Reads a new central directory from the given reader, returning None if the reader doesn't hold a valid one.
    ///
    /// Only malformed data (see [`ZipError::is_format_error`]) is mapped to None; an upstream reader error is still
    /// returned as an error.
    pub fn try_read_from<R>(reader: &mut R) -> Result<Option<Self>>
    where
        R: Read + Seek,
    {
        let mut directory = Self::new();

        match directory.read_from(reader) {
            Ok(()) => Ok(Some(directory)),
            Err(err) if err.is_format_error() => {
                tracing::debug!(%err, "no valid central directory found");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Builds the end of central directory record describing these entries when written at the provided offset.
    pub(crate) fn end_of_central_directory(&self, offset: u64) -> Result<EndOfCentralDirectoryRecord> {
        let entries = u16::try_from(self.entries.len())
            .map_err(|_| ZipError::FeatureNotSupported("more than 65535 entries (ZIP64)"))?;
        let central_directory_offset = u32::try_from(offset)
            .map_err(|_| ZipError::FeatureNotSupported("central directory offset beyond 4GiB (ZIP64)"))?;

        let size: u64 = self.entries.iter().map(DirectoryRecord::encoded_size).sum();
        let central_directory_size = u32::try_from(size)
            .map_err(|_| ZipError::FeatureNotSupported("central directory size beyond 4GiB (ZIP64)"))?;

        comment_length(&self.comment)?;

        Ok(EndOfCentralDirectoryRecord {
            disk_number: 0,
            disk_with_start: 0,
            entries_on_this_disk: entries,
            total_entries: entries,
            central_directory_size,
            central_directory_offset,
            comment: self.comment.clone(),
        })
    }
}

impl CentralDirectory<ZipEntry> {
    /// Returns the first entry with the provided raw filename, if any.
    pub fn entry(&self, filename: impl AsRef<[u8]>) -> Option<&ZipEntry> {
        let filename = filename.as_ref();
        self.entries.iter().find(|entry| entry.filename() == filename)
    }
}

impl<E: Ord> PartialEq for CentralDirectory<E> {
    fn eq(&self, other: &Self) -> bool {
        self.comment == other.comment && self.entries.sorted() == other.entries.sorted()
    }
}

impl<E: Ord> Eq for CentralDirectory<E> {}

impl<'a, E> IntoIterator for &'a CentralDirectory<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
