// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;
pub mod ext;
pub mod set;

use crate::date::ZipDateTime;
use crate::error::Result;
use crate::spec::attribute::AttributeCompatibility;
use crate::spec::compression::Compression;
use crate::spec::consts::{CDH_LENGTH, CDH_SIGNATURE, SIGNATURE_LENGTH};
use crate::spec::header::{CentralDirectoryRecord, GeneralPurposeFlag};
use crate::utils::{assert_signature, field_length, read_bytes, write_u32};

use std::io::{Read, Write};

#[cfg(doc)]
use crate::cd::CentralDirectory;

/// A single record of a central directory, as seen by [`CentralDirectory`].
///
/// The central directory never looks inside a record: it only needs to know how many bytes a record occupies on the
/// wire, and how to write it to or read it from a stream positioned at its first byte.
pub trait DirectoryRecord: Sized {
    /// Returns the number of bytes [`DirectoryRecord::write_directory_record`] writes, signature included.
    fn encoded_size(&self) -> u64;

    /// Writes this record to the given writer.
    fn write_directory_record<W: Write>(&self, writer: &mut W) -> Result<()>;

    /// Reads one record from the given reader, which must be positioned at the record's signature.
    fn read_directory_record<R: Read>(reader: &mut R) -> Result<Self>;
}

/// An entry within a ZIP file's central directory.
///
/// Entries are ordered by their filename first, and by the remaining fields in declaration order after that. This
/// gives a total order consistent with [`Eq`], which [`CentralDirectory`] equality relies on.
///
/// # Builder pattern
/// To create or mutate an entry, the [`ZipEntryBuilder`] builder must be used. Non-allocating conversions between
/// these two structures can be achieved via the [`From`] implementations.
///
/// [`ZipEntryBuilder`]: crate::ZipEntryBuilder
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZipEntry {
    pub(crate) filename: Vec<u8>,
    pub(crate) version_made_by: u16,
    pub(crate) version_needed: u16,
    pub(crate) flags: u16,
    pub(crate) compression: u16,
    pub(crate) last_modification_date: ZipDateTime,
    pub(crate) crc32: u32,
    pub(crate) compressed_size: u32,
    pub(crate) uncompressed_size: u32,
    pub(crate) disk_start: u16,
    pub(crate) internal_file_attribute: u16,
    pub(crate) external_file_attribute: u32,
    pub(crate) header_offset: u32,
    pub(crate) extra_field: Vec<u8>,
    pub(crate) comment: Vec<u8>,
}

impl ZipEntry {
    pub(crate) fn new(filename: Vec<u8>, compression: Compression) -> Self {
        let version_needed = crate::spec::version::as_needed_to_extract(compression, &filename);

        ZipEntry {
            filename,
            version_made_by: crate::spec::version::as_made_by(AttributeCompatibility::Unix),
            version_needed,
            flags: 0,
            compression: compression.into(),
            last_modification_date: ZipDateTime::default(),
            crc32: 0,
            compressed_size: 0,
            uncompressed_size: 0,
            disk_start: 0,
            internal_file_attribute: 0,
            external_file_attribute: 0,
            header_offset: 0,
            extra_field: Vec::new(),
            comment: Vec::new(),
        }
    }

    /// Returns the entry's raw filename.
    ///
    /// # Note
    /// This will return the raw filename stored during ZIP creation. If calling this method on entries retrieved from
    /// untrusted ZIP files, the filename should be sanitised before being used as a path to prevent [directory
    /// travesal attacks](https://en.wikipedia.org/wiki/Directory_traversal_attack).
    pub fn filename(&self) -> &[u8] {
        &self.filename
    }

    /// Returns the entry's filename as a string slice, if it's valid UTF-8.
    pub fn filename_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.filename).ok()
    }

    /// Returns whether or not the entry represents a directory.
    pub fn dir(&self) -> bool {
        self.filename.ends_with(b"/")
    }

    /// Returns the entry's compression method.
    ///
    /// Fails if the stored method isn't one this crate recognises; [`ZipEntry::raw_compression`] is always available.
    pub fn compression(&self) -> Result<Compression> {
        Compression::try_from(self.compression)
    }

    /// Returns the entry's compression method exactly as stored.
    pub fn raw_compression(&self) -> u16 {
        self.compression
    }

    /// Returns the entry's attribute's host compatibility.
    pub fn attribute_compatibility(&self) -> Result<AttributeCompatibility> {
        AttributeCompatibility::try_from(self.version_made_by >> 8)
    }

    /// Returns the entry's "version made by" field.
    pub fn version_made_by(&self) -> u16 {
        self.version_made_by
    }

    /// Returns the entry's "version needed to extract" field.
    pub fn version_needed(&self) -> u16 {
        self.version_needed
    }

    /// Returns the entry's general purpose flag.
    pub fn general_purpose_flag(&self) -> GeneralPurposeFlag {
        GeneralPurposeFlag::from(self.flags)
    }

    /// Returns the entry's last modification time & date.
    pub fn last_modification_date(&self) -> &ZipDateTime {
        &self.last_modification_date
    }

    /// Returns the entry's CRC32 value.
    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    /// Returns the entry's compressed size.
    pub fn compressed_size(&self) -> u32 {
        self.compressed_size
    }

    /// Returns the entry's uncompressed size.
    pub fn uncompressed_size(&self) -> u32 {
        self.uncompressed_size
    }

    /// Returns the offset of the entry's local file header.
    pub fn header_offset(&self) -> u32 {
        self.header_offset
    }

    /// Returns the entry's internal file attribute.
    pub fn internal_file_attribute(&self) -> u16 {
        self.internal_file_attribute
    }

    /// Returns the entry's external file attribute
    pub fn external_file_attribute(&self) -> u32 {
        self.external_file_attribute
    }

    /// Returns the entry's extra field data.
    pub fn extra_field(&self) -> &[u8] {
        &self.extra_field
    }

    /// Returns the entry's file comment.
    pub fn comment(&self) -> &[u8] {
        &self.comment
    }

    fn record(&self) -> Result<CentralDirectoryRecord> {
        Ok(CentralDirectoryRecord {
            v_made_by: self.version_made_by,
            v_needed: self.version_needed,
            flags: self.flags,
            compression: self.compression,
            mod_time: self.last_modification_date.time,
            mod_date: self.last_modification_date.date,
            crc: self.crc32,
            compressed_size: self.compressed_size,
            uncompressed_size: self.uncompressed_size,
            file_name_length: field_length("file name", self.filename.len())?,
            extra_field_length: field_length("extra field", self.extra_field.len())?,
            file_comment_length: field_length("file comment", self.comment.len())?,
            disk_start: self.disk_start,
            inter_attr: self.internal_file_attribute,
            exter_attr: self.external_file_attribute,
            lh_offset: self.header_offset,
        })
    }
}

impl DirectoryRecord for ZipEntry {
    fn encoded_size(&self) -> u64 {
        (SIGNATURE_LENGTH + CDH_LENGTH + self.filename.len() + self.extra_field.len() + self.comment.len()) as u64
    }

    /// Writes the central directory record for this entry.
    ///
    /// This function does so by:
    /// - writing the signature of the central directory record
    /// - writing the raw central directory record
    /// - writing the file name
    /// - writing the extra field
    /// - writing the file comment
    fn write_directory_record<W: Write>(&self, writer: &mut W) -> Result<()> {
        let record = self.record()?;

        write_u32(writer, CDH_SIGNATURE)?;
        writer.write_all(&record.as_slice())?;
        writer.write_all(&self.filename)?;
        writer.write_all(&self.extra_field)?;
        writer.write_all(&self.comment)?;

        Ok(())
    }

    /// Reads a central directory record.
    ///
    /// This function does so by:
    /// - asserting the signature of the central directory record
    /// - reading the raw central directory record
    /// - reading the file name
    /// - reading the extra field
    /// - reading the file comment
    #[tracing::instrument(level = "trace", skip(reader))]
    fn read_directory_record<R: Read>(reader: &mut R) -> Result<Self> {
        assert_signature(reader, CDH_SIGNATURE)?;

        let header = CentralDirectoryRecord::from_reader(reader)?;
        let filename = read_bytes(reader, header.file_name_length.into())?;
        let extra_field = read_bytes(reader, header.extra_field_length.into())?;
        let comment = read_bytes(reader, header.file_comment_length.into())?;

        Ok(ZipEntry {
            filename,
            version_made_by: header.v_made_by,
            version_needed: header.v_needed,
            flags: header.flags,
            compression: header.compression,
            last_modification_date: ZipDateTime::from_dos(header.mod_date, header.mod_time),
            crc32: header.crc,
            compressed_size: header.compressed_size,
            uncompressed_size: header.uncompressed_size,
            disk_start: header.disk_start,
            internal_file_attribute: header.inter_attr,
            external_file_attribute: header.exter_attr,
            header_offset: header.lh_offset,
            extra_field,
            comment,
        })
    }
}
