// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::date::ZipDateTime;
use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::spec::attribute::AttributeCompatibility;
use crate::spec::compression::Compression;
use crate::spec::header::GeneralPurposeFlag;

/// A builder for [`ZipEntry`].
pub struct ZipEntryBuilder(pub(crate) ZipEntry);

impl From<ZipEntry> for ZipEntryBuilder {
    fn from(entry: ZipEntry) -> Self {
        Self(entry)
    }
}

impl From<ZipEntryBuilder> for ZipEntry {
    fn from(builder: ZipEntryBuilder) -> Self {
        builder.0
    }
}

impl ZipEntryBuilder {
    /// Constructs a new builder which defines the raw underlying data of a ZIP entry.
    ///
    /// A filename and compression method are needed to construct the builder as minimal parameters.
    pub fn new(filename: impl Into<Vec<u8>>, compression: Compression) -> Self {
        Self(ZipEntry::new(filename.into(), compression))
    }

    /// Sets the entry's filename.
    pub fn filename(mut self, filename: impl Into<Vec<u8>>) -> Self {
        self.0.filename = filename.into();

        if let Ok(compression) = self.0.compression() {
            self.0.version_needed = crate::spec::version::as_needed_to_extract(compression, &self.0.filename);
        }

        self
    }

    /// Sets the entry's compression method.
    ///
    /// The "version needed to extract" field is recomputed to match.
    pub fn compression(mut self, compression: Compression) -> Self {
        self.0.compression = compression.into();
        self.0.version_needed = crate::spec::version::as_needed_to_extract(compression, &self.0.filename);
        self
    }

    /// Sets the entry's attribute host compatibility.
    pub fn attribute_compatibility(mut self, compatibility: AttributeCompatibility) -> Self {
        self.0.version_made_by = crate::spec::version::as_made_by(compatibility);
        self
    }

    /// Sets the entry's general purpose flag.
    pub fn general_purpose_flag(mut self, flag: GeneralPurposeFlag) -> Self {
        self.0.flags = flag.into();
        self
    }

    /// Sets the entry's last modification date.
    pub fn last_modification_date(mut self, date: ZipDateTime) -> Self {
        self.0.last_modification_date = date;
        self
    }

    /// Sets the entry's CRC32 value.
    pub fn crc32(mut self, crc32: u32) -> Self {
        self.0.crc32 = crc32;
        self
    }

    /// Sets the entry's compressed and uncompressed sizes.
    pub fn sizes(mut self, compressed_size: u32, uncompressed_size: u32) -> Self {
        self.0.compressed_size = compressed_size;
        self.0.uncompressed_size = uncompressed_size;
        self
    }

    /// Stamps the CRC32 value and both sizes of an uncompressed payload, and sets the compression method to
    /// [`Compression::Stored`].
    ///
    /// Fails if the payload is 4GiB or more, as its size would need ZIP64.
    pub fn stored_payload(self, data: &[u8]) -> Result<Self> {
        let size = stored_size(data.len())?;
        Ok(self.compression(Compression::Stored).crc32(crc32fast::hash(data)).sizes(size, size))
    }

    /// Sets the offset of the entry's local file header.
    pub fn header_offset(mut self, offset: u32) -> Self {
        self.0.header_offset = offset;
        self
    }

    /// Sets the entry's internal file attribute.
    pub fn internal_file_attribute(mut self, attribute: u16) -> Self {
        self.0.internal_file_attribute = attribute;
        self
    }

    /// Sets the entry's external file attribute.
    pub fn external_file_attribute(mut self, attribute: u32) -> Self {
        self.0.external_file_attribute = attribute;
        self
    }

    /// Sets the entry's extra field data.
    pub fn extra_field(mut self, field: impl Into<Vec<u8>>) -> Self {
        self.0.extra_field = field.into();
        self
    }

    /// Sets the entry's file comment.
    pub fn comment(mut self, comment: impl Into<Vec<u8>>) -> Self {
        self.0.comment = comment.into();
        self
    }

    /// Consumes this builder and returns a final [`ZipEntry`].
    ///
    /// This is equivalent to:
    /// ```
    /// # use zip_cd::{ZipEntry, ZipEntryBuilder, Compression};
    /// #
    /// # let builder = ZipEntryBuilder::new("foo.bar", Compression::Stored);
    /// let entry: ZipEntry = builder.into();
    /// ```
    pub fn build(self) -> ZipEntry {
        self.into()
    }
}

/// Converts a stored payload's length into the u32 recorded as both of its sizes.
pub(crate) fn stored_size(length: usize) -> Result<u32> {
    u32::try_from(length).map_err(|_| ZipError::FeatureNotSupported("payload of 4GiB or more (ZIP64)"))
}
