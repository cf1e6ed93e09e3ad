// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A ZIP central directory reading/writing crate.
//!
//! ## Features
//! - Locates the end of central directory record behind a comment of any length.
//! - Reads and writes the full table of central directory records against any [`std::io`] seekable stream.
//! - Detects a misplaced or corrupt trailer rather than silently misparsing it.
//! - Aims for reasonable [specification](https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md)
//!   compliance. ZIP64 and multi-disk archives are not supported.
//!
//! ## Feature flags
//! - `chrono` - conversions between [`ZipDateTime`] and chrono's `DateTime`.
//! - `full` - all of the above.
//!
//! ## Example
//! ```
//! # use std::io::Cursor;
//! # use zip_cd::{CentralDirectory, Compression, ZipEntry, ZipEntryBuilder};
//! # fn main() -> zip_cd::error::Result<()> {
//! let entry = ZipEntryBuilder::new("foo.bar", Compression::Stored).stored_payload(b"Foo. Bar.")?.build();
//! let directory = CentralDirectory::with_entries([entry], "a comment")?;
//!
//! let mut stream = Cursor::new(Vec::new());
//! directory.write_to(&mut stream)?;
//!
//! let read = CentralDirectory::<ZipEntry>::try_read_from(&mut stream)?.expect("a valid central directory");
//! assert_eq!(directory, read);
//! # Ok(())
//! # }
//! ```

pub mod cd;
pub mod date;
pub mod entry;
pub mod error;

pub(crate) mod spec;
pub(crate) mod utils;


pub use crate::cd::eocdr::EndOfCentralDirectoryRecord;
pub use crate::cd::CentralDirectory;
pub use crate::date::{builder::ZipDateTimeBuilder, ZipDateTime};
pub use crate::entry::builder::ZipEntryBuilder;
pub use crate::entry::ext::{ZipEntryBuilderExt, ZipEntryExt};
pub use crate::entry::set::EntrySet;
pub use crate::entry::{DirectoryRecord, ZipEntry};
pub use crate::spec::attribute::AttributeCompatibility;
pub use crate::spec::compression::Compression;
pub use crate::spec::consts::{EOCDR_SIGNATURE, MAX_EOCDR_SIZE, STATIC_EOCDR_SIZE};
pub use crate::spec::header::GeneralPurposeFlag;
