// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::DirectoryRecord;
use crate::error::ZipError;
use crate::tests::{raw_eocdr, stored_entry, SizedRecord, UnreadableRecord};
use crate::{CentralDirectory, ZipEntry};

use std::io::{Cursor, Read, Seek, SeekFrom};

#[test]
fn empty() {
    let mut input_stream = Cursor::new(raw_eocdr(0, 0, 0, 0, &[]));

    let mut directory = CentralDirectory::<ZipEntry>::new();
    directory.read_from(&mut input_stream).expect("failed to read central directory");

    assert!(directory.is_empty());
    assert!(directory.comment().is_empty());
}

#[test]
fn zero_length_zip() {
    let mut input_stream = Cursor::new(Vec::<u8>::new());

    let result = CentralDirectory::<ZipEntry>::new().read_from(&mut input_stream);
    assert!(matches!(result, Err(ZipError::UnableToLocateEOCDR)));

    let read = CentralDirectory::<ZipEntry>::try_read_from(&mut input_stream).expect("failed to read");
    assert!(read.is_none());
}

#[test]
fn no_signature() {
    let mut input_stream = Cursor::new(vec![0x4b; 80_000]);

    let result = CentralDirectory::<ZipEntry>::new().read_from(&mut input_stream);
    assert!(matches!(result, Err(ZipError::UnableToLocateEOCDR)));

    let read = CentralDirectory::<ZipEntry>::try_read_from(&mut input_stream).expect("failed to read");
    assert!(read.is_none());
}

#[test]
fn offset_beyond_stream() {
    let mut data = vec![0; 10];
    data.extend(raw_eocdr(1, 46, 5_000, 0, &[]));
    let mut input_stream = Cursor::new(data);

    // Reading a record would panic, so the error must be raised before any entry is read.
    let result = CentralDirectory::<UnreadableRecord>::new().read_from(&mut input_stream);
    assert!(matches!(result, Err(ZipError::InconsistentCentralDirectoryOffset(5_000))));

    let read = CentralDirectory::<UnreadableRecord>::try_read_from(&mut input_stream).expect("failed to read");
    assert!(read.is_none());
}

#[test]
fn inconsistent_eocdr() {
    let mut input_stream = Cursor::new(raw_eocdr(0, 0, 0, 3, b"comment"));

    let result = CentralDirectory::<ZipEntry>::new().read_from(&mut input_stream);
    assert!(matches!(result, Err(ZipError::InconsistentEOCDR)));
}

#[test]
fn sized_records() {
    let records = [SizedRecord::new(1, 40), SizedRecord::new(2, 55), SizedRecord::new(3, 3)];

    let mut data = Vec::new();
    for record in &records {
        record.write_directory_record(&mut data).expect("failed to write record");
    }
    data.extend(raw_eocdr(3, 98, 0, 4, b"note"));

    let mut directory = CentralDirectory::<SizedRecord>::new();
    directory.read_from(&mut Cursor::new(data)).expect("failed to read central directory");

    assert_eq!(directory.len(), 3);
    assert_eq!(directory.comment(), b"note");
    assert_eq!(directory.iter().cloned().collect::<Vec<_>>(), records);
}

#[test]
fn zip_entries_after_leading_data() {
    let entries = [stored_entry("foo.bar", b"Foo."), stored_entry("bar/", b"")];

    let mut data = b"local headers and entry data".to_vec();
    let offset = data.len() as u32;
    let mut size = 0;
    for entry in &entries {
        entry.write_directory_record(&mut data).expect("failed to write record");
        size += entry.encoded_size() as u32;
    }
    data.extend(raw_eocdr(2, size, offset, 0, &[]));

    let directory = CentralDirectory::<ZipEntry>::try_read_from(&mut Cursor::new(data))
        .expect("failed to read central directory")
        .expect("no central directory");

    assert_eq!(directory.len(), 2);
    assert_eq!(directory.entry("foo.bar"), Some(&entries[0]));
    assert!(directory.entry("bar/").expect("no 'bar/' entry").dir());
    assert!(directory.entry("baz").is_none());
}

#[test]
fn unexpected_entry_signature() {
    let mut data = vec![0xFF; 46];
    data.extend(raw_eocdr(1, 46, 0, 0, &[]));

    let result = CentralDirectory::<ZipEntry>::new().read_from(&mut Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::UnexpectedHeaderError(0xFFFFFFFF, 0x2014b50))));

    let read = CentralDirectory::<ZipEntry>::try_read_from(&mut Cursor::new(&data)).expect("failed to read");
    assert!(read.is_none());
}

#[test]
fn comment_cut_short() {
    let mut input_stream = Cursor::new(raw_eocdr(0, 0, 0, 10, b"hello"));

    let directory = CentralDirectory::<ZipEntry>::try_read_from(&mut input_stream)
        .expect("failed to read central directory")
        .expect("no central directory");

    assert!(directory.is_empty());
    assert_eq!(directory.comment(), b"hello");
}

#[test]
fn truncated_entries() {
    // Declares two entries, but the directory only holds one.
    let entry = stored_entry("foo.bar", b"Foo.");
    let mut data = Vec::new();
    entry.write_directory_record(&mut data).expect("failed to write record");
    let size = data.len() as u32;
    data.extend(raw_eocdr(2, size, 0, 0, &[]));

    let result = CentralDirectory::<ZipEntry>::new().read_from(&mut Cursor::new(&data));
    assert!(result.is_err());
    assert!(result.unwrap_err().is_format_error());
}

#[test]
fn failed_read_leaves_directory_untouched() {
    let mut directory = CentralDirectory::with_entries([stored_entry("foo.bar", b"Foo.")], "kept")
        .expect("failed to build central directory");
    let before = directory.clone();

    let result = directory.read_from(&mut Cursor::new(vec![0; 64]));

    assert!(result.is_err());
    assert_eq!(directory, before);
}

#[test]
fn read_replaces_previous_state() {
    let mut directory = CentralDirectory::with_entries([stored_entry("foo.bar", b"Foo.")], "old")
        .expect("failed to build central directory");

    directory.read_from(&mut Cursor::new(raw_eocdr(0, 0, 0, 3, b"new"))).expect("failed to read central directory");

    assert!(directory.is_empty());
    assert_eq!(directory.comment(), b"new");
}

/// A reader which fails every operation with a non-format error.
struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"))
    }
}

impl Seek for FailingReader {
    fn seek(&mut self, _: SeekFrom) -> std::io::Result<u64> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn upstream_errors_propagate_through_try_read() {
    let result = CentralDirectory::<ZipEntry>::try_read_from(&mut FailingReader);

    match result {
        Err(ZipError::UpstreamReadError(err)) => assert_eq!(err.kind(), std::io::ErrorKind::Other),
        other => panic!("expected an upstream error, got {other:?}"),
    }
}
