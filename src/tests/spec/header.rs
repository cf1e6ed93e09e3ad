// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::consts::{CDH_LENGTH, EOCDR_LENGTH};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, GeneralPurposeFlag};
use crate::{AttributeCompatibility, Compression};

#[test]
fn central_directory_record_layout_test() {
    let record = CentralDirectoryRecord {
        v_made_by: 0x0314,
        v_needed: 0x000A,
        flags: 0x0808,
        compression: 8,
        mod_time: 0x6000,
        mod_date: 0x5521,
        crc: 0xDEADBEEF,
        compressed_size: 0x01020304,
        uncompressed_size: 0x05060708,
        file_name_length: 7,
        extra_field_length: 0,
        file_comment_length: 3,
        disk_start: 0,
        inter_attr: 1,
        exter_attr: 0x81A40000,
        lh_offset: 0x10203040,
    };

    let bytes = record.as_slice();
    assert_eq!(bytes.len(), CDH_LENGTH);
    assert_eq!(&bytes[0..2], &[0x14, 0x03]);
    assert_eq!(&bytes[12..16], &[0xEF, 0xBE, 0xAD, 0xDE]);
    assert_eq!(&bytes[38..42], &[0x40, 0x30, 0x20, 0x10]);
    assert_eq!(CentralDirectoryRecord::from(bytes), record);
}

#[test]
fn end_of_central_directory_header_layout_test() {
    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: 2,
        num_of_entries: 2,
        size_cent_dir: 95,
        cent_dir_offset: 1000,
        file_comm_length: 0,
    };

    let bytes = header.as_slice();
    assert_eq!(bytes.len(), EOCDR_LENGTH);
    assert_eq!(bytes, [0, 0, 0, 0, 2, 0, 2, 0, 95, 0, 0, 0, 0xE8, 0x03, 0, 0, 0, 0]);
    assert_eq!(EndOfCentralDirectoryHeader::from(bytes), header);
}

#[test]
fn general_purpose_flag_test() {
    let flag = GeneralPurposeFlag::from(0x0809);

    assert!(flag.encrypted);
    assert!(flag.data_descriptor);
    assert!(flag.filename_unicode);
    assert_eq!(u16::from(flag), 0x0809);

    // Bits this crate doesn't model are dropped.
    assert_eq!(u16::from(GeneralPurposeFlag::from(0x0002)), 0);
}

#[test]
fn compression_test() {
    for method in [0u16, 8, 9, 12, 14, 93, 95] {
        let compression = Compression::try_from(method).expect("unsupported compression");
        assert_eq!(u16::from(compression), method);
    }

    assert!(Compression::try_from(99).is_err());
}

#[test]
fn attribute_compatibility_test() {
    assert_eq!(AttributeCompatibility::try_from(3).expect("unsupported"), AttributeCompatibility::Unix);
    assert_eq!(u16::from(AttributeCompatibility::Dos), 0);
    assert!(AttributeCompatibility::try_from(19).is_err());
}
