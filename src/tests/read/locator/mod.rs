// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::cd::locator::{eocdr, reverse_search_buffer};
use crate::error::ZipError;
use crate::tests::raw_eocdr;
use crate::{EOCDR_SIGNATURE, MAX_EOCDR_SIZE};

use std::io::Cursor;

#[test]
fn search_one_byte_test() {
    let buffer: &[u8] = &[0x0, 0x0, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x1];

    let matched = reverse_search_buffer(buffer, signature);
    assert!(matched.is_none());

    let buffer: &[u8] = &[0x2, 0x1, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x1];

    let matched = reverse_search_buffer(buffer, signature);
    assert_eq!(Some(1), matched);
}

#[test]
fn search_two_byte_test() {
    let buffer: &[u8] = &[0x2, 0x1, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x2, 0x1];

    let matched = reverse_search_buffer(buffer, signature);
    assert_eq!(Some(1), matched);
}

#[test]
fn search_rightmost_match_test() {
    let buffer: &[u8] = &[0x2, 0x1, 0x0, 0x2, 0x1, 0x0];
    let signature: &[u8] = &[0x2, 0x1];

    let matched = reverse_search_buffer(buffer, signature);
    assert_eq!(Some(4), matched);
}

#[test]
fn search_buffer_shorter_than_signature_test() {
    let buffer: &[u8] = &[0x50, 0x4b, 0x05];
    let matched = reverse_search_buffer(buffer, &EOCDR_SIGNATURE.to_le_bytes());
    assert!(matched.is_none());
}

#[test]
fn locator_empty_test() {
    let data = raw_eocdr(0, 0, 0, 0, &[]);
    let located = eocdr(&mut Cursor::new(&data)).expect("failed to locate eocdr");

    assert_eq!(located.offset, 4);
    assert_eq!(located.stream_length, 22);
    assert_eq!(located.buffer, &data[4..]);
}

#[test]
fn locator_empty_max_comment_test() {
    let comment = vec![b'a'; u16::MAX as usize];
    let data = raw_eocdr(0, 0, 0, u16::MAX, &comment);
    assert_eq!(data.len(), MAX_EOCDR_SIZE);

    let located = eocdr(&mut Cursor::new(&data)).expect("failed to locate eocdr");

    assert_eq!(located.offset, 4);
    assert_eq!(located.buffer.len(), 18 + u16::MAX as usize);
}

#[test]
fn locator_max_comment_after_leading_data_test() {
    assert_eq!(MAX_EOCDR_SIZE, 4 + 18 + 65535);

    let comment = vec![b'a'; u16::MAX as usize];
    let mut data = vec![0xAA; 4096];
    data.extend(raw_eocdr(0, 0, 0, u16::MAX, &comment));

    let located = eocdr(&mut Cursor::new(&data)).expect("failed to locate eocdr");

    assert_eq!(located.offset, 4096 + 4);
    assert_eq!(located.buffer.len(), 18 + u16::MAX as usize);
}

#[test]
fn locator_leading_data_test() {
    let mut data = vec![0xAA; 100_000];
    data.extend(raw_eocdr(0, 0, 0, 0, &[]));

    let located = eocdr(&mut Cursor::new(&data)).expect("failed to locate eocdr");

    assert_eq!(located.offset, 100_004);
    assert_eq!(located.buffer.len(), 18);
}

#[test]
fn locator_ignores_earlier_signature_test() {
    let mut data = Vec::new();
    data.extend_from_slice(b"stale trailer: ");
    data.extend(raw_eocdr(7, 0, 0, 0, &[]));
    data.extend_from_slice(b"entry data");
    let trailer_start = data.len() as u64;
    data.extend(raw_eocdr(0, 0, 0, 5, b"hello"));

    let located = eocdr(&mut Cursor::new(&data)).expect("failed to locate eocdr");

    assert_eq!(located.offset, trailer_start + 4);
    assert_eq!(located.buffer.len(), 18 + 5);
}

#[test]
fn locator_zero_length_test() {
    let result = eocdr(&mut Cursor::new(Vec::<u8>::new()));
    assert!(matches!(result, Err(ZipError::UnableToLocateEOCDR)));
}

#[test]
fn locator_shorter_than_signature_test() {
    let result = eocdr(&mut Cursor::new(vec![0x50, 0x4b, 0x05]));
    assert!(matches!(result, Err(ZipError::UnableToLocateEOCDR)));
}

#[test]
fn locator_no_signature_test() {
    let result = eocdr(&mut Cursor::new(vec![0x50; 70_000]));
    assert!(matches!(result, Err(ZipError::UnableToLocateEOCDR)));
}

#[test]
fn locator_signature_outside_window_test() {
    let mut data = EOCDR_SIGNATURE.to_le_bytes().to_vec();
    data.extend(vec![0x0; MAX_EOCDR_SIZE - 3]);

    // The signature starts one byte before the trailing window.
    assert_eq!(data.len(), MAX_EOCDR_SIZE + 1);

    let result = eocdr(&mut Cursor::new(&data));
    assert!(matches!(result, Err(ZipError::UnableToLocateEOCDR)));
}
