// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

use std::io::{Read, Write};

/// Read and return a dynamic length vector of bytes from a reader which impls Read.
///
/// Fails with an [`std::io::ErrorKind::UnexpectedEof`] error if fewer than `length` bytes are available.
pub(crate) fn read_bytes<R: Read>(reader: &mut R, length: usize) -> Result<Vec<u8>> {
    let mut buffer = vec![0; length];
    reader.read_exact(&mut buffer)?;

    Ok(buffer)
}

pub(crate) fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut buffer = [0; 4];
    reader.read_exact(&mut buffer)?;

    Ok(u32::from_le_bytes(buffer))
}

pub(crate) fn write_u32<W: Write>(writer: &mut W, value: u32) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Assert that the next four-byte signature read by a reader which impls Read matches the expected signature.
pub(crate) fn assert_signature<R: Read>(reader: &mut R, expected: u32) -> Result<()> {
    match read_u32(reader)? {
        actual if actual == expected => Ok(()),
        actual => Err(ZipError::UnexpectedHeaderError(actual, expected)),
    }
}

/// Converts a variable-length field's length into the u16 stored on the wire.
pub(crate) fn field_length(field: &'static str, length: usize) -> Result<u16> {
    u16::try_from(length).map_err(|_| ZipError::FieldTooLong(field, length))
}
