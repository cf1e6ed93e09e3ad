// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// A compression method recognised by this crate, with its method code as the discriminant.
///
/// Entry payloads are never compressed or decompressed here; the method is only recorded in and read back from each
/// central directory record.
///
/// <https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#445>
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    Stored = 0,
    Deflate = 8,
    Deflate64 = 9,
    Bz = 12,
    Lzma = 14,
    Zstd = 93,
    Xz = 95,
}

impl Compression {
    const ALL: [Compression; 7] = [
        Compression::Stored,
        Compression::Deflate,
        Compression::Deflate64,
        Compression::Bz,
        Compression::Lzma,
        Compression::Zstd,
        Compression::Xz,
    ];
}

impl TryFrom<u16> for Compression {
    type Error = ZipError;

    fn try_from(code: u16) -> Result<Self> {
        Compression::ALL
            .into_iter()
            .find(|method| u16::from(*method) == code)
            .ok_or(ZipError::CompressionNotSupported(code))
    }
}

impl From<Compression> for u16 {
    fn from(compression: Compression) -> u16 {
        compression as u16
    }
}
