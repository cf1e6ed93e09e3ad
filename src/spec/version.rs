// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::attribute::AttributeCompatibility;
use crate::spec::compression::Compression;

/// The ZIP format version this crate writes records against (2.0).
pub(crate) const SPEC_VERSION_MADE_BY: u16 = 20;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
pub(crate) fn as_needed_to_extract(compression: Compression, filename: &[u8]) -> u16 {
    let mut version = match compression {
        Compression::Deflate => 20,
        Compression::Deflate64 => 21,
        Compression::Bz => 46,
        Compression::Lzma => 63,
        _ => 10,
    };

    if filename.ends_with(b"/") {
        version = std::cmp::max(version, 20);
    }

    version
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4422
pub(crate) fn as_made_by(compatibility: AttributeCompatibility) -> u16 {
    u16::from(compatibility) << 8 | SPEC_VERSION_MADE_BY
}
