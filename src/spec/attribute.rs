// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// The host system whose conventions an entry's external file attribute follows.
///
/// Stored in the upper byte of "version made by".
/// <https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4422>
#[non_exhaustive]
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCompatibility {
    Dos = 0,
    Unix = 3,
}

impl TryFrom<u16> for AttributeCompatibility {
    type Error = ZipError;

    fn try_from(host: u16) -> Result<Self> {
        match host {
            host if host == AttributeCompatibility::Dos as u16 => Ok(AttributeCompatibility::Dos),
            host if host == AttributeCompatibility::Unix as u16 => Ok(AttributeCompatibility::Unix),
            _ => Err(ZipError::AttributeCompatibilityNotSupported(host)),
        }
    }
}

impl From<AttributeCompatibility> for u16 {
    fn from(compatibility: AttributeCompatibility) -> u16 {
        compatibility as u16
    }
}
