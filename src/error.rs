// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("feature not supported: '{0}'")]
    FeatureNotSupported(&'static str),
    #[error("compression not supported: {0}")]
    CompressionNotSupported(u16),
    #[error("host attribute compatibility not supported: {0}")]
    AttributeCompatibilityNotSupported(u16),

    #[error("end of central directory signature not found")]
    UnableToLocateEOCDR,
    #[error("inconsistent end of central directory structure")]
    InconsistentEOCDR,
    #[error("inconsistent central directory offset: {0}")]
    InconsistentCentralDirectoryOffset(u32),
    #[error("Encountered an unexpected header (actual: {0:#x}, expected: {1:#x}).")]
    UnexpectedHeaderError(u32, u32),

    #[error("zip file comment is {0} bytes long, but at most 65535 bytes are supported")]
    CommentTooLong(usize),
    #[error("{0} is {1} bytes long, but at most 65535 bytes are supported")]
    FieldTooLong(&'static str, usize),

    #[error("an upstream reader returned an error: {0}")]
    UpstreamReadError(#[from] std::io::Error),
}

impl ZipError {
    /// Returns whether this error describes malformed archive data rather than a failing upstream reader or invalid
    /// construction input.
    ///
    /// A truncated record (the upstream reader hitting EOF part-way through a structure) counts as malformed data.
    pub fn is_format_error(&self) -> bool {
        match self {
            ZipError::UnableToLocateEOCDR
            | ZipError::InconsistentEOCDR
            | ZipError::InconsistentCentralDirectoryOffset(_)
            | ZipError::UnexpectedHeaderError(_, _) => true,
            ZipError::UpstreamReadError(err) => err.kind() == std::io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}
