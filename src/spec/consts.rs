// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub const SIGNATURE_LENGTH: usize = 4;

// Central directory header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

/// The length of an end of central directory record with an empty comment, signature included.
pub const STATIC_EOCDR_SIZE: usize = SIGNATURE_LENGTH + EOCDR_LENGTH;

/// The length of an end of central directory record carrying the longest possible comment, signature included.
pub const MAX_EOCDR_SIZE: usize = STATIC_EOCDR_SIZE + u16::MAX as usize;
