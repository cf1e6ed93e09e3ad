// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! MS-DOS timestamps as recorded in central directory records.
//!
//! <https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#446>
//!
//! The date word packs `yyyyyyym mmmddddd` (years since 1980) and the time word packs `hhhhhmmm mmmsssss` (seconds
//! halved). Both words are kept exactly as read so that a record written back out is byte-identical.

pub mod builder;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, LocalResult, TimeZone, Timelike, Utc};

/// A packed bit-field within one of the two DOS words.
#[derive(Clone, Copy)]
pub(crate) struct DosField {
    shift: u16,
    width: u16,
}

impl DosField {
    const fn mask(self) -> u16 {
        ((1 << self.width) - 1) << self.shift
    }

    pub(crate) fn get(self, word: u16) -> u16 {
        (word & self.mask()) >> self.shift
    }

    /// Returns `word` with this field replaced, discarding any bits of `value` wider than the field.
    pub(crate) fn set(self, word: u16, value: u32) -> u16 {
        let value = (value as u16) << self.shift;
        (word & !self.mask()) | (value & self.mask())
    }
}

pub(crate) const YEAR: DosField = DosField { shift: 9, width: 7 };
pub(crate) const MONTH: DosField = DosField { shift: 5, width: 4 };
pub(crate) const DAY: DosField = DosField { shift: 0, width: 5 };
pub(crate) const HOUR: DosField = DosField { shift: 11, width: 5 };
pub(crate) const MINUTE: DosField = DosField { shift: 5, width: 6 };
pub(crate) const HALF_SECOND: DosField = DosField { shift: 0, width: 5 };

pub(crate) const DOS_EPOCH_YEAR: i32 = 1980;

/// A date and time stored as per the MS-DOS representation used by ZIP files.
///
/// Ordering is chronological, as the date word is compared before the time word.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct ZipDateTime {
    pub(crate) date: u16,
    pub(crate) time: u16,
}

impl ZipDateTime {
    /// Constructs a date & time from the raw MS-DOS date and time words found in a central directory record.
    pub fn from_dos(date: u16, time: u16) -> Self {
        Self { date, time }
    }

    /// Returns the raw MS-DOS date word.
    pub fn dos_date(&self) -> u16 {
        self.date
    }

    /// Returns the raw MS-DOS time word.
    pub fn dos_time(&self) -> u16 {
        self.time
    }

    pub fn year(&self) -> i32 {
        DOS_EPOCH_YEAR + i32::from(YEAR.get(self.date))
    }

    pub fn month(&self) -> u32 {
        MONTH.get(self.date).into()
    }

    pub fn day(&self) -> u32 {
        DAY.get(self.date).into()
    }

    pub fn hour(&self) -> u32 {
        HOUR.get(self.time).into()
    }

    pub fn minute(&self) -> u32 {
        MINUTE.get(self.time).into()
    }

    /// Returns the second, which is always even as DOS stores seconds halved.
    pub fn second(&self) -> u32 {
        u32::from(HALF_SECOND.get(self.time)) * 2
    }

    /// Converts into a UTC [`DateTime`]. DOS timestamps carry no zone, so they are read as UTC.
    ///
    /// Yields [`LocalResult::None`] for words which don't describe a real date, such as the all-zero default.
    #[cfg(feature = "chrono")]
    pub fn as_chrono(&self) -> LocalResult<DateTime<Utc>> {
        Utc.with_ymd_and_hms(self.year(), self.month(), self.day(), self.hour(), self.minute(), self.second())
    }

    /// Converts from a UTC [`DateTime`], rounding odd seconds down.
    #[cfg(feature = "chrono")]
    pub fn from_chrono(dt: &DateTime<Utc>) -> Self {
        builder::ZipDateTimeBuilder::new()
            .year(dt.year())
            .month(dt.month())
            .day(dt.day())
            .hour(dt.hour())
            .minute(dt.minute())
            .second(dt.second())
            .build()
    }
}
