// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::date::{ZipDateTime, DAY, DOS_EPOCH_YEAR, HALF_SECOND, HOUR, MINUTE, MONTH, YEAR};

/// A builder for [`ZipDateTime`].
///
/// Each component is masked to the width MS-DOS allots it, so out-of-range values wrap rather than spill into the
/// neighbouring component. Setting a component twice keeps the last value.
#[derive(Debug, Default)]
pub struct ZipDateTimeBuilder(ZipDateTime);

impl From<ZipDateTime> for ZipDateTimeBuilder {
    fn from(date: ZipDateTime) -> Self {
        Self(date)
    }
}

impl From<ZipDateTimeBuilder> for ZipDateTime {
    fn from(builder: ZipDateTimeBuilder) -> Self {
        builder.0
    }
}

impl ZipDateTimeBuilder {
    /// Constructs a new builder with both DOS words zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the year. Years before 1980 can't be represented and wrap.
    pub fn year(mut self, year: i32) -> Self {
        self.0.date = YEAR.set(self.0.date, (year - DOS_EPOCH_YEAR) as u32);
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.0.date = MONTH.set(self.0.date, month);
        self
    }

    pub fn day(mut self, day: u32) -> Self {
        self.0.date = DAY.set(self.0.date, day);
        self
    }

    pub fn hour(mut self, hour: u32) -> Self {
        self.0.time = HOUR.set(self.0.time, hour);
        self
    }

    pub fn minute(mut self, minute: u32) -> Self {
        self.0.time = MINUTE.set(self.0.time, minute);
        self
    }

    /// Sets the second. DOS stores seconds halved, so an odd second is rounded down.
    pub fn second(mut self, second: u32) -> Self {
        self.0.time = HALF_SECOND.set(self.0.time, second / 2);
        self
    }

    /// Consumes this builder and returns a final [`ZipDateTime`].
    ///
    /// ```
    /// # use zip_cd::ZipDateTimeBuilder;
    /// let date = ZipDateTimeBuilder::new().year(2024).month(3).day(2).build();
    /// assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 2));
    /// ```
    pub fn build(self) -> ZipDateTime {
        self.0
    }
}
