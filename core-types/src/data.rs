// Copyright (c) James Kassemi, SC, US. All rights reserved.

//! Capability interface the time-series engine drives record types through.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    config::DataConfig,
    types::{DataTimeZone, Resolution, SourceLocation},
};

/// A record type that can be located on disk, parsed one line at a time,
/// and aligned against other streams.
///
/// The engine only sees this trait; it owns file access, subscriptions and
/// symbol-mapping resolution.
pub trait AltData: Clone + Sized {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolve the backing resource for `symbol` as of `date`.
    fn locate(
        config: &DataConfig,
        symbol: &str,
        date: NaiveDate,
        live_mode: bool,
    ) -> SourceLocation;

    /// Build a record from one raw line of the located resource.
    fn parse(line: &str, symbol: &str) -> Result<Self, Self::Error>;

    fn symbol(&self) -> &str;

    /// Start of the observation window.
    fn effective_time(&self) -> NaiveDate;

    /// When the record becomes visible downstream.
    fn end_time(&self) -> NaiveDate;

    /// Whether the requested ticker must go through historical ticker mapping
    /// before the resource is located.
    fn requires_symbol_mapping() -> bool;

    fn data_timezone() -> DataTimeZone;

    /// Sparse streams have rows only on days with activity; gaps are not
    /// missing data.
    fn is_sparse_data() -> bool {
        false
    }

    fn default_resolution() -> Resolution;

    fn supported_resolutions() -> &'static [Resolution];

    fn effective_instant(&self) -> DateTime<Utc> {
        midnight_utc(self.effective_time())
    }

    fn end_instant(&self) -> DateTime<Utc> {
        midnight_utc(self.end_time())
    }
}

/// Midnight UTC of `date`.
fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::midnight_utc;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn midnight_utc_keeps_calendar_day() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 28).expect("valid date");
        let ts = midnight_utc(date);
        assert_eq!(ts.date_naive(), date);
        assert_eq!(ts.hour(), 0);
        assert_eq!(ts.timestamp(), 1_611_792_000);
    }
}
