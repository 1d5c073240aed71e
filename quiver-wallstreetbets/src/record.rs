// Copyright (c) James Kassemi, SC, US. All rights reserved.

use std::{fmt, path::PathBuf, str::FromStr};

use chrono::{Days, NaiveDate};
use core_types::{AltData, DataConfig, DataTimeZone, Resolution, SourceLocation};
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::ParseFailure;

const SOURCE_DIRS: [&str; 3] = ["alternative", "quiver", "wallstreetbets"];
const FIELD_COUNT: usize = 4;
const DATE_WIDTH: usize = 8;
const PERIOD: Days = Days::new(1);
const RESOLUTIONS: &[Resolution] = &[Resolution::Daily];

/// One day of WallStreetBets activity for a ticker.
///
/// Built only through [`AltData::parse`]; `end_time` is always one day after
/// `effective_time`, which is always `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyMentionRecord {
    symbol: String,
    date: NaiveDate,
    mentions: i64,
    rank: i64,
    sentiment: Decimal,
    effective_time: NaiveDate,
    end_time: NaiveDate,
}

impl DailyMentionRecord {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn mentions(&self) -> i64 {
        self.mentions
    }

    pub fn rank(&self) -> i64 {
        self.rank
    }

    /// Mean comment sentiment, nominally in [-1, 1]. Not range checked.
    pub fn sentiment(&self) -> Decimal {
        self.sentiment
    }

    /// Rebind the record to the engine's resolved symbol.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    fn from_fields(line: &str, symbol: &str) -> Result<Self, ParseFailure> {
        // Only the line terminator is stripped; fields must match exactly, so
        // padded values such as " 20210128" are rejected.
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(',').collect();
        if fields.len() < FIELD_COUNT {
            return Err(ParseFailure::MissingField {
                found: fields.len(),
            });
        }

        let date = parse_date(fields[0])?;
        let mentions = parse_int(fields[1], "mentions")?;
        let rank = parse_int(fields[2], "rank")?;
        let sentiment = parse_sentiment(fields[3])?;
        let end_time = date
            .checked_add_days(PERIOD)
            .ok_or_else(|| ParseFailure::MalformedDate {
                value: fields[0].to_string(),
            })?;

        Ok(Self {
            symbol: symbol.to_string(),
            date,
            mentions,
            rank,
            sentiment,
            effective_time: date,
            end_time,
        })
    }
}

impl AltData for DailyMentionRecord {
    type Error = ParseFailure;

    /// Every row for a ticker lives in one flat file, so neither `date` nor
    /// `live_mode` changes the path.
    fn locate(
        config: &DataConfig,
        symbol: &str,
        _date: NaiveDate,
        _live_mode: bool,
    ) -> SourceLocation {
        let mut path: PathBuf = config.data_folder().to_path_buf();
        path.extend(SOURCE_DIRS);
        path.push(format!("{}.csv", symbol.to_lowercase()));
        debug!("wallstreetbets source for {}: {}", symbol, path.display());
        SourceLocation::local_csv(path)
    }

    fn parse(line: &str, symbol: &str) -> Result<Self, ParseFailure> {
        Self::from_fields(line, symbol).inspect_err(|err| {
            debug!("rejected wallstreetbets line for {}: {} ({:?})", symbol, err, line);
        })
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn effective_time(&self) -> NaiveDate {
        self.effective_time
    }

    fn end_time(&self) -> NaiveDate {
        self.end_time
    }

    fn requires_symbol_mapping() -> bool {
        true
    }

    fn data_timezone() -> DataTimeZone {
        DataTimeZone::Utc
    }

    fn is_sparse_data() -> bool {
        true
    }

    fn default_resolution() -> Resolution {
        Resolution::Daily
    }

    fn supported_resolutions() -> &'static [Resolution] {
        RESOLUTIONS
    }
}

impl fmt::Display for DailyMentionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) :: WallStreetBets Mentions: {} WallStreetBets Rank: {} WallStreetBets Sentiment: {}",
            self.symbol, self.date, self.mentions, self.rank, self.sentiment
        )
    }
}

/// Strict `yyyyMMdd`: exactly eight ASCII digits naming a real day.
fn parse_date(value: &str) -> Result<NaiveDate, ParseFailure> {
    let malformed = || ParseFailure::MalformedDate {
        value: value.to_string(),
    };
    if value.len() != DATE_WIDTH || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let year = value[..4].parse::<i32>().map_err(|_| malformed())?;
    let month = value[4..6].parse::<u32>().map_err(|_| malformed())?;
    let day = value[6..8].parse::<u32>().map_err(|_| malformed())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

fn parse_int(value: &str, field: &'static str) -> Result<i64, ParseFailure> {
    value.parse::<i64>().map_err(|_| ParseFailure::MalformedNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_sentiment(value: &str) -> Result<Decimal, ParseFailure> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| ParseFailure::MalformedNumber {
            field: "sentiment",
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_compact_form() {
        assert_eq!(
            parse_date("20210128").unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 28).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_other_layouts() {
        for value in ["2021-01-28", "2021128", "202101280", "2021O128", "", "20210230", "20211301"] {
            assert!(
                matches!(parse_date(value), Err(ParseFailure::MalformedDate { .. })),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn parse_sentiment_accepts_exponent_notation() {
        assert_eq!(parse_sentiment("1.5E-2").unwrap(), Decimal::new(15, 3));
        assert_eq!(parse_sentiment("-0.875").unwrap(), Decimal::new(-875, 3));
    }

    #[test]
    fn parse_int_names_the_field() {
        let err = parse_int("ten", "rank").unwrap_err();
        assert_eq!(
            err,
            ParseFailure::MalformedNumber {
                field: "rank",
                value: "ten".to_string()
            }
        );
    }

    #[test]
    fn end_time_rolls_over_year_end() {
        let record = DailyMentionRecord::from_fields("20211231,1,1,0", "GME").unwrap();
        assert_eq!(record.effective_time, NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());
        assert_eq!(record.end_time, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
    }

    #[test]
    fn line_ending_stripped_and_extras_ignored() {
        let record = DailyMentionRecord::from_fields("20210128,7,3,0.25,extra\r\n", "AMC").unwrap();
        assert_eq!(record.mentions, 7);
        assert_eq!(record.rank, 3);
        assert_eq!(record.sentiment, Decimal::new(25, 2));
    }

    #[test]
    fn padded_fields_are_rejected() {
        assert!(matches!(
            DailyMentionRecord::from_fields(" 20210128 ,7,3,0.25", "AMC"),
            Err(ParseFailure::MalformedDate { .. })
        ));
        assert!(matches!(
            DailyMentionRecord::from_fields("20210128, 7,3,0.25", "AMC"),
            Err(ParseFailure::MalformedNumber { field: "mentions", .. })
        ));
    }
}
