// Copyright (c) James Kassemi, SC, US. All rights reserved.

//! Daily WallStreetBets mention statistics per equity ticker, as published by
//! Quiver Quantitative.

pub mod error;
pub mod record;

pub use core_types::AltData;
pub use error::ParseFailure;
pub use record::DailyMentionRecord;
