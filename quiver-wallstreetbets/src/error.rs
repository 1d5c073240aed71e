// Copyright (c) James Kassemi, SC, US. All rights reserved.

use thiserror::Error;

/// Reasons a line cannot become a [`crate::DailyMentionRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("expected 4 fields, found {found}")]
    MissingField { found: usize },
    #[error("malformed date '{value}' (expected yyyyMMdd)")]
    MalformedDate { value: String },
    #[error("malformed {field} '{value}'")]
    MalformedNumber { field: &'static str, value: String },
}
