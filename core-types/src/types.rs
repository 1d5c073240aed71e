// Copyright (c) James Kassemi, SC, US. All rights reserved.

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

/// How the engine should fetch a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TransportKind {
    LocalFile,
}

/// Shape of the fetched resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FileFormat {
    /// One record per line, comma separated, no header.
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Resolution {
    Daily,
}

/// Timezone a record stream's timestamps are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DataTimeZone {
    Utc,
}

impl DataTimeZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataTimeZone::Utc => "UTC",
        }
    }
}

impl fmt::Display for DataTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved backing resource for a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub path: PathBuf,
    pub transport: TransportKind,
    pub format: FileFormat,
}

impl SourceLocation {
    pub fn new(path: impl Into<PathBuf>, transport: TransportKind, format: FileFormat) -> Self {
        Self {
            path: path.into(),
            transport,
            format,
        }
    }

    pub fn local_csv(path: impl Into<PathBuf>) -> Self {
        Self::new(path, TransportKind::LocalFile, FileFormat::Csv)
    }
}
