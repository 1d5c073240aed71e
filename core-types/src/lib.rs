// Copyright (c) James Kassemi, SC, US. All rights reserved.

//! Shared source descriptors, configuration, and the record capability trait
//! consumed by the time-series engine.

pub mod config;
pub mod data;
pub mod types;

pub use config::{ConfigError, DataConfig};
pub use data::AltData;
pub use types::{DataTimeZone, FileFormat, Resolution, SourceLocation, TransportKind};
