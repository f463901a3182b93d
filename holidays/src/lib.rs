//! # holidays
//!
//! Observed public and bank holiday dates for the US (federal and NYSE),
//! Germany, the ECB Target2 system, the Netherlands, the United Kingdom,
//! Australia and Japan.
//!
//! This crate is a **façade** over the workspace crates, plus the pieces
//! needed to run as a program: file export and run configuration.
//!
//! ## Quick start
//!
//! ```rust
//! use holidays::{compute_aggregate, HolidaySet, Jurisdiction};
//!
//! let record = compute_aggregate(2026).unwrap();
//! let us = record.get(Jurisdiction::UsFederal);
//! assert_eq!(us.observed("IndependenceDay").unwrap().to_string(), "2026-07-06");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and run settings.
pub use hol_core as core;

/// Dates and the shared holiday rules.
pub use hol_time as time;

/// Jurisdiction engines, aggregate record and orchestrator.
pub use hol_calendars as calendars;

/// Writing the aggregate record to disk.
pub mod export;

/// Configuration of the `holidays` binary.
pub mod settings;

pub use hol_calendars::{
    compute_aggregate, AggregateRecord, Holiday, HolidaySet, Jurisdiction, Orchestrator, Region,
};
pub use hol_core::{Error, Result, Settings};
pub use hol_time::Date;

pub use export::{export, ExportReport, OutputFormat};
pub use settings::ExportSettings;
