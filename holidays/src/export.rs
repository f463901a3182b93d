//! Writing the aggregate record to disk.
//!
//! Every run writes one file per requested format, all sharing a stem of
//! the form `holidays-<YYYYmmddHHMMSS>-<10 hex digits>`. A format that fails
//! to serialize or write is logged and skipped; the others are still
//! written.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use hol_calendars::AggregateRecord;
use hol_core::errors::{Error, Result};
use rand::Rng;
use serde::Deserialize;
use tracing::{error, info};

/// Prefix of every output file name.
pub const FILE_PREFIX: &str = "holidays";

/// Number of random bytes in the file stem (two hex digits each).
const SUFFIX_BYTES: usize = 5;

/// Root element of the XML rendering.
const XML_ROOT: &str = "Holidays";

/// Serialization format of an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
    /// XML with a `<Holidays>` root element.
    Xml,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Xml => "xml",
        }
    }

    /// Render `record` in this format.
    pub fn render(&self, record: &AggregateRecord) -> Result<String> {
        let serialization = |message: String| Error::Serialization {
            format: self.extension(),
            message,
        };
        match self {
            OutputFormat::Json => {
                serde_json::to_string_pretty(record).map_err(|e| serialization(e.to_string()))
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(record).map_err(|e| serialization(e.to_string()))
            }
            OutputFormat::Xml => quick_xml::se::to_string_with_root(XML_ROOT, record)
                .map_err(|e| serialization(e.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// File stem shared by all formats of one run.
pub fn file_stem<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_BYTES)
        .map(|_| format!("{:02x}", rng.gen::<u8>()))
        .collect();
    format!("{FILE_PREFIX}-{}-{suffix}", now.format("%Y%m%d%H%M%S"))
}

/// Outcome of [`export`].
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Files written successfully.
    pub written: Vec<PathBuf>,
    /// Formats that failed, with the reason.
    pub failed: Vec<(OutputFormat, Error)>,
}

impl ExportReport {
    /// `true` if every requested format was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

fn write_one(record: &AggregateRecord, format: OutputFormat, path: &Path) -> Result<()> {
    let body = format.render(record)?;
    std::fs::write(path, body)?;
    Ok(())
}

/// Write `record` into `dir` once per format, using `stem` for every file.
pub fn export_with_stem(
    record: &AggregateRecord,
    dir: &Path,
    formats: &[OutputFormat],
    stem: &str,
) -> ExportReport {
    let mut report = ExportReport::default();
    for &format in formats {
        let path = dir.join(format!("{stem}.{}", format.extension()));
        match write_one(record, format, &path) {
            Ok(()) => {
                info!(path = %path.display(), %format, "holidays written");
                report.written.push(path);
            }
            Err(e) => {
                error!(path = %path.display(), %format, error = %e, "failed to write holidays");
                report.failed.push((format, e));
            }
        }
    }
    report
}

/// Write `record` into `dir` under a fresh timestamped, randomized stem.
pub fn export(record: &AggregateRecord, dir: &Path, formats: &[OutputFormat]) -> ExportReport {
    let stem = file_stem(Utc::now(), &mut rand::thread_rng());
    export_with_stem(record, dir, formats, &stem)
}
