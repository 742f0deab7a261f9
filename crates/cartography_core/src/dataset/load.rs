//! JSON decoding of case documents.
//!
//! # Responsibility
//! - Read dataset files and decode them into `CaseRecord`s.
//! - Emit `dataset_load` logging events with duration and record count.

use super::{DatasetError, DatasetResult};
use crate::model::case::CaseRecord;
use log::{error, info};
use std::path::Path;
use std::time::Instant;

/// Decodes a JSON array of cases.
pub fn parse_cases(json: &str) -> DatasetResult<Vec<CaseRecord>> {
    let started_at = Instant::now();
    info!("event=dataset_load module=dataset status=start mode=memory");

    match serde_json::from_str::<Vec<CaseRecord>>(json) {
        Ok(records) => {
            info!(
                "event=dataset_load module=dataset status=ok mode=memory duration_ms={} records={}",
                started_at.elapsed().as_millis(),
                records.len()
            );
            Ok(records)
        }
        Err(err) => {
            error!(
                "event=dataset_load module=dataset status=error mode=memory duration_ms={} error_code=dataset_parse_failed line={} column={}",
                started_at.elapsed().as_millis(),
                err.line(),
                err.column()
            );
            Err(err.into())
        }
    }
}

/// Reads and decodes a dataset file.
///
/// # Side effects
/// - Reads the whole file into memory.
/// - Emits `dataset_load` logging events with duration and status.
pub fn load_cases(path: impl AsRef<Path>) -> DatasetResult<Vec<CaseRecord>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=dataset_load module=dataset status=start mode=file");

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            error!(
                "event=dataset_load module=dataset status=error mode=file duration_ms={} error_code=dataset_read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(DatasetError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    let records = parse_cases(&json)?;
    info!(
        "event=dataset_load module=dataset status=ok mode=file duration_ms={} records={}",
        started_at.elapsed().as_millis(),
        records.len()
    );
    Ok(records)
}
