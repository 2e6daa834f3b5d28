use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Observation, ObservationTable, Status};

/// Columns every source must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = ["crop_name", "status", "region", "disease_name"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a table could not be loaded. Fatal for the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataLoadError {
    #[error("data file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("malformed data: {reason}")]
    Malformed { reason: String },
}

impl DataLoadError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        DataLoadError::Malformed {
            reason: reason.into(),
        }
    }

    fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => DataLoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => DataLoadError::malformed(format!("reading {}: {err}", path.display())),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an observation table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row containing the required columns; extra columns are ignored
/// * `.json`    – `[{ "crop_name": ..., "status": ..., "region": ..., "disease_name": ... }, ...]`
/// * `.parquet` – Utf8 columns named after the required columns
pub fn load_file(path: &Path) -> Result<ObservationTable, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let rows = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => {
            return Err(DataLoadError::malformed(format!(
                "unsupported file extension: .{other}"
            )))
        }
    };

    Ok(ObservationTable::from_observations(rows))
}

// ---------------------------------------------------------------------------
// Row validation shared by every format
// ---------------------------------------------------------------------------

/// One record as it appears in CSV/JSON sources, before validation.
#[derive(Debug, Deserialize)]
struct RawObservation {
    crop_name: Option<String>,
    status: Option<String>,
    region: Option<String>,
    disease_name: Option<String>,
}

impl RawObservation {
    fn validate(self, row: usize) -> Result<Observation, DataLoadError> {
        let crop_name = required(self.crop_name, row, "crop_name")?;
        let status = required(self.status, row, "status")?;
        let region = required(self.region, row, "region")?;
        let disease_name = required(self.disease_name, row, "disease_name")?;
        Ok(Observation::new(
            crop_name,
            Status::parse(&status),
            region,
            disease_name,
        ))
    }
}

/// Blank cells are rejected; anything else is kept exactly as written.
fn required(value: Option<String>, row: usize, column: &str) -> Result<String, DataLoadError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DataLoadError::malformed(format!(
            "row {row}: missing value for '{column}'"
        ))),
    }
}

fn check_columns<'a>(present: impl IntoIterator<Item = &'a str>) -> Result<(), DataLoadError> {
    let present: Vec<&str> = present.into_iter().collect();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !present.contains(col))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DataLoadError::malformed(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<Observation>, DataLoadError> {
    let file = File::open(path).map_err(|e| DataLoadError::from_io(path, e))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| DataLoadError::malformed(format!("reading CSV headers: {e}")))?
        .clone();
    check_columns(headers.iter())?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<RawObservation>().enumerate() {
        let raw = result.map_err(|e| DataLoadError::malformed(format!("CSV row {row_no}: {e}")))?;
        rows.push(raw.validate(row_no)?);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `to_json(orient='records')` layout.
fn load_json(path: &Path) -> Result<Vec<Observation>, DataLoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| DataLoadError::from_io(path, e))?;
    let records: Vec<RawObservation> = serde_json::from_str(&text)
        .map_err(|e| DataLoadError::malformed(format!("parsing JSON: {e}")))?;

    records
        .into_iter()
        .enumerate()
        .map(|(row_no, raw)| raw.validate(row_no))
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

fn load_parquet(path: &Path) -> Result<Vec<Observation>, DataLoadError> {
    let file = File::open(path).map_err(|e| DataLoadError::from_io(path, e))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| DataLoadError::malformed(format!("reading parquet metadata: {e}")))?;
    check_columns(
        builder
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().as_str()),
    )?;
    let reader = builder
        .build()
        .map_err(|e| DataLoadError::malformed(format!("building parquet reader: {e}")))?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result
            .map_err(|e| DataLoadError::malformed(format!("reading parquet record batch: {e}")))?;
        let schema = batch.schema();

        let mut columns: Vec<ArrayRef> = Vec::with_capacity(REQUIRED_COLUMNS.len());
        for name in REQUIRED_COLUMNS {
            let idx = schema
                .index_of(name)
                .map_err(|_| DataLoadError::malformed(format!("parquet file missing '{name}' column")))?;
            columns.push(decode_dictionary(batch.column(idx), name)?);
        }

        for row in 0..batch.num_rows() {
            let row_no = rows.len();
            let raw = RawObservation {
                crop_name: string_cell(&columns[0], row, REQUIRED_COLUMNS[0])?,
                status: string_cell(&columns[1], row, REQUIRED_COLUMNS[1])?,
                region: string_cell(&columns[2], row, REQUIRED_COLUMNS[2])?,
                disease_name: string_cell(&columns[3], row, REQUIRED_COLUMNS[3])?,
            };
            rows.push(raw.validate(row_no)?);
        }
    }

    Ok(rows)
}

/// Categorical columns arrive dictionary-encoded; flatten them to plain Utf8.
fn decode_dictionary(col: &ArrayRef, name: &str) -> Result<ArrayRef, DataLoadError> {
    match col.data_type() {
        DataType::Dictionary(_, value)
            if matches!(value.as_ref(), DataType::Utf8 | DataType::LargeUtf8) =>
        {
            cast(col, &DataType::Utf8).map_err(|e| {
                DataLoadError::malformed(format!("decoding dictionary column '{name}': {e}"))
            })
        }
        _ => Ok(col.clone()),
    }
}

/// Read one string cell; nulls come back as `None` and are rejected later.
fn string_cell(col: &ArrayRef, row: usize, name: &str) -> Result<Option<String>, DataLoadError> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Utf8 => col.as_string::<i32>().value(row).to_string(),
        DataType::LargeUtf8 => col.as_string::<i64>().value(row).to_string(),
        other => {
            return Err(DataLoadError::malformed(format!(
                "column '{name}' has type {other:?}, expected Utf8"
            )))
        }
    };
    Ok(Some(value))
}
