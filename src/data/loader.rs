use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::columns::{ColumnMap, Field};
use super::model::{LoadReport, PriceRow, PriceTable, RowError, SkippedFile};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The price-list directory itself could not be read.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A single file that is rejected as a whole.
#[derive(Debug, thiserror::Error)]
pub enum MalformedFileError {
    #[error("cannot read file: {0}")]
    Read(#[source] csv::Error),

    #[error("cannot parse CSV: {0}")]
    Parse(#[source] csv::Error),

    #[error("no {0} column")]
    MissingColumn(Field),
}

impl From<csv::Error> for MalformedFileError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            MalformedFileError::Read(err)
        } else {
            MalformedFileError::Parse(err)
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Build the combined table from every price list in `dir`.
///
/// Files that cannot be parsed or lack a required column are skipped and
/// listed in the report; rows with unusable numbers are dropped and counted.
pub fn load_directory(dir: &Path) -> Result<(PriceTable, LoadReport), LoadError> {
    let files = discover_files(dir)?;

    let mut rows = Vec::new();
    let mut report = LoadReport::default();

    for path in files {
        let file_name = base_name(&path);
        match load_csv(&path, &file_name) {
            Ok(parsed) => {
                info!(
                    "{file_name}: {} rows loaded, {} rows skipped",
                    parsed.rows.len(),
                    parsed.skipped
                );
                rows.extend(parsed.rows);
                report.rows_skipped += parsed.skipped;
                report.files_loaded.push(file_name);
            }
            Err(err) => {
                warn!("{file_name}: skipped, {err}");
                report.files_skipped.push(SkippedFile {
                    file: file_name,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok((PriceTable::from_rows(rows), report))
}

/// List candidate price lists in `dir` (non-recursive), sorted by file name.
///
/// A candidate is a regular file whose name contains `price` and whose
/// extension is `csv` in any letter case.
pub fn discover_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let dir_err = |source| LoadError::Directory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(dir_err)? {
        let path = entry.map_err(dir_err)?.path();
        if path.is_file() && is_price_list(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_price_list(path: &Path) -> bool {
    let name_ok = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.contains("price"));
    let ext_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    name_ok && ext_ok
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Rows parsed from one file, not yet merged into the table.
#[derive(Debug, Default)]
pub struct ParsedFile {
    pub rows: Vec<PriceRow>,
    pub skipped: usize,
}

/// Parse one comma-separated UTF-8 file with a header row.
///
/// The whole file is read before anything is returned, so a syntax error on
/// the last line still rejects every row. Records may be shorter or longer
/// than the header; a missing cell makes only that row unusable.
pub fn load_csv(path: &Path, source_file: &str) -> Result<ParsedFile, MalformedFileError> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    parse_rows(reader, source_file)
}

fn parse_rows<R: io::Read>(
    mut reader: csv::Reader<R>,
    source_file: &str,
) -> Result<ParsedFile, MalformedFileError> {
    let columns =
        ColumnMap::resolve(reader.headers()?.iter()).map_err(MalformedFileError::MissingColumn)?;

    let mut parsed = ParsedFile::default();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        match build_row(
            cell(columns.name),
            cell(columns.price),
            cell(columns.weight),
            source_file,
        ) {
            Ok(row) => parsed.rows.push(row),
            Err(err) => {
                debug!("{source_file} row {row_no}: {err}");
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

fn build_row(name: &str, price: &str, weight: &str, source_file: &str) -> Result<PriceRow, RowError> {
    let price = parse_number("price", price)?;
    let weight = parse_number("weight", weight)?;
    PriceRow::new(name.trim(), price, weight, source_file)
}

/// Parse a decimal cell; a decimal comma is accepted in place of a point.
fn parse_number(field: &'static str, raw: &str) -> Result<f64, RowError> {
    let invalid = || RowError::InvalidNumber {
        field,
        value: raw.to_string(),
    };

    let v: f64 = raw.trim().replace(',', ".").parse().map_err(|_| invalid())?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(invalid())
    }
}
