use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::data::model::{PriceRow, COLUMN_LABELS};

// ---------------------------------------------------------------------------
// Search results → console grid
// ---------------------------------------------------------------------------

/// Header of the row-index column.
pub const INDEX_LABEL: &str = "#";

/// Pack search results into a record batch: a 1-based index column followed
/// by the five canonical columns.
pub fn results_batch(rows: &[PriceRow]) -> Result<RecordBatch, ArrowError> {
    let [name, price, weight, file, per_unit] = COLUMN_LABELS;

    let schema = Arc::new(Schema::new(vec![
        Field::new(INDEX_LABEL, DataType::UInt64, false),
        Field::new(name, DataType::Utf8, false),
        Field::new(price, DataType::Float64, false),
        Field::new(weight, DataType::Float64, false),
        Field::new(file, DataType::Utf8, false),
        Field::new(per_unit, DataType::Float64, false),
    ]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(UInt64Array::from_iter_values(1..=rows.len() as u64)),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.name()))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.price()))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.weight()))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.source_file()))),
        Arc::new(Float64Array::from_iter_values(
            rows.iter().map(|r| r.price_per_unit()),
        )),
    ];

    RecordBatch::try_new(schema, columns)
}

/// Render search results as a bordered grid with a header row.
pub fn format_results(rows: &[PriceRow]) -> Result<String, ArrowError> {
    let batch = results_batch(rows)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}
