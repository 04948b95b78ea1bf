// ---------------------------------------------------------------------------
// RowError – why a source row could not become a PriceRow
// ---------------------------------------------------------------------------

/// A single source row that cannot produce a valid derived price.
/// Such rows are excluded from the table and counted in the load report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("empty product name")]
    MissingName,

    #[error("{field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("negative price {0}")]
    NegativePrice(f64),

    #[error("weight must be positive, got {0}")]
    NonPositiveWeight(f64),

    #[error("price per unit out of range: {price} / {weight}")]
    UnitPriceOutOfRange { price: f64, weight: f64 },
}

// ---------------------------------------------------------------------------
// PriceRow – one row of the combined table
// ---------------------------------------------------------------------------

/// Display labels for name, price, weight, source file and price per unit,
/// shared by the console table and the HTML export.
pub const COLUMN_LABELS: [&str; 5] = ["Наименование", "Цена", "Вес", "Файл", "Цена за кг"];

/// A normalized price-list entry.
///
/// `price_per_unit` is derived once in [`PriceRow::new`]; the fields are
/// private so it can never drift from `price` and `weight`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    name: String,
    price: f64,
    weight: f64,
    source_file: String,
    price_per_unit: f64,
}

impl PriceRow {
    /// Validate the raw values and compute the derived per-unit price.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        weight: f64,
        source_file: impl Into<String>,
    ) -> Result<Self, RowError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RowError::MissingName);
        }
        if !price.is_finite() {
            return Err(RowError::InvalidNumber {
                field: "price",
                value: price.to_string(),
            });
        }
        if price < 0.0 {
            return Err(RowError::NegativePrice(price));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(RowError::NonPositiveWeight(weight));
        }

        let price_per_unit = round2(price / weight);
        if !price_per_unit.is_finite() {
            return Err(RowError::UnitPriceOutOfRange { price, weight });
        }

        Ok(PriceRow {
            name,
            price,
            weight,
            source_file: source_file.into(),
            price_per_unit,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    pub fn price_per_unit(&self) -> f64 {
        self.price_per_unit
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// PriceTable – the combined dataset
// ---------------------------------------------------------------------------

/// All rows from every successfully loaded file, in insertion order.
/// Built once by the loader and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    rows: Vec<PriceRow>,
}

impl PriceTable {
    pub fn from_rows(rows: Vec<PriceRow>) -> Self {
        PriceTable { rows }
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// LoadReport – what happened while building the table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Base names of files that contributed rows (or parsed cleanly with none).
    pub files_loaded: Vec<String>,
    /// Files rejected as a whole.
    pub files_skipped: Vec<SkippedFile>,
    /// Rows excluded because their price or weight was unusable.
    pub rows_skipped: usize,
}
