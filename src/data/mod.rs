/// Data layer: core types, loading, and searching.
///
/// Architecture:
/// ```text
///  PRICE/*price*.csv
///        │
///        ▼
///   ┌──────────┐
///   │ columns  │  header synonyms → ColumnMap per file
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse rows → PriceTable + LoadReport
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ PriceTable │  Vec<PriceRow>, immutable after load
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  search  │  name substring → rows sorted by price per unit
///   └──────────┘
/// ```

pub mod columns;
pub mod loader;
pub mod model;
pub mod search;
