use super::model::{PriceRow, PriceTable};

/// Return every row whose name contains `query` (case-insensitive), cheapest
/// per unit first.
///
/// A row matches when:
/// * `query` is empty → every named row matches
/// * the lower-cased name contains the lower-cased query
///
/// Rows with an empty name never match. The sort is stable, so rows with the
/// same `price_per_unit` keep their table order.
pub fn search(table: &PriceTable, query: &str) -> Vec<PriceRow> {
    let needle = query.to_lowercase();

    let mut results: Vec<PriceRow> = table
        .rows()
        .iter()
        .filter(|row| !row.name().is_empty() && row.name().to_lowercase().contains(&needle))
        .cloned()
        .collect();

    results.sort_by(|a, b| a.price_per_unit().total_cmp(&b.price_per_unit()));
    results
}
