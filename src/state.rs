use crate::data::model::{PriceRow, PriceTable};
use crate::data::search::search;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Everything the interactive loop carries between prompts, independent of
/// console I/O.
pub struct SessionState<'a> {
    /// Combined table, loaded once before the session starts.
    pub table: &'a PriceTable,

    /// Result of the most recent query (None until the first search).
    pub last_result: Option<Vec<PriceRow>>,
}

impl<'a> SessionState<'a> {
    pub fn new(table: &'a PriceTable) -> Self {
        Self {
            table,
            last_result: None,
        }
    }

    /// Run a query and remember its result for a later export.
    pub fn run_query(&mut self, query: &str) -> &[PriceRow] {
        self.last_result.insert(search(self.table, query))
    }

    /// Rows available for export: the last result, if it has any rows.
    pub fn exportable(&self) -> Option<&[PriceRow]> {
        self.last_result
            .as_deref()
            .filter(|rows| !rows.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PriceTable {
        PriceTable::from_rows(vec![
            PriceRow::new("Milk", 100.0, 2.0, "price1.csv").unwrap(),
            PriceRow::new("Bread", 40.0, 0.5, "price1.csv").unwrap(),
        ])
    }

    #[test]
    fn nothing_to_export_before_first_query() {
        let table = table();
        let state = SessionState::new(&table);
        assert!(state.exportable().is_none());
    }

    #[test]
    fn last_query_replaces_previous_result() {
        let table = table();
        let mut state = SessionState::new(&table);

        assert_eq!(state.run_query("milk").len(), 1);
        assert_eq!(state.exportable().unwrap()[0].name(), "Milk");

        assert!(state.run_query("cheese").is_empty());
        assert!(state.exportable().is_none());
        assert_eq!(state.last_result.as_deref().map(<[_]>::len), Some(0));
    }
}
