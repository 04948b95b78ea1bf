use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::data::model::{LoadReport, PriceTable};
use crate::export::export_html;
use crate::state::SessionState;
use crate::ui::table::format_results;

const SEARCH_PROMPT: &str =
    "\nВведите название товара для поиска (или 'exit' | 'выход' для выхода): ";
const EXPORT_PROMPT: &str = "Нужен ли экспорт данных в HTML файл? (да/нет): ";

const EXIT_WORDS: [&str; 2] = ["exit", "выход"];
const YES_WORDS: [&str; 3] = ["да", "yes", "y"];

// ---------------------------------------------------------------------------
// Interactive console session
// ---------------------------------------------------------------------------

/// Read-search-print loop over an already loaded table, followed by the
/// export dialogue. Generic over its streams so sessions can be scripted.
pub struct Shell<'a, R, W> {
    input: R,
    output: W,
    state: SessionState<'a>,
    default_export: String,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(table: &'a PriceTable, default_export: impl Into<String>, input: R, output: W) -> Self {
        Self {
            input,
            output,
            state: SessionState::new(table),
            default_export: default_export.into(),
        }
    }

    /// Print how many rows were loaded and which files were rejected.
    pub fn print_load_summary(&mut self, report: &LoadReport) -> io::Result<()> {
        writeln!(
            self.output,
            "Загружено строк: {} (файлов: {}, пропущено файлов: {}, пропущено строк: {})",
            self.state.table.len(),
            report.files_loaded.len(),
            report.files_skipped.len(),
            report.rows_skipped
        )?;
        for skipped in &report.files_skipped {
            writeln!(self.output, "Пропущен файл {}: {}", skipped.file, skipped.reason)?;
        }
        Ok(())
    }

    /// Run the session to completion and return the streams.
    pub fn run(mut self) -> Result<(R, W)> {
        self.search_loop()?;
        self.export_dialogue()?;
        writeln!(self.output, "Программа завершила работу.")?;
        Ok((self.input, self.output))
    }

    fn search_loop(&mut self) -> Result<()> {
        loop {
            let Some(query) = read_answer(&mut self.input, &mut self.output, SEARCH_PROMPT)? else {
                // End of input behaves like an exit keyword.
                writeln!(self.output)?;
                break;
            };
            if is_one_of(&query, &EXIT_WORDS) {
                break;
            }

            let rows = self.state.run_query(&query);
            info!("query {query:?}: {} rows", rows.len());
            if rows.is_empty() {
                writeln!(self.output, "Ничего не найдено.")?;
            } else {
                writeln!(self.output, "{}", format_results(rows)?)?;
            }
        }
        writeln!(self.output, "Работа завершена.")?;
        Ok(())
    }

    fn export_dialogue(&mut self) -> Result<()> {
        let answer = read_answer(&mut self.input, &mut self.output, EXPORT_PROMPT)?;
        if !answer.is_some_and(|a| is_one_of(&a, &YES_WORDS)) {
            return Ok(());
        }

        let Some(rows) = self.state.exportable() else {
            writeln!(self.output, "Нет данных для экспорта")?;
            return Ok(());
        };

        let prompt = format!(
            "Введите имя файла для экспорта (по умолчанию '{}'): ",
            self.default_export
        );
        let file_name = read_answer(&mut self.input, &mut self.output, &prompt)?
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.default_export.clone());

        match export_html(rows, Path::new(&file_name)) {
            Ok(()) => writeln!(self.output, "Данные экспортированы в файл: {file_name}")?,
            Err(err) => {
                warn!("export failed: {err}");
                writeln!(self.output, "Ошибка экспорта: {err}")?;
            }
        }
        Ok(())
    }
}

/// Print `prompt`, then read one line without its line terminator.
/// Returns `None` at end of input.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn is_one_of(answer: &str, words: &[&str]) -> bool {
    let answer = answer.trim().to_lowercase();
    words.iter().any(|w| *w == answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{PriceRow, SkippedFile};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn table() -> PriceTable {
        PriceTable::from_rows(vec![
            PriceRow::new("Milk Deluxe", 150.0, 1.0, "price2.csv").unwrap(),
            PriceRow::new("Milk", 100.0, 2.0, "price1.csv").unwrap(),
            PriceRow::new("Bread", 40.0, 0.5, "price1.csv").unwrap(),
        ])
    }

    fn run_session(table: &PriceTable, default_export: &str, script: &str) -> String {
        let shell = Shell::new(table, default_export, Cursor::new(script.to_string()), Vec::new());
        let (_, out) = shell.run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_sorted_results_then_exits() {
        let out = run_session(&table(), "prices.html", "milk\nEXIT\nнет\n");

        let milk = out.find("| Milk ").unwrap();
        let deluxe = out.find("Milk Deluxe").unwrap();
        assert!(milk < deluxe);
        assert!(!out.contains("Bread"));
        assert!(out.contains("Работа завершена."));
        assert!(out.trim_end().ends_with("Программа завершила работу."));
    }

    #[test]
    fn reports_no_results() {
        let out = run_session(&table(), "prices.html", "cheese\nвыход\nнет\n");
        assert!(out.contains("Ничего не найдено."));
    }

    #[test]
    fn export_without_search_has_nothing_to_export() {
        let out = run_session(&table(), "prices.html", "Выход\nда\n");
        assert!(out.contains("Нет данных для экспорта"));
        assert!(!out.contains("Введите имя файла"));
    }

    #[test]
    fn export_after_empty_result_has_nothing_to_export() {
        let out = run_session(&table(), "prices.html", "milk\ncheese\nexit\nда\n");
        assert!(out.contains("Нет данных для экспорта"));
    }

    #[test]
    fn exports_last_result_to_named_file() {
        let tmp = tempdir().expect("tempdir");
        let target = tmp.path().join("out.html");
        let script = format!("bread\nmilk\nexit\nДА\n{}\n", target.display());

        let out = run_session(&table(), "prices.html", &script);

        assert!(out.contains("Данные экспортированы в файл:"));
        let html = std::fs::read_to_string(&target).unwrap();
        assert!(html.contains("<td>Milk</td>"));
        assert!(html.contains("<td>Milk Deluxe</td>"));
        assert!(!html.contains("Bread"));
    }

    #[test]
    fn blank_file_name_uses_default() {
        let tmp = tempdir().expect("tempdir");
        let default = tmp.path().join("default.html");
        let default = default.to_str().unwrap();

        let out = run_session(&table(), default, "bread\nexit\nyes\n\n");

        assert!(out.contains(&format!("по умолчанию '{default}'")));
        assert!(std::fs::read_to_string(default).unwrap().contains("Bread"));
    }

    #[test]
    fn write_failure_is_reported() {
        let tmp = tempdir().expect("tempdir");
        let target = tmp.path().join("missing").join("out.html");
        let script = format!("milk\nexit\nда\n{}\n", target.display());

        let out = run_session(&table(), "prices.html", &script);

        assert!(out.contains("Ошибка экспорта: cannot write"));
        assert!(out.trim_end().ends_with("Программа завершила работу."));
    }

    #[test]
    fn end_of_input_ends_session() {
        let out = run_session(&table(), "prices.html", "milk\n");
        assert!(out.contains("Работа завершена."));
        assert!(out.contains("Программа завершила работу."));
    }

    #[test]
    fn load_summary_lists_skipped_files() {
        let table = table();
        let report = LoadReport {
            files_loaded: vec!["price1.csv".into(), "price2.csv".into()],
            files_skipped: vec![SkippedFile {
                file: "price3.csv".into(),
                reason: "no weight column".into(),
            }],
            rows_skipped: 2,
        };
        let mut shell = Shell::new(&table, "prices.html", Cursor::new(String::new()), Vec::new());
        shell.print_load_summary(&report).unwrap();
        let (_, out) = shell.run().unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with(
            "Загружено строк: 3 (файлов: 2, пропущено файлов: 1, пропущено строк: 2)"
        ));
        assert!(out.contains("Пропущен файл price3.csv: no weight column"));
    }
}
