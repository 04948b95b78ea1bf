use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::data::model::{PriceRow, COLUMN_LABELS};

pub const DOCUMENT_TITLE: &str = "Результаты поиска цен";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `rows` as a standalone HTML page, replacing any existing file.
pub fn export_html(rows: &[PriceRow], output_path: &Path) -> Result<(), ExportError> {
    std::fs::write(output_path, render_html(rows)).map_err(|source| ExportError::Write {
        path: output_path.to_path_buf(),
        source,
    })
}

/// Render `rows` into a UTF-8 HTML document with a single table.
pub fn render_html(rows: &[PriceRow]) -> String {
    let mut out = String::new();
    out.push_str("<html>\n  <head>\n    <meta charset=\"UTF-8\">\n");
    let _ = writeln!(out, "    <title>{}</title>", escape(DOCUMENT_TITLE));
    out.push_str("  </head>\n  <body>\n");
    out.push_str("    <table border=\"1\">\n      <thead>\n        <tr>");
    for label in COLUMN_LABELS {
        let _ = write!(out, "<th>{}</th>", escape(label));
    }
    out.push_str("</tr>\n      </thead>\n      <tbody>\n");

    for row in rows {
        let cells = [
            escape(row.name()),
            row.price().to_string(),
            row.weight().to_string(),
            escape(row.source_file()),
            row.price_per_unit().to_string(),
        ];
        out.push_str("        <tr>");
        for cell in &cells {
            let _ = write!(out, "<td>{cell}</td>");
        }
        out.push_str("</tr>\n");
    }

    out.push_str("      </tbody>\n    </table>\n  </body>\n</html>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
