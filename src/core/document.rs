//! CSV document rendering
//!
//! The document starts with a UTF-8 byte-order mark so spreadsheet tools
//! detect the encoding, followed by the header line and one line per row.
//! Data cells are always quoted; header labels are written bare.

use crate::core::mapper::Row;
use crate::domain::{LotpackError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// UTF-8 byte-order mark
pub const UTF8_BOM: char = '\u{FEFF}';

/// Renders the header line and all rows as a BOM-prefixed CSV document
///
/// # Examples
///
/// ```
/// use lotpack::core::document::render_csv;
///
/// let headers = vec!["カテゴリ".to_string(), "説明".to_string()];
/// let rows = vec![vec!["Books".to_string(), "say \"hi\"".to_string()]];
///
/// let csv = render_csv(&headers, rows).unwrap();
/// assert_eq!(csv, "\u{FEFF}カテゴリ,説明\n\"Books\",\"say \"\"hi\"\"\"\n");
/// ```
pub fn render_csv<I>(headers: &[String], rows: I) -> Result<String>
where
    I: IntoIterator<Item = Row>,
{
    let mut header_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    header_writer.write_record(headers)?;
    let buffer = header_writer
        .into_inner()
        .map_err(|e| LotpackError::Csv(format!("Failed to flush header: {e}")))?;

    let mut row_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(buffer);

    let mut row_count = 0usize;
    for row in rows {
        row_writer.write_record(&row)?;
        row_count += 1;
    }

    let bytes = row_writer
        .into_inner()
        .map_err(|e| LotpackError::Csv(format!("Failed to flush rows: {e}")))?;
    let body = String::from_utf8(bytes)
        .map_err(|e| LotpackError::Csv(format!("CSV output is not UTF-8: {e}")))?;

    tracing::debug!(
        columns = headers.len(),
        rows = row_count,
        bytes = body.len(),
        "Rendered CSV document"
    );

    let mut document = String::with_capacity(body.len() + UTF8_BOM.len_utf8());
    document.push(UTF8_BOM);
    document.push_str(&body);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_document_starts_with_bom() {
        let csv = render_csv(&headers(&["a"]), Vec::new()).unwrap();
        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(csv, "\u{FEFF}a\n");
    }

    #[test]
    fn test_cells_are_quoted_and_escaped() {
        let rows = vec![vec![
            "".to_string(),
            "a,b".to_string(),
            "line1\nline2".to_string(),
            "\"q\"".to_string(),
        ]];

        let csv = render_csv(&headers(&["w", "x", "y", "z"]), rows).unwrap();

        assert_eq!(
            csv,
            "\u{FEFF}w,x,y,z\n\"\",\"a,b\",\"line1\nline2\",\"\"\"q\"\"\"\n"
        );
    }

    #[test]
    fn test_rows_keep_input_order() {
        let rows = vec![vec!["1".to_string()], vec!["2".to_string()]];
        let csv = render_csv(&headers(&["n"]), rows).unwrap();
        assert_eq!(csv, "\u{FEFF}n\n\"1\"\n\"2\"\n");
    }

    #[test]
    fn test_japanese_text_round_trips() {
        let rows = vec![vec!["美尻 巨乳".to_string(), "はい".to_string()]];
        let csv = render_csv(&headers(&["タイトル", "自動延長"]), rows).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.trim_start_matches('\u{FEFF}').as_bytes());
        let header_record = reader.headers().unwrap().clone();
        assert_eq!(&header_record[0], "タイトル");

        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "美尻 巨乳");
        assert_eq!(&record[1], "はい");
    }
}
