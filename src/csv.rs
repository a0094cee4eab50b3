// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use thiserror::Error;

/* ---------------- Parsing ---------------- */

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },
}

/// CSV/TSV parser (quotes + CRLF tolerant). Blank lines are skipped.
/// Unlike a lenient reader, an unterminated quote is an error: a half-written
/// table must not be silently merged into.
pub fn parse_rows(text: &str, sep: char) -> Result<Vec<Vec<String>>, ParseError> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut quote_line = 0usize;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                    quote_line = line;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                line += 1;
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            c => {
                if c == '\n' { line += 1; }
                field.push(c);
            }
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote { line: quote_line });
    }

    // Trailing row without a final newline.
    row.push(field);
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(row);
    }

    Ok(rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Serialize a whole table (header first) into one buffer.
pub fn rows_to_bytes(headers: &[String], rows: &[Vec<String>], sep: char) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();

    // Writing into a Vec cannot fail.
    let _ = write_row(&mut buf, headers, sep);
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &strings(&["Yuno (002)", "a,b", "say \"hi\""]), ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Yuno (002),\"a,b\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let mut buf = Vec::new();
        write_row(&mut buf, &strings(&["a,b", "c"]), '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\tc\n");
    }

    #[test]
    fn parses_back_what_it_writes() {
        let headers = strings(&["Name", "Note"]);
        let rows = vec![strings(&["x", "multi\nline, \"quoted\""]), strings(&["y", ""])];
        let text = String::from_utf8(rows_to_bytes(&headers, &rows, ',')).unwrap();
        let parsed = parse_rows(&text, ',').unwrap();
        assert_eq!(parsed[0], headers);
        assert_eq!(&parsed[1..], &rows[..]);
    }

    #[test]
    fn crlf_and_blank_lines() {
        let parsed = parse_rows("a,b\r\n\r\nc,d", ',').unwrap();
        assert_eq!(parsed, vec![strings(&["a", "b"]), strings(&["c", "d"])]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert_eq!(
            parse_rows("a,b\nc,\"oops\n", ','),
            Err(ParseError::UnterminatedQuote { line: 2 })
        );
    }
}
