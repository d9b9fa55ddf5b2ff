use std::collections::HashMap;

/// A parsed delimited table: header names in file order plus one
/// name→value map per data row, preserving input order.
#[derive(Debug, Default, Clone)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

/// Split raw CSV text into headers and rows.
///
/// Accepts both `\n` and `\r\n` line endings. Fewer than two lines
/// (no header, or header with no data) yields an empty table rather
/// than an error. Missing trailing fields become empty strings and
/// every value is trimmed of surrounding whitespace.
pub fn parse_table(text: &str) -> ParsedTable {
    let lines: Vec<&str> = text
        .trim()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if lines.len() < 2 {
        return ParsedTable::default();
    }

    let headers: Vec<String> = lines[0].split(',').map(|h| h.trim().to_string()).collect();
    let rows = lines[1..]
        .iter()
        .map(|line| {
            let cols: Vec<&str> = line.split(',').collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = cols.get(i).map_or("", |c| c.trim());
                    (header.clone(), value.to_string())
                })
                .collect()
        })
        .collect();

    ParsedTable { headers, rows }
}
