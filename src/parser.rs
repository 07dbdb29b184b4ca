use indexmap::IndexMap;

/// In-memory tabular view of the input: column names in layout order,
/// one row of trimmed string cells per input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Drops rows whose every cell is empty. Line-splitting keeps a trailing
    /// blank line as a row of empty values; callers that feed the table into
    /// aggregation use this to discard it.
    pub fn drop_blank_rows(&mut self) {
        self.rows.retain(|row| row.iter().any(|cell| !cell.is_empty()));
    }
}

/// Slices newline-delimited fixed-width records into a [`Table`].
///
/// Each line is cut into consecutive character ranges whose lengths come from
/// `layout`, in declaration order. A range that runs past the end of the line
/// yields the characters that are there (possibly none); the cursor still
/// advances by the full configured width. Every slice is whitespace-trimmed.
/// Layout validity is the caller's responsibility.
pub fn parse(text: &str, layout: &IndexMap<String, usize>) -> Table {
    let columns: Vec<String> = layout.keys().cloned().collect();
    let mut rows = Vec::new();

    if text.is_empty() {
        return Table { columns, rows };
    }

    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        let mut pos = 0usize;
        let mut row = Vec::with_capacity(columns.len());
        for &width in layout.values() {
            let end = (pos + width).min(chars.len());
            let raw: String = if pos < chars.len() {
                chars[pos..end].iter().collect()
            } else {
                String::new()
            };
            row.push(raw.trim().to_string());
            pos += width;
        }
        rows.push(row);
    }

    Table { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout() -> IndexMap<String, usize> {
        IndexMap::from([
            ("client".to_string(), 4),
            ("product".to_string(), 4),
            ("quantity_long".to_string(), 6),
            ("quantity_short".to_string(), 6),
        ])
    }

    #[test]
    fn test_empty_text_yields_columns_and_no_rows() {
        let table = parse("", &sample_layout());
        assert_eq!(
            table.columns(),
            &["client", "product", "quantity_long", "quantity_short"]
        );
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_one_row_per_line_including_trailing_blank() {
        let text = "C001P001   100    50\nC002P002   200   150\n";
        let table = parse(text, &sample_layout());
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows()[2], vec!["", "", "", ""]);
    }

    #[test]
    fn test_round_trip_recovers_trimmed_values() {
        let line = "C001P001   100    50";
        let table = parse(line, &sample_layout());
        assert_eq!(table.rows()[0], vec!["C001", "P001", "100", "50"]);
    }

    #[test]
    fn test_short_line_yields_empty_trailing_fields() {
        let table = parse("C001P0", &sample_layout());
        assert_eq!(table.rows()[0], vec!["C001", "P0", "", ""]);
    }

    #[test]
    fn test_cursor_advances_full_width_past_short_field() {
        let layout = IndexMap::from([
            ("a".to_string(), 3),
            ("b".to_string(), 3),
        ]);
        // First field retrieved short would misalign field b if the cursor
        // advanced only by the retrieved length.
        let table = parse("xxxyyy", &layout);
        assert_eq!(table.rows()[0], vec!["xxx", "yyy"]);
    }

    #[test]
    fn test_drop_blank_rows_keeps_partial_rows() {
        let mut table = parse("C001P001   100    50\n\nC002", &sample_layout());
        assert_eq!(table.row_count(), 3);
        table.drop_blank_rows();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1][0], "C002");
    }
}
