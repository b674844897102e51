//! CSV serialization with per-field escaping.
//!
//! Rows are ordered sequences of scalar [`Cell`] values. The closed cell
//! type makes non-scalar fields unrepresentable, so serialization is a
//! total function: it returns the text blob and the caller owns delivery
//! (file write, download, transmission).
//!
//! # Escaping rule
//!
//! A field containing a comma, a double quote, or a newline is wrapped in
//! double quotes with every internal double quote doubled. All other
//! fields pass through unchanged. Output rows are joined with a single
//! `\n` and no trailing newline is appended, so the result parses back
//! with any standard CSV reader.

use std::fmt;

/// A single scalar CSV field value.
///
/// # Example
///
/// ```
/// use tabular::Cell;
///
/// assert_eq!(Cell::from("hola").render(), "hola");
/// assert_eq!(Cell::from(45_800_u64).render(), "45800");
/// assert_eq!(Cell::Empty.render(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Free text, escaped on output when it contains CSV metacharacters.
    Text(String),
    /// Non-negative integer, rendered in decimal.
    Integer(u64),
    /// Absent value, rendered as the empty string.
    Empty,
}

impl Cell {
    /// Stringifies the cell without applying CSV escaping.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Self::Integer(u64::from(value))
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl<T> From<Option<T>> for Cell
where
    T: Into<Cell>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// An ordered sequence of cells forming one CSV row.
pub type Row = Vec<Cell>;

/// Serializes header and data rows into comma-separated text.
///
/// Each field is escaped independently, fields are joined with commas,
/// and rows are joined with a single newline. No trailing newline is
/// appended. An empty slice yields the empty string.
///
/// # Example
///
/// ```
/// use tabular::{Cell, Row, serialize_rows};
///
/// let rows = vec![
///     Row::from_iter([Cell::from("ID"), Cell::from("Motivo")]),
///     Row::from_iter([Cell::from("INC-1202"), Cell::from("desempeno")]),
/// ];
///
/// assert_eq!(serialize_rows(&rows), "ID,Motivo\nINC-1202,desempeno");
/// ```
#[must_use]
pub fn serialize_rows(rows: &[Row]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| escape_field(&cell.render()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Applies the quoting rule to a single stringified field.
fn escape_field(raw: &str) -> String {
    if !raw.contains([',', '"', '\n']) {
        return raw.to_owned();
    }
    let mut escaped = String::with_capacity(raw.len().saturating_add(2));
    escaped.push('"');
    for ch in raw.chars() {
        if ch == '"' {
            escaped.push('"');
        }
        escaped.push(ch);
    }
    escaped.push('"');
    escaped
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("hola", "hola")]
    #[case::comma("a,b", "\"a,b\"")]
    #[case::quote("He said \"hi\"", "\"He said \"\"hi\"\"\"")]
    #[case::newline("line1\nline2", "\"line1\nline2\"")]
    #[case::empty("", "")]
    #[case::quote_only("\"", "\"\"\"\"")]
    fn escapes_fields(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_field(raw), expected);
    }

    #[test]
    fn serializes_the_escaping_example() {
        let rows = vec![Row::from_iter([
            Cell::from("a,b"),
            Cell::from("He said \"hi\""),
            Cell::from("line1\nline2"),
        ])];

        assert_eq!(
            serialize_rows(&rows),
            "\"a,b\",\"He said \"\"hi\"\"\",\"line1\nline2\""
        );
    }

    #[test]
    fn joins_rows_without_trailing_newline() {
        let rows = vec![
            Row::from_iter([Cell::from("ID"), Cell::from("Motivo")]),
            Row::from_iter([Cell::from("INC-1202"), Cell::from("desempeno")]),
        ];

        assert_eq!(serialize_rows(&rows), "ID,Motivo\nINC-1202,desempeno");
    }

    #[test]
    fn serializes_empty_input_to_empty_text() {
        assert_eq!(serialize_rows(&[]), "");
    }

    #[test]
    fn renders_empty_cell_as_empty_field() {
        let rows = vec![Row::from_iter([
            Cell::from(1_u32),
            Cell::Empty,
            Cell::from("x"),
        ])];

        assert_eq!(serialize_rows(&rows), "1,,x");
    }

    #[test]
    fn converts_none_to_empty_cell() {
        let absent: Option<&str> = None;
        assert_eq!(Cell::from(absent), Cell::Empty);
        assert_eq!(Cell::from(Some("y")), Cell::Text("y".to_owned()));
    }

    /// Parsing the output with a standard CSV reader reproduces the
    /// stringified input, including quoted commas, quotes, and newlines.
    #[test]
    fn round_trips_through_a_standard_parser() {
        let rows = vec![
            Row::from_iter([
                Cell::from("ID"),
                Cell::from("Nombre"),
                Cell::from("Notas"),
            ]),
            Row::from_iter([
                Cell::from(102_u32),
                Cell::from("Cafetería 9 de Julio"),
                Cell::from("deuda, en revisión"),
            ]),
            Row::from_iter([
                Cell::from(103_u32),
                Cell::from("Sushi \"Central\""),
                Cell::from("línea1\nlínea2"),
            ]),
        ];

        let blob = serialize_rows(&rows);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(blob.as_bytes());

        let parsed: Vec<Vec<String>> = reader
            .records()
            .map(|record| {
                record
                    .expect("record parses")
                    .iter()
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .collect();

        let rendered: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(Cell::render).collect())
            .collect();

        assert_eq!(parsed, rendered);
    }
}
