//! Free-text row filtering.
//!
//! Each backoffice listing narrows its collection with a case-insensitive
//! substring match over a fixed subset of the record's string fields. The
//! subset is the record's concern, expressed through [`Searchable`]; the
//! matching itself lives here so every listing behaves identically.

/// A record that exposes the text its listing searches over.
///
/// Implementations concatenate the fixed subset of fields that a
/// free-text query should match against. The concatenation order is
/// irrelevant to correctness but should stay stable for readability.
pub trait Searchable {
    /// Returns the concatenated searchable text for this record.
    fn search_text(&self) -> String;
}

/// Selects the records whose searchable text contains `query`.
///
/// Matching is case-insensitive and preserves the input order. An empty
/// query selects every record; a query matching nothing yields an empty
/// vector. The input is never mutated.
///
/// # Example
///
/// ```
/// use tabular::{Searchable, filter};
///
/// struct Contact(&'static str);
///
/// impl Searchable for Contact {
///     fn search_text(&self) -> String {
///         self.0.to_owned()
///     }
/// }
///
/// let rows = [Contact("Carla"), Contact("Diego")];
/// let hits = filter(&rows, "carl");
///
/// assert_eq!(hits.len(), 1);
/// ```
#[must_use]
pub fn filter<'a, T: Searchable>(rows: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return rows.iter().collect();
    }
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| row.search_text().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    struct Record {
        name: &'static str,
        email: &'static str,
    }

    impl Searchable for Record {
        fn search_text(&self) -> String {
            format!("{}{}", self.name, self.email)
        }
    }

    fn records() -> Vec<Record> {
        vec![
            Record {
                name: "Carla López",
                email: "carla@correo.com",
            },
            Record {
                name: "Diego Fernández",
                email: "diego@correo.com",
            },
            Record {
                name: "Restó La Plaza",
                email: "admin@laplaza.com",
            },
        ]
    }

    #[test]
    fn empty_query_returns_every_record_in_order() {
        let rows = records();
        let hits = filter(&rows, "");

        let names: Vec<_> = hits.iter().map(|r| r.name).collect();
        assert_eq!(names, ["Carla López", "Diego Fernández", "Restó La Plaza"]);
    }

    #[rstest]
    #[case::lowercase("carla", 1)]
    #[case::uppercase("CARLA", 1)]
    #[case::email_domain("laplaza", 1)]
    #[case::shared_domain("correo.com", 2)]
    #[case::no_match("zzz", 0)]
    fn matches_case_insensitively(#[case] query: &str, #[case] expected: usize) {
        let rows = records();
        assert_eq!(filter(&rows, query).len(), expected);
    }

    #[test]
    fn excluded_records_do_not_contain_the_query() {
        let rows = records();
        let hits = filter(&rows, "diego");

        for row in &rows {
            let matched = hits.iter().any(|hit| std::ptr::eq(*hit, row));
            let contains = row.search_text().to_lowercase().contains("diego");
            assert_eq!(matched, contains, "mismatch for {}", row.name);
        }
    }

    #[test]
    fn filtering_leaves_the_input_unchanged() {
        let rows = records();
        drop(filter(&rows, "carla"));

        assert_eq!(rows.len(), 3);
    }
}
