//! CSV export of filtered listings.
//!
//! Purpose: turn a filtered collection into the exact header and row
//! layout the legacy backoffice exported, name the file after the
//! entity and export date, and hand the text to a delivery sink.
//!
//! Public surface:
//! - [`Exportable`] — per-entity header and row layout.
//! - [`export_csv`] — assembles and serializes header plus data rows.
//! - [`EntityKind`] — exportable collection and its filename slug.
//! - [`filename`] — the `<slug>_<date>.csv` convention.
//! - [`ExportSink`], [`DirSink`], [`ExportError`] — delivery capability.

mod columns;
mod sink;

use std::fmt;

use chrono::NaiveDate;
use tabular::{Cell, Row, serialize_rows};

pub use sink::{DirSink, ExportError, ExportSink};

/// A record that knows its export column layout.
pub trait Exportable {
    /// Header row of the export, in display order.
    const HEADERS: &'static [&'static str];

    /// The record's cells, aligned with [`Self::HEADERS`].
    fn row(&self) -> Row;
}

/// Serializes the header row plus one row per record.
///
/// Accepts whatever the row filter produced; values are read through
/// shared references and never mutated.
///
/// # Example
///
/// ```
/// use backoffice::export::{Exportable, export_csv};
/// use tabular::{Cell, Row};
///
/// struct Entry(&'static str);
///
/// impl Exportable for Entry {
///     const HEADERS: &'static [&'static str] = &["ID"];
///
///     fn row(&self) -> Row {
///         vec![Cell::from(self.0)]
///     }
/// }
///
/// let entries = [Entry("INC-1202")];
/// assert_eq!(export_csv(&entries), "ID\nINC-1202");
/// ```
#[must_use]
pub fn export_csv<'a, T, I>(records: I) -> String
where
    T: Exportable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let header: Row = T::HEADERS.iter().map(|&title| Cell::from(title)).collect();
    let mut rows = vec![header];
    rows.extend(records.into_iter().map(Exportable::row));
    serialize_rows(&rows)
}

/// An exportable backoffice collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// The user listing (`usuarios`).
    Users,
    /// The business listing (`negocios`).
    Businesses,
    /// The incident listing (`incidencias`).
    Incidents,
    /// The payment listing (`pagos`).
    Payments,
}

impl EntityKind {
    /// Returns the filename slug for this collection.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Users => "usuarios",
            Self::Businesses => "negocios",
            Self::Incidents => "incidencias",
            Self::Payments => "pagos",
        }
    }

    /// Parses a filename slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "usuarios" => Some(Self::Users),
            "negocios" => Some(Self::Businesses),
            "incidencias" => Some(Self::Incidents),
            "pagos" => Some(Self::Payments),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Builds the `<slug>_<iso-date>.csv` export filename.
///
/// # Example
///
/// ```
/// use backoffice::export::{EntityKind, filename};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 9, 20).expect("valid date");
/// assert_eq!(filename(EntityKind::Incidents, date), "incidencias_2025-09-20.csv");
/// ```
#[must_use]
pub fn filename(kind: EntityKind, date: NaiveDate) -> String {
    format!("{}_{date}.csv", kind.slug())
}
