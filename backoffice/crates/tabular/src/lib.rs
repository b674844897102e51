//! Tabular listing primitives shared by backoffice views and exports.
//!
//! This crate provides the three pure building blocks behind every
//! backoffice listing: a free-text row filter, a CSV serializer with
//! quoting rules, and numeric summarization helpers. It is deliberately
//! independent of domain types so entity crates can adopt it without
//! circular dependencies.
//!
//! # Overview
//!
//! - [`filter`] narrows a collection by a case-insensitive substring
//!   query over each row's searchable text.
//! - [`serialize_rows`] turns header and data rows of [`Cell`] values
//!   into comma-separated text, escaping fields as needed.
//! - [`count`] and [`sum`] compute the simple summaries shown on
//!   dashboard cards.
//!
//! All operations are total functions over immutable inputs: no I/O, no
//! shared state, no failure modes.
//!
//! # Example
//!
//! ```
//! use tabular::{Cell, Row, serialize_rows};
//!
//! let rows = vec![
//!     Row::from_iter([Cell::from("ID"), Cell::from("Nombre")]),
//!     Row::from_iter([Cell::from(7_u32), Cell::from("Ada, dev")]),
//! ];
//!
//! assert_eq!(serialize_rows(&rows), "ID,Nombre\n7,\"Ada, dev\"");
//! ```

mod aggregate;
mod csv;
mod filter;

pub use aggregate::{count, sum};
pub use csv::{Cell, Row, serialize_rows};
pub use filter::{Searchable, filter};
