//! Backoffice core library.
//!
//! Typed entity collections for the admin backoffice, the immutable
//! update operations support staff perform on them, KPI summaries for
//! the dashboard, and CSV export of filtered listings. Everything here
//! is synchronous and in-memory; delivery of exported text is a single
//! outward effect behind the [`export::ExportSink`] capability.

pub mod cli;
pub mod convert;
pub mod directory;
pub mod domain;
pub mod export;
pub mod session;
pub mod summary;
