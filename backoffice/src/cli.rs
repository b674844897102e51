//! `backoffice-export` command parsing and orchestration.
//!
//! The binary stays thin; argument handling and the export pipeline
//! live here so the flow is testable without spawning a process. The
//! pipeline loads fixtures, builds the in-memory directory, filters
//! the requested listing, serializes it, and hands the text to a
//! delivery sink.

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;
use demo_data::{FixtureError, FixtureSet};
use tabular::filter;
use thiserror::Error;

use crate::convert::{ConvertError, directory_from_fixtures};
use crate::directory::Directory;
use crate::domain::Role;
use crate::export::{EntityKind, ExportError, ExportSink, export_csv, filename};
use crate::session::Operator;
use crate::summary::Summary;

/// `backoffice-export` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "backoffice-export",
    about = "Export a filtered backoffice listing as CSV",
    version
)]
pub struct CliArgs {
    /// Listing to export: usuarios, negocios, incidencias or pagos.
    #[arg(long, value_name = "entity", value_parser = parse_entity)]
    pub entity: EntityKind,
    /// Case-insensitive filter applied before export. Empty keeps every row.
    #[arg(long, value_name = "text", default_value = "")]
    pub query: String,
    /// Directory receiving the export file.
    #[arg(long = "out-dir", value_name = "path", default_value = ".")]
    pub out_dir: Utf8PathBuf,
    /// Fixture file to load instead of the built-in demo data.
    #[arg(long, value_name = "path")]
    pub fixtures: Option<Utf8PathBuf>,
    /// Operator name recorded in the audit log.
    #[arg(long, value_name = "name", default_value = "soporte")]
    pub operator: String,
    /// Operator role token: soporte or admin.
    #[arg(long = "operator-role", value_name = "role", value_parser = parse_role, default_value = "soporte")]
    pub operator_role: Role,
}

fn parse_entity(raw: &str) -> Result<EntityKind, String> {
    EntityKind::from_slug(raw)
        .ok_or_else(|| format!("unknown entity '{raw}' (expected usuarios, negocios, incidencias or pagos)"))
}

fn parse_role(raw: &str) -> Result<Role, String> {
    Role::from_token(raw).ok_or_else(|| format!("unknown role '{raw}'"))
}

/// Errors surfaced by the export command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Fixture data could not be loaded.
    #[error(transparent)]
    Fixtures(#[from] FixtureError),

    /// Fixture data could not be converted into the directory.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The export could not be delivered.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Outcome of a completed export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Name of the written file.
    pub filename: String,
    /// Number of data rows exported, excluding the header.
    pub rows: usize,
}

/// Runs the export pipeline against the given sink and export date.
///
/// # Errors
///
/// Returns [`CliError`] when fixtures cannot be loaded or converted,
/// or when the sink rejects the delivery.
pub fn run(
    args: &CliArgs,
    sink: &impl ExportSink,
    today: NaiveDate,
) -> Result<ExportReport, CliError> {
    let fixtures = args
        .fixtures
        .as_deref()
        .map_or_else(FixtureSet::builtin, FixtureSet::from_file)?;
    let directory = directory_from_fixtures(&fixtures)?;
    let operator = Operator::new(args.operator.clone(), args.operator_role);

    let (contents, rows) = render_listing(&directory, args.entity, &args.query);
    let name = filename(args.entity, today);
    sink.deliver(&name, &contents)?;

    let summary = Summary::of(&directory);
    tracing::info!(
        operator = operator.name(),
        role = operator.role().token(),
        entity = %args.entity,
        query = args.query.as_str(),
        file = name.as_str(),
        rows,
        open_incidents = summary.open_incidents,
        pending_payments = summary.pending_payments,
        "export delivered"
    );

    Ok(ExportReport {
        filename: name,
        rows,
    })
}

fn render_listing(directory: &Directory, kind: EntityKind, query: &str) -> (String, usize) {
    match kind {
        EntityKind::Users => {
            let matched = filter(directory.users(), query);
            (export_csv(matched.iter().copied()), matched.len())
        }
        EntityKind::Businesses => {
            let matched = filter(directory.businesses(), query);
            (export_csv(matched.iter().copied()), matched.len())
        }
        EntityKind::Incidents => {
            let matched = filter(directory.incidents(), query);
            (export_csv(matched.iter().copied()), matched.len())
        }
        EntityKind::Payments => {
            let matched = filter(directory.payments(), query);
            (export_csv(matched.iter().copied()), matched.len())
        }
    }
}
