//! Behavioural tests for the CSV export flow.
//!
//! These scenarios validate that the export command filters listings,
//! keeps the legacy header and token layout, and writes the dated
//! export file into the chosen directory.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use backoffice::cli::{CliArgs, ExportReport, run};
use backoffice::domain::Role;
use backoffice::export::{DirSink, EntityKind};
use camino::Utf8PathBuf;
use chrono::NaiveDate;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use test_support::unique_export_dir;

#[derive(Default, ScenarioState)]
struct World {
    out_dir: Slot<Utf8PathBuf>,
    report: Slot<ExportReport>,
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("an empty export directory")]
fn an_empty_export_directory(world: &World) {
    let dir = unique_export_dir("export-flow").expect("create export directory");
    world.out_dir.set(dir);
}

#[when("the operator exports \"{entity}\" filtered by \"{query}\"")]
fn the_operator_exports_filtered_by(world: &World, entity: String, query: String) {
    export(world, &entity, &query);
}

#[when("the operator exports \"{entity}\" without a filter")]
fn the_operator_exports_without_a_filter(world: &World, entity: String) {
    export(world, &entity, "");
}

#[then("the file \"{name}\" is written")]
fn the_file_is_written(world: &World, name: String) {
    let report = world.report.get().expect("report should be set").clone();
    assert_eq!(report.filename, name);

    let path = export_dir(world).join(&name);
    assert!(
        path.as_std_path().is_file(),
        "export file missing: {path}"
    );
}

#[then("the export row count is {count:usize}")]
fn the_export_row_count_is(world: &World, count: usize) {
    let report = world.report.get().expect("report should be set").clone();
    assert_eq!(report.rows, count);

    let contents = export_contents(world);
    assert_eq!(contents.lines().count(), count + 1);
}

#[then("the export header is \"{header}\"")]
fn the_export_header_is(world: &World, header: String) {
    let contents = export_contents(world);
    assert_eq!(contents.lines().next(), Some(header.as_str()));
}

#[then("the first data row starts with \"{prefix}\"")]
fn the_first_data_row_starts_with(world: &World, prefix: String) {
    let row = first_data_row(world);
    assert!(row.starts_with(&prefix), "row was: {row}");
}

#[then("the first data row contains \"{text}\"")]
fn the_first_data_row_contains(world: &World, text: String) {
    let row = first_data_row(world);
    assert!(row.contains(&text), "row was: {row}");
}

#[scenario(path = "tests/features/export_flow.feature", index = 0)]
fn export_the_incidents_matching_a_query(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/export_flow.feature", index = 1)]
fn an_empty_query_exports_the_whole_listing(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/export_flow.feature", index = 2)]
fn matching_is_case_insensitive(world: World) {
    drop(world);
}

#[scenario(path = "tests/features/export_flow.feature", index = 3)]
fn a_query_without_matches_still_writes_the_header(world: World) {
    drop(world);
}

fn export(world: &World, entity: &str, query: &str) {
    let out_dir = export_dir(world);
    let args = CliArgs {
        entity: EntityKind::from_slug(entity).expect("known entity slug"),
        query: query.to_owned(),
        out_dir: out_dir.clone(),
        fixtures: None,
        operator: "soporte".to_owned(),
        operator_role: Role::Support,
    };
    let sink = DirSink::open(&out_dir).expect("open export directory");
    let today = NaiveDate::from_ymd_opt(2025, 9, 20).expect("valid date");
    let report = run(&args, &sink, today).expect("export should succeed");
    world.report.set(report);
}

fn export_dir(world: &World) -> Utf8PathBuf {
    world
        .out_dir
        .get()
        .expect("export directory should be set")
        .clone()
}

fn export_contents(world: &World) -> String {
    let report = world.report.get().expect("report should be set").clone();
    let path = export_dir(world).join(&report.filename);
    std::fs::read_to_string(path.as_std_path()).expect("read export file")
}

fn first_data_row(world: &World) -> String {
    let contents = export_contents(world);
    contents
        .lines()
        .nth(1)
        .expect("export should have a data row")
        .to_owned()
}
