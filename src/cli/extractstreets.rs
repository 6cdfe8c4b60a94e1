use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use crate::{
    config::ConfigArgs,
    extraction::{
        pdf::tabulareader::TabulaClient,
        rownorm::RowRepair,
        streetextract::{self, ExtractEvent, ExtractEvents},
    },
    filesio::DirReadWriter,
    grouping, output, validation,
};

/// Extracts street pickup records from the waste pickup schedule PDF
/// into grouped JSON files.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to the input pickup-schedule PDF.
    input_pdf: PathBuf,

    /// Directory to write the street JSON files into.
    #[arg(long, default_value = "parsed-data")]
    output: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,

    /// Path to the Tabula JAR file.
    #[arg(long, default_value = "tabula.jar")]
    tabula_libpath: String,
}

/// Runs the command.
pub fn run(cmd: &Command) -> Result<()> {
    if !cmd.input_pdf.exists() {
        bail!("input PDF not found: {:?}", cmd.input_pdf);
    }

    let config = cmd.config.load()?;

    let tabula_client =
        TabulaClient::new(&cmd.tabula_libpath).with_context(|| "initialising Tabula")?;

    let mut events = EventDisplayer::new();
    let records = streetextract::extract_streets(
        &tabula_client,
        &cmd.input_pdf,
        &config.day_patches,
        &mut events,
    )?;

    if records.is_empty() {
        bail!("no street records extracted from {:?}", cmd.input_pdf);
    }
    println!("Extracted {} street records", records.len());

    let groups = grouping::group_streets(&records);

    let out_writer = DirReadWriter::new(&cmd.output);
    let paths = output::write_street_files(&out_writer, &groups)?;
    for ((_, members), path) in groups.iter().zip(&paths) {
        println!(
            "Saved {} streets to {}",
            members.len(),
            cmd.output.join(path).display()
        );
    }

    let report = validation::validate(&records, &config.expectations);
    print_report(&report);

    Ok(())
}

fn print_report(report: &validation::ValidationReport) {
    println!();
    println!("Validation checks:");
    for check in &report.checks {
        let status = if check.passed { "PASS" } else { "FAIL" };
        println!("  {} {}: {}", status, check.name, check.detail);
    }
    let passed = report.checks.iter().filter(|check| check.passed).count();
    println!(
        "Validation: {} ({}/{} checks passed)",
        if report.passed() { "PASSED" } else { "FAILED" },
        passed,
        report.checks.len()
    );
}

/// Renders extraction events to the log for operator visibility.
struct EventDisplayer;

impl EventDisplayer {
    fn new() -> Self {
        Self
    }
}

impl ExtractEvents for EventDisplayer {
    fn on_event(&mut self, event: ExtractEvent) {
        match event {
            ExtractEvent::DocumentOpened { page_count } => {
                log::info!("found {} pages", page_count);
            }
            ExtractEvent::PageStarted {
                page_number,
                table_count,
            } => {
                log::info!("processing page {}: {} tables", page_number, table_count);
            }
            ExtractEvent::TableStarted {
                page_number,
                table_index,
                row_count,
            } => {
                log::info!(
                    "page {} table {}: {} rows",
                    page_number,
                    table_index + 1,
                    row_count
                );
            }
            ExtractEvent::RowSkipped {
                page_number,
                row_index,
                row,
                reason,
            } => {
                log::info!(
                    "page {} row {}: skipped ({}): {:?}",
                    page_number,
                    row_index + 1,
                    reason,
                    row
                );
            }
            ExtractEvent::RowRepaired {
                page_number,
                row_index,
                repair,
            } => match repair {
                RowRepair::PatchedDay { .. } => {
                    log::warn!("page {} row {}: {}", page_number, row_index + 1, repair);
                }
                _ => {
                    log::info!("page {} row {}: {}", page_number, row_index + 1, repair);
                }
            },
            ExtractEvent::Completed { record_count } => {
                log::info!("extraction complete: {} records", record_count);
            }
            ExtractEvent::Cancelled => {
                log::warn!("extraction cancelled");
            }
        }
    }

    fn do_continue(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::path::Path;

    use googletest::{
        assert_that, expect_that,
        matchers::{elements_are, eq},
    };
    use serde_json::Value;

    use crate::config::Config;
    use crate::extraction::pdf::PageTables;
    use crate::extraction::streetextract::extract_streets;
    use crate::filesio::Reader;
    use crate::filesio::mem::{MemFilesHandle, MemReadWriter};
    use crate::grouping::group_streets;
    use crate::output::write_street_files;
    use crate::schedule::{Day, Zone};
    use crate::table::Table;
    use crate::testutil::{FakeTableReader, SinkEvents, street};
    use crate::validation::validate;

    fn read_json(read_writer: &MemReadWriter, path: &str) -> Value {
        let mut contents = String::new();
        read_writer
            .open_read(Path::new(path))
            .expect("should open")
            .read_to_string(&mut contents)
            .expect("should read");
        serde_json::from_str(&contents).expect("should parse as JSON")
    }

    #[googletest::test]
    fn test_end_to_end_single_record() {
        let reader = FakeTableReader::new(vec![PageTables {
            page_number: 1,
            tables: vec![Table::from([["10", "58", "ABBOTT ST", "Monday", "B"]])],
        }]);
        let mut events = SinkEvents::default();

        let records = extract_streets(&reader, Path::new("schedule.pdf"), &[], &mut events)
            .expect("extraction should succeed");
        assert_that!(
            records,
            elements_are![eq(&street("ABBOTT ST", 10, 58, Day::Monday, Zone::B))]
        );

        let read_writer = MemReadWriter::new(MemFilesHandle::default());
        write_street_files(&read_writer, &group_streets(&records))
            .expect("write should succeed");

        expect_that!(
            read_json(&read_writer, "streets-a-c.json"),
            eq(&serde_json::json!({
                "streets": [{
                    "street": "ABBOTT ST",
                    "low": 10,
                    "high": 58,
                    "day": "Monday",
                    "zone": "B"
                }]
            }))
        );
        for other in [
            "streets-d-g.json",
            "streets-h-m.json",
            "streets-n-s.json",
            "streets-t-z.json",
        ] {
            expect_that!(
                read_json(&read_writer, other),
                eq(&serde_json::json!({ "streets": [] }))
            );
        }
    }

    #[googletest::test]
    fn test_end_to_end_volusia_patch_with_default_config() {
        let config = Config::default();
        let reader = FakeTableReader::new(vec![PageTables {
            page_number: 1,
            tables: vec![Table::from([["16", "16", "VOLUSIA RD", "0", "A"]])],
        }]);
        let mut events = SinkEvents::default();

        let records = extract_streets(
            &reader,
            Path::new("schedule.pdf"),
            &config.day_patches,
            &mut events,
        )
        .expect("extraction should succeed");

        // Patched to the placeholder day rather than discarded.
        assert_that!(
            records,
            elements_are![eq(&street("VOLUSIA RD", 16, 16, Day::Wednesday, Zone::A))]
        );

        let report = validate(&records, &config.expectations);
        let day_check = report
            .checks
            .iter()
            .find(|check| check.name == "day-domain")
            .expect("battery should include the day-domain check");
        expect_that!(day_check.passed, eq(true));
    }
}
