//! Walks the PDF's pages and tables, normalizing every row into the
//! accumulated street-record list.

use std::path::Path;

use anyhow::{Context, Result};

use crate::extraction::pdf::TableReader;
use crate::extraction::rownorm::{self, DayPatch, RowOutcome, RowRepair, SkipReason};
use crate::schedule::StreetRecord;
use crate::table::Row;

/// Extraction event emitted to track progress and per-row decisions.
#[derive(Debug)]
pub enum ExtractEvent {
    /// The document was opened and its page list read.
    DocumentOpened { page_count: usize },
    /// A page's tables are about to be scanned.
    PageStarted {
        page_number: i32,
        table_count: usize,
    },
    /// A table's rows are about to be scanned.
    TableStarted {
        page_number: i32,
        table_index: usize,
        row_count: usize,
    },
    /// A row was discarded, with the reason.
    RowSkipped {
        page_number: i32,
        row_index: usize,
        row: Row,
        reason: SkipReason,
    },
    /// A corruption repair was applied to a row that was then accepted.
    RowRepaired {
        page_number: i32,
        row_index: usize,
        repair: RowRepair,
    },
    /// Scanning finished; no more events follow.
    Completed { record_count: usize },
    /// Scanning was cancelled via [ExtractEvents::do_continue], and no
    /// more events follow.
    Cancelled,
}

/// Trait to implement to receive notifications about extraction events,
/// or to cancel extraction early.
pub trait ExtractEvents {
    fn on_event(&mut self, event: ExtractEvent);
    fn do_continue(&self) -> bool;
}

/// Scans every page, table, and row of `input_pdf`, returning the
/// accepted records in document order (page, then table, then row).
///
/// Fails only if the document itself cannot be read. Individual bad rows
/// are reported through `events` and skipped; an empty result is returned
/// as an empty list for the caller to judge.
pub fn extract_streets(
    table_reader: &dyn TableReader,
    input_pdf: &Path,
    patches: &[DayPatch],
    events: &mut dyn ExtractEvents,
) -> Result<Vec<StreetRecord>> {
    let pages = table_reader
        .read_tables(input_pdf)
        .with_context(|| format!("reading tables from PDF {:?}", input_pdf))?;

    events.on_event(ExtractEvent::DocumentOpened {
        page_count: pages.len(),
    });

    let mut records: Vec<StreetRecord> = Vec::new();
    for page in pages {
        events.on_event(ExtractEvent::PageStarted {
            page_number: page.page_number,
            table_count: page.tables.len(),
        });

        for (table_index, mut table) in page.tables.into_iter().enumerate() {
            events.on_event(ExtractEvent::TableStarted {
                page_number: page.page_number,
                table_index,
                row_count: table.len(),
            });

            table.clean();
            for (row_index, row) in table.0.into_iter().enumerate() {
                match rownorm::normalize_row(row, patches) {
                    RowOutcome::Accepted { record, repairs } => {
                        for repair in repairs {
                            events.on_event(ExtractEvent::RowRepaired {
                                page_number: page.page_number,
                                row_index,
                                repair,
                            });
                        }
                        records.push(record);
                    }
                    RowOutcome::Skipped { row, reason } => {
                        events.on_event(ExtractEvent::RowSkipped {
                            page_number: page.page_number,
                            row_index,
                            row,
                            reason,
                        });
                    }
                }
            }
        }

        if !events.do_continue() {
            events.on_event(ExtractEvent::Cancelled);
            return Ok(records);
        }
    }

    events.on_event(ExtractEvent::Completed {
        record_count: records.len(),
    });

    Ok(records)
}
