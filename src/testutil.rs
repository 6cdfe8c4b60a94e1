//! Shared helpers for tests.

use std::cell::RefCell;
use std::path::Path;

use anyhow::{Result, anyhow};

use crate::extraction::pdf::{PageTables, TableReader};
use crate::extraction::streetextract::{ExtractEvent, ExtractEvents};
use crate::schedule::{Day, StreetRecord, Zone};

/// Builds a `StreetRecord` succinctly.
pub fn street(street: &str, low: i32, high: i32, day: Day, zone: Zone) -> StreetRecord {
    StreetRecord {
        street: street.to_string(),
        low,
        high,
        day,
        zone,
    }
}

/// `TableReader` yielding canned pages. Single use per instance.
pub struct FakeTableReader {
    pages: RefCell<Vec<PageTables>>,
}

impl FakeTableReader {
    pub fn new(pages: Vec<PageTables>) -> Self {
        Self {
            pages: RefCell::new(pages),
        }
    }
}

impl TableReader for FakeTableReader {
    fn read_tables(&self, _pdf_path: &Path) -> Result<Vec<PageTables>> {
        Ok(std::mem::take(&mut self.pages.borrow_mut()))
    }
}

/// `TableReader` that always fails, as an unreadable document does.
pub struct FailingTableReader;

impl TableReader for FailingTableReader {
    fn read_tables(&self, pdf_path: &Path) -> Result<Vec<PageTables>> {
        Err(anyhow!("cannot open {:?}", pdf_path))
    }
}

/// `ExtractEvents` sink collecting every event, optionally cancelling
/// after a number of pages.
#[derive(Default)]
pub struct SinkEvents {
    pub events: Vec<ExtractEvent>,
    cancel_after_pages: Option<usize>,
}

impl SinkEvents {
    pub fn cancelling_after_first_page() -> Self {
        Self {
            events: Vec::new(),
            cancel_after_pages: Some(1),
        }
    }

    fn pages_started(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ExtractEvent::PageStarted { .. }))
            .count()
    }
}

impl ExtractEvents for SinkEvents {
    fn on_event(&mut self, event: ExtractEvent) {
        self.events.push(event);
    }

    fn do_continue(&self) -> bool {
        match self.cancel_after_pages {
            None => true,
            Some(limit) => self.pages_started() < limit,
        }
    }
}
