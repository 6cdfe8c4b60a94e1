pub mod tabulareader;

use std::path::Path;

use anyhow::Result;

use crate::table::Table;

/// Tables read from a single page of a PDF.
#[derive(Debug)]
pub struct PageTables {
    /// 1-based page number.
    pub page_number: i32,
    /// Tables found on the page, in document order. May be empty.
    pub tables: Vec<Table>,
}

/// The entire contract required from the PDF table-extraction library:
/// per page, a sequence of tables, each a sequence of rows of text cells.
pub trait TableReader {
    /// Reads every table from every page of the PDF at `pdf_path`, in
    /// document order. Fails only if the document cannot be read.
    fn read_tables(&self, pdf_path: &Path) -> Result<Vec<PageTables>>;
}
