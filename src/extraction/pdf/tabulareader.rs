//! Reads tables from a PDF via Tabula, without a template: Tabula
//! detects table areas on each page itself.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{PageTables, TableReader};

#[derive(Deserialize, Debug)]
#[serde(transparent)]
pub struct JsonTableSet(pub Vec<JsonTable>);

#[allow(dead_code)]
#[derive(Deserialize, Debug)]
pub struct JsonTable {
    pub extraction_method: String,
    pub page_number: i32,
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub right: f32,
    pub bottom: f32,
    pub data: Vec<JsonRow>,
}

#[derive(Deserialize, Debug)]
pub struct JsonRow(pub Vec<JsonCell>);

#[allow(dead_code)]
#[derive(Deserialize, Debug)]
pub struct JsonCell {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
}

/// Client wrapper around Tabula.
pub struct TabulaClient {
    vm: tabula::TabulaVM,
}

impl TabulaClient {
    pub fn new(libpath: &str) -> Result<Self> {
        let vm = tabula::TabulaVM::new(libpath, false)?;
        Ok(TabulaClient { vm })
    }

    /// Reads the tables Tabula detects on a single page.
    fn read_page(&self, pdf_path: &Path, page_number: i32) -> Result<Vec<JsonTable>> {
        let env = self.vm.attach().with_context(|| "attaching to TabulaVM")?;

        let pages = [page_number];
        // No page areas: Tabula considers the whole page.
        let page_areas: Option<&[(i32, tabula::Rectangle)]> = None;

        let tabula = env
            .configure_tabula(
                page_areas,
                Some(&pages),
                tabula::OutputFormat::Json,
                false,
                tabula::ExtractionMethod::Decide,
                false,
                None,
            )
            .with_context(|| "configuring Tabula to extract tables")?;

        let extracted_file = tempfile::NamedTempFile::new()?;
        tabula.parse_document_into(pdf_path, extracted_file.path())?;
        let result: JsonTableSet = serde_json::from_reader(extracted_file)
            .with_context(|| "parsing JSON output from Tabula")?;

        Ok(result.0)
    }
}

impl TableReader for TabulaClient {
    fn read_tables(&self, pdf_path: &Path) -> Result<Vec<PageTables>> {
        // Tabula only reports pages it finds tables on, so the page list
        // comes from the document structure itself.
        let document = lopdf::Document::load(pdf_path)
            .with_context(|| format!("opening PDF {:?}", pdf_path))?;
        let page_numbers: Vec<i32> = document.get_pages().keys().map(|&n| n as i32).collect();
        drop(document);

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page_number in page_numbers {
            let json_tables = self
                .read_page(pdf_path, page_number)
                .with_context(|| format!("extracting tables from page {}", page_number))?;
            pages.push(PageTables {
                page_number,
                tables: json_tables.into_iter().map(Into::into).collect(),
            });
        }

        Ok(pages)
    }
}
