//! Writes the grouped street records as JSON documents.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::filesio::ReadWriter;
use crate::grouping::LetterGroup;
use crate::schedule::StreetRecord;

/// Top-level object shape of each output document.
#[derive(Serialize)]
struct StreetsFile<'a> {
    streets: &'a [StreetRecord],
}

/// Output filename for a bucket.
pub fn group_filename(group: LetterGroup) -> PathBuf {
    PathBuf::from(format!("streets-{}.json", group))
}

/// Writes one `streets-<bucket>.json` per bucket into `out_writer`,
/// overwriting existing files. Every bucket is written, including empty
/// ones. Returns the written paths, in bucket order.
pub fn write_street_files(
    out_writer: &dyn ReadWriter,
    groups: &[(LetterGroup, Vec<StreetRecord>)],
) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(groups.len());
    for (group, records) in groups {
        let path = group_filename(*group);
        let mut file = out_writer
            .open_write(&path)
            .with_context(|| format!("opening output file {:?}", path))?;
        serde_json::to_writer_pretty(&mut file, &StreetsFile { streets: records })
            .with_context(|| format!("writing street records to {:?}", path))?;
        file.commit()
            .with_context(|| format!("committing output file {:?}", path))?;
        paths.push(path);
    }
    Ok(paths)
}
