use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::extractor::Extracted;

pub const DEFAULT_FOLDER: &str = "scraped_data";

#[derive(Copy, Clone, Debug)]
pub struct CsvTarget { pub file_name: &'static str, pub header: &'static str }

pub const HEADINGS: CsvTarget = CsvTarget { file_name: "headings.csv", header: "Headings" };
pub const LINKS: CsvTarget = CsvTarget { file_name: "links.csv", header: "Links" };
pub const PARAGRAPHS: CsvTarget = CsvTarget { file_name: "paragraphs.csv", header: "Paragraphs" };

/// Write `data` as a one-column CSV at `folder/file_name`, header row first.
///
/// The folder is created if missing and the file is truncated. Rows end in CRLF and
/// fields are quoted only when they contain a comma, quote, CR or LF. A failure part
/// way through leaves whatever was already written on disk.
pub fn save_csv(data: &[String], folder: &Path, file_name: &str, header: &str) -> Result<PathBuf> {
    fs::create_dir_all(folder).with_context(|| format!("creating folder {}", folder.display()))?;

    let path = folder.join(file_name);
    let mut w = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    w.write_record([header])?;
    for item in data {
        w.write_record([item])?;
    }
    w.flush().with_context(|| format!("flushing {}", path.display()))?;
    Ok(path)
}

/// Headings, links, then paragraphs. Stops at the first failed file.
pub fn save_all(extracted: &Extracted, folder: &Path) -> Result<Vec<PathBuf>> {
    let fields: [(&[String], CsvTarget); 3] = [
        (extracted.headings.as_slice(), HEADINGS),
        (extracted.links.as_slice(), LINKS),
        (extracted.paragraphs.as_slice(), PARAGRAPHS),
    ];
    let mut written = Vec::with_capacity(fields.len());
    for (data, target) in fields {
        written.push(save_csv(data, folder, target.file_name, target.header)?);
    }
    Ok(written)
}
