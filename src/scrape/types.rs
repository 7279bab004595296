use serde::Serialize;
use std::path::PathBuf;

/// Summary of a finished run, as carried by the result envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeReport {
    pub url: String,
    pub bytes: usize,
    pub headings: usize,
    pub links: usize,
    pub paragraphs: usize,
    pub files: Vec<PathBuf>,
}

/// A failed fetch is not an error for the run: nothing is written and the process exits normally.
#[derive(Debug)]
pub enum Outcome {
    Saved(ScrapeReport),
    FetchFailed(String),
}
