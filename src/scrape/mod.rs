use anyhow::{Context, Result};
use clap::Args;
use reqwest::Client;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::output::config::OutputConfig;
use crate::output::types::Envelope;
use crate::output::Emitter;
use crate::telemetry::{self};
use crate::telemetry::ctx::LogCtx;
use crate::telemetry::ops::scrape::{Phase as ScrapePhase, Scrape as ScrapeOp};

mod fetch;
mod parse;
mod render;
mod write;
pub mod extractor;
pub mod types;

use types::{Outcome, ScrapeReport};

#[derive(Args)]
pub struct ScrapeCmd {
    /// Page to fetch; prompted for on stdin when omitted
    #[arg(long, env = "SCRAPE_URL")] pub url: Option<String>,
    /// Folder the three CSV files are written to
    #[arg(long, env = "SCRAPE_OUT_DIR", default_value = write::DEFAULT_FOLDER)] pub out_dir: PathBuf,
    /// Skip printing the formatted document tree
    #[arg(long, default_value_t = false)] pub no_tree: bool,
}

pub struct ScrapeRequest<'a> {
    pub url: &'a str,
    pub out_dir: &'a Path,
    pub show_tree: bool,
    pub show_fields: bool,
}

pub async fn run(args: ScrapeCmd, out: OutputConfig) -> Result<()> {
    let url = match args.url.clone() {
        Some(u) => u,
        None => read_url(out, &mut io::stdin().lock(), &mut io::stdout(), &mut io::stderr())?,
    };
    let mut stdout = io::stdout();
    finish(&url, &args, out, &mut stdout).await
}

/// Run the pipeline for `url` and write the closing envelope to `w`.
async fn finish(url: &str, args: &ScrapeCmd, out: OutputConfig, w: &mut dyn Write) -> Result<()> {
    let log = telemetry::scrape();
    let _g = log.start([
        ("url", url.to_string()),
        ("out_dir", args.out_dir.display().to_string()),
    ]).entered();

    let client = Client::new();
    let req = ScrapeRequest {
        url,
        out_dir: &args.out_dir,
        show_tree: out.is_text() && !args.no_tree,
        show_fields: out.is_text(),
    };

    let env = match execute(&client, &req, &log).await? {
        Outcome::Saved(report) => Envelope::result("scrape", report),
        Outcome::FetchFailed(err) => Envelope::failure("scrape", err),
    };
    Emitter::from_config(out).emit_to(&env, w)?;
    Ok(())
}

// stdout carries only the envelope in JSON mode, so the prompt moves to stderr.
fn read_url(out: OutputConfig, input: &mut dyn BufRead, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<String> {
    if out.is_text() { prompt_url(input, stdout) } else { prompt_url(input, stderr) }
}

/// Fetch, parse, extract and persist one page.
///
/// A fetch failure comes back as [`Outcome::FetchFailed`] before anything touches the
/// disk. Write failures are returned as errors and may leave earlier files behind.
pub async fn execute(client: &Client, req: &ScrapeRequest<'_>, log: &LogCtx<ScrapeOp>) -> Result<Outcome> {
    let body = {
        let _s = log.phase_kv(&ScrapePhase::Fetch, [("url", req.url.to_string())]).entered();
        match fetch::fetch_page(client, req.url).await {
            Ok(b) => b,
            Err(e) => {
                let msg = format!("{e:#}");
                log.warn_kv("fetch failed", [("url", req.url.to_string()), ("error", msg.clone())]);
                return Ok(Outcome::FetchFailed(msg));
            }
        }
    };

    let doc = { let _s = log.phase(&ScrapePhase::Parse).entered(); parse::parse_document(&body) };
    log.debug_kv("parsed", [("bytes", body.len().to_string()), ("parse_errors", doc.errors.len().to_string())]);

    if req.show_tree {
        let _s = log.phase(&ScrapePhase::Render).entered();
        println!("\nFormatted HTML Content:\n");
        print!("{}", render::prettify(&doc));
    }

    let extracted = { let _s = log.phase(&ScrapePhase::Extract).entered(); extractor::extract_all(&doc) };
    log.field_counts(extracted.headings.len(), extracted.links.len(), extracted.paragraphs.len());

    if req.show_fields {
        println!("\nExtracting Data...");
        println!("\nHeadings (H1 tags) are: \n{:?}", extracted.headings);
        println!("\nLinks (Anchor tags):\n{:?}", extracted.links);
        println!("\nParagraphs (P tags):\n{:?}", extracted.paragraphs);
    }

    let files = {
        let _s = log.phase_kv(&ScrapePhase::Write, [("folder", req.out_dir.display().to_string())]).entered();
        write::save_all(&extracted, req.out_dir)?
    };
    let rows = [extracted.headings.len(), extracted.links.len(), extracted.paragraphs.len()];
    for (path, n) in files.iter().zip(rows) { log.saved(path, n); }

    Ok(Outcome::Saved(ScrapeReport {
        url: req.url.to_string(),
        bytes: body.len(),
        headings: extracted.headings.len(),
        links: extracted.links.len(),
        paragraphs: extracted.paragraphs.len(),
        files,
    }))
}

fn prompt_url(input: &mut dyn BufRead, output: &mut dyn Write) -> Result<String> {
    write!(output, "Enter the URL of the webpage to scrape: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading URL from stdin")?;
    Ok(line.trim().to_string())
}
