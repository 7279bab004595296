use clap::Parser;
use anyhow::Result;
use dotenvy::dotenv;

mod output;
mod scrape;
mod telemetry;

#[derive(Parser)]
#[command(name = "page-scrape", about = "Fetch one web page and save its headings, links and paragraphs as CSV")]
struct Cli {
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(flatten)]
    scrape: scrape::ScrapeCmd,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    // initialize logging/tracing (stderr). Respect RUST_LOG and SCRAPE_LOG_FORMAT
    telemetry::config::init_tracing();
    let out = output::config::OutputConfig::from_env().with_json(cli.json);

    scrape::run(cli.scrape, out).await
}
