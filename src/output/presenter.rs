use std::io::{self, Write};

use super::config::{OutputConfig, OutputFormat};
use super::types::Envelope;

pub trait Presenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()>;
}

pub struct JsonPresenter { pub pretty: bool }
impl Presenter for JsonPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if self.pretty { serde_json::to_writer_pretty(&mut *w, env).map_err(to_io)? } else { serde_json::to_writer(&mut *w, env).map_err(to_io)? }
        writeln!(w)
    }
}

/// Human-readable closing line for a run: where the files went, or why nothing was written.
pub struct TextPresenter;
impl Presenter for TextPresenter {
    fn emit(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        if let Some(err) = &env.error {
            return writeln!(w, "Error Fetching the page: {}", err);
        }
        let Some(report) = &env.result else { return Ok(()) };
        let quoted: Vec<String> = report.files.iter().map(|p| format!("'{}'", p.display())).collect();
        writeln!(w)?;
        writeln!(w, "Data has been saved to {}.", join_paths(&quoted))
    }
}

pub struct Emitter {
    presenter: Box<dyn Presenter>,
}

impl Emitter {
    pub fn from_config(cfg: OutputConfig) -> Self {
        let presenter: Box<dyn Presenter> = match cfg.format {
            OutputFormat::Json => Box::new(JsonPresenter { pretty: cfg.pretty }),
            OutputFormat::Text => Box::new(TextPresenter),
        };
        Emitter { presenter }
    }

    pub fn emit_to(&self, env: &Envelope, w: &mut dyn Write) -> io::Result<()> {
        self.presenter.emit(env, w)?;
        w.flush()
    }
}

// "'a'", "'a' and 'b'", "'a', 'b', and 'c'"
fn join_paths(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{} and {}", a, b),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

fn to_io(e: serde_json::Error) -> io::Error { io::Error::new(io::ErrorKind::Other, e) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::types::ScrapeReport;
    use std::path::PathBuf;

    fn saved_envelope() -> Envelope {
        Envelope::result("scrape", ScrapeReport {
            url: "http://example.com/".into(),
            bytes: 10,
            headings: 0,
            links: 0,
            paragraphs: 0,
            files: vec![
                PathBuf::from("scraped_data/headings.csv"),
                PathBuf::from("scraped_data/links.csv"),
                PathBuf::from("scraped_data/paragraphs.csv"),
            ],
        })
    }

    #[test]
    fn text_completion_names_all_files() {
        let mut buf = Vec::new();
        TextPresenter.emit(&saved_envelope(), &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(
            s,
            "\nData has been saved to 'scraped_data/headings.csv', 'scraped_data/links.csv', and 'scraped_data/paragraphs.csv'.\n"
        );
    }

    #[test]
    fn text_failure_line() {
        let mut buf = Vec::new();
        TextPresenter.emit(&Envelope::failure("scrape", "boom"), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Error Fetching the page: boom\n");
    }

    #[test]
    fn json_is_single_line() {
        let mut buf = Vec::new();
        JsonPresenter { pretty: false }.emit(&saved_envelope(), &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s.lines().count(), 1);
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["op"], "scrape");
        assert_eq!(v["result"]["files"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn join_two_and_one() {
        assert_eq!(join_paths(&["'a'".into()]), "'a'");
        assert_eq!(join_paths(&["'a'".into(), "'b'".into()]), "'a' and 'b'");
    }
}
