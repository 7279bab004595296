use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl OutputConfig {
    pub fn from_env() -> Self {
        let format = match env::var("SCRAPE_OUTPUT_FORMAT").ok().as_deref() {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
        let pretty = parse_flag(env::var("SCRAPE_OUTPUT_PRETTY").ok().as_deref());
        OutputConfig { format, pretty }
    }

    /// `--json` on the command line wins over the environment.
    pub fn with_json(mut self, json: bool) -> Self {
        if json { self.format = OutputFormat::Json; }
        self
    }

    pub fn is_text(&self) -> bool { self.format == OutputFormat::Text }
}

fn parse_flag(v: Option<&str>) -> bool {
    matches!(v, Some(v) if v.eq_ignore_ascii_case("1") || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes"))
}
