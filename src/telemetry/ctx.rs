use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use tracing::{debug, info, info_span, warn, Span};

use super::config::LogFormat;
use super::ops::scrape::Scrape;

pub trait PhaseName {
    fn name(&self) -> &'static str;
}

pub trait OpMarker {
    const NAME: &'static str;
    type Phase: PhaseName;
}

/// Logging handle for one operation. Spans carry the op and phase names as fields, so the
/// JSON formatter can group events without parsing messages.
pub struct LogCtx<O: OpMarker> {
    json: bool,
    _marker: PhantomData<O>,
}

impl<O: OpMarker> LogCtx<O> {
    pub fn new(format: LogFormat) -> Self {
        LogCtx { json: format == LogFormat::Json, _marker: PhantomData }
    }

    /// Root span for the whole run; logs the inputs once at `info`.
    pub fn start<'a, T>(&self, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        let details = Details::of(fields);
        info!(op = O::NAME, details = %details, "start");
        info_span!("op", op = O::NAME)
    }

    pub fn phase(&self, ph: &O::Phase) -> Span {
        info_span!("phase", op = O::NAME, phase = ph.name())
    }

    pub fn phase_kv<'a, T>(&self, ph: &O::Phase, fields: T) -> Span
    where
        T: IntoIterator<Item = (&'a str, String)>,
    {
        debug!(op = O::NAME, phase = ph.name(), details = %Details::of(fields), "enter");
        self.phase(ph)
    }

    pub fn debug_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        let details = Details::of(kv);
        if self.json { debug!(op = O::NAME, details = %details, "{}", msg); }
        else { debug!("{} {}", msg, details); }
    }

    pub fn warn_kv<'a, D>(&self, msg: &str, kv: D)
    where
        D: IntoIterator<Item = (&'a str, String)>,
    {
        let details = Details::of(kv);
        if self.json { warn!(op = O::NAME, details = %details, "{}", msg); }
        else { warn!("{} {}", msg, details); }
    }
}

impl LogCtx<Scrape> {
    pub fn field_counts(&self, headings: usize, links: usize, paragraphs: usize) {
        if self.json { info!(op = Scrape::NAME, headings, links, paragraphs, "extracted"); }
        else { info!("🔎 Extracted — headings={} links={} paragraphs={}", headings, links, paragraphs); }
    }

    pub fn saved(&self, path: &Path, rows: usize) {
        if self.json { info!(op = Scrape::NAME, path = %path.display(), rows, "saved"); }
        else { info!("💾 Saved {} ({} rows)", path.display(), rows); }
    }
}

/// `key=value` pairs in insertion order; values containing whitespace or `=` are quoted.
struct Details<'a>(Vec<(&'a str, String)>);

impl<'a> Details<'a> {
    fn of<T: IntoIterator<Item = (&'a str, String)>>(kv: T) -> Self {
        Details(kv.into_iter().collect())
    }
}

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 { f.write_str(" ")?; }
            if v.is_empty() || v.contains(|c: char| c.is_whitespace() || c == '=') {
                write!(f, "{}={:?}", k, v)?;
            } else {
                write!(f, "{}={}", k, v)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_keep_order() {
        let d = Details::of([("url", "http://a/".to_string()), ("bytes", "12".to_string())]);
        assert_eq!(d.to_string(), "url=http://a/ bytes=12");
    }

    #[test]
    fn details_quote_awkward_values() {
        let d = Details::of([
            ("error", "connection refused".to_string()),
            ("q", "a=b".to_string()),
            ("empty", String::new()),
        ]);
        assert_eq!(d.to_string(), r#"error="connection refused" q="a=b" empty="""#);
    }

    #[test]
    fn no_details_is_empty() {
        let d = Details::of(std::iter::empty::<(&str, String)>());
        assert_eq!(d.to_string(), "");
    }

    #[test]
    fn json_flag_follows_format() {
        assert!(LogCtx::<Scrape>::new(LogFormat::Json).json);
        assert!(!LogCtx::<Scrape>::new(LogFormat::Compact).json);
    }
}
