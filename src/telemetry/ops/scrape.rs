use crate::telemetry::ctx::{OpMarker, PhaseName};

#[derive(Copy, Clone, Debug)]
pub struct Scrape;

/// Pipeline steps, in the order a successful run enters them.
#[derive(Copy, Clone, Debug)]
pub enum Phase { Fetch, Parse, Render, Extract, Write }

impl PhaseName for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Fetch => "fetch",
        Phase::Parse => "parse",
        Phase::Render => "render",
        Phase::Extract => "extract",
        Phase::Write => "write",
    }}
}

impl OpMarker for Scrape {
    const NAME: &'static str = "scrape";
    type Phase = Phase;
}
