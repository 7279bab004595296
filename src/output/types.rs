use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::scrape::types::ScrapeReport;

pub const SCHEMA_VERSION: &str = "scrape.v1";

#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub schema_version: &'static str,
    pub time: DateTime<Utc>,
    pub request_id: Uuid,
    pub op: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScrapeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn result(op: &'static str, result: ScrapeReport) -> Self {
        Envelope {
            schema_version: SCHEMA_VERSION,
            time: Utc::now(),
            request_id: Uuid::new_v4(),
            op,
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(op: &'static str, error: impl Into<String>) -> Self {
        Envelope {
            schema_version: SCHEMA_VERSION,
            time: Utc::now(),
            request_id: Uuid::new_v4(),
            op,
            ok: false,
            result: None,
            error: Some(error.into()),
        }
    }
}
