use std::env;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use swell_core::{ReportId, SurfReport, WaveHeight};

use crate::error::ReportServiceError;

/// Read-only source of the latest surf report.
///
/// The display treats the report as an opaque value with loading/error
/// states; it never retries on its own.
#[async_trait]
pub trait ReportProvider: Send + Sync {
    async fn latest(&self) -> Result<SurfReport, ReportServiceError>;
}

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub endpoint: String,
}

impl ReportConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "https://swellcast.app/api/report/latest";

    #[must_use]
    pub fn from_env() -> Self {
        let endpoint = env::var("SWELLCAST_REPORT_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ENDPOINT.into());
        Self { endpoint }
    }
}

/// Fetches the NOAA-derived surf report over HTTP.
#[derive(Clone)]
pub struct NoaaReportService {
    client: Client,
    config: ReportConfig,
}

impl NoaaReportService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ReportConfig::from_env())
    }

    #[must_use]
    pub fn new(config: ReportConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl ReportProvider for NoaaReportService {
    async fn latest(&self) -> Result<SurfReport, ReportServiceError> {
        let response = self.client.get(&self.config.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(ReportServiceError::HttpStatus(response.status()));
        }

        let body: RemoteReport = response.json().await?;
        body.into_report()
    }
}

//
// ─── WIRE FORMAT ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteReport {
    id: String,
    last_build_date: String,
    #[serde(default)]
    discussion: Vec<String>,
    #[serde(default)]
    wave_heights: Vec<RemoteWaveHeight>,
    #[serde(default)]
    audio_file: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoteWaveHeight {
    label: String,
    value: String,
}

impl RemoteReport {
    fn into_report(self) -> Result<SurfReport, ReportServiceError> {
        let id = ReportId::new(self.id)?;
        let last_build_date = parse_build_date(&self.last_build_date)?;

        // Paragraphs arrive entity-encoded; decode once here so the rest of
        // the system only ever sees display text.
        let discussion = self
            .discussion
            .iter()
            .map(|paragraph| html_escape::decode_html_entities(paragraph).into_owned())
            .collect();

        let wave_heights = self
            .wave_heights
            .into_iter()
            .map(|wave| WaveHeight::new(wave.label, wave.value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SurfReport::new(
            id,
            last_build_date,
            discussion,
            wave_heights,
            self.audio_file,
        ))
    }
}

fn parse_build_date(raw: &str) -> Result<DateTime<Utc>, ReportServiceError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| ReportServiceError::InvalidDate { raw: raw.into() })
}
