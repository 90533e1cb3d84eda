use chrono::{DateTime, Utc};

use services::AudioStore;
use swell_core::{ReportId, SurfReport};

#[derive(Clone, Debug, PartialEq)]
pub struct WaveHeightVm {
    pub label: String,
    pub value: String,
}

/// Display-ready projection of a surf report.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportVm {
    pub id: ReportId,
    /// "August 5, 2026" for the header line.
    pub headline_date: String,
    /// "8/05" for the nav badge.
    pub date_badge: String,
    /// "August 05, 2026" for the badge tooltip.
    pub date_full: String,
    pub paragraphs: Vec<String>,
    pub wave_heights: Vec<WaveHeightVm>,
    pub audio_file: Option<String>,
    pub audio_url: Option<String>,
}

#[must_use]
pub fn map_report(report: &SurfReport, audio: &AudioStore) -> ReportVm {
    // An unresolvable narration behaves exactly like no narration at all.
    let audio_url = report
        .audio_file()
        .and_then(|file| audio.resolve(file).ok())
        .map(|url| url.to_string());
    let audio_file = audio_url
        .is_some()
        .then(|| report.audio_file().map(str::to_string))
        .flatten();

    ReportVm {
        id: report.id().clone(),
        headline_date: format_headline_date(report.last_build_date()),
        date_badge: format_date_badge(report.last_build_date()),
        date_full: format_date_full(report.last_build_date()),
        paragraphs: report.discussion().to_vec(),
        wave_heights: report
            .wave_heights()
            .iter()
            .map(|wave| WaveHeightVm {
                label: wave.label().to_string(),
                value: wave.value().to_string(),
            })
            .collect(),
        audio_file,
        audio_url,
    }
}

fn format_headline_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn format_date_badge(date: DateTime<Utc>) -> String {
    date.format("%-m/%d").to_string()
}

fn format_date_full(date: DateTime<Utc>) -> String {
    date.format("%B %d, %Y").to_string()
}
