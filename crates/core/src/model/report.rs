use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    #[error("report id cannot be empty")]
    EmptyId,

    #[error("wave height label cannot be empty")]
    EmptyWaveLabel,
}

//
// ─── IDS ───────────────────────────────────────────────────────────────────────
//

/// Unique identifier for a surf report.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportId(String);

impl ReportId {
    /// Creates a new `ReportId`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::EmptyId` if the id is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ReportError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ReportError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Returns the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReportId({})", self.0)
    }
}

//
// ─── WAVE HEIGHTS ──────────────────────────────────────────────────────────────
//

/// A single labeled wave-height reading (e.g. "North Shore" / "4-6 ft").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveHeight {
    label: String,
    value: String,
}

impl WaveHeight {
    /// Creates a reading.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::EmptyWaveLabel` if the label is blank.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Result<Self, ReportError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ReportError::EmptyWaveLabel);
        }
        Ok(Self {
            label,
            value: value.into(),
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

//
// ─── REPORT ────────────────────────────────────────────────────────────────────
//

/// A surf report as consumed by the display: metadata, discussion paragraphs
/// (already entity-decoded), wave-height readings, and an optional narration
/// audio file.
///
/// An empty `discussion` is legal and suppresses the playback/panel surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfReport {
    id: ReportId,
    last_build_date: DateTime<Utc>,
    discussion: Vec<String>,
    wave_heights: Vec<WaveHeight>,
    audio_file: Option<String>,
}

impl SurfReport {
    #[must_use]
    pub fn new(
        id: ReportId,
        last_build_date: DateTime<Utc>,
        discussion: Vec<String>,
        wave_heights: Vec<WaveHeight>,
        audio_file: Option<String>,
    ) -> Self {
        // Blank filenames behave like no narration at all.
        let audio_file = audio_file.filter(|f| !f.trim().is_empty());
        Self {
            id,
            last_build_date,
            discussion,
            wave_heights,
            audio_file,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ReportId {
        &self.id
    }

    #[must_use]
    pub fn last_build_date(&self) -> DateTime<Utc> {
        self.last_build_date
    }

    #[must_use]
    pub fn discussion(&self) -> &[String] {
        &self.discussion
    }

    #[must_use]
    pub fn wave_heights(&self) -> &[WaveHeight] {
        &self.wave_heights
    }

    #[must_use]
    pub fn audio_file(&self) -> Option<&str> {
        self.audio_file.as_deref()
    }

    /// True when there is discussion text to show; the entire playback/panel
    /// surface is suppressed otherwise.
    #[must_use]
    pub fn has_discussion(&self) -> bool {
        !self.discussion.is_empty()
    }
}
