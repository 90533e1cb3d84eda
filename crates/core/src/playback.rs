use crate::model::ReportId;
use crate::time::format_timestamp;

//
// ─── USAGE EVENTS ──────────────────────────────────────────────────────────────
//

/// A fire-and-forget analytics label describing a playback lifecycle moment.
///
/// Labels name the narration asset (the resource id), not the report it
/// belongs to. Constructed at the moment of emission and handed straight to
/// the sink; nothing retains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEvent {
    label: String,
}

impl UsageEvent {
    /// Label for a play-begin signal. A resume (>= 1 s in) carries the
    /// formatted position so fresh starts and resumes are distinguishable.
    #[must_use]
    pub fn started(resource_id: &str, elapsed_seconds: f64) -> Self {
        let suffix = if elapsed_seconds >= 1.0 {
            format!(" {}", format_timestamp(elapsed_seconds))
        } else {
            String::new()
        };
        Self {
            label: format!("Audio started{suffix} ({resource_id})"),
        }
    }

    /// Label for a natural end-of-stream.
    #[must_use]
    pub fn completed(resource_id: &str) -> Self {
        Self {
            label: format!("Audio completed ({resource_id})"),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

//
// ─── AUDIO SESSION ─────────────────────────────────────────────────────────────
//

/// The single logical audio session behind the playback controls.
///
/// One instance exists per page and is shared by reference among every
/// consumer (progress indicator, keyboard shortcut, analytics). All
/// transitions are reactions to discrete external events; the session never
/// times anything itself.
///
/// Without a resource id there is no playback: `play`, `toggle`, and event
/// construction are all inert, which is how the disabled-UI state is modeled.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSession {
    report_id: ReportId,
    resource_id: Option<String>,
    is_playing: bool,
    elapsed_seconds: f64,
    duration_seconds: Option<f64>,
}

impl AudioSession {
    #[must_use]
    pub fn new(report_id: ReportId, resource_id: Option<String>) -> Self {
        Self {
            report_id,
            resource_id: resource_id.filter(|r| !r.trim().is_empty()),
            is_playing: false,
            elapsed_seconds: 0.0,
            duration_seconds: None,
        }
    }

    #[must_use]
    pub fn report_id(&self) -> &ReportId {
        &self.report_id
    }

    /// The narration asset filename, if any.
    #[must_use]
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    #[must_use]
    pub fn has_resource(&self) -> bool {
        self.resource_id.is_some()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn duration_seconds(&self) -> Option<f64> {
        self.duration_seconds
    }

    /// Normalized `[0,1]` completion ratio; `0` while the duration is
    /// unknown or zero.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        match self.duration_seconds {
            Some(duration) if duration > 0.0 => {
                (self.elapsed_seconds / duration).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Transitions to playing. Returns `false` (no state change) when
    /// already playing or when no resource is configured.
    pub fn play(&mut self) -> bool {
        if self.is_playing || self.resource_id.is_none() {
            return false;
        }
        self.is_playing = true;
        true
    }

    /// Transitions to paused. Returns `false` when already paused.
    pub fn pause(&mut self) -> bool {
        if !self.is_playing {
            return false;
        }
        self.is_playing = false;
        true
    }

    /// Records the last-observed position from the media's native
    /// time-advance signal. Delivery cadence is the runtime's business;
    /// irregular or sparse updates are fine.
    pub fn note_time_update(&mut self, elapsed_seconds: f64, duration_seconds: Option<f64>) {
        self.elapsed_seconds = elapsed_seconds.max(0.0);
        self.duration_seconds = duration_seconds.filter(|d| d.is_finite() && *d > 0.0);
    }

    /// Event for the native play-begin signal, or `None` without a resource.
    #[must_use]
    pub fn started_event(&self) -> Option<UsageEvent> {
        let resource = self.resource_id.as_deref()?;
        Some(UsageEvent::started(resource, self.elapsed_seconds))
    }

    /// Handles natural end-of-stream: forces paused, resets the position,
    /// and yields the completion event. Repeated end signals after the reset
    /// yield `None`, so at most one event fires per playthrough.
    pub fn note_ended(&mut self) -> Option<UsageEvent> {
        if !self.is_playing && self.elapsed_seconds == 0.0 {
            return None;
        }
        self.is_playing = false;
        self.elapsed_seconds = 0.0;
        let resource = self.resource_id.as_deref()?;
        Some(UsageEvent::completed(resource))
    }
}
