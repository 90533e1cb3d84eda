use std::sync::Arc;

use dioxus::prelude::*;

use services::AnalyticsSink;
use swell_core::{AudioSession, UsageEvent};

use crate::notice::NoticeHandle;
use crate::scripts::{self, NARRATION_ELEMENT_ID};
use crate::vm::ReportVm;

/// Acknowledgment texts for the keyboard toggle, one per direction.
pub const PLAYING_NOTICE: &str = "so wow";
pub const PAUSING_NOTICE: &str = "such clairvoyance";

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Shared handle to the page's single audio session.
///
/// One controller exists per report surface and is provided through context;
/// every consumer (progress overlay, keyboard shortcut, analytics wiring)
/// observes the same `Signal<AudioSession>` rather than duplicating state.
#[derive(Clone, Copy, PartialEq)]
pub struct AudioController {
    session: Signal<AudioSession>,
}

#[must_use]
pub fn use_audio_controller(vm: &ReportVm) -> AudioController {
    let report_id = vm.id.clone();
    let resource = vm.audio_file.clone();
    let session = use_signal(move || AudioSession::new(report_id.clone(), resource.clone()));
    AudioController { session }
}

impl AudioController {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.session.read().is_playing()
    }

    #[must_use]
    pub fn has_resource(&self) -> bool {
        self.session.read().has_resource()
    }

    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        self.session.read().progress_fraction()
    }

    /// Starts playback: the session flips to playing immediately (optimistic)
    /// and the DOM element is asked to play. A rejected play is swallowed and
    /// the session falls back to paused; no error surfaces anywhere.
    pub fn play(&self) {
        let mut session = self.session;
        if !session.write().play() {
            return;
        }
        spawn(async move {
            if !scripts::start_playback(NARRATION_ELEMENT_ID).await {
                session.write().pause();
            }
        });
    }

    pub fn pause(&self) {
        let mut session = self.session;
        if !session.write().pause() {
            return;
        }
        spawn(async move {
            scripts::pause_playback(NARRATION_ELEMENT_ID).await;
        });
    }

    /// Reconciles with the native play-begin signal and yields the "started"
    /// usage event. The event captures the position at this moment, so a
    /// resume carries its timestamp.
    pub fn apply_native_play(&self) -> Option<UsageEvent> {
        let mut session = self.session;
        session.write().play();
        session.read().started_event()
    }

    pub fn apply_time_update(&self, elapsed: f64, duration: Option<f64>) {
        let mut session = self.session;
        session.write().note_time_update(elapsed, duration);
    }

    /// Natural end-of-stream: reset the session and yield the "completed"
    /// event at most once per playthrough.
    pub fn apply_ended(&self) -> Option<UsageEvent> {
        let mut session = self.session;
        session.write().note_ended()
    }
}

//
// ─── INTENTS ───────────────────────────────────────────────────────────────────
//

/// Discrete external events the playback surface reacts to. Each runs to
/// completion before the next is processed; nothing here blocks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaybackIntent {
    /// The user toggle (keyboard shortcut path, with acknowledgment).
    Toggle,
    /// The media element began playing.
    NativePlayBegan,
    /// The media element advanced; cadence is the runtime's business.
    NativeTimeUpdate { elapsed: f64, duration: Option<f64> },
    /// The media element reached end-of-stream.
    NativeEnded,
}

#[derive(Clone, Copy, PartialEq)]
pub struct PlaybackDispatcher {
    pub dispatch: Callback<PlaybackIntent>,
}

/// Builds the intent dispatcher wiring the controller to the analytics sink
/// and the acknowledgment notice. Analytics is fire-and-forget by contract:
/// the sink is invoked after state settles and its outcome is never consulted.
#[must_use]
pub fn use_playback_dispatcher(
    controller: AudioController,
    analytics: Arc<dyn AnalyticsSink>,
    notice: NoticeHandle,
) -> PlaybackDispatcher {
    let dispatch = use_callback(move |intent: PlaybackIntent| match intent {
        PlaybackIntent::Toggle => {
            if !controller.has_resource() {
                return;
            }
            if controller.is_playing() {
                notice.show(PAUSING_NOTICE);
                controller.pause();
            } else {
                notice.show(PLAYING_NOTICE);
                controller.play();
            }
        }
        PlaybackIntent::NativePlayBegan => {
            if let Some(event) = controller.apply_native_play() {
                analytics.record(event.label());
            }
        }
        PlaybackIntent::NativeTimeUpdate { elapsed, duration } => {
            controller.apply_time_update(elapsed, duration);
        }
        PlaybackIntent::NativeEnded => {
            if let Some(event) = controller.apply_ended() {
                analytics.record(event.label());
                spawn(async move {
                    scripts::rewind_playback(NARRATION_ELEMENT_ID).await;
                });
            }
        }
    });
    PlaybackDispatcher { dispatch }
}
