use dioxus::prelude::*;

use swell_core::PanelMachine;

use crate::audio::{AudioController, PlaybackDispatcher, PlaybackIntent};
use crate::scripts::{self, NARRATION_ELEMENT_ID};
use crate::vm::{ReportVm, WaveHeightVm};

/// The collapsed control strip: playback controls, date badge, wave heights,
/// source link, and the expand toggle.
#[component]
pub(super) fn BottomNav(vm: ReportVm, panel: Signal<PanelMachine>) -> Element {
    let mut panel = panel;
    let controller = use_context::<AudioController>();
    let dispatcher = use_context::<PlaybackDispatcher>();

    let is_playing = controller.is_playing();
    let fraction = controller.progress_fraction();
    let toggle_label = if is_playing {
        "Pause narration"
    } else {
        "Play narration"
    };
    let toggle_glyph = if is_playing { "\u{23f8}" } else { "\u{25b6}" };

    rsx! {
        nav { class: "report-nav",
            if let Some(url) = vm.audio_url.clone() {
                div {
                    class: "audio-progress",
                    style: "transform: scaleX({fraction}); transform-origin: left;",
                }
                button {
                    class: "audio-toggle",
                    r#type: "button",
                    aria_label: "{toggle_label}",
                    onclick: move |_| {
                        if controller.is_playing() {
                            controller.pause();
                        } else {
                            controller.play();
                        }
                    },
                    "{toggle_glyph}"
                }
                audio {
                    id: NARRATION_ELEMENT_ID,
                    class: "narration-audio",
                    src: "{url}",
                    preload: "metadata",
                    onplay: move |_| {
                        dispatcher.dispatch.call(PlaybackIntent::NativePlayBegan);
                    },
                    onended: move |_| {
                        dispatcher.dispatch.call(PlaybackIntent::NativeEnded);
                    },
                    ontimeupdate: move |_| {
                        // The event payload carries no position; read it off
                        // the element and feed the session.
                        spawn(async move {
                            if let Some(snapshot) =
                                scripts::read_playback_snapshot(NARRATION_ELEMENT_ID).await
                            {
                                dispatcher.dispatch.call(PlaybackIntent::NativeTimeUpdate {
                                    elapsed: snapshot.elapsed,
                                    duration: snapshot.duration,
                                });
                            }
                        });
                    },
                }
            }
            div {
                class: "date-badge",
                title: "Last updated: {vm.date_full}",
                "{vm.date_badge}"
            }
            div { class: "wave-strip",
                WaveHeights { items: vm.wave_heights.clone() }
            }
            a {
                class: "repo-link",
                href: "https://github.com/swellcast/swellcast",
                target: "_blank",
                "GitHub"
            }
            button {
                class: "nav-expand",
                r#type: "button",
                aria_label: "Show discussion",
                onclick: move |_| panel.write().toggle(),
                "\u{22ef}"
            }
        }
    }
}

/// Black-box renderer for the wave-height readings; receives already-computed
/// display values and owns no state.
#[component]
fn WaveHeights(items: Vec<WaveHeightVm>) -> Element {
    rsx! {
        for wave in items {
            span { class: "wave-pill",
                span { class: "wave-label", "{wave.label}" }
                span { class: "wave-value", "{wave.value}" }
            }
        }
    }
}
