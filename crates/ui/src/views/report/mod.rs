use dioxus::prelude::*;

use swell_core::{PanelMachine, PanelState};

use crate::audio::use_audio_controller;
use crate::audio::use_playback_dispatcher;
use crate::context::AppContext;
use crate::keyboard::use_playback_key_capture;
use crate::notice::use_notice;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ReportVm, map_report};

mod bottom_nav;
mod panel;

use bottom_nav::BottomNav;
use panel::DiscussionPanel;

#[component]
pub fn ReportView() -> Element {
    let ctx = use_context::<AppContext>();
    let reports = ctx.reports();
    let audio_store = ctx.audio_store();
    let resource = use_resource(move || {
        let reports = reports.clone();
        let audio_store = audio_store.clone();
        async move {
            let report = reports.latest().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_report(&report, &audio_store))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page report-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    div { class: "report-loading", "Telling future..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "report-error", "{err.message()}" }
                },
                ViewState::Ready(vm) => rsx! {
                    // No discussion means no playback or panel surface at all.
                    if !vm.paragraphs.is_empty() {
                        ReportSurface { vm: vm.clone() }
                    }
                },
            }
        }
    }
}

#[component]
fn ReportSurface(vm: ReportVm) -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_audio_controller(&vm);
    // One audio session per page: every consumer shares this controller.
    use_context_provider(|| controller);
    let notice = use_notice();
    let dispatcher = use_playback_dispatcher(controller, ctx.analytics(), notice);
    use_context_provider(|| dispatcher);
    let mut panel = use_signal(PanelMachine::new);
    use_playback_key_capture(&vm, dispatcher);

    #[cfg(test)]
    if let Some(handles) = try_consume_context::<ReportTestHandles>() {
        handles.register(panel, controller, dispatcher);
    }

    let machine = panel();
    let delay = machine.entrance_delay_secs();
    // A swap renders as a composed pair: the displaced subtree animates out
    // while the incoming one animates in, and the outgoing side unmounts once
    // its exit animation reports completion. The one-time settle delay only
    // ever applies to the very first collapsed entrance.
    let panel_exiting = machine.leaving() == Some(PanelState::Expanded);
    let nav_exiting = machine.leaving() == Some(PanelState::Collapsed);
    let show_panel = machine.state() == PanelState::Expanded || panel_exiting;
    let show_nav = machine.state() == PanelState::Collapsed || nav_exiting;
    let panel_slot_class = slot_class(panel_exiting);
    let nav_slot_class = slot_class(nav_exiting);
    let nav_style = if nav_exiting {
        String::new()
    } else {
        format!("animation-delay: {delay}s;")
    };

    rsx! {
        section { class: "report-surface",
            header { class: "report-header",
                p { class: "report-date-line",
                    "Hawai\u{2018}i surf report "
                    strong { "{vm.headline_date}" }
                }
                h1 { class: "report-title", "Rub the crystal ball" }
            }
            if show_panel {
                div {
                    class: "{panel_slot_class}",
                    key: "panel",
                    onanimationend: move |_| {
                        if panel_exiting {
                            panel.write().finish_exit();
                        }
                    },
                    DiscussionPanel { vm: vm.clone(), panel }
                }
            }
            if show_nav {
                div {
                    class: "{nav_slot_class}",
                    key: "bottom-nav",
                    style: "{nav_style}",
                    onanimationend: move |_| {
                        if nav_exiting {
                            panel.write().finish_exit();
                        }
                    },
                    BottomNav { vm: vm.clone(), panel }
                }
            }
            if let Some(text) = notice.current() {
                div { class: "notice", "{text}" }
            }
        }
    }
}

fn slot_class(exiting: bool) -> &'static str {
    if exiting {
        "surface-slot slot-exit"
    } else {
        "surface-slot slot-enter"
    }
}

#[cfg(test)]
pub(crate) use test_handles::ReportTestHandles;
