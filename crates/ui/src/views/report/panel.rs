use dioxus::prelude::*;

use swell_core::PanelMachine;

use crate::vm::ReportVm;

/// The expanded detail panel: full discussion text with the source
/// attribution and a dismiss control.
#[component]
pub(super) fn DiscussionPanel(vm: ReportVm, panel: Signal<PanelMachine>) -> Element {
    let mut panel = panel;

    rsx! {
        div { class: "discussion-panel",
            div { class: "discussion-scroll",
                for paragraph in vm.paragraphs.clone() {
                    p { "{paragraph}" }
                }
            }
            div { class: "discussion-footer",
                h6 { class: "discussion-source",
                    span { "Report data pulled from " }
                    a {
                        href: "https://www.weather.gov/hfo/SRF",
                        target: "_blank",
                        "National Oceanic and Atmospheric Administration"
                    }
                }
                button {
                    class: "discussion-close",
                    r#type: "button",
                    aria_label: "Dismiss discussion",
                    onclick: move |_| panel.write().dismiss(),
                    "\u{00d7}"
                }
            }
        }
    }
}
