use dioxus::document::eval;
use dioxus::prelude::*;

use crate::audio::{PlaybackDispatcher, PlaybackIntent};
use crate::vm::ReportVm;

/// True for the keys that toggle narration playback: space or `k`, either case.
fn is_toggle_key(key: &str) -> bool {
    key == " " || key.eq_ignore_ascii_case("k")
}

// The handler filters and suppresses the default action on the spot (space
// would scroll the page) and forwards only the matched keys.
const INSTALL_KEY_CAPTURE_SCRIPT: &str = r#"
    if (!window.__narrationKeydown) {
        window.__narrationKeydown = (event) => {
            if (event.key === " " || event.key === "k" || event.key === "K") {
                event.preventDefault();
                dioxus.send(event.key);
            }
        };
        window.addEventListener("keydown", window.__narrationKeydown);
    }
"#;

const RELEASE_KEY_CAPTURE_SCRIPT: &str = r#"
    if (window.__narrationKeydown) {
        window.removeEventListener("keydown", window.__narrationKeydown);
        delete window.__narrationKeydown;
    }
"#;

/// Captures the playback shortcut on the window for the report surface's
/// mounted lifetime. Capture is global on purpose: the shortcut keeps working
/// wherever focus sits. The listener goes in once per mount and comes out on
/// unmount, so a remount with a different narration re-installs it cleanly.
///
/// Without a narration resource nothing is installed and no keys are
/// consumed. The dispatched toggle reads playback state through signals at
/// call time, never from a snapshot captured here, so it cannot toggle in the
/// wrong direction after a re-render.
pub fn use_playback_key_capture(vm: &ReportVm, dispatcher: PlaybackDispatcher) {
    let installed = vm.audio_url.is_some();
    use_hook(move || {
        if !installed {
            return;
        }
        spawn(async move {
            let mut keys = eval(INSTALL_KEY_CAPTURE_SCRIPT);
            while let Ok(key) = keys.recv::<String>().await {
                if is_toggle_key(&key) {
                    dispatcher.dispatch.call(PlaybackIntent::Toggle);
                }
            }
        });
    });
    use_drop(move || {
        if !installed {
            return;
        }
        // Detached from the dying scope so the release still runs.
        spawn_forget(async move {
            let _ = eval(RELEASE_KEY_CAPTURE_SCRIPT).await;
        });
    });
}
