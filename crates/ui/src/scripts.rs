use dioxus::document::eval;
use serde::Deserialize;

/// DOM id of the hidden narration element.
pub const NARRATION_ELEMENT_ID: &str = "narration";

/// Last-observed playback position as reported by the media element.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PlaybackSnapshot {
    pub elapsed: f64,
    pub duration: Option<f64>,
}

const START_PLAYBACK_SCRIPT_TEMPLATE: &str = r#"
    const el = document.getElementById("{element_id}");
    if (!el) {
        dioxus.send(false);
    } else {
        el.play().then(() => dioxus.send(true)).catch(() => dioxus.send(false));
    }
"#;

const PAUSE_PLAYBACK_SCRIPT_TEMPLATE: &str = r#"
    const el = document.getElementById("{element_id}");
    if (el) { el.pause(); }
"#;

const REWIND_PLAYBACK_SCRIPT_TEMPLATE: &str = r#"
    const el = document.getElementById("{element_id}");
    if (el) { el.currentTime = 0; }
"#;

const READ_SNAPSHOT_SCRIPT_TEMPLATE: &str = r#"
    const el = document.getElementById("{element_id}");
    if (!el) { return { elapsed: 0, duration: null }; }
    const duration = Number.isFinite(el.duration) && el.duration > 0 ? el.duration : null;
    return { elapsed: el.currentTime || 0, duration: duration };
"#;

/// Asks the element to start playing. Returns `false` when the element is
/// missing or the runtime rejects playback (gesture policy, load failure).
pub async fn start_playback(element_id: &str) -> bool {
    let script = START_PLAYBACK_SCRIPT_TEMPLATE.replace("{element_id}", element_id);
    let mut request = eval(&script);
    request.recv::<bool>().await.unwrap_or(false)
}

pub async fn pause_playback(element_id: &str) {
    let script = PAUSE_PLAYBACK_SCRIPT_TEMPLATE.replace("{element_id}", element_id);
    let _ = eval(&script).await;
}

pub async fn rewind_playback(element_id: &str) {
    let script = REWIND_PLAYBACK_SCRIPT_TEMPLATE.replace("{element_id}", element_id);
    let _ = eval(&script).await;
}

pub async fn read_playback_snapshot(element_id: &str) -> Option<PlaybackSnapshot> {
    let script = READ_SNAPSHOT_SCRIPT_TEMPLATE.replace("{element_id}", element_id);
    eval(&script).join::<PlaybackSnapshot>().await.ok()
}
