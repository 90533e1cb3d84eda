use crate::audio::PlaybackIntent;

use super::test_harness::{
    report_without_discussion, sample_report, setup_failing_harness, setup_report_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn report_view_shows_loading_then_surface() {
    let mut harness = setup_report_harness(sample_report(Some("voiceover.mp3")));

    let html = harness.render();
    assert!(html.contains("Telling future..."), "missing loading in {html}");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("report-nav"), "missing nav in {html}");
    assert!(html.contains("8/05"), "missing date badge in {html}");
    assert!(html.contains("North Shore"), "missing wave label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn report_view_renders_error_message() {
    let mut harness = setup_failing_harness();
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Error loading the surf report."),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn empty_discussion_suppresses_the_surface() {
    let mut harness = setup_report_harness(report_without_discussion());
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("report-surface"), "surface leaked into {html}");
    assert!(!html.contains("report-nav"), "nav leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn panel_swap_runs_exit_and_entrance_as_a_pair() {
    let mut harness = setup_report_harness(sample_report(Some("voiceover.mp3")));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("report-nav"), "nav not mounted in {html}");
    assert!(
        !html.contains("discussion-panel"),
        "panel mounted alongside nav in {html}"
    );
    assert!(!html.contains("slot-exit"), "nothing exits at rest in {html}");

    // Expanding keeps the nav mounted, but only while it animates out.
    let mut panel = harness.handles.panel();
    panel.write().toggle();
    harness.drive();
    let html = harness.render();
    assert!(html.contains("discussion-panel"), "panel missing in {html}");
    assert!(html.contains("report-nav"), "outgoing nav should still animate in {html}");
    assert!(html.contains("slot-exit"), "outgoing nav not marked exiting in {html}");
    assert_eq!(
        html.matches("slot-enter").count(),
        1,
        "exactly one subtree enters at a time in {html}"
    );
    assert!(
        html.contains("National Oceanic and Atmospheric Administration"),
        "attribution missing in {html}"
    );

    panel.write().finish_exit();
    harness.drive();
    let html = harness.render();
    assert!(!html.contains("report-nav"), "nav lingered past its exit in {html}");

    // Dismissing runs the same pair in the other direction.
    panel.write().dismiss();
    harness.drive();
    let html = harness.render();
    assert!(html.contains("report-nav"), "nav not restored in {html}");
    assert!(
        html.contains("discussion-panel") && html.contains("slot-exit"),
        "outgoing panel should animate out in {html}"
    );
    assert_eq!(html.matches("slot-enter").count(), 1);

    panel.write().finish_exit();
    harness.drive();
    let html = harness.render();
    assert!(!html.contains("discussion-panel"), "panel lingered in {html}");
    assert!(!html.contains("slot-exit"), "exit marker lingered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn first_collapsed_entrance_carries_the_settle_delay() {
    let mut harness = setup_report_harness(sample_report(None));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("animation-delay: 1s"), "missing delay in {html}");

    let mut panel = harness.handles.panel();
    panel.write().toggle();
    panel.write().dismiss();
    harness.drive();
    let html = harness.render();
    assert!(
        html.contains("animation-delay: 0s"),
        "later entrances must not wait in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn toggle_starts_playback_and_native_play_records_once() {
    let mut harness = setup_report_harness(sample_report(Some("voiceover.mp3")));
    harness.settle().await;

    let controller = harness.handles.controller();
    let dispatcher = harness.handles.dispatcher();
    assert!(!controller.is_playing());

    dispatcher.dispatch.call(PlaybackIntent::Toggle);
    // The session flips ahead of the media element.
    assert!(controller.is_playing());
    harness.drive();
    // Acknowledgment notice is visible right after the toggle.
    let html = harness.render();
    assert!(html.contains("so wow"), "missing notice in {html}");

    // Analytics fires on the native play-begin signal, not the toggle.
    assert!(harness.analytics.labels().is_empty());
    dispatcher.dispatch.call(PlaybackIntent::NativePlayBegan);
    harness.drive();
    assert_eq!(
        harness.analytics.labels(),
        ["Audio started (voiceover.mp3)"]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn resume_records_started_with_position() {
    let mut harness = setup_report_harness(sample_report(Some("voiceover.mp3")));
    harness.settle().await;

    let dispatcher = harness.handles.dispatcher();
    dispatcher.dispatch.call(PlaybackIntent::NativeTimeUpdate {
        elapsed: 5.0,
        duration: Some(60.0),
    });
    dispatcher.dispatch.call(PlaybackIntent::NativePlayBegan);
    harness.drive();

    assert_eq!(
        harness.analytics.labels(),
        ["Audio started 0:05 (voiceover.mp3)"]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn ended_resets_session_and_records_completed_once() {
    let mut harness = setup_report_harness(sample_report(Some("voiceover.mp3")));
    harness.settle().await;

    let controller = harness.handles.controller();
    let dispatcher = harness.handles.dispatcher();

    dispatcher.dispatch.call(PlaybackIntent::Toggle);
    dispatcher.dispatch.call(PlaybackIntent::NativeTimeUpdate {
        elapsed: 59.0,
        duration: Some(60.0),
    });
    harness.drive();
    assert!(controller.progress_fraction() > 0.9);

    // End signals can arrive in bursts; the reset must stay idempotent.
    dispatcher.dispatch.call(PlaybackIntent::NativeEnded);
    dispatcher.dispatch.call(PlaybackIntent::NativeEnded);
    harness.drive();

    assert!(!controller.is_playing());
    assert_eq!(controller.progress_fraction(), 0.0);
    let completed: Vec<_> = harness
        .analytics
        .labels()
        .into_iter()
        .filter(|label| label.starts_with("Audio completed"))
        .collect();
    assert_eq!(completed, ["Audio completed (voiceover.mp3)"]);
}

#[tokio::test(flavor = "current_thread")]
async fn toggle_without_resource_is_inert() {
    let mut harness = setup_report_harness(sample_report(None));
    harness.settle().await;

    let controller = harness.handles.controller();
    let dispatcher = harness.handles.dispatcher();

    dispatcher.dispatch.call(PlaybackIntent::Toggle);
    harness.drive();

    assert!(!controller.is_playing());
    assert!(harness.analytics.labels().is_empty());
    let html = harness.render();
    assert!(!html.contains("so wow"), "notice leaked into {html}");
    // The audio block itself is absent without a resource.
    assert!(!html.contains("audio-toggle"), "audio ui leaked into {html}");
}
