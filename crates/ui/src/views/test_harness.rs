use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use services::{
    AnalyticsSink, AudioStore, RecordingSink, ReportProvider, ReportServiceError,
};
use swell_core::{ReportId, SurfReport, WaveHeight};

use crate::context::{UiApp, build_app_context};
use crate::views::ReportView;

use super::report::ReportTestHandles;

struct FixedReport(SurfReport);

#[async_trait]
impl ReportProvider for FixedReport {
    async fn latest(&self) -> Result<SurfReport, ReportServiceError> {
        Ok(self.0.clone())
    }
}

struct FailingReport;

#[async_trait]
impl ReportProvider for FailingReport {
    async fn latest(&self) -> Result<SurfReport, ReportServiceError> {
        Err(ReportServiceError::InvalidDate {
            raw: "not-a-date".into(),
        })
    }
}

struct TestApp {
    reports: Arc<dyn ReportProvider>,
    analytics: Arc<RecordingSink>,
    audio_store: Arc<AudioStore>,
}

impl UiApp for TestApp {
    fn reports(&self) -> Arc<dyn ReportProvider> {
        Arc::clone(&self.reports)
    }

    fn analytics(&self) -> Arc<dyn AnalyticsSink> {
        Arc::clone(&self.analytics) as Arc<dyn AnalyticsSink>
    }

    fn audio_store(&self) -> Arc<AudioStore> {
        Arc::clone(&self.audio_store)
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: ReportTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn ReportRouterHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { ReportView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub analytics: Arc<RecordingSink>,
    pub handles: ReportTestHandles,
}

impl ViewHarness {
    /// Lets spawned work (the report resource) run, then re-renders.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Synchronous re-render after direct signal/callback driving.
    pub fn drive(&mut self) {
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn sample_report(audio_file: Option<&str>) -> SurfReport {
    SurfReport::new(
        ReportId::new("r-2026-08-05").unwrap(),
        Utc.with_ymd_and_hms(2026, 8, 5, 18, 0, 0).unwrap(),
        vec![
            "Surf builds through Friday.".into(),
            "Winds stay light and variable.".into(),
        ],
        vec![WaveHeight::new("North Shore", "4-6 ft").unwrap()],
        audio_file.map(Into::into),
    )
}

pub fn report_without_discussion() -> SurfReport {
    SurfReport::new(
        ReportId::new("r-empty").unwrap(),
        Utc.with_ymd_and_hms(2026, 8, 5, 18, 0, 0).unwrap(),
        Vec::new(),
        Vec::new(),
        None,
    )
}

pub fn setup_report_harness(report: SurfReport) -> ViewHarness {
    setup_harness_with_provider(Arc::new(FixedReport(report)))
}

pub fn setup_failing_harness() -> ViewHarness {
    setup_harness_with_provider(Arc::new(FailingReport))
}

fn setup_harness_with_provider(reports: Arc<dyn ReportProvider>) -> ViewHarness {
    let analytics = Arc::new(RecordingSink::new());
    let audio_store = Arc::new(
        AudioStore::from_base_str("https://cdn.example/voiceover/").expect("test base parses"),
    );
    let handles = ReportTestHandles::default();

    let app = Arc::new(TestApp {
        reports,
        analytics: Arc::clone(&analytics),
        audio_store,
    });

    let mut dom = VirtualDom::new_with_props(
        ReportRouterHarness,
        HarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();

    ViewHarness {
        dom,
        analytics,
        handles,
    }
}
