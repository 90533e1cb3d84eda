use std::sync::Arc;

use services::{AnalyticsSink, AudioStore, ReportProvider};

/// Capabilities the hosting application hands to the UI.
pub trait UiApp: Send + Sync {
    fn reports(&self) -> Arc<dyn ReportProvider>;
    fn analytics(&self) -> Arc<dyn AnalyticsSink>;
    fn audio_store(&self) -> Arc<AudioStore>;
}

#[derive(Clone)]
pub struct AppContext {
    reports: Arc<dyn ReportProvider>,
    analytics: Arc<dyn AnalyticsSink>,
    audio_store: Arc<AudioStore>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            reports: app.reports(),
            analytics: app.analytics(),
            audio_store: app.audio_store(),
        }
    }

    #[must_use]
    pub fn reports(&self) -> Arc<dyn ReportProvider> {
        Arc::clone(&self.reports)
    }

    #[must_use]
    pub fn analytics(&self) -> Arc<dyn AnalyticsSink> {
        Arc::clone(&self.analytics)
    }

    #[must_use]
    pub fn audio_store(&self) -> Arc<AudioStore> {
        Arc::clone(&self.audio_store)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
