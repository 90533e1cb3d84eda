use std::env;
use std::sync::Mutex;

use reqwest::Client;
use serde::Serialize;

/// One-way usage-event recording.
///
/// Delivery is fire-and-forget: implementations must not block the caller,
/// retry, or surface failures. Playback state never depends on this.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, label: &str);
}

/// Sink that drops everything. Used when no endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAnalytics;

impl AnalyticsSink for NullAnalytics {
    fn record(&self, _label: &str) {}
}

#[derive(Clone, Debug)]
pub struct AnalyticsConfig {
    pub endpoint: String,
}

impl AnalyticsConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var("SWELLCAST_ANALYTICS_URL").ok()?;
        if endpoint.trim().is_empty() {
            return None;
        }
        Some(Self { endpoint })
    }
}

/// Plausible-style event sink: POSTs `{ "name": label }` to the configured
/// endpoint from a detached task and ignores the outcome entirely.
#[derive(Clone)]
pub struct PlausibleAnalytics {
    client: Client,
    config: Option<AnalyticsConfig>,
}

impl PlausibleAnalytics {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AnalyticsConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<AnalyticsConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[derive(Debug, Serialize)]
struct EventPayload {
    name: String,
}

impl AnalyticsSink for PlausibleAnalytics {
    /// Must be called from within a tokio runtime (the desktop shell runs
    /// one); the spawned delivery task is never awaited.
    fn record(&self, label: &str) {
        let Some(config) = self.config.as_ref() else {
            return;
        };
        let client = self.client.clone();
        let endpoint = config.endpoint.clone();
        let payload = EventPayload { name: label.into() };
        tokio::spawn(async move {
            let _ = client.post(endpoint).json(&payload).send().await;
        });
    }
}

/// In-memory sink for tests: captures every recorded label in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    labels: Mutex<Vec<String>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.labels.lock().expect("labels lock").clone()
    }
}

impl AnalyticsSink for RecordingSink {
    fn record(&self, label: &str) {
        self.labels.lock().expect("labels lock").push(label.into());
    }
}
