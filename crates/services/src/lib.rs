#![forbid(unsafe_code)]

pub mod analytics;
pub mod audio_store;
pub mod error;
pub mod report_service;

pub use analytics::{AnalyticsConfig, AnalyticsSink, NullAnalytics, PlausibleAnalytics, RecordingSink};
pub use audio_store::AudioStore;
pub use error::{AudioStoreError, ReportServiceError};
pub use report_service::{NoaaReportService, ReportConfig, ReportProvider};
