use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AnalyticsSink, AudioStore, NoaaReportService, NullAnalytics, PlausibleAnalytics,
    ReportConfig, ReportProvider,
};
use services::analytics::AnalyticsConfig;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUrl { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUrl { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    reports: Arc<dyn ReportProvider>,
    analytics: Arc<dyn AnalyticsSink>,
    audio_store: Arc<AudioStore>,
}

impl UiApp for DesktopApp {
    fn reports(&self) -> Arc<dyn ReportProvider> {
        Arc::clone(&self.reports)
    }

    fn analytics(&self) -> Arc<dyn AnalyticsSink> {
        Arc::clone(&self.analytics)
    }

    fn audio_store(&self) -> Arc<AudioStore> {
        Arc::clone(&self.audio_store)
    }
}

struct Args {
    report_url: Option<String>,
    audio_base: Option<String>,
    analytics_url: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--report-url <url>] [--audio-base <url>] [--analytics-url <url>]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SWELLCAST_REPORT_URL, SWELLCAST_AUDIO_BASE, SWELLCAST_ANALYTICS_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut report_url = None;
        let mut audio_base = None;
        let mut analytics_url = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--report-url" => {
                    let value = require_value(args, "--report-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidUrl {
                            flag: "--report-url",
                            raw: value,
                        });
                    }
                    report_url = Some(value);
                }
                "--audio-base" => {
                    audio_base = Some(require_value(args, "--audio-base")?);
                }
                "--analytics-url" => {
                    analytics_url = Some(require_value(args, "--analytics-url")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            report_url,
            audio_base,
            analytics_url,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let report_config = match parsed.report_url {
        Some(endpoint) => ReportConfig { endpoint },
        None => ReportConfig::from_env(),
    };
    let reports: Arc<dyn ReportProvider> = Arc::new(NoaaReportService::new(report_config));

    let audio_store = match parsed.audio_base {
        Some(base) => Arc::new(AudioStore::from_base_str(&base)?),
        None => Arc::new(AudioStore::from_env()),
    };

    // Analytics stays inert unless an endpoint is configured; playback never
    // depends on it either way.
    let analytics_config = parsed
        .analytics_url
        .map(|endpoint| AnalyticsConfig { endpoint })
        .or_else(AnalyticsConfig::from_env);
    let analytics: Arc<dyn AnalyticsSink> = match analytics_config {
        Some(config) => Arc::new(PlausibleAnalytics::new(Some(config))),
        None => Arc::new(NullAnalytics),
    };

    let app = DesktopApp {
        reports,
        analytics,
        audio_store,
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Swellcast")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
