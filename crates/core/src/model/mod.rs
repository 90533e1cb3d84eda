mod report;

pub use report::{ReportError, ReportId, SurfReport, WaveHeight};
