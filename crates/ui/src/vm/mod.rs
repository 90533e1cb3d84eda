mod report_vm;

pub use report_vm::{ReportVm, WaveHeightVm, map_report};
