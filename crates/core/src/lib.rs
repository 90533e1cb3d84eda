#![forbid(unsafe_code)]

//! Domain types and state machines for the surf-report display: the report
//! model, the audio playback session, the panel visibility machine, and the
//! timestamp formatting they share. No I/O lives here.

pub mod error;
pub mod model;
pub mod panel;
pub mod playback;
pub mod time;

pub use error::Error;
pub use model::{ReportError, ReportId, SurfReport, WaveHeight};
pub use panel::{PanelMachine, PanelState};
pub use playback::{AudioSession, UsageEvent};
pub use time::format_timestamp;
