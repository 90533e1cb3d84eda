use thiserror::Error;

use crate::model::ReportError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Report(#[from] ReportError),
}
