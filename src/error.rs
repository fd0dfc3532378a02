use crate::charts::RenderError;
use crate::input::InputError;
use crate::model::criteria::FilterError;
use crate::pipeline::stage5_report::ReportError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("invalid filters: {0}")]
    Filter(#[from] FilterError),
    #[error("chart rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("report writing failed: {0}")]
    Report(#[from] ReportError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
