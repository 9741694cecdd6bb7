use interview_insights::analysis::{AnalysisEngine, AnalysisPayload};
use interview_insights::config::DisplayConfig;
use interview_insights::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn engine(display: DisplayConfig) -> Arc<AnalysisEngine> {
    Arc::new(AnalysisEngine::new(display))
}

pub(crate) fn read_payload(path: &Path) -> Result<AnalysisPayload, AppError> {
    let file = File::open(path)?;
    Ok(AnalysisPayload::from_reader(BufReader::new(file))?)
}
