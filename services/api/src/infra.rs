use kisan_mitra::config::AppConfig;
use kisan_mitra::eligibility::{CatalogError, SchemeCatalog};
use kisan_mitra::explain::orchestrator_from_config;
use kisan_mitra::SchemeAdvisor;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn load_catalog(config: &AppConfig) -> Result<SchemeCatalog, CatalogError> {
    let catalog = match &config.catalog.path {
        Some(path) => SchemeCatalog::from_path(path)?,
        None => SchemeCatalog::embedded()?,
    };
    info!(
        schemes = catalog.len(),
        source = ?config.catalog.path,
        "scheme catalog loaded"
    );
    Ok(catalog)
}

pub(crate) fn build_advisor(config: &AppConfig) -> Result<SchemeAdvisor, CatalogError> {
    let catalog = Arc::new(load_catalog(config)?);
    let orchestrator = orchestrator_from_config(&config.narrator);
    Ok(SchemeAdvisor::new(catalog, orchestrator, config.ranking.top_n))
}

/// Accepts yes/no style answers the way the intake form does.
pub(crate) fn parse_yes_no(raw: &str) -> Result<bool, String> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "हाँ" | "हां" => Ok(true),
        "no" | "n" | "false" | "0" | "नहीं" => Ok(false),
        other => Err(format!("expected yes or no, got '{other}'")),
    }
}
