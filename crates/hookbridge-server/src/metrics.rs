use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::{IntCounterVec, Opts};

use crate::{Result, ServerError};

lazy_static! {
    pub static ref FEED_PUBLISH_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("feed_publish_total", "Feed publications").namespace("hookbridge"),
        &["feed", "outcome"]
    )
    .expect("valid metric definition");
}

pub(crate) fn build_metrics_handler() -> Result<PrometheusMetrics> {
    let prometheus = PrometheusMetricsBuilder::new("hookbridge")
        .endpoint("/metrics")
        .build()
        .map_err(|e| ServerError::MetricsError { source: e })?;

    setup_process_metrics(&prometheus)?;
    prometheus
        .registry
        .register(Box::new(FEED_PUBLISH_TOTAL.clone()))?;

    Ok(prometheus)
}

#[cfg(target_os = "linux")]
fn setup_process_metrics(metrics: &PrometheusMetrics) -> Result<()> {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))?;
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) -> Result<()> {
    Ok(())
}
