use crate::errors::Result;
use lazy_static::lazy_static;
use prometheus::{Counter, Encoder, Gauge, Histogram, HistogramOpts, Opts, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref TICKS_TOTAL: Counter = Counter::with_opts(Opts::new(
        "dashboard_ticks_total",
        "Total update cycles run"
    ))
    .unwrap();
    pub static ref WINDOW_LEN: Gauge = Gauge::with_opts(Opts::new(
        "dashboard_window_len",
        "Sample points currently held in the rolling window"
    ))
    .unwrap();
    pub static ref CYCLE_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "dashboard_cycle_seconds",
            "Time taken to synthesize, record and derive one tick"
        )
        .buckets(vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05])
    )
    .unwrap();
    pub static ref VIEWERS: Gauge = Gauge::with_opts(Opts::new(
        "dashboard_viewers",
        "Open live update streams"
    ))
    .unwrap();
}

pub fn init_metrics() -> Result<()> {
    REGISTRY.register(Box::new(TICKS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(WINDOW_LEN.clone()))?;
    REGISTRY.register(Box::new(CYCLE_SECONDS.clone()))?;
    REGISTRY.register(Box::new(VIEWERS.clone()))?;
    Ok(())
}

pub fn gather_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn ensure_registered() {
        INIT.call_once(|| init_metrics().unwrap());
    }

    #[test]
    fn test_gather_contains_registered_metrics() {
        ensure_registered();
        TICKS_TOTAL.inc();

        let text = gather_metrics().unwrap();
        assert!(text.contains("dashboard_ticks_total"));
        assert!(text.contains("dashboard_window_len"));
        assert!(text.contains("dashboard_viewers"));
    }

    #[test]
    fn test_double_registration_is_rejected() {
        ensure_registered();

        assert!(REGISTRY.register(Box::new(TICKS_TOTAL.clone())).is_err());
    }
}
