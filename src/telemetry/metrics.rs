//! Analysis metrics

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Sessions analyzed
    SessionsAnalyzed,
    /// Sessions with too few pivots for an accuracy
    SessionsInsufficient,
    /// Ticks read from input files
    TicksLoaded,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Momentum accuracy of the last measured session
    MomentumAccuracy,
    /// Pivot count of the last session
    PivotCount,
    /// Return volatility of the last session
    SessionVolatility,
}

fn counter_name(metric: CounterMetric) -> &'static str {
    match metric {
        CounterMetric::SessionsAnalyzed => "swing_sessions_analyzed_total",
        CounterMetric::SessionsInsufficient => "swing_sessions_insufficient_total",
        CounterMetric::TicksLoaded => "swing_ticks_loaded_total",
    }
}

fn gauge_name(metric: GaugeMetric) -> &'static str {
    match metric {
        GaugeMetric::MomentumAccuracy => "swing_momentum_accuracy",
        GaugeMetric::PivotCount => "swing_pivot_count",
        GaugeMetric::SessionVolatility => "swing_session_volatility",
    }
}

/// Increment a counter
pub fn increment(metric: CounterMetric, value: u64) {
    let name = counter_name(metric);
    ::metrics::counter!(name).increment(value);
    tracing::trace!(metric = name, value, "Incremented counter");
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let name = gauge_name(metric);
    ::metrics::gauge!(name).set(value);
    tracing::trace!(metric = name, value, "Setting gauge");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_are_prefixed() {
        for metric in [
            CounterMetric::SessionsAnalyzed,
            CounterMetric::SessionsInsufficient,
            CounterMetric::TicksLoaded,
        ] {
            assert!(counter_name(metric).starts_with("swing_"));
            assert!(counter_name(metric).ends_with("_total"));
        }
        for metric in [
            GaugeMetric::MomentumAccuracy,
            GaugeMetric::PivotCount,
            GaugeMetric::SessionVolatility,
        ] {
            assert!(gauge_name(metric).starts_with("swing_"));
        }
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        increment(CounterMetric::SessionsAnalyzed, 1);
        set_gauge(GaugeMetric::MomentumAccuracy, 0.5);
    }
}
