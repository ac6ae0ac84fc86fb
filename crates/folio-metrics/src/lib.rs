use std::sync::Arc;

use opentelemetry::{KeyValue, global, metrics::Counter};

const METER_NAME: &str = "folio-dashboard";

#[derive(Debug)]
pub struct MetricsRegistry {
    pub upstream: Arc<UpstreamMetrics>,
    pub pages: Arc<PageMetrics>,
}

impl MetricsRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            upstream: UpstreamMetrics::new(),
            pages: PageMetrics::new(),
        })
    }
}

/// Calls made to the spreadsheet macro service.
#[derive(Debug)]
pub struct UpstreamMetrics {
    requests: Counter<u64>,
}

impl UpstreamMetrics {
    fn new() -> Arc<Self> {
        let meter = global::meter(METER_NAME);
        let requests = meter
            .u64_counter("sheet_upstream_requests_total")
            .with_description("Number of requests sent to the spreadsheet macro service")
            .with_unit("count")
            .init();

        Arc::new(Self { requests })
    }

    pub fn record(&self, operation: UpstreamOperation, outcome: Outcome) {
        self.requests.add(
            1,
            &[
                KeyValue::new("operation", operation.as_str()),
                KeyValue::new("outcome", outcome.as_str()),
            ],
        );
    }
}

/// Server-rendered dashboard pages.
#[derive(Debug)]
pub struct PageMetrics {
    renders: Counter<u64>,
}

impl PageMetrics {
    fn new() -> Arc<Self> {
        let meter = global::meter(METER_NAME);
        let renders = meter
            .u64_counter("dashboard_page_renders_total")
            .with_description("Number of dashboard pages rendered")
            .with_unit("count")
            .init();

        Arc::new(Self { renders })
    }

    pub fn record_render(&self, page: &'static str, outcome: Outcome) {
        self.renders.add(
            1,
            &[
                KeyValue::new("page", page),
                KeyValue::new("outcome", outcome.as_str()),
            ],
        );
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpstreamOperation {
    Fetch,
    Refresh,
}

impl UpstreamOperation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Refresh => "refresh",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    pub const fn of<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(_) => Self::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_of_result() {
        assert_eq!(Outcome::of(&Ok::<_, ()>(1)), Outcome::Success);
        assert_eq!(Outcome::of(&Err::<(), _>("boom")), Outcome::Failure);
        assert_eq!(UpstreamOperation::Refresh.as_str(), "refresh");
    }

    #[test]
    fn test_recording_without_provider_is_noop() {
        let registry = MetricsRegistry::new();
        registry
            .upstream
            .record(UpstreamOperation::Fetch, Outcome::Success);
        registry.pages.record_render("dashboard", Outcome::Failure);
    }
}
