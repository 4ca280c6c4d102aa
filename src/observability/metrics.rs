use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Metrics registry for the application.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Total decision requests processed
    pub decisions_total: AtomicU64,

    /// Decision requests by outcome
    pub decisions_approve: AtomicU64,
    pub decisions_review: AtomicU64,
    pub decisions_decline: AtomicU64,

    /// Requests rejected before any rule ran
    pub validation_failures_total: AtomicU64,

    /// Decision latency buckets (microseconds)
    pub latency_under_1ms: AtomicU64,
    pub latency_1_5ms: AtomicU64,
    pub latency_5_10ms: AtomicU64,
    pub latency_10_50ms: AtomicU64,
    pub latency_50_100ms: AtomicU64,
    pub latency_over_100ms: AtomicU64,

    /// Rule evaluation counts
    pub rules_evaluated_total: AtomicU64,
    pub rule_faults_total: AtomicU64,

    /// Policy reloads
    pub policy_reloads_total: AtomicU64,
    pub policy_reload_errors: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry.
    pub fn new() -> Self {
        MetricsRegistry::default()
    }

    /// Record a decision outcome.
    pub fn record_decision(&self, decision: &crate::domain::Decision) {
        self.decisions_total.fetch_add(1, Ordering::Relaxed);

        match decision {
            crate::domain::Decision::Approve => {
                self.decisions_approve.fetch_add(1, Ordering::Relaxed);
            }
            crate::domain::Decision::Review => {
                self.decisions_review.fetch_add(1, Ordering::Relaxed);
            }
            crate::domain::Decision::Decline => {
                self.decisions_decline.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Record a request rejected by validation.
    pub fn record_validation_failure(&self) {
        self.validation_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record decision latency.
    pub fn record_latency(&self, start: Instant) {
        let micros = start.elapsed().as_micros() as u64;

        if micros < 1000 {
            self.latency_under_1ms.fetch_add(1, Ordering::Relaxed);
        } else if micros < 5000 {
            self.latency_1_5ms.fetch_add(1, Ordering::Relaxed);
        } else if micros < 10000 {
            self.latency_5_10ms.fetch_add(1, Ordering::Relaxed);
        } else if micros < 50000 {
            self.latency_10_50ms.fetch_add(1, Ordering::Relaxed);
        } else if micros < 100000 {
            self.latency_50_100ms.fetch_add(1, Ordering::Relaxed);
        } else {
            self.latency_over_100ms.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record rule evaluations and faults for one decide call.
    pub fn record_evaluation(&self, rules_evaluated: usize, faults: usize) {
        self.rules_evaluated_total
            .fetch_add(rules_evaluated as u64, Ordering::Relaxed);
        self.rule_faults_total
            .fetch_add(faults as u64, Ordering::Relaxed);
    }

    /// Record a policy reload.
    pub fn record_policy_reload(&self, success: bool) {
        self.policy_reloads_total.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.policy_reload_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Export metrics in Prometheus format.
    pub fn to_prometheus(&self) -> String {
        format!(
            r#"# HELP fraudr_decisions_total Total number of decision requests
# TYPE fraudr_decisions_total counter
fraudr_decisions_total {}

# HELP fraudr_decisions Decision requests by outcome
# TYPE fraudr_decisions counter
fraudr_decisions{{outcome="approve"}} {}
fraudr_decisions{{outcome="review"}} {}
fraudr_decisions{{outcome="decline"}} {}

# HELP fraudr_validation_failures_total Requests rejected before rule evaluation
# TYPE fraudr_validation_failures_total counter
fraudr_validation_failures_total {}

# HELP fraudr_decision_latency_bucket Decision latency histogram
# TYPE fraudr_decision_latency_bucket counter
fraudr_decision_latency_bucket{{le="0.001"}} {}
fraudr_decision_latency_bucket{{le="0.005"}} {}
fraudr_decision_latency_bucket{{le="0.01"}} {}
fraudr_decision_latency_bucket{{le="0.05"}} {}
fraudr_decision_latency_bucket{{le="0.1"}} {}
fraudr_decision_latency_bucket{{le="+Inf"}} {}

# HELP fraudr_rules_evaluated_total Total rule evaluations
# TYPE fraudr_rules_evaluated_total counter
fraudr_rules_evaluated_total {}

# HELP fraudr_rule_faults_total Rules that failed during evaluation
# TYPE fraudr_rule_faults_total counter
fraudr_rule_faults_total {}

# HELP fraudr_policy_reloads_total Policy reload operations
# TYPE fraudr_policy_reloads_total counter
fraudr_policy_reloads_total {}

# HELP fraudr_policy_reload_errors_total Policy reload errors
# TYPE fraudr_policy_reload_errors_total counter
fraudr_policy_reload_errors_total {}
"#,
            self.decisions_total.load(Ordering::Relaxed),
            self.decisions_approve.load(Ordering::Relaxed),
            self.decisions_review.load(Ordering::Relaxed),
            self.decisions_decline.load(Ordering::Relaxed),
            self.validation_failures_total.load(Ordering::Relaxed),
            self.latency_under_1ms.load(Ordering::Relaxed),
            self.latency_1_5ms.load(Ordering::Relaxed),
            self.latency_5_10ms.load(Ordering::Relaxed),
            self.latency_10_50ms.load(Ordering::Relaxed),
            self.latency_50_100ms.load(Ordering::Relaxed),
            self.latency_over_100ms.load(Ordering::Relaxed),
            self.rules_evaluated_total.load(Ordering::Relaxed),
            self.rule_faults_total.load(Ordering::Relaxed),
            self.policy_reloads_total.load(Ordering::Relaxed),
            self.policy_reload_errors.load(Ordering::Relaxed),
        )
    }
}

/// Guard for timing operations.
pub struct TimingGuard<'a> {
    registry: &'a MetricsRegistry,
    start: Instant,
}

impl<'a> TimingGuard<'a> {
    pub fn new(registry: &'a MetricsRegistry) -> Self {
        TimingGuard {
            registry,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for TimingGuard<'a> {
    fn drop(&mut self) {
        self.registry.record_latency(self.start);
    }
}
