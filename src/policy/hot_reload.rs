use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::interval;
use tracing::{error, info, warn};

use crate::engine::DecisionEngine;
use crate::observability::MetricsRegistry;

use super::loader::PolicyLoader;

/// Watch for policy changes and broadcast freshly built engines.
///
/// Each published engine is immutable; a reload swaps the whole engine
/// atomically through the watch channel, so in-flight decide calls keep
/// the engine they started with.
pub struct PolicyWatcher {
    loader: PolicyLoader,
    check_interval: Duration,
    last_version: Option<String>,
    metrics: Option<Arc<MetricsRegistry>>,
}

impl PolicyWatcher {
    /// Create a new policy watcher.
    pub fn new(loader: PolicyLoader, check_interval: Duration) -> Self {
        PolicyWatcher {
            loader,
            check_interval,
            last_version: None,
            metrics: None,
        }
    }

    /// Record reload outcomes in the given metrics registry.
    pub fn with_metrics(mut self, metrics: Arc<MetricsRegistry>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Start watching for policy changes.
    ///
    /// Returns a receiver that will receive new DecisionEngine instances
    /// when the policy changes. On a failed reload the last good engine
    /// stays published.
    pub fn start(mut self) -> (watch::Receiver<Arc<DecisionEngine>>, tokio::task::JoinHandle<()>) {
        // Load initial policy
        let initial_engine = match self.loader.load() {
            Ok((policy, engine)) => {
                self.last_version = Some(policy.version.clone());
                info!("Loaded initial policy version: {}", policy.version);
                Arc::new(engine)
            }
            Err(e) => {
                error!("Failed to load initial policy: {}", e);
                Arc::new(DecisionEngine::empty())
            }
        };

        let (tx, rx) = watch::channel(initial_engine);

        let handle = tokio::spawn(async move {
            let mut interval = interval(self.check_interval);

            loop {
                interval.tick().await;

                match self.check_for_updates(&tx) {
                    Ok(true) => {
                        if let Some(metrics) = &self.metrics {
                            metrics.record_policy_reload(true);
                        }
                        info!("Policy reloaded successfully");
                    }
                    Ok(false) => {} // No changes
                    Err(e) => {
                        if let Some(metrics) = &self.metrics {
                            metrics.record_policy_reload(false);
                        }
                        warn!("Error checking for policy updates: {}", e);
                    }
                }
            }
        });

        (rx, handle)
    }

    /// Check for policy updates and broadcast if changed.
    fn check_for_updates(
        &mut self,
        tx: &watch::Sender<Arc<DecisionEngine>>,
    ) -> Result<bool, super::loader::PolicyError> {
        let policy = self.loader.load_policy()?;

        // Check if version changed
        if self.last_version.as_ref() == Some(&policy.version) {
            return Ok(false);
        }

        // Rebuild the engine from the new policy
        let (policy, engine) = self.loader.load()?;

        info!(
            "Policy version changed: {:?} -> {}",
            self.last_version, policy.version
        );

        self.last_version = Some(policy.version);
        let _ = tx.send(Arc::new(engine));

        Ok(true)
    }
}
