use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::domain::Policy;
use crate::engine::{DecisionEngine, RegistryError};

/// Errors that can occur during policy loading.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Load a policy from a YAML file.
pub fn load_policy(path: impl AsRef<Path>) -> Result<Policy, PolicyError> {
    let content = fs::read_to_string(path)?;
    let policy: Policy = serde_yaml::from_str(&content)?;

    validate_policy(&policy)?;

    Ok(policy)
}

/// Validate policy configuration.
///
/// Severity bands are enforced here so a new rule cannot quietly outrank
/// an unrelated decision class through a copy-pasted severity.
fn validate_policy(policy: &Policy) -> Result<(), PolicyError> {
    if policy.version.is_empty() {
        return Err(PolicyError::Validation(
            "Policy version cannot be empty".to_string(),
        ));
    }

    if policy.params.high_value_floor >= policy.params.max_amount {
        return Err(PolicyError::Validation(format!(
            "high_value_floor ({}) must be below max_amount ({})",
            policy.params.high_value_floor, policy.params.max_amount
        )));
    }

    for rule in &policy.rules {
        let (lo, hi) = rule.action.severity_band();
        if rule.severity < lo || rule.severity > hi {
            return Err(PolicyError::Validation(format!(
                "Rule {}: severity {} outside the {} band ({}-{})",
                rule.id, rule.severity, rule.action, lo, hi
            )));
        }
    }

    Ok(())
}

/// Policy loader bound to a policy file path.
pub struct PolicyLoader {
    policy_path: String,
}

impl PolicyLoader {
    /// Create a new policy loader.
    pub fn new(policy_path: impl Into<String>) -> Self {
        PolicyLoader {
            policy_path: policy_path.into(),
        }
    }

    /// Load the policy and build a decision engine from it.
    ///
    /// Duplicate rule ids are rejected by registry construction, so a
    /// malformed rule set never reaches traffic.
    pub fn load(&self) -> Result<(Policy, DecisionEngine), PolicyError> {
        let policy = load_policy(&self.policy_path)?;
        let engine = DecisionEngine::from_policy(&policy)?;

        Ok((policy, engine))
    }

    /// Load only the policy (without building the engine).
    pub fn load_policy(&self) -> Result<Policy, PolicyError> {
        load_policy(&self.policy_path)
    }

    /// Get the policy file path.
    pub fn policy_path(&self) -> &str {
        &self.policy_path
    }
}
