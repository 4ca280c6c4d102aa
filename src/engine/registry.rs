use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::Policy;
use crate::rules::{self, Rule};

/// Errors raised when a registry cannot be constructed.
///
/// Registry construction is the gate keeping malformed rule sets away from
/// production traffic; nothing here is recoverable at evaluation time.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("duplicate rule name: {0}")]
    DuplicateRuleName(String),
}

/// Ordered, immutable collection of rules plus the policy version that
/// produced them.
///
/// The order rules were registered in defines the order their reasons
/// appear in the final explanation trail. It has no bearing on decision
/// precedence, which is governed entirely by the combinator. Append-only
/// at construction; read-only afterwards, safe to share across concurrent
/// decide calls.
#[derive(Debug)]
pub struct RuleRegistry {
    rules: Vec<Arc<dyn Rule>>,
    policy_version: String,
}

impl RuleRegistry {
    /// Build a registry from an ordered rule list.
    ///
    /// Rejects duplicate rule names so every outcome in an evaluation can
    /// be traced back to exactly one rule.
    pub fn new(
        policy_version: impl Into<String>,
        rules: Vec<Arc<dyn Rule>>,
    ) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.name().to_string()) {
                return Err(RegistryError::DuplicateRuleName(rule.name().to_string()));
            }
        }

        Ok(RuleRegistry {
            rules,
            policy_version: policy_version.into(),
        })
    }

    /// Build a registry from a policy document.
    pub fn from_policy(policy: &Policy) -> Result<Self, RegistryError> {
        RuleRegistry::new(policy.version.clone(), rules::build_rules(policy))
    }

    /// Create an empty registry.
    pub fn empty() -> Self {
        RuleRegistry {
            rules: Vec::new(),
            policy_version: "0.0.0".to_string(),
        }
    }

    /// The registered rules, in registration order.
    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Version of the policy this registry was built from.
    pub fn policy_version(&self) -> &str {
        &self.policy_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Decision, RuleDef, RuleKind, RuleParams};
    use crate::rules::{MissingDeviceRule, MissingLocationRule};

    #[test]
    fn test_registry_rejects_duplicate_names() {
        let rules: Vec<Arc<dyn Rule>> = vec![
            Arc::new(MissingLocationRule::new(
                "missing_location".to_string(),
                Decision::Review,
                20,
            )),
            Arc::new(MissingDeviceRule::new(
                "missing_location".to_string(),
                Decision::Review,
                20,
            )),
        ];

        let result = RuleRegistry::new("v1", rules);

        assert!(matches!(
            result,
            Err(RegistryError::DuplicateRuleName(name)) if name == "missing_location"
        ));
    }

    #[test]
    fn test_registry_preserves_order() {
        let rules: Vec<Arc<dyn Rule>> = vec![
            Arc::new(MissingDeviceRule::new(
                "missing_device_id".to_string(),
                Decision::Review,
                20,
            )),
            Arc::new(MissingLocationRule::new(
                "missing_location".to_string(),
                Decision::Review,
                20,
            )),
        ];

        let registry = RuleRegistry::new("v1", rules).unwrap();
        let names: Vec<&str> = registry.rules().iter().map(|r| r.name()).collect();

        assert_eq!(names, ["missing_device_id", "missing_location"]);
        assert_eq!(registry.policy_version(), "v1");
    }

    #[test]
    fn test_empty_registry() {
        let registry = RuleRegistry::empty();

        assert!(registry.is_empty());
        assert_eq!(registry.policy_version(), "0.0.0");
    }

    #[test]
    fn test_from_policy() {
        let policy = Policy {
            version: "2026-08-01.1".to_string(),
            params: RuleParams::default(),
            rules: vec![RuleDef {
                id: "max_amount_limit".to_string(),
                kind: RuleKind::MaxAmount,
                action: Decision::Decline,
                severity: 90,
            }],
        };

        let registry = RuleRegistry::from_policy(&policy).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.policy_version(), "2026-08-01.1");
    }
}
