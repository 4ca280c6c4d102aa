pub mod combinator;
pub mod evaluator;
pub mod registry;

pub use combinator::{combine, DEFAULT_APPROVE_REASON};
pub use evaluator::{evaluate, Evaluation};
pub use registry::{RegistryError, RuleRegistry};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{DecisionResult, Policy, Transaction};

/// The transaction failed the engine's own minimal sanity check.
///
/// Fatal for the call: no decision is produced and the fault propagates to
/// the caller. Full validation belongs to the API layer; this is the
/// engine's last line of defense.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("transaction amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Decimal },
}

/// The decision engine: registry + evaluator + combinator behind one call.
///
/// Stateless between calls; a shared `&DecisionEngine` can serve any number
/// of concurrent `decide` calls without coordination.
#[derive(Debug)]
pub struct DecisionEngine {
    registry: RuleRegistry,
}

impl DecisionEngine {
    /// Create an engine over an existing registry.
    pub fn new(registry: RuleRegistry) -> Self {
        DecisionEngine { registry }
    }

    /// Build an engine from a policy document.
    pub fn from_policy(policy: &Policy) -> Result<Self, RegistryError> {
        Ok(DecisionEngine {
            registry: RuleRegistry::from_policy(policy)?,
        })
    }

    /// Engine with no rules; every sane transaction gets the default
    /// APPROVE. Used as the fallback before a policy loads.
    pub fn empty() -> Self {
        DecisionEngine {
            registry: RuleRegistry::empty(),
        }
    }

    /// Version of the policy this engine was built from.
    pub fn policy_version(&self) -> &str {
        self.registry.policy_version()
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.registry.len()
    }

    /// Decide on one transaction.
    ///
    /// Runs the sanity check, evaluates every rule, and reduces the
    /// outcomes. Faults from failing rules ride along in the result rather
    /// than aborting it; only a validation failure prevents a decision.
    pub fn decide(&self, txn: &Transaction) -> Result<DecisionResult, ValidationError> {
        self.check_sanity(txn)?;

        let evaluation = evaluate(txn, &self.registry);
        let mut result = combine(&evaluation.outcomes);
        result.faults = evaluation.faults;

        Ok(result)
    }

    fn check_sanity(&self, txn: &Transaction) -> Result<(), ValidationError> {
        if txn.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount { amount: txn.amount });
        }
        Ok(())
    }
}
