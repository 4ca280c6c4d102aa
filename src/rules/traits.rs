use std::fmt::Debug;

use thiserror::Error;

use crate::domain::{RuleOutcome, Transaction};

/// Error raised by a rule that cannot complete its evaluation.
///
/// A failing rule is isolated by the evaluator: its fault is recorded and
/// the remaining rules still run.
#[derive(Error, Debug)]
pub enum RuleError {
    /// The rule could not interpret its input
    #[error("uninterpretable input: {0}")]
    Uninterpretable(String),

    /// The rule hit an internal invariant it could not recover from
    #[error("internal rule failure: {0}")]
    Internal(String),
}

/// Trait for policy rules.
///
/// Rules are pure functions over the transaction snapshot: no side effects,
/// no I/O, no shared state. Any data a rule needs (balances, history) must
/// already be resolved into the snapshot before evaluation.
///
/// Each rule is independent of the others; combination semantics live
/// entirely in the combinator.
pub trait Rule: Send + Sync + Debug {
    /// Stable identifier for this rule, unique within a registry.
    fn name(&self) -> &str;

    /// Evaluate the rule against a transaction.
    ///
    /// Returns the outcome (hit or miss), or an error if the rule cannot
    /// interpret the transaction at all.
    fn evaluate(&self, txn: &Transaction) -> Result<RuleOutcome, RuleError>;
}
