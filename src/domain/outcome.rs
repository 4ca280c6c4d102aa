use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Decision;

/// Reason strings attached to a rule hit.
///
/// SmallVec optimizes for the common case of 0-2 reasons per rule.
pub type Reasons = SmallVec<[String; 2]>;

/// Outcome of evaluating a single rule against one transaction.
///
/// Fields are private and the two constructors are the only way to build a
/// value: a miss carries no suggested decision and no reasons, so the no-hit
/// purity invariant holds by construction rather than by convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    /// Stable rule identifier, unique within a registry
    name: String,

    /// Whether the rule's condition matched
    hit: bool,

    /// Suggested decision; `None` means the rule contributes reasons only
    suggestion: Option<Decision>,

    /// Human-readable explanations for the hit
    reasons: Reasons,

    /// Tie-break weight among same-priority suggestions
    severity: u32,
}

impl RuleOutcome {
    /// The rule did not trigger.
    pub fn miss(name: impl Into<String>) -> Self {
        RuleOutcome {
            name: name.into(),
            hit: false,
            suggestion: None,
            reasons: Reasons::new(),
            severity: 0,
        }
    }

    /// The rule triggered with a suggested decision and explanation.
    ///
    /// `suggestion` may be `None` for a purely informational rule whose
    /// reasons should surface without affecting the decision.
    pub fn hit(
        name: impl Into<String>,
        suggestion: Option<Decision>,
        severity: u32,
        reasons: impl IntoIterator<Item = String>,
    ) -> Self {
        RuleOutcome {
            name: name.into(),
            hit: true,
            suggestion,
            reasons: reasons.into_iter().collect(),
            severity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn suggestion(&self) -> Option<Decision> {
        self.suggestion
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn severity(&self) -> u32 {
        self.severity
    }
}

/// Record of a rule that failed during evaluation.
///
/// Faults are isolated: the failing rule is recorded here and the remaining
/// rules still run, so one misbehaving rule never suppresses the rest of the
/// explanation trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFault {
    /// The rule that failed
    pub rule: String,

    /// What went wrong
    pub message: String,
}

impl RuleFault {
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        RuleFault {
            rule: rule.into(),
            message: message.into(),
        }
    }
}

/// The engine's final output for one transaction.
///
/// Constructed fresh per `decide` call, never mutated afterwards, never
/// cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionResult {
    /// The aggregated decision
    pub decision: Decision,

    /// Rule whose suggestion won the reduction; `None` for the default
    /// APPROVE when nothing triggered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_rule: Option<String>,

    /// All hit rules' reasons, in registry evaluation order
    pub reasons: Vec<String>,

    /// Rules that failed during evaluation, if any
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub faults: Vec<RuleFault>,
}
