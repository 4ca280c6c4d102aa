use crate::domain::{Decision, DecisionResult, RuleOutcome};

/// Reason emitted when no rule triggered.
pub const DEFAULT_APPROVE_REASON: &str = "No rules triggered; default APPROVE decision";

/// Reduce a set of rule outcomes into one decision and one reason trail.
///
/// The reduction is strict "highest priority class wins; severity breaks
/// ties within a class". It is not a vote and not a sum: a single
/// DECLINE-suggesting outcome outranks any number of REVIEW-suggesting
/// outcomes regardless of their severities.
///
/// Both comparisons are strict, so between two outcomes with identical
/// priority and identical severity the one evaluated first keeps the win.
///
/// Reasons are additive where the decision is not: every hit outcome
/// contributes its reasons, in input order, whether or not its suggestion
/// won.
pub fn combine(outcomes: &[RuleOutcome]) -> DecisionResult {
    let mut decision = Decision::Approve;
    let mut decision_rule: Option<String> = None;
    let mut best_priority = decision.priority();
    let mut best_severity: i64 = -1;

    for outcome in outcomes {
        if !outcome.is_hit() {
            continue;
        }
        let Some(suggested) = outcome.suggestion() else {
            continue;
        };

        let priority = suggested.priority();
        let severity = i64::from(outcome.severity());

        if priority > best_priority || (priority == best_priority && severity > best_severity) {
            decision = suggested;
            decision_rule = Some(outcome.name().to_string());
            best_priority = priority;
            best_severity = severity;
        }
    }

    let mut reasons: Vec<String> = outcomes
        .iter()
        .filter(|o| o.is_hit())
        .flat_map(|o| o.reasons().iter().cloned())
        .collect();

    if reasons.is_empty() {
        reasons.push(DEFAULT_APPROVE_REASON.to_string());
    }

    DecisionResult {
        decision,
        decision_rule,
        reasons,
        faults: Vec::new(),
    }
}
