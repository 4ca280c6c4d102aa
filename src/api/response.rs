use serde::Serialize;

use crate::domain::{Decision, DecisionResult, RuleFault, TransactionId};

/// Response from a transaction authorization.
#[derive(Debug, Serialize)]
pub struct AuthorizeResponse {
    /// Identifier assigned to this transaction
    pub transaction_id: TransactionId,

    /// The decision outcome
    pub decision: Decision,

    /// Rule whose suggestion determined the decision, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_rule: Option<String>,

    /// Explanations from all triggered rules, in evaluation order
    pub reasons: Vec<String>,

    /// Rules that failed during evaluation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub faults: Vec<RuleFault>,

    /// Policy version used for this decision
    pub policy_version: String,
}

impl AuthorizeResponse {
    /// Build a response from the engine's result.
    pub fn new(
        transaction_id: TransactionId,
        result: DecisionResult,
        policy_version: String,
    ) -> Self {
        AuthorizeResponse {
            transaction_id,
            decision: result.decision,
            decision_rule: result.decision_rule,
            reasons: result.reasons,
            faults: result.faults,
            policy_version,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub policy_version: String,
    pub uptime_secs: u64,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub policy_version: String,
    pub rules: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
            code: code.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ErrorResponse::new(message, "BAD_REQUEST")
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        ErrorResponse::new(message, "INTERNAL_ERROR")
    }
}
