use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Decision;

/// Policy configuration defining rules and their parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Policy version identifier
    #[serde(rename = "policy_version")]
    pub version: String,

    /// Parameters used by rules
    #[serde(default)]
    pub params: RuleParams,

    /// Rule definitions; order here is registry order
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

impl Policy {
    /// Create an empty policy.
    pub fn empty() -> Self {
        Policy {
            version: "0.0.0".to_string(),
            params: RuleParams::default(),
            rules: Vec::new(),
        }
    }
}

/// Threshold parameters used by rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleParams {
    /// Hard per-transaction cap; amounts above this are declined
    #[serde(default = "default_max_amount")]
    pub max_amount: Decimal,

    /// Amounts above this (and at or below `max_amount`) go to review
    #[serde(default = "default_high_value_floor")]
    pub high_value_floor: Decimal,
}

fn default_max_amount() -> Decimal {
    Decimal::new(100_000, 0)
}

fn default_high_value_floor() -> Decimal {
    Decimal::new(50_000, 0)
}

impl Default for RuleParams {
    fn default() -> Self {
        RuleParams {
            max_amount: default_max_amount(),
            high_value_floor: default_high_value_floor(),
        }
    }
}

/// Rule type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Hard per-transaction amount cap
    MaxAmount,
    /// High-value band requiring manual review
    HighValue,
    /// Transaction location absent
    MissingLocation,
    /// Device identifier absent
    MissingDevice,
}

/// Definition of a single rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    /// Unique rule identifier
    pub id: String,

    /// Rule type
    #[serde(rename = "type")]
    pub kind: RuleKind,

    /// Decision to suggest when the rule triggers
    pub action: Decision,

    /// Tie-break weight; must sit inside the action's severity band
    pub severity: u32,
}

impl Decision {
    /// Inclusive severity band reserved for rules suggesting this decision.
    ///
    /// Keeping each class in its own band keeps tie-break behavior
    /// predictable as rules are added.
    pub fn severity_band(&self) -> (u32, u32) {
        match self {
            Decision::Approve => (0, 10),
            Decision::Review => (11, 60),
            Decision::Decline => (61, 100),
        }
    }
}
