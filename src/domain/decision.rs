use serde::{Deserialize, Serialize};
use std::fmt;

/// Final decision outcome with priority ordering.
///
/// Decisions are ordered by priority class from least to most severe.
/// When multiple rules suggest conflicting decisions, the highest
/// priority class wins; severity only breaks ties within a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Decision {
    /// Transaction approved
    Approve = 0,
    /// Requires manual review
    Review = 1,
    /// Transaction declined
    Decline = 2,
}

impl Decision {
    /// Returns the priority rank (APPROVE=0, REVIEW=1, DECLINE=2).
    #[inline]
    pub fn priority(&self) -> u8 {
        *self as u8
    }

    /// Returns the higher-priority of two decisions.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        std::cmp::max(self, other)
    }

    /// Returns true if this decision allows the transaction.
    #[inline]
    pub fn is_approved(&self) -> bool {
        *self == Decision::Approve
    }

    /// Returns true if this decision requires operator attention.
    #[inline]
    pub fn requires_action(&self) -> bool {
        matches!(self, Decision::Review | Decision::Decline)
    }

    /// Parse from string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "APPROVE" => Some(Decision::Approve),
            "REVIEW" => Some(Decision::Review),
            "DECLINE" => Some(Decision::Decline),
            _ => None,
        }
    }
}

impl Default for Decision {
    fn default() -> Self {
        Decision::Approve
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approve => write!(f, "APPROVE"),
            Decision::Review => write!(f, "REVIEW"),
            Decision::Decline => write!(f, "DECLINE"),
        }
    }
}
