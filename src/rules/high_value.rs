use rust_decimal::Decimal;

use crate::domain::{Decision, RuleOutcome, Transaction};
use crate::rules::traits::{Rule, RuleError};

/// High-value band requiring manual review.
///
/// Triggers for amounts strictly above the floor and at or below the
/// ceiling; the ceiling is the hard cap, above which the max-amount rule
/// takes over.
#[derive(Debug)]
pub struct HighValueRule {
    name: String,
    action: Decision,
    severity: u32,
    floor: Decimal,
    ceiling: Decimal,
}

impl HighValueRule {
    pub fn new(
        name: String,
        action: Decision,
        severity: u32,
        floor: Decimal,
        ceiling: Decimal,
    ) -> Self {
        HighValueRule {
            name,
            action,
            severity,
            floor,
            ceiling,
        }
    }
}

impl Rule for HighValueRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, txn: &Transaction) -> Result<RuleOutcome, RuleError> {
        if txn.amount > self.floor && txn.amount <= self.ceiling {
            return Ok(RuleOutcome::hit(
                &self.name,
                Some(self.action),
                self.severity,
                ["High-value transaction requires additional scrutiny".to_string()],
            ));
        }

        Ok(RuleOutcome::miss(&self.name))
    }
}
