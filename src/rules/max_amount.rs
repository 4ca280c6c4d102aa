use rust_decimal::Decimal;

use crate::domain::{Decision, RuleOutcome, Transaction};
use crate::rules::traits::{Rule, RuleError};

/// Hard per-transaction amount cap.
///
/// Amounts strictly above the limit are suggested for decline. In the
/// reference policy this is the most authoritative rule (severity 90).
#[derive(Debug)]
pub struct MaxAmountRule {
    name: String,
    action: Decision,
    severity: u32,
    limit: Decimal,
}

impl MaxAmountRule {
    pub fn new(name: String, action: Decision, severity: u32, limit: Decimal) -> Self {
        MaxAmountRule {
            name,
            action,
            severity,
            limit,
        }
    }
}

impl Rule for MaxAmountRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, txn: &Transaction) -> Result<RuleOutcome, RuleError> {
        if txn.amount > self.limit {
            return Ok(RuleOutcome::hit(
                &self.name,
                Some(self.action),
                self.severity,
                [format!(
                    "Amount exceeds maximum allowed limit ({})",
                    self.limit
                )],
            ));
        }

        Ok(RuleOutcome::miss(&self.name))
    }
}
