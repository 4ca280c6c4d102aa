use crate::domain::{Decision, RuleOutcome, Transaction};
use crate::rules::traits::{Rule, RuleError};

/// Flags transactions with no location information.
///
/// Suspicious but not a hard block on its own.
#[derive(Debug)]
pub struct MissingLocationRule {
    name: String,
    action: Decision,
    severity: u32,
}

impl MissingLocationRule {
    pub fn new(name: String, action: Decision, severity: u32) -> Self {
        MissingLocationRule {
            name,
            action,
            severity,
        }
    }
}

impl Rule for MissingLocationRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, txn: &Transaction) -> Result<RuleOutcome, RuleError> {
        if txn.location.is_none() {
            return Ok(RuleOutcome::hit(
                &self.name,
                Some(self.action),
                self.severity,
                ["Missing transaction location".to_string()],
            ));
        }

        Ok(RuleOutcome::miss(&self.name))
    }
}
