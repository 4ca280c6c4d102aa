use crate::domain::{Decision, RuleOutcome, Transaction};
use crate::rules::traits::{Rule, RuleError};

/// Flags transactions with no device identifier.
#[derive(Debug)]
pub struct MissingDeviceRule {
    name: String,
    action: Decision,
    severity: u32,
}

impl MissingDeviceRule {
    pub fn new(name: String, action: Decision, severity: u32) -> Self {
        MissingDeviceRule {
            name,
            action,
            severity,
        }
    }
}

impl Rule for MissingDeviceRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, txn: &Transaction) -> Result<RuleOutcome, RuleError> {
        if txn.device.is_none() {
            return Ok(RuleOutcome::hit(
                &self.name,
                Some(self.action),
                self.severity,
                ["Missing device identifier".to_string()],
            ));
        }

        Ok(RuleOutcome::miss(&self.name))
    }
}
