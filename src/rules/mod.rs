pub mod high_value;
pub mod max_amount;
pub mod missing_device;
pub mod missing_location;
pub mod traits;

pub use high_value::HighValueRule;
pub use max_amount::MaxAmountRule;
pub use missing_device::MissingDeviceRule;
pub use missing_location::MissingLocationRule;
pub use traits::{Rule, RuleError};

use std::sync::Arc;

use crate::domain::{Policy, RuleKind};

/// Build rules from a policy, preserving the policy's rule order.
///
/// Registration order defines the order reasons appear in the final
/// explanation trail; it never defines decision precedence.
pub fn build_rules(policy: &Policy) -> Vec<Arc<dyn Rule>> {
    let mut rules: Vec<Arc<dyn Rule>> = Vec::with_capacity(policy.rules.len());

    for def in &policy.rules {
        match def.kind {
            RuleKind::MaxAmount => {
                rules.push(Arc::new(MaxAmountRule::new(
                    def.id.clone(),
                    def.action,
                    def.severity,
                    policy.params.max_amount,
                )));
            }
            RuleKind::HighValue => {
                rules.push(Arc::new(HighValueRule::new(
                    def.id.clone(),
                    def.action,
                    def.severity,
                    policy.params.high_value_floor,
                    policy.params.max_amount,
                )));
            }
            RuleKind::MissingLocation => {
                rules.push(Arc::new(MissingLocationRule::new(
                    def.id.clone(),
                    def.action,
                    def.severity,
                )));
            }
            RuleKind::MissingDevice => {
                rules.push(Arc::new(MissingDeviceRule::new(
                    def.id.clone(),
                    def.action,
                    def.severity,
                )));
            }
        }
    }

    rules
}
