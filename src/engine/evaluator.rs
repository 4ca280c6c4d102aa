use tracing::warn;

use crate::domain::{RuleFault, RuleOutcome, Transaction};

use super::registry::RuleRegistry;

/// Everything one evaluation pass produced: outcomes in registry order,
/// plus faults from rules that failed.
#[derive(Debug)]
pub struct Evaluation {
    pub outcomes: Vec<RuleOutcome>,
    pub faults: Vec<RuleFault>,
}

/// Evaluate every registered rule against one transaction.
///
/// All rules run exactly once, in registry order. There is no
/// short-circuit on a decline-suggesting hit: operators must see every
/// reason a transaction was flagged, not just the first. A failing rule is
/// recorded as a fault and the remaining rules still run.
///
/// Pure over (transaction, registry) apart from the warn log on faults.
pub fn evaluate(txn: &Transaction, registry: &RuleRegistry) -> Evaluation {
    let mut outcomes = Vec::with_capacity(registry.len());
    let mut faults = Vec::new();

    for rule in registry.rules() {
        match rule.evaluate(txn) {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                warn!(rule = rule.name(), error = %e, "Rule evaluation failed");
                faults.push(RuleFault::new(rule.name(), e.to_string()));
            }
        }
    }

    Evaluation { outcomes, faults }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountId, Currency, Decision};
    use crate::rules::{Rule, RuleError};
    use rust_decimal::Decimal;
    use std::sync::Arc;

    #[derive(Debug)]
    struct AlwaysHit {
        name: String,
    }

    impl Rule for AlwaysHit {
        fn name(&self) -> &str {
            &self.name
        }

        fn evaluate(&self, _txn: &Transaction) -> Result<RuleOutcome, RuleError> {
            Ok(RuleOutcome::hit(
                &self.name,
                Some(Decision::Decline),
                90,
                [format!("{} fired", self.name)],
            ))
        }
    }

    #[derive(Debug)]
    struct AlwaysMiss {
        name: String,
    }

    impl Rule for AlwaysMiss {
        fn name(&self) -> &str {
            &self.name
        }

        fn evaluate(&self, _txn: &Transaction) -> Result<RuleOutcome, RuleError> {
            Ok(RuleOutcome::miss(&self.name))
        }
    }

    #[derive(Debug)]
    struct AlwaysFail {
        name: String,
    }

    impl Rule for AlwaysFail {
        fn name(&self) -> &str {
            &self.name
        }

        fn evaluate(&self, _txn: &Transaction) -> Result<RuleOutcome, RuleError> {
            Err(RuleError::Uninterpretable("cannot parse context".to_string()))
        }
    }

    fn test_transaction() -> Transaction {
        Transaction::new(
            AccountId::new("user_123"),
            AccountId::new("merchant_456"),
            Decimal::new(1000, 0),
            Currency::new("INR"),
        )
    }

    #[test]
    fn test_all_rules_run_despite_early_decline() {
        // A decline-suggesting hit first must not stop later rules
        let registry = RuleRegistry::new(
            "v1",
            vec![
                Arc::new(AlwaysHit {
                    name: "first_decline".to_string(),
                }) as Arc<dyn Rule>,
                Arc::new(AlwaysHit {
                    name: "second_decline".to_string(),
                }),
                Arc::new(AlwaysMiss {
                    name: "quiet".to_string(),
                }),
            ],
        )
        .unwrap();

        let evaluation = evaluate(&test_transaction(), &registry);

        assert_eq!(evaluation.outcomes.len(), 3);
        assert_eq!(evaluation.outcomes[0].name(), "first_decline");
        assert_eq!(evaluation.outcomes[1].name(), "second_decline");
        assert_eq!(evaluation.outcomes[2].name(), "quiet");
        assert!(evaluation.faults.is_empty());
    }

    #[test]
    fn test_failing_rule_is_isolated() {
        let registry = RuleRegistry::new(
            "v1",
            vec![
                Arc::new(AlwaysFail {
                    name: "broken".to_string(),
                }) as Arc<dyn Rule>,
                Arc::new(AlwaysHit {
                    name: "healthy".to_string(),
                }),
            ],
        )
        .unwrap();

        let evaluation = evaluate(&test_transaction(), &registry);

        // The broken rule surfaces as a fault, not a silent non-hit
        assert_eq!(evaluation.faults.len(), 1);
        assert_eq!(evaluation.faults[0].rule, "broken");
        assert!(evaluation.faults[0].message.contains("cannot parse"));

        // The healthy rule still ran
        assert_eq!(evaluation.outcomes.len(), 1);
        assert_eq!(evaluation.outcomes[0].name(), "healthy");
    }

    #[test]
    fn test_empty_registry_yields_empty_evaluation() {
        let registry = RuleRegistry::empty();
        let evaluation = evaluate(&test_transaction(), &registry);

        assert!(evaluation.outcomes.is_empty());
        assert!(evaluation.faults.is_empty());
    }
}
