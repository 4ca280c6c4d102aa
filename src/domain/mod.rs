pub mod decision;
pub mod outcome;
pub mod policy;
pub mod transaction;

pub use decision::Decision;
pub use outcome::{DecisionResult, Reasons, RuleFault, RuleOutcome};
pub use policy::{Policy, RuleDef, RuleKind, RuleParams};
pub use transaction::{AccountId, Currency, DeviceId, Location, Transaction, TransactionId};
