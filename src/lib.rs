pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod observability;
pub mod policy;
pub mod rules;

pub use config::Config;
pub use domain::{Decision, DecisionResult, RuleOutcome, Transaction};
pub use engine::{DecisionEngine, RuleRegistry};
pub use rules::Rule;
