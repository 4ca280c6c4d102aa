use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;
use std::sync::Arc;

use fraudr::domain::{
    AccountId, Currency, Decision, DeviceId, Location, Policy, RuleOutcome, Transaction,
};
use fraudr::engine::{combine, DecisionEngine};
use fraudr::rules::{
    HighValueRule, MaxAmountRule, MissingDeviceRule, MissingLocationRule, Rule,
};

fn create_test_transaction(amount: Decimal) -> Transaction {
    Transaction::new(
        AccountId::new("user_123"),
        AccountId::new("merchant_456"),
        amount,
        Currency::new("INR"),
    )
    .with_location(Location::new("IN"))
    .with_device(DeviceId::new("device_abc"))
}

fn reference_policy() -> Policy {
    serde_yaml::from_str(
        r#"
policy_version: "bench-1"
params:
  max_amount: 100000
  high_value_floor: 50000
rules:
  - id: max_amount_limit
    type: max_amount
    action: DECLINE
    severity: 90
  - id: high_value_review
    type: high_value
    action: REVIEW
    severity: 50
  - id: missing_location
    type: missing_location
    action: REVIEW
    severity: 20
  - id: missing_device_id
    type: missing_device
    action: REVIEW
    severity: 20
"#,
    )
    .unwrap()
}

fn bench_max_amount_rule(c: &mut Criterion) {
    let rule = MaxAmountRule::new(
        "max_amount_limit".to_string(),
        Decision::Decline,
        90,
        Decimal::new(100_000, 0),
    );

    let txn = create_test_transaction(Decimal::new(1000, 0));

    c.bench_function("max_amount_rule_evaluate_miss", |b| {
        b.iter(|| rule.evaluate(black_box(&txn)))
    });
}

fn bench_high_value_rule(c: &mut Criterion) {
    let rule = HighValueRule::new(
        "high_value_review".to_string(),
        Decision::Review,
        50,
        Decimal::new(50_000, 0),
        Decimal::new(100_000, 0),
    );

    let txn = create_test_transaction(Decimal::new(75_000, 0));

    c.bench_function("high_value_rule_evaluate_hit", |b| {
        b.iter(|| rule.evaluate(black_box(&txn)))
    });
}

fn bench_presence_rules(c: &mut Criterion) {
    let location_rule =
        MissingLocationRule::new("missing_location".to_string(), Decision::Review, 20);
    let device_rule =
        MissingDeviceRule::new("missing_device_id".to_string(), Decision::Review, 20);

    let txn = create_test_transaction(Decimal::new(1000, 0));

    c.bench_function("missing_location_rule_evaluate", |b| {
        b.iter(|| location_rule.evaluate(black_box(&txn)))
    });

    c.bench_function("missing_device_rule_evaluate", |b| {
        b.iter(|| device_rule.evaluate(black_box(&txn)))
    });
}

fn bench_combinator(c: &mut Criterion) {
    let outcomes: Vec<RuleOutcome> = vec![
        RuleOutcome::miss("max_amount_limit"),
        RuleOutcome::hit(
            "high_value_review",
            Some(Decision::Review),
            50,
            ["High-value transaction requires additional scrutiny".to_string()],
        ),
        RuleOutcome::hit(
            "missing_location",
            Some(Decision::Review),
            20,
            ["Missing transaction location".to_string()],
        ),
        RuleOutcome::miss("missing_device_id"),
    ];

    c.bench_function("combine_mixed_outcomes", |b| {
        b.iter(|| combine(black_box(&outcomes)))
    });
}

fn bench_full_decide(c: &mut Criterion) {
    let engine = Arc::new(DecisionEngine::from_policy(&reference_policy()).unwrap());

    let clean = create_test_transaction(Decimal::new(500, 0));
    let flagged = Transaction::new(
        AccountId::new("user_123"),
        AccountId::new("merchant_456"),
        Decimal::new(150_000, 0),
        Currency::new("INR"),
    );

    c.bench_function("decide_clean_transaction", |b| {
        b.iter(|| engine.decide(black_box(&clean)))
    });

    c.bench_function("decide_flagged_transaction", |b| {
        b.iter(|| engine.decide(black_box(&flagged)))
    });
}

criterion_group!(
    benches,
    bench_max_amount_rule,
    bench_high_value_rule,
    bench_presence_rules,
    bench_combinator,
    bench_full_decide,
);

criterion_main!(benches);
