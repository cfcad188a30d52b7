use std::collections::HashMap;

use tokenmove_select::{
    generate_move, MemoryRecordSource, MovePlan, RecordSource, SelectionError,
};
use tokenmove_types::{Amount, FiatCurrency, Party, TokenRecord, TokenType, UnspentRecord};

fn issuer() -> Party {
    Party::new("O=R3 Ltd,L=London,C=GB")
}

fn alice() -> Party {
    Party::new("O=Alice SARL,L=Paris,C=FR")
}

fn bob() -> Party {
    Party::new("O=Bob Ltd,L=Milton Keynes,C=GB")
}

fn charlie() -> Party {
    Party::new("O=Charlie Pty. Ltd.,L=Sydney,C=AU")
}

fn gbp() -> TokenType {
    TokenType::cash(FiatCurrency::GBP, issuer())
}

fn usd() -> TokenType {
    TokenType::cash(FiatCurrency::USD, issuer())
}

fn acme() -> TokenType {
    TokenType::security("ACM", issuer())
}

fn northwind() -> TokenType {
    TokenType::security("NTH", issuer())
}

fn token_of(quantity: u64, token_type: TokenType, holder: Party) -> TokenRecord {
    TokenRecord::of(quantity, token_type, holder)
}

fn pay(recipient: Party, quantity: u64, token_type: TokenType) -> HashMap<Party, Amount> {
    HashMap::from([(recipient, Amount::new(quantity, token_type))])
}

fn spent_records(plan: &MovePlan) -> Vec<TokenRecord> {
    plan.inputs.iter().map(|r| r.record.clone()).collect()
}

/// Multiset comparison: same records, any order
fn assert_same_records(actual: &[TokenRecord], expected: &[TokenRecord]) {
    assert_eq!(actual.len(), expected.len(), "actual: {actual:?}");
    let mut remaining = actual.to_vec();
    for record in expected {
        let pos = remaining
            .iter()
            .position(|r| r == record)
            .unwrap_or_else(|| panic!("missing {record} in {actual:?}"));
        remaining.swap_remove(pos);
    }
}

/// Deterministic Fisher-Yates shuffle so scenarios are reproducible
fn shuffled<T>(mut items: Vec<T>, seed: u64) -> Vec<T> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    for i in (1..items.len()).rev() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let j = (state >> 33) as usize % (i + 1);
        items.swap(i, j);
    }
    items
}

#[test]
fn test_single_cash_token_for_exact_amount() {
    let available = token_of(100, gbp(), alice());
    let source = MemoryRecordSource::from_records([available.clone()]);

    let plan = generate_move(&pay(bob(), 100, gbp()), &alice(), &alice(), &source).unwrap();

    assert_same_records(&spent_records(&plan), &[available.clone()]);
    assert_eq!(plan.inputs[0].record_ref, source.records()[0].record_ref);
    assert_eq!(plan.outputs, vec![available.with_new_holder(bob())]);
}

#[test]
fn test_single_security_token_for_exact_amount() {
    let available = token_of(100, acme(), alice());
    let source = MemoryRecordSource::from_records([available.clone()]);

    let plan = generate_move(&pay(bob(), 100, acme()), &alice(), &alice(), &source).unwrap();

    assert_same_records(&spent_records(&plan), &[available.clone()]);
    assert_eq!(plan.outputs, vec![available.with_new_holder(bob())]);
}

#[test]
fn test_mix_of_cash_and_security_tokens() {
    let one_hundred_gbp = vec![
        token_of(10, gbp(), alice()),
        token_of(20, gbp(), alice()),
        token_of(30, gbp(), alice()),
        token_of(40, gbp(), alice()),
    ];
    let some_dollars = vec![
        token_of(17, usd(), alice()),
        token_of(3, usd(), alice()),
        token_of(1234, usd(), alice()),
    ];
    let some_securities = vec![token_of(10, acme(), alice()), token_of(35, acme(), alice())];

    let mut all = one_hundred_gbp.clone();
    all.extend(some_dollars);
    all.extend(some_securities);
    let source = MemoryRecordSource::from_records(shuffled(all, 0));

    let plan = generate_move(&pay(bob(), 100, gbp()), &alice(), &alice(), &source).unwrap();

    assert_same_records(&spent_records(&plan), &one_hundred_gbp);
    assert_same_records(
        &plan.outputs,
        &[
            token_of(10, gbp(), bob()),
            token_of(20, gbp(), bob()),
            token_of(30, gbp(), bob()),
            token_of(40, gbp(), bob()),
        ],
    );
}

#[test]
fn test_single_token_with_change() {
    let available = token_of(100, acme(), alice());
    let source = MemoryRecordSource::from_records([available.clone()]);

    let plan = generate_move(&pay(bob(), 10, acme()), &alice(), &alice(), &source).unwrap();

    assert_same_records(&spent_records(&plan), &[available]);
    assert_eq!(
        plan.outputs,
        vec![token_of(10, acme(), bob()), token_of(90, acme(), alice())]
    );
}

#[test]
fn test_multiple_selected_tokens_for_exact_amount() {
    let available = vec![token_of(10, acme(), alice()), token_of(90, acme(), alice())];
    let source = MemoryRecordSource::from_records(available.clone());

    let plan = generate_move(&pay(bob(), 100, acme()), &alice(), &alice(), &source).unwrap();

    assert_same_records(&spent_records(&plan), &available);
    assert_same_records(
        &plan.outputs,
        &[token_of(90, acme(), bob()), token_of(10, acme(), bob())],
    );
    assert!(plan.change(&bob()).is_empty());
}

#[test]
fn test_multiple_selected_tokens_with_change() {
    let available = vec![
        token_of(10, acme(), alice()),
        token_of(20, acme(), alice()),
        token_of(30, acme(), alice()),
    ];

    for seed in 0..6 {
        let source = MemoryRecordSource::from_records(shuffled(available.clone(), seed));

        let plan = generate_move(&pay(bob(), 33, acme()), &alice(), &alice(), &source).unwrap();

        assert_same_records(&spent_records(&plan), &available);
        assert_eq!(
            plan.outputs,
            vec![
                token_of(10, acme(), bob()),
                token_of(20, acme(), bob()),
                token_of(3, acme(), bob()),
                token_of(27, acme(), alice()),
            ]
        );
    }
}

#[test]
fn test_select_correct_security_token_by_token_type() {
    let available = vec![
        token_of(33, northwind(), alice()),
        token_of(67, northwind(), alice()),
        token_of(33, acme(), alice()),
        token_of(67, acme(), alice()),
    ];
    let source = MemoryRecordSource::from_records(shuffled(available, 7));

    let plan = generate_move(&pay(bob(), 100, acme()), &alice(), &alice(), &source).unwrap();

    assert_same_records(
        &spent_records(&plan),
        &[token_of(33, acme(), alice()), token_of(67, acme(), alice())],
    );
    assert_same_records(
        &plan.outputs,
        &[token_of(33, acme(), bob()), token_of(67, acme(), bob())],
    );
}

#[test]
fn test_insufficient_balance() {
    let mut available = vec![
        token_of(1, acme(), alice()),
        token_of(2, acme(), alice()),
        token_of(3, acme(), alice()),
        token_of(4, acme(), alice()),
    ];
    available.push(token_of(1, northwind(), alice()));
    let source = MemoryRecordSource::from_records(shuffled(available, 0));

    let err = generate_move(&pay(bob(), 11, acme()), &alice(), &alice(), &source).unwrap_err();

    assert_eq!(
        err,
        SelectionError::InsufficientBalance {
            available: 10,
            required: 11
        }
    );
    assert!(err.to_string().starts_with("There are insufficient tokens available"));
}

#[test]
fn test_change_holder_can_be_specified() {
    let available = token_of(1000, gbp(), alice());
    let source = MemoryRecordSource::from_records([available.clone()]);

    let plan = generate_move(&pay(bob(), 200, gbp()), &charlie(), &alice(), &source).unwrap();

    assert_same_records(&spent_records(&plan), &[available]);
    assert_eq!(
        plan.outputs,
        vec![token_of(200, gbp(), bob()), token_of(800, gbp(), charlie())]
    );
}

#[test]
fn test_does_not_select_on_identifier_alone() {
    let nasdaq = TokenType::security("R3", Party::new("NASDAQ"));
    let footsie = TokenType::security("R3", Party::new("Footsie"));
    let source = MemoryRecordSource::from_records([
        token_of(1, nasdaq, alice()),
        token_of(1, footsie.clone(), alice()),
    ]);

    let err = generate_move(&pay(bob(), 2, footsie), &alice(), &alice(), &source).unwrap_err();

    assert!(matches!(err, SelectionError::InsufficientBalance { .. }));
}

#[test]
fn test_records_held_by_others_are_ignored() {
    let source = MemoryRecordSource::from_records([
        token_of(50, acme(), bob()),
        token_of(50, acme(), charlie()),
        token_of(20, acme(), alice()),
    ]);

    let err = generate_move(&pay(bob(), 30, acme()), &alice(), &alice(), &source).unwrap_err();
    assert!(matches!(err, SelectionError::InsufficientBalance { available: 20, .. }));

    let plan = generate_move(&pay(bob(), 20, acme()), &alice(), &alice(), &source).unwrap();
    assert!(plan.inputs.iter().all(|r| r.holder() == &alice()));
}

#[test]
fn test_multi_recipient_rejected_before_query() {
    struct PanickingSource;

    impl RecordSource for PanickingSource {
        fn query_by_type(&self, _: &TokenType) -> tokenmove_select::Result<Vec<UnspentRecord>> {
            panic!("record source must not be queried");
        }
    }

    let recipients = HashMap::from([
        (bob(), Amount::new(10, acme())),
        (charlie(), Amount::new(10, acme())),
    ]);

    let err = generate_move(&recipients, &alice(), &alice(), &PanickingSource).unwrap_err();
    assert_eq!(err, SelectionError::UnsupportedMultiRecipient { count: 2 });

    let err = generate_move(&HashMap::new(), &alice(), &alice(), &PanickingSource).unwrap_err();
    assert_eq!(err, SelectionError::UnsupportedMultiRecipient { count: 0 });
}

#[test]
fn test_zero_amount_rejected() {
    let source = MemoryRecordSource::from_records([token_of(100, acme(), alice())]);

    let err = generate_move(&pay(bob(), 0, acme()), &alice(), &alice(), &source).unwrap_err();
    assert!(matches!(err, SelectionError::InvalidAmount { .. }));
}

#[test]
fn test_source_errors_propagate_unchanged() {
    struct OverfullSource;

    impl RecordSource for OverfullSource {
        fn query_by_type(&self, _: &TokenType) -> tokenmove_select::Result<Vec<UnspentRecord>> {
            Err(SelectionError::ResultSetTooLarge {
                found: 1500,
                limit: 1000,
            })
        }
    }

    let err =
        generate_move(&pay(bob(), 10, acme()), &alice(), &alice(), &OverfullSource).unwrap_err();
    assert_eq!(
        err,
        SelectionError::ResultSetTooLarge {
            found: 1500,
            limit: 1000
        }
    );
}

#[test]
fn test_selected_references_pass_through() {
    let source = MemoryRecordSource::from_records([
        token_of(5, acme(), alice()),
        token_of(7, acme(), alice()),
        token_of(9, acme(), alice()),
    ]);

    let plan = generate_move(&pay(bob(), 15, acme()), &alice(), &alice(), &source).unwrap();

    for input in &plan.inputs {
        assert!(source.records().contains(input));
    }
    assert_eq!(plan.input_quantity(), 21);
    assert_eq!(plan.output_quantity(), 21);
    assert_eq!(plan.quantity_held_by(&bob()), 15);
}
