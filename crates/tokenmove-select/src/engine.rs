//! Selection engine
//!
//! Picks the records to spend for a single-recipient move, in this order:
//!
//! 1. a single record holding exactly the requested quantity
//! 2. the smallest single record holding more, split into payment and change
//! 3. records accumulated smallest-first, the last one split if it overshoots
//!
//! Smallest-first accumulation is a fixed policy. It is not minimal in input
//! count and can fragment holdings, but callers rely on the exact choices it
//! makes.

use std::collections::HashMap;

use tokenmove_types::{Amount, Party, TokenType, UnspentRecord};
use tracing::{debug, warn};

use crate::{split, MovePlan, RecordSource, Result, SelectionError};

/// Generate the inputs and outputs that move one amount to one recipient.
///
/// Queries `records` for the requested token type, keeps the records held by
/// `source_owner`, and selects from those. Any change goes to `change_holder`.
pub fn generate_move(
    recipients: &HashMap<Party, Amount>,
    change_holder: &Party,
    source_owner: &Party,
    records: &dyn RecordSource,
) -> Result<MovePlan> {
    let (recipient, amount) = single_recipient(recipients)?;
    if amount.is_zero() {
        return Err(zero_request());
    }

    let unspent = records.query_by_type(&amount.token_type)?;
    let candidates = eligible_candidates(unspent, &amount.token_type, source_owner);

    select_candidates(candidates, amount, recipient, change_holder)
}

fn single_recipient(recipients: &HashMap<Party, Amount>) -> Result<(&Party, &Amount)> {
    let mut entries = recipients.iter();
    match (entries.next(), entries.next()) {
        (Some(entry), None) => Ok(entry),
        _ => Err(SelectionError::UnsupportedMultiRecipient {
            count: recipients.len(),
        }),
    }
}

fn zero_request() -> SelectionError {
    SelectionError::invalid_amount("requested quantity must be greater than zero")
}

/// Keep the records `owner` can spend as `token_type`.
///
/// The type comparison covers the whole token type, issuer included, so a
/// record sharing only the identifier never qualifies. Empty records are
/// dropped since they cannot contribute to a move.
pub fn eligible_candidates(
    records: impl IntoIterator<Item = UnspentRecord>,
    token_type: &TokenType,
    owner: &Party,
) -> Vec<UnspentRecord> {
    records
        .into_iter()
        .filter(|r| r.holder() == owner && r.token_type() == token_type && r.quantity() > 0)
        .collect()
}

/// Select from records already known to be spendable as `amount`'s type.
///
/// Candidates are ordered by quantity, then by reference, before anything
/// else happens, so the result does not depend on the order they arrive in.
/// Empty candidates are ignored.
pub fn select_candidates(
    mut candidates: Vec<UnspentRecord>,
    amount: &Amount,
    recipient: &Party,
    change_holder: &Party,
) -> Result<MovePlan> {
    let requested = amount.quantity;
    if requested == 0 {
        return Err(zero_request());
    }

    if let Some(stray) = candidates.iter().find(|c| c.token_type() != &amount.token_type) {
        return Err(SelectionError::invariant(format!(
            "candidate {} holds {}, expected {}",
            stray.record_ref,
            stray.token_type(),
            amount.token_type
        )));
    }

    candidates.retain(|c| c.quantity() > 0);

    let available: u128 = candidates.iter().map(|c| u128::from(c.quantity())).sum();
    debug!(
        token_type = %amount.token_type,
        candidates = candidates.len(),
        available,
        requested,
        "Gathered candidate records"
    );

    if available < u128::from(requested) {
        warn!(
            token_type = %amount.token_type,
            available,
            requested,
            "Insufficient balance for move"
        );
        return Err(SelectionError::InsufficientBalance {
            available,
            required: requested,
        });
    }

    candidates.sort_by_key(|c| (c.quantity(), c.record_ref));

    if let Some(exact) = candidates.iter().find(|c| c.quantity() == requested) {
        debug!(record = %exact.record_ref, "Selected single exact match");
        let moved = exact.record.with_new_holder(recipient.clone());
        return Ok(MovePlan::new(vec![exact.clone()], vec![moved]));
    }

    if let Some(single) = candidates.iter().find(|c| c.quantity() > requested) {
        debug!(
            record = %single.record_ref,
            quantity = single.quantity(),
            "Selected single record with change"
        );
        let (moved, change) = split(&single.record, recipient, requested)?;
        return Ok(MovePlan::new(
            vec![single.clone()],
            vec![moved, change.with_new_holder(change_holder.clone())],
        ));
    }

    let mut inputs = Vec::new();
    let mut outputs = Vec::new();
    let mut outstanding = requested;

    for candidate in candidates {
        if candidate.quantity() <= outstanding {
            outstanding -= candidate.quantity();
            outputs.push(candidate.record.with_new_holder(recipient.clone()));
            inputs.push(candidate);

            if outstanding == 0 {
                debug!(inputs = inputs.len(), "Accumulated exact total");
                return Ok(MovePlan::new(inputs, outputs));
            }
        } else {
            let (moved, change) = split(&candidate.record, recipient, outstanding)?;
            inputs.push(candidate);
            outputs.push(moved);
            outputs.push(change.with_new_holder(change_holder.clone()));

            debug!(inputs = inputs.len(), "Accumulated total with change");
            return Ok(MovePlan::new(inputs, outputs));
        }
    }

    Err(SelectionError::invariant(format!(
        "{available} available but {outstanding} of {requested} left uncovered"
    )))
}
