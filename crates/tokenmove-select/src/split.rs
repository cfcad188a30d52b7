//! Splitting a record into a moved part and a remainder

use tokenmove_types::{Party, TokenRecord};

use crate::{Result, SelectionError};

/// Split `quantity` off `record` for `recipient`.
///
/// Returns `(moved, remainder)`. The remainder stays with the record's
/// current holder; callers re-point it when change goes elsewhere. Both
/// parts keep the record's token type and together hold exactly its quantity.
///
/// `quantity` must be a strict, non-zero part of the record. Moving the whole
/// record is a holder change, not a split.
pub fn split(
    record: &TokenRecord,
    recipient: &Party,
    quantity: u64,
) -> Result<(TokenRecord, TokenRecord)> {
    let available = record.quantity();
    if quantity == 0 || quantity >= available {
        return Err(SelectionError::InvalidSplitAmount {
            requested: quantity,
            available,
        });
    }

    let moved = TokenRecord::new(record.amount.with_quantity(quantity), recipient.clone());
    let remainder = TokenRecord::new(
        record.amount.with_quantity(available - quantity),
        record.holder.clone(),
    );

    Ok((moved, remainder))
}
