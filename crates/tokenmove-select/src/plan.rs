//! The result of a selection: records to spend and records to create

use serde::{Deserialize, Serialize};
use tokenmove_types::{Party, TokenRecord, UnspentRecord};

/// Inputs selected for spending and the outputs that replace them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlan {
    /// Selected records, references passed through from the record source
    pub inputs: Vec<UnspentRecord>,
    /// New records: the moved amount for the recipient, then any change
    pub outputs: Vec<TokenRecord>,
}

impl MovePlan {
    pub fn new(inputs: Vec<UnspentRecord>, outputs: Vec<TokenRecord>) -> Self {
        Self { inputs, outputs }
    }

    pub fn input_quantity(&self) -> u128 {
        self.inputs.iter().map(|r| u128::from(r.quantity())).sum()
    }

    pub fn output_quantity(&self) -> u128 {
        self.outputs.iter().map(|r| u128::from(r.quantity())).sum()
    }

    /// Total output quantity held by `party`
    pub fn quantity_held_by(&self, party: &Party) -> u128 {
        self.outputs
            .iter()
            .filter(|r| &r.holder == party)
            .map(|r| u128::from(r.quantity()))
            .sum()
    }

    /// Outputs not held by `recipient`
    pub fn change(&self, recipient: &Party) -> Vec<&TokenRecord> {
        self.outputs.iter().filter(|r| &r.holder != recipient).collect()
    }

    pub fn into_parts(self) -> (Vec<UnspentRecord>, Vec<TokenRecord>) {
        (self.inputs, self.outputs)
    }
}
