//! tokenmove Select - token selection and move generation
//!
//! Given a pool of unspent token records and a request to move an amount of
//! one token type to one recipient, this crate picks the input records to
//! spend and produces the output records that replace them:
//!
//! - [`RecordSource`]: the single-method capability that supplies unspent records
//! - [`split`]: divides one record into a moved part and a remainder
//! - [`generate_move`]: the selection engine
//!
//! # Invariants
//!
//! 1. Selected inputs always cover the requested quantity
//! 2. Outputs sum to exactly the selected inputs (nothing minted or burned)
//! 3. Inputs and outputs all carry the requested token type
//! 4. The recipient receives exactly the requested quantity
//!
//! # Selection order
//!
//! ```text
//! exact single match → smallest single oversized record (split) → smallest-first accumulation
//! ```

pub mod error;
pub mod source;
pub mod split;
pub mod plan;
pub mod engine;

pub use error::*;
pub use source::*;
pub use split::split;
pub use plan::MovePlan;
pub use engine::{eligible_candidates, generate_move, select_candidates};
