//! Structural error taxonomy.
//!
//! Expected, frequent outcomes of play (a drop the rules refuse, an
//! aborted drag) are not errors; they are `MoveOutcome` values. Errors
//! here mean the caller broke a contract or the card/slot bookkeeping
//! was found out of agreement. None of them are recoverable by
//! retrying.

use serde::{Deserialize, Serialize};

use crate::core::card::CardId;
use crate::slots::slot::SlotId;

/// A structural fault or caller-contract violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// More cards were requested from a slot than it holds.
    Underflow {
        slot: SlotId,
        requested: usize,
        available: usize,
    },
    /// Card ownership was found out of agreement.
    ///
    /// This indicates a logic defect, not a user error; the operation
    /// that detected it has been rolled back or refused.
    InvariantViolation { card: CardId, detail: String },
    /// A slot id that does not exist on this table.
    UnknownSlot(SlotId),
    /// A drag command arrived with no drag in flight.
    NoActiveDrag,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Underflow {
                slot,
                requested,
                available,
            } => write!(
                f,
                "cannot take {} cards from {} holding {}",
                requested, slot, available
            ),
            EngineError::InvariantViolation { card, detail } => {
                write!(f, "invariant violation on card {}: {}", card, detail)
            }
            EngineError::UnknownSlot(slot) => write!(f, "unknown slot {}", slot),
            EngineError::NoActiveDrag => write!(f, "no drag in flight"),
        }
    }
}

impl std::error::Error for EngineError {}
