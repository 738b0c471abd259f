//! The move executor: validate and apply one move atomically.
//!
//! A move is the transient {origin, group tail, target} triple produced
//! by a drag. The executor re-validates against current state, performs
//! the pop/push pair as one transaction, then runs the rule side effects
//! (auto-flip, win check). No partial state is ever observable from
//! outside: a failure either happens before any mutation or rolls the
//! group back where it came from.

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;
use crate::rules::Ruleset;
use crate::slots::policy::RejectReason;
use crate::slots::slot::{SlotId, SlotKind};
use crate::slots::table::Table;

/// Result of an attempted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was applied.
    Applied,
    /// The move was applied and completed the game.
    Won,
    /// No target was resolved; the group snaps back, state unchanged.
    Aborted,
    /// The target refused the group; state unchanged.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Did the move mutate the table?
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied | MoveOutcome::Won)
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Applied => f.write_str("applied"),
            MoveOutcome::Won => f.write_str("applied, game won"),
            MoveOutcome::Aborted => f.write_str("aborted"),
            MoveOutcome::Rejected(reason) => write!(f, "rejected: {}", reason),
        }
    }
}

/// Validate and apply the move of `count` cards from the tail of
/// `origin` onto `target`.
///
/// A `None` target is a drag abort. The target's policy is re-checked
/// here even though the resolver already filtered on it; the state may
/// have changed between resolution and commit.
///
/// Errors are structural: `Underflow` when `count` exceeds the origin,
/// and `InvariantViolation` if the push half of the transaction fails
/// after the pop succeeded (the group is restored to the origin first).
pub fn attempt_move<R: Ruleset + ?Sized>(
    table: &mut Table,
    rules: &R,
    origin: SlotId,
    count: usize,
    target: Option<SlotId>,
) -> Result<MoveOutcome, EngineError> {
    let Some(target) = target else {
        return Ok(MoveOutcome::Aborted);
    };
    if target == origin {
        return Ok(MoveOutcome::Aborted);
    }
    table.slot(target)?;

    // Re-validate against current state.
    {
        let origin_slot = table.slot(origin)?;
        let available = origin_slot.len();
        if count > available {
            return Err(EngineError::Underflow {
                slot: origin,
                requested: count,
                available,
            });
        }
        let group = &origin_slot.cards()[available - count..];
        if let Err(reason) = table.check_drop(target, group) {
            return Ok(MoveOutcome::Rejected(reason));
        }
    }

    // The transaction: pop then push, restoring on failure.
    let group = table.pop_tail(origin, count)?;
    if let Err(err) = table.push_group(target, &group) {
        table.push_group(origin, &group)?;
        return Err(err);
    }

    if rules.auto_flip() {
        flip_exposed(table, origin)?;
    }

    if rules.is_won(table) {
        Ok(MoveOutcome::Won)
    } else {
        Ok(MoveOutcome::Applied)
    }
}

/// Turn a tableau slot's newly exposed face-down top card face up.
fn flip_exposed(table: &mut Table, origin: SlotId) -> Result<(), EngineError> {
    let exposed = {
        let slot = table.slot(origin)?;
        if slot.kind() != SlotKind::Tableau {
            return Ok(());
        }
        match slot.top_card() {
            Some(top) if !table.card(top).face_up => top,
            _ => return Ok(()),
        }
    };
    table.set_face_up(exposed, true);
    Ok(())
}
