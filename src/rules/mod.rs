//! Rulesets: the strategy seam games implement.
//!
//! A ruleset declares the slot layout, the deal procedure, which cards
//! may be picked up, and the side effects of play (auto-flip, win
//! detection, click handling). The engine never hardcodes a game; it
//! calls these methods.
//!
//! Provided implementations: [`Yukon`](yukon::Yukon) (the primary
//! ruleset) and [`Klondike`](klondike::Klondike).

pub mod klondike;
pub mod yukon;

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::error::EngineError;
use crate::core::geom::Layout;
use crate::core::rng::GameRng;
use crate::drag::executor::{attempt_move, MoveOutcome};
use crate::drag::resolver::Hit;
use crate::slots::slot::{Slot, SlotId, SlotKind};
use crate::slots::table::Table;

pub use klondike::Klondike;
pub use yukon::Yukon;

/// Deal counts for one tableau column: face-down cards first, then
/// face-up on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPlan {
    pub face_down: usize,
    pub face_up: usize,
}

/// Per-column deal parameter table. Whatever the columns do not consume
/// stays in the stock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealPlan {
    pub columns: Vec<ColumnPlan>,
}

impl DealPlan {
    /// Total cards the columns consume.
    #[must_use]
    pub fn total(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.face_down + c.face_up)
            .sum()
    }
}

/// Shuffle the stock and deal the columns per the plan.
///
/// The shared deal procedure: rulesets supply the plan and the column
/// slots, the table does the moving.
pub fn deal_columns(
    table: &mut Table,
    rng: &mut GameRng,
    stock: SlotId,
    columns: &[SlotId],
    plan: &DealPlan,
) -> Result<(), EngineError> {
    debug_assert_eq!(columns.len(), plan.columns.len());

    table.shuffle_slot(stock, rng)?;
    for (&slot, column) in columns.iter().zip(&plan.columns) {
        for _ in 0..column.face_down {
            table.deal_top(stock, slot, Some(false))?;
        }
        for _ in 0..column.face_up {
            table.deal_top(stock, slot, Some(true))?;
        }
    }
    Ok(())
}

/// Is this group a valid descending, alternating-color run, bottom to
/// top in group order?
#[must_use]
pub fn is_alternating_descent(cards: &[&Card]) -> bool {
    cards
        .windows(2)
        .all(|w| w[1].rank.is_below(w[0].rank) && w[1].color() != w[0].color())
}

/// A game's rules.
///
/// ## Implementation Notes
///
/// - `build_slots`: slot ids must be dense and ordered; declaration
///   order is also hit-test precedence
/// - `deal`: runs against a fresh table holding the whole deck in the
///   stock slot
/// - `draggable`/`is_won`: must not mutate; the resolver calls them
///   while probing
pub trait Ruleset {
    /// Ruleset name, for display.
    fn name(&self) -> &str;

    /// Declare the slots, placed on the given layout.
    fn build_slots(&self, layout: &Layout) -> Vec<Slot>;

    /// The slot undealt cards live in.
    fn stock(&self) -> SlotId;

    /// Distribute a freshly shuffled deck.
    fn deal(&self, table: &mut Table, rng: &mut GameRng) -> Result<(), EngineError>;

    /// May the tail starting at `index` in `origin` be picked up?
    ///
    /// Default: every card from `index` up must be face up; a multi-card
    /// group is only draggable from a tableau slot and must itself be a
    /// descending alternating-color run; waste and foundation give up
    /// their top card only; the stock gives up nothing.
    fn draggable(&self, table: &Table, origin: SlotId, index: usize) -> bool {
        let Ok(slot) = table.slot(origin) else {
            return false;
        };
        let ids = match slot.cards().get(index..) {
            Some(ids) if !ids.is_empty() => ids,
            _ => return false,
        };
        let cards = table.resolve(ids);
        if cards.iter().any(|card| !card.is_movable()) {
            return false;
        }

        match slot.kind() {
            SlotKind::Stock => false,
            SlotKind::Tableau => cards.len() == 1 || is_alternating_descent(&cards),
            SlotKind::Waste | SlotKind::Foundation => cards.len() == 1,
        }
    }

    /// Should the executor flip a tableau card exposed by a removal?
    fn auto_flip(&self) -> bool {
        true
    }

    /// Has the game been won?
    ///
    /// Default: every foundation slot holds a full suit of 13.
    fn is_won(&self, table: &Table) -> bool {
        let mut any = false;
        for slot in table.slots() {
            if slot.kind() == SlotKind::Foundation {
                any = true;
                if slot.len() != 13 {
                    return false;
                }
            }
        }
        any
    }

    /// Handle a click on a card or slot. Returns whether state changed.
    ///
    /// Default: clicks do nothing.
    fn click(&self, table: &mut Table, hit: Hit) -> Result<bool, EngineError> {
        let _ = (table, hit);
        Ok(false)
    }

    /// Handle a double click: send the clicked top card to the first
    /// foundation that takes it.
    fn double_click(&self, table: &mut Table, hit: Hit) -> Result<MoveOutcome, EngineError> {
        let Hit::Card { slot, index } = hit else {
            return Ok(MoveOutcome::Aborted);
        };

        let target = {
            let origin = table.slot(slot)?;
            if origin.kind() == SlotKind::Foundation
                || index + 1 != origin.len()
                || !self.draggable(table, slot, index)
            {
                return Ok(MoveOutcome::Aborted);
            }
            let card = [origin.cards()[index]];
            table
                .slots()
                .iter()
                .filter(|s| s.kind() == SlotKind::Foundation)
                .find(|s| table.can_accept(s.id(), &card))
                .map(Slot::id)
        };

        match target {
            Some(target) => attempt_move(table, self, slot, 1, Some(target)),
            None => Ok(MoveOutcome::Aborted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    fn up(rank: Rank, suit: Suit) -> Card {
        let mut card = Card::new(rank, suit);
        card.flip_to(true);
        card
    }

    #[test]
    fn test_alternating_descent() {
        let black_seven = up(Rank::Seven, Suit::Spades);
        let red_six = up(Rank::Six, Suit::Hearts);
        let black_five = up(Rank::Five, Suit::Clubs);

        assert!(is_alternating_descent(&[&black_seven, &red_six, &black_five]));
        assert!(is_alternating_descent(&[&red_six]));

        // Same color break.
        let black_six = up(Rank::Six, Suit::Clubs);
        assert!(!is_alternating_descent(&[&black_seven, &black_six]));

        // Rank gap break.
        assert!(!is_alternating_descent(&[&black_seven, &black_five]));
    }

    #[test]
    fn test_deal_plan_total() {
        let plan = DealPlan {
            columns: vec![
                ColumnPlan {
                    face_down: 0,
                    face_up: 1,
                },
                ColumnPlan {
                    face_down: 2,
                    face_up: 3,
                },
            ],
        };
        assert_eq!(plan.total(), 6);
    }
}
