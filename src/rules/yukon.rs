//! The Yukon ruleset.
//!
//! Seven tableau columns, four suit-fixed foundations, and an empty
//! stock/waste pair: the whole deck is on the board from the deal.
//! Column 0 opens with a single face-up card; column j (1..=6) gets j
//! face-down cards buried under five face-up ones.
//!
//! By default an empty tableau column takes any face-up card or run, the
//! permissive variation; [`Yukon::classic`] restores the King-only rule.

use crate::core::card::Suit;
use crate::core::error::EngineError;
use crate::core::geom::Layout;
use crate::core::rng::GameRng;
use crate::drag::resolver::Hit;
use crate::rules::{deal_columns, ColumnPlan, DealPlan, Ruleset};
use crate::slots::policy::{EmptyRule, PlacementPolicy};
use crate::slots::slot::{Slot, SlotId, SlotKind};
use crate::slots::table::Table;

const TABLEAU_COLUMNS: usize = 7;
const FOUNDATIONS: usize = 4;
/// Face-up cards dealt on top of every column after the first.
const EXTRA_FACE_UP: usize = 5;

/// Yukon rules and layout.
#[derive(Clone, Debug)]
pub struct Yukon {
    empty: EmptyRule,
    stock: SlotId,
    waste: SlotId,
    foundations: [SlotId; FOUNDATIONS],
    tableau: [SlotId; TABLEAU_COLUMNS],
}

impl Yukon {
    /// Yukon with the permissive empty-column rule.
    #[must_use]
    pub fn new() -> Self {
        Self::with_empty_rule(EmptyRule::Any)
    }

    /// Yukon with the classic King-only empty-column rule.
    #[must_use]
    pub fn classic() -> Self {
        Self::with_empty_rule(EmptyRule::KingOnly)
    }

    fn with_empty_rule(empty: EmptyRule) -> Self {
        Self {
            empty,
            stock: SlotId::new(0),
            waste: SlotId::new(1),
            foundations: [SlotId::new(2), SlotId::new(3), SlotId::new(4), SlotId::new(5)],
            tableau: [
                SlotId::new(6),
                SlotId::new(7),
                SlotId::new(8),
                SlotId::new(9),
                SlotId::new(10),
                SlotId::new(11),
                SlotId::new(12),
            ],
        }
    }

    /// The Yukon deal table: column 0 one face-up card, column j gets j
    /// face-down plus five face-up. Consumes the entire deck.
    #[must_use]
    pub fn deal_plan() -> DealPlan {
        let columns = (0..TABLEAU_COLUMNS)
            .map(|column| ColumnPlan {
                face_down: column,
                face_up: if column == 0 { 1 } else { EXTRA_FACE_UP },
            })
            .collect();
        DealPlan { columns }
    }

    /// Foundation slots, one per suit in canonical suit order.
    #[must_use]
    pub const fn foundations(&self) -> &[SlotId; FOUNDATIONS] {
        &self.foundations
    }

    /// Tableau column slots, left to right.
    #[must_use]
    pub const fn tableau(&self) -> &[SlotId; TABLEAU_COLUMNS] {
        &self.tableau
    }

    /// The foundation assigned to a suit.
    #[must_use]
    pub const fn foundation_for(&self, suit: Suit) -> SlotId {
        self.foundations[suit.index()]
    }

    #[must_use]
    pub const fn waste(&self) -> SlotId {
        self.waste
    }
}

impl Default for Yukon {
    fn default() -> Self {
        Self::new()
    }
}

impl Ruleset for Yukon {
    fn name(&self) -> &str {
        "Yukon"
    }

    fn build_slots(&self, layout: &Layout) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(2 + FOUNDATIONS + TABLEAU_COLUMNS);

        slots.push(
            Slot::new(
                self.stock,
                SlotKind::Stock,
                layout.slot_rect(0.0, 0.0),
                PlacementPolicy::Sealed,
            )
            .with_capacity(52),
        );
        slots.push(
            Slot::new(
                self.waste,
                SlotKind::Waste,
                layout.slot_rect(1.0, 0.0),
                PlacementPolicy::Sealed,
            )
            .with_capacity(52),
        );

        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            slots.push(
                Slot::new(
                    self.foundations[i],
                    SlotKind::Foundation,
                    layout.slot_rect((3 + i) as f32, 0.0),
                    PlacementPolicy::FoundationSuit { suit },
                )
                .with_capacity(13),
            );
        }

        for (i, &id) in self.tableau.iter().enumerate() {
            slots.push(
                Slot::new(
                    id,
                    SlotKind::Tableau,
                    layout.slot_rect(i as f32, 1.0),
                    PlacementPolicy::TableauRun { empty: self.empty },
                )
                .with_fan(layout.tableau_fan),
            );
        }

        slots
    }

    fn stock(&self) -> SlotId {
        self.stock
    }

    fn deal(&self, table: &mut Table, rng: &mut GameRng) -> Result<(), EngineError> {
        deal_columns(table, rng, self.stock, &self.tableau, &Self::deal_plan())
    }

    /// Clicking a face-down tableau top card turns it face up.
    fn click(&self, table: &mut Table, hit: Hit) -> Result<bool, EngineError> {
        let Hit::Card { slot, index } = hit else {
            return Ok(false);
        };
        let card = {
            let origin = table.slot(slot)?;
            if origin.kind() != SlotKind::Tableau || index + 1 != origin.len() {
                return Ok(false);
            }
            origin.cards()[index]
        };

        if table.card(card).face_up {
            return Ok(false);
        }
        table.set_face_up(card, true);
        Ok(true)
    }
}
