//! The Klondike ruleset.
//!
//! The familiar deal: column i gets i face-down cards and one face-up,
//! the remaining 24 stay in the stock. Clicking the stock turns its top
//! card onto the waste; clicking an empty stock recycles the waste.
//! Empty tableau columns take Kings only.

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

/// Klondike rules and layout.
#[derive(Clone, Debug)]
pub struct Klondike {
    stock: SlotId,
    waste: SlotId,
    foundations: [SlotId; FOUNDATIONS],
    tableau: [SlotId; TABLEAU_COLUMNS],
}

impl Klondike {
    #[must_use]
    pub fn new() -> Self {
        Self {
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

    /// The Klondike deal table: column i gets i face-down cards and one
    /// face-up. Leaves 24 in the stock.
    #[must_use]
    pub fn deal_plan() -> DealPlan {
        let columns = (0..TABLEAU_COLUMNS)
            .map(|column| ColumnPlan {
                face_down: column,
                face_up: 1,
            })
            .collect();
        DealPlan { columns }
    }

    #[must_use]
    pub const fn waste(&self) -> SlotId {
        self.waste
    }

    #[must_use]
    pub const fn tableau(&self) -> &[SlotId; TABLEAU_COLUMNS] {
        &self.tableau
    }

    #[must_use]
    pub const fn foundations(&self) -> &[SlotId; FOUNDATIONS] {
        &self.foundations
    }

    /// Deal the top stock card face up onto the waste.
    pub fn draw(&self, table: &mut Table) -> Result<bool, EngineError> {
        if table.slot(self.stock)?.is_empty() {
            return Ok(false);
        }
        table.deal_top(self.stock, self.waste, Some(true))?;
        Ok(true)
    }

    /// Move the whole waste back to the stock, face down, reversing
    /// order card by card.
    pub fn recycle(&self, table: &mut Table) -> Result<bool, EngineError> {
        if table.slot(self.waste)?.is_empty() {
            return Ok(false);
        }
        while !table.slot(self.waste)?.is_empty() {
            table.deal_top(self.waste, self.stock, Some(false))?;
        }
        Ok(true)
    }
}

impl Default for Klondike {
    fn default() -> Self {
        Self::new()
    }
}

impl Ruleset for Klondike {
    fn name(&self) -> &str {
        "Klondike"
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
                    PlacementPolicy::TableauRun {
                        empty: EmptyRule::KingOnly,
                    },
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

    /// Stock click draws to the waste; empty-stock click recycles the
    /// waste; a face-down tableau top flips.
    fn click(&self, table: &mut Table, hit: Hit) -> Result<bool, EngineError> {
        match hit {
            Hit::Slot(slot) if slot == self.stock => self.recycle(table),

            Hit::Card { slot, index } => {
                if slot == self.stock {
                    return self.draw(table);
                }

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

            Hit::Slot(_) => Ok(false),
        }
    }
}
