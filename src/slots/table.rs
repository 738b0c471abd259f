//! The table: root aggregate owning all cards and slots.
//!
//! Cards live in a flat 52-entry arena indexed by `CardId`; slots store
//! ordered id sequences; a location index keeps the card-to-slot backlink.
//! Every mutation goes through the table so the two stay in agreement.
//!
//! Construction places the whole deck face down in a designated home slot
//! (the stock), so the closed-system invariant holds from the first
//! instant: the union of all slot contents is always exactly the 52
//! identities, each present once. Dealing and play only move cards.
//!
//! ## Usage
//!
//! ```
//! use rust_patience::core::{CardId, Rect};
//! use rust_patience::slots::{PlacementPolicy, Slot, SlotId, SlotKind, Table};
//!
//! let stock = Slot::new(
//!     SlotId::new(0),
//!     SlotKind::Stock,
//!     Rect::new(0.0, 0.0, 100.0, 145.0),
//!     PlacementPolicy::Sealed,
//! );
//! let table = Table::new(vec![stock], SlotId::new(0)).unwrap();
//!
//! assert_eq!(table.slot(SlotId::new(0)).unwrap().len(), CardId::COUNT);
//! assert!(table.check_invariants().is_ok());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::card::{Card, CardId, Rank, Suit};
use crate::core::error::EngineError;
use crate::core::rng::GameRng;
use crate::slots::policy::RejectReason;
use crate::slots::slot::{Slot, SlotId};

/// Root aggregate: the card arena, the slots, and the location index.
///
/// Slot order is significant; the deal and hit-testing iterate slots in
/// the order the ruleset declared them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table {
    cards: Vec<Card>,
    slots: Vec<Slot>,
    /// Card locations. A card is absent only mid-transaction, between a
    /// `pop_tail` and the matching `push_group`.
    locations: FxHashMap<CardId, SlotId>,
}

impl Table {
    /// Create a table with the given slots and all 52 cards face down in
    /// `home`.
    ///
    /// Slot ids must be dense and match their position in `slots`; that
    /// is a construction-time programming contract, so it panics rather
    /// than returning an error. An unknown `home` is reported as
    /// `UnknownSlot`.
    pub fn new(slots: Vec<Slot>, home: SlotId) -> Result<Self, EngineError> {
        for (index, slot) in slots.iter().enumerate() {
            assert!(
                slot.id().raw() == index,
                "slot ids must be dense and ordered, got {} at index {}",
                slot.id(),
                index
            );
        }
        if home.raw() >= slots.len() {
            return Err(EngineError::UnknownSlot(home));
        }

        let mut cards = Vec::with_capacity(CardId::COUNT);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        let mut table = Self {
            cards,
            slots,
            locations: FxHashMap::default(),
        };

        let ids: Vec<CardId> = CardId::all().collect();
        table.push_group(home, &ids)?;
        Ok(table)
    }

    // === Queries ===

    /// Card by id.
    ///
    /// Ids index the arena directly; an id that was not produced by this
    /// engine is out of contract and panics.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.raw()]
    }

    /// All slots, in declaration order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot by id.
    pub fn slot(&self, id: SlotId) -> Result<&Slot, EngineError> {
        self.slots.get(id.raw()).ok_or(EngineError::UnknownSlot(id))
    }

    /// Slot currently holding a card. `None` only mid-transaction.
    #[must_use]
    pub fn slot_of(&self, card: CardId) -> Option<SlotId> {
        self.locations.get(&card).copied()
    }

    /// Position of a card within its slot, bottom = 0.
    #[must_use]
    pub fn position_in_slot(&self, card: CardId) -> Option<usize> {
        let slot = self.slot_of(card)?;
        self.slots[slot.raw()].index_of(card)
    }

    /// Top card of a slot.
    pub fn top_card(&self, slot: SlotId) -> Result<Option<CardId>, EngineError> {
        Ok(self.slot(slot)?.top_card())
    }

    /// Resolve ids to card values, preserving order.
    #[must_use]
    pub fn resolve<'a>(&'a self, ids: &[CardId]) -> Vec<&'a Card> {
        ids.iter().map(|&id| self.card(id)).collect()
    }

    /// Probe whether a slot would accept the group, with the refusal
    /// reason on failure.
    ///
    /// Pure: repeated calls with unchanged state return the same answer
    /// and mutate nothing. Unknown slots refuse with `NotAccepting`.
    pub fn check_drop(&self, slot: SlotId, group: &[CardId]) -> Result<(), RejectReason> {
        let Some(target) = self.slots.get(slot.raw()) else {
            return Err(RejectReason::NotAccepting);
        };
        let cards = self.resolve(group);
        let top = target.top_card().map(|id| self.card(id));
        target.check_group(&cards, top)
    }

    /// Boolean view of [`check_drop`](Self::check_drop).
    #[must_use]
    pub fn can_accept(&self, slot: SlotId, group: &[CardId]) -> bool {
        self.check_drop(slot, group).is_ok()
    }

    // === Mutation ===

    /// Set a card's face state.
    pub fn set_face_up(&mut self, card: CardId, face_up: bool) {
        self.cards[card.raw()].flip_to(face_up);
    }

    /// Toggle a card's face state.
    pub fn flip(&mut self, card: CardId) {
        self.cards[card.raw()].flip();
    }

    /// Append a group to a slot, in group order, updating the location
    /// index.
    ///
    /// Every card in the group must currently be unassigned (popped
    /// first); a card still assigned elsewhere is an `InvariantViolation`
    /// and nothing is mutated.
    pub fn push_group(&mut self, slot: SlotId, group: &[CardId]) -> Result<(), EngineError> {
        if slot.raw() >= self.slots.len() {
            return Err(EngineError::UnknownSlot(slot));
        }
        for &id in group {
            if let Some(held_by) = self.locations.get(&id) {
                return Err(EngineError::InvariantViolation {
                    card: id,
                    detail: format!("pushed while still assigned to {}", held_by),
                });
            }
        }

        self.slots[slot.raw()].push_ids(group);
        for &id in group {
            self.locations.insert(id, slot);
        }
        Ok(())
    }

    /// Remove and return the top `n` cards of a slot as an ordered group
    /// (bottom of the group first).
    ///
    /// The removed cards leave the location index; callers must push them
    /// somewhere before control returns to the outside world.
    pub fn pop_tail(&mut self, slot: SlotId, n: usize) -> Result<Vec<CardId>, EngineError> {
        if slot.raw() >= self.slots.len() {
            return Err(EngineError::UnknownSlot(slot));
        }
        let available = self.slots[slot.raw()].len();
        if n > available {
            return Err(EngineError::Underflow {
                slot,
                requested: n,
                available,
            });
        }

        let ids = self.slots[slot.raw()].pop_ids(n);
        for id in &ids {
            self.locations.remove(id);
        }
        Ok(ids)
    }

    /// Move the top card of one slot onto another, optionally forcing its
    /// face. The internal deal operation; it bypasses placement policies.
    pub fn deal_top(
        &mut self,
        from: SlotId,
        to: SlotId,
        face_up: Option<bool>,
    ) -> Result<CardId, EngineError> {
        let ids = self.pop_tail(from, 1)?;
        let id = ids[0];
        if let Some(face_up) = face_up {
            self.set_face_up(id, face_up);
        }
        self.push_group(to, &ids)?;
        Ok(id)
    }

    /// Shuffle a slot's cards in place.
    pub fn shuffle_slot(&mut self, slot: SlotId, rng: &mut GameRng) -> Result<(), EngineError> {
        if slot.raw() >= self.slots.len() {
            return Err(EngineError::UnknownSlot(slot));
        }
        rng.shuffle(self.slots[slot.raw()].cards_mut());
        Ok(())
    }

    // === Invariants ===

    /// Verify the closed-system invariant: every identity in exactly one
    /// slot, and slot contents agreeing with the location index.
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        let mut seen = [false; CardId::COUNT];

        for slot in &self.slots {
            for &id in slot.cards() {
                if seen[id.raw()] {
                    return Err(EngineError::InvariantViolation {
                        card: id,
                        detail: "present in two slots".to_string(),
                    });
                }
                seen[id.raw()] = true;

                if self.locations.get(&id) != Some(&slot.id()) {
                    return Err(EngineError::InvariantViolation {
                        card: id,
                        detail: format!("location index disagrees with {}", slot.id()),
                    });
                }
            }
        }

        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(EngineError::InvariantViolation {
                card: CardId(missing as u8),
                detail: "absent from all slots".to_string(),
            });
        }
        Ok(())
    }
}
