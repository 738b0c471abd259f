//! Slots: ordered card containers with geometry.
//!
//! A slot owns an ordered sequence of card ids (last = top), a geometric
//! anchor used for both rendering and hit-testing, a fan offset that
//! spreads stacked cards, and the placement policy injected by the
//! ruleset at table-construction time.
//!
//! Mutation goes through the [`Table`](crate::slots::Table), which keeps
//! the card-location index in agreement with slot contents.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, CardId};
use crate::core::geom::{Rect, Vec2};
use crate::slots::policy::{PlacementPolicy, RejectReason};

/// Slot identifier, dense per table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u16);

impl SlotId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Slot role tag. Rulesets may treat kinds specially (auto-flip applies
/// to tableau slots, win counting to foundations).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    Stock,
    Waste,
    Foundation,
    Tableau,
}

/// An ordered container of cards with a placement policy and an anchor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Slot {
    id: SlotId,
    kind: SlotKind,
    cards: Vec<CardId>,
    /// Anchor position plus single-card bounding box.
    rect: Rect,
    /// Offset between consecutive cards.
    fan: Vec2,
    /// Maximum cards; `None` for unbounded.
    capacity: Option<usize>,
    policy: PlacementPolicy,
}

impl Slot {
    /// Create an empty slot. Fan defaults to a flat pile.
    #[must_use]
    pub fn new(id: SlotId, kind: SlotKind, rect: Rect, policy: PlacementPolicy) -> Self {
        Self {
            id,
            kind,
            cards: Vec::new(),
            rect,
            fan: Vec2::ZERO,
            capacity: None,
            policy,
        }
    }

    /// Set the fan offset between consecutive cards.
    #[must_use]
    pub fn with_fan(mut self, fan: Vec2) -> Self {
        self.fan = fan;
        self
    }

    /// Set a card-count capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> SlotKind {
        self.kind
    }

    #[must_use]
    pub const fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    #[must_use]
    pub const fn fan(&self) -> Vec2 {
        self.fan
    }

    /// Anchor position plus single-card box.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Ordered contents, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top (frontmost) card, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Position of a card within this slot.
    #[must_use]
    pub fn index_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// Rectangle of the i-th card: anchor plus fan times i.
    #[must_use]
    pub fn card_rect(&self, index: usize) -> Rect {
        let steps = index as f32;
        self.rect
            .translated(Vec2::new(self.fan.dx * steps, self.fan.dy * steps))
    }

    /// Rectangle covering every current card; the single-card box when
    /// empty. Hit-testing runs against this, not against visuals.
    #[must_use]
    pub fn bounding_rect(&self) -> Rect {
        self.rect.fanned(self.fan, self.cards.len())
    }

    /// Check a group against capacity and the placement policy.
    ///
    /// Pure: callers resolve the group's cards and this slot's top card
    /// to values first, so repeated probing cannot mutate anything.
    pub fn check_group(&self, group: &[&Card], top: Option<&Card>) -> Result<(), RejectReason> {
        if group.is_empty() {
            return Err(RejectReason::EmptyGroup);
        }
        if let Some(capacity) = self.capacity {
            if self.cards.len() + group.len() > capacity {
                return Err(RejectReason::SlotFull);
            }
        }
        self.policy.check(group, top)
    }

    /// Boolean view of [`check_group`](Self::check_group).
    #[must_use]
    pub fn can_accept(&self, group: &[&Card], top: Option<&Card>) -> bool {
        self.check_group(group, top).is_ok()
    }

    // Raw mutators, used by the table which keeps the location index in
    // sync. Not public: pushing here without updating the index would
    // break the bidirectional ownership invariant.

    pub(crate) fn push_ids(&mut self, ids: &[CardId]) {
        self.cards.extend_from_slice(ids);
    }

    pub(crate) fn pop_ids(&mut self, n: usize) -> Vec<CardId> {
        self.cards.split_off(self.cards.len() - n)
    }

    pub(crate) fn cards_mut(&mut self) -> &mut Vec<CardId> {
        &mut self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};
    use crate::core::geom::Point;
    use crate::slots::policy::EmptyRule;

    fn tableau_slot() -> Slot {
        Slot::new(
            SlotId::new(0),
            SlotKind::Tableau,
            Rect::new(10.0, 10.0, 100.0, 145.0),
            PlacementPolicy::TableauRun {
                empty: EmptyRule::Any,
            },
        )
        .with_fan(Vec2::new(0.0, 30.0))
    }

    #[test]
    fn test_card_rects_follow_fan() {
        let mut slot = tableau_slot();
        slot.push_ids(&[CardId(0), CardId(1), CardId(2)]);

        assert_eq!(slot.card_rect(0).origin(), Point::new(10.0, 10.0));
        assert_eq!(slot.card_rect(2).origin(), Point::new(10.0, 70.0));
    }

    #[test]
    fn test_bounding_rect_grows_with_cards() {
        let mut slot = tableau_slot();
        assert_eq!(slot.bounding_rect(), slot.rect());

        slot.push_ids(&[CardId(0), CardId(1), CardId(2)]);
        let bounds = slot.bounding_rect();
        assert_eq!(bounds.h, 145.0 + 2.0 * 30.0);
        assert_eq!(bounds.w, 100.0);
    }

    #[test]
    fn test_top_card_and_order() {
        let mut slot = tableau_slot();
        assert_eq!(slot.top_card(), None);

        slot.push_ids(&[CardId(5), CardId(6)]);
        assert_eq!(slot.top_card(), Some(CardId(6)));
        assert_eq!(slot.index_of(CardId(5)), Some(0));
        assert_eq!(slot.index_of(CardId(9)), None);

        let popped = slot.pop_ids(1);
        assert_eq!(popped, vec![CardId(6)]);
        assert_eq!(slot.top_card(), Some(CardId(5)));
    }

    #[test]
    fn test_capacity_rejects_as_full() {
        let slot = Slot::new(
            SlotId::new(1),
            SlotKind::Foundation,
            Rect::new(0.0, 0.0, 100.0, 145.0),
            PlacementPolicy::FoundationSuit { suit: Suit::Spades },
        )
        .with_capacity(0);

        let mut ace = Card::new(Rank::Ace, Suit::Spades);
        ace.flip_to(true);
        assert_eq!(
            slot.check_group(&[&ace], None),
            Err(RejectReason::SlotFull)
        );
    }
}
