//! Hit-testing and drag resolution.
//!
//! Pure geometry queries: what lies under the pointer, which group would
//! a press pick up, and where would a release land it. Nothing here
//! mutates the table, so the input layer can repeat these calls on every
//! pointer event for live preview.

use smallvec::SmallVec;

use crate::core::card::CardId;
use crate::core::geom::{Point, Rect, Size, Vec2};
use crate::rules::Ruleset;
use crate::slots::slot::SlotId;
use crate::slots::table::Table;

/// A dragged group of card ids, bottom of the group first.
pub type CardGroup = SmallVec<[CardId; 13]>;

/// What lies under a pointer position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    /// A card, addressed by its slot and position within it.
    Card { slot: SlotId, index: usize },
    /// An empty region of a slot.
    Slot(SlotId),
}

/// Find the front-most item under a pointer position.
///
/// Cards take precedence over bare slot regions. Within a slot, later
/// cards are stacked in front, so the search runs top-down; across
/// slots, declaration order is the precedence.
#[must_use]
pub fn hit_test(table: &Table, pos: Point) -> Option<Hit> {
    for slot in table.slots() {
        for index in (0..slot.len()).rev() {
            if slot.card_rect(index).contains(pos) {
                return Some(Hit::Card {
                    slot: slot.id(),
                    index,
                });
            }
        }
    }

    table
        .slots()
        .iter()
        .find(|slot| slot.rect().contains(pos))
        .map(|slot| Hit::Slot(slot.id()))
}

/// A drag in flight: the picked group and the geometry needed to place
/// its bounding rectangle under the moving pointer.
#[derive(Clone, Debug)]
pub struct DragState {
    origin: SlotId,
    cards: CardGroup,
    /// Pointer offset from the group rectangle's origin at pick-up time.
    grab: Vec2,
    /// Bounding size of the fanned group.
    size: Size,
}

impl DragState {
    /// Slot the drag started from.
    #[must_use]
    pub const fn origin(&self) -> SlotId {
        self.origin
    }

    /// The dragged cards, bottom of the group first.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The group's bounding rectangle with the pointer at `pos`.
    #[must_use]
    pub fn group_rect(&self, pos: Point) -> Rect {
        Rect::at(
            Point::new(pos.x - self.grab.dx, pos.y - self.grab.dy),
            self.size,
        )
    }
}

/// Try to pick up the card under the pointer together with everything
/// stacked on it.
///
/// Returns `None` when nothing draggable is there: empty board space, a
/// bare slot, a face-down card, or a tail that is not a legal group
/// under the ruleset.
#[must_use]
pub fn pick_up<R: Ruleset + ?Sized>(table: &Table, rules: &R, pos: Point) -> Option<DragState> {
    let Some(Hit::Card { slot, index }) = hit_test(table, pos) else {
        return None;
    };
    if !rules.draggable(table, slot, index) {
        return None;
    }

    let origin = table.slot(slot).ok()?;
    let cards: CardGroup = origin.cards()[index..].iter().copied().collect();
    let bounds = origin.card_rect(index).fanned(origin.fan(), cards.len());

    Some(DragState {
        origin: slot,
        cards,
        grab: Vec2::new(pos.x - bounds.x, pos.y - bounds.y),
        size: bounds.size(),
    })
}

/// Resolve the best drop target for a drag with the pointer at `pos`.
///
/// Candidates are every slot except the origin (dropping back on the
/// origin is a drag abort, not a move) whose bounding rectangle overlaps
/// the dragged group's rectangle and whose policy accepts the group.
/// Ties break on greatest overlap area, then smallest pointer-to-anchor
/// distance, then slot declaration order.
#[must_use]
pub fn resolve_target(table: &Table, drag: &DragState, pos: Point) -> Option<SlotId> {
    let group_rect = drag.group_rect(pos);
    let mut best: Option<(SlotId, f32, f32)> = None;

    for slot in table.slots() {
        if slot.id() == drag.origin {
            continue;
        }
        let area = slot.bounding_rect().overlap_area(&group_rect);
        if area <= 0.0 {
            continue;
        }
        if !table.can_accept(slot.id(), &drag.cards) {
            continue;
        }

        let dist = slot.rect().origin().distance(pos);
        let better = match best {
            None => true,
            Some((_, best_area, best_dist)) => {
                area > best_area || (area == best_area && dist < best_dist)
            }
        };
        if better {
            best = Some((slot.id(), area, dist));
        }
    }

    best.map(|(id, _, _)| id)
}
