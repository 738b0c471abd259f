//! The game facade: what the input and rendering layers talk to.
//!
//! One `Game` owns the table, the ruleset, and the drag in flight.
//! Callers feed it abstract pointer events (`start_drag`, `update_drag`,
//! `end_drag`, `click`) and read state back through the table. The
//! engine is single-threaded and not reentrant; callers serialize
//! access through one event loop.

use crate::core::error::EngineError;
use crate::core::geom::{Layout, Point};
use crate::core::rng::GameRng;
use crate::drag::executor::{attempt_move, MoveOutcome};
use crate::drag::resolver::{self, CardGroup, DragState};
use crate::rules::{Klondike, Ruleset, Yukon};
use crate::slots::slot::{SlotId, SlotKind};
use crate::slots::table::Table;

/// Origin and group of a drag that just started, for the caller to
/// render under the pointer.
#[derive(Clone, Debug)]
pub struct DragStart {
    pub origin: SlotId,
    pub cards: CardGroup,
}

/// A solitaire game in progress.
pub struct Game {
    table: Table,
    rules: Box<dyn Ruleset>,
    layout: Layout,
    seed: u64,
    drag: Option<DragState>,
}

impl Game {
    /// Create an undealt game with the default layout. Call
    /// [`new_game`](Self::new_game) to shuffle and deal.
    pub fn new(rules: Box<dyn Ruleset>) -> Result<Self, EngineError> {
        Self::with_layout(rules, Layout::default())
    }

    /// Create an undealt game on a custom layout.
    pub fn with_layout(rules: Box<dyn Ruleset>, layout: Layout) -> Result<Self, EngineError> {
        let table = Table::new(rules.build_slots(&layout), rules.stock())?;
        Ok(Self {
            table,
            rules,
            layout,
            seed: 0,
            drag: None,
        })
    }

    /// A Yukon game, undealt.
    pub fn yukon() -> Result<Self, EngineError> {
        Self::new(Box::new(Yukon::new()))
    }

    /// A Klondike game, undealt.
    pub fn klondike() -> Result<Self, EngineError> {
        Self::new(Box::new(Klondike::new()))
    }

    // === Deal ===

    /// Shuffle and deal a new game.
    ///
    /// With an explicit seed the deal is reproducible; otherwise a seed
    /// is drawn from the process RNG. Returns the seed in use so the UI
    /// can display and replay it.
    pub fn new_game(&mut self, seed: Option<u64>) -> Result<u64, EngineError> {
        let seed = seed.unwrap_or_else(rand::random);
        self.seed = seed;
        self.redeal()?;
        Ok(seed)
    }

    /// Re-deal the current seed from the start.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.redeal()
    }

    fn redeal(&mut self) -> Result<(), EngineError> {
        self.drag = None;
        self.table = Table::new(self.rules.build_slots(&self.layout), self.rules.stock())?;
        let mut rng = GameRng::new(self.seed);
        self.rules.deal(&mut self.table, &mut rng)
    }

    // === Drag commands ===

    /// Try to start a drag at the pointer position.
    ///
    /// Returns the origin slot and picked group, or `None` when nothing
    /// draggable is there. Any drag already in flight is dropped first;
    /// a drag holds no state beyond this handle, so there is nothing to
    /// unwind.
    pub fn start_drag(&mut self, pos: Point) -> Option<DragStart> {
        self.drag = None;
        let drag = resolver::pick_up(&self.table, self.rules.as_ref(), pos)?;
        let start = DragStart {
            origin: drag.origin(),
            cards: drag.cards().iter().copied().collect(),
        };
        self.drag = Some(drag);
        Some(start)
    }

    /// Preview the drop target with the pointer at `pos`, for highlight
    /// feedback. Pure; never mutates.
    #[must_use]
    pub fn update_drag(&self, pos: Point) -> Option<SlotId> {
        let drag = self.drag.as_ref()?;
        resolver::resolve_target(&self.table, drag, pos)
    }

    /// Drop at the pointer position and commit the move.
    ///
    /// Resolves the target one last time against current state, then
    /// applies the move atomically. An unresolvable drop aborts and the
    /// group stays put.
    pub fn end_drag(&mut self, pos: Point) -> Result<MoveOutcome, EngineError> {
        let drag = self.drag.take().ok_or(EngineError::NoActiveDrag)?;
        let target = resolver::resolve_target(&self.table, &drag, pos);
        attempt_move(
            &mut self.table,
            self.rules.as_ref(),
            drag.origin(),
            drag.count(),
            target,
        )
    }

    /// Abort the drag in flight, if any. No state to unwind.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// The drag in flight, for the renderer to draw under the pointer.
    #[must_use]
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // === Click commands ===

    /// Single click at a position. Returns whether state changed.
    pub fn click(&mut self, pos: Point) -> Result<bool, EngineError> {
        if self.drag.is_some() {
            return Ok(false);
        }
        match resolver::hit_test(&self.table, pos) {
            Some(hit) => self.rules.click(&mut self.table, hit),
            None => Ok(false),
        }
    }

    /// Double click at a position; rulesets use it to send a card to a
    /// foundation.
    pub fn double_click(&mut self, pos: Point) -> Result<MoveOutcome, EngineError> {
        if self.drag.is_some() {
            return Ok(MoveOutcome::Aborted);
        }
        match resolver::hit_test(&self.table, pos) {
            Some(hit) => self.rules.double_click(&mut self.table, hit),
            None => Ok(MoveOutcome::Aborted),
        }
    }

    // === Queries ===

    /// The table, for the renderer to read slots and cards.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn rules(&self) -> &dyn Ruleset {
        self.rules.as_ref()
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Seed of the current deal.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.rules.is_won(&self.table)
    }

    /// Cards banked on foundations.
    #[must_use]
    pub fn score(&self) -> usize {
        self.table
            .slots()
            .iter()
            .filter(|slot| slot.kind() == SlotKind::Foundation)
            .map(|slot| slot.len())
            .sum()
    }
}
