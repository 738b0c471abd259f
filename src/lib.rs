//! # rust-patience
//!
//! A single-player card-solitaire engine: card-slot state tracking,
//! rule validation, and geometric drag-and-drop move resolution.
//!
//! ## Design Principles
//!
//! 1. **Ruleset-Agnostic Core**: No hardcoded layouts or acceptance
//!    rules. Rulesets configure slots and policies at startup.
//!
//! 2. **Closed System**: All 52 cards exist from table construction and
//!    only ever move between slots. Defensive checks refuse any
//!    operation that would break the one-card-one-slot invariant.
//!
//! 3. **Pure Resolution**: Hit-testing and drop-target resolution are
//!    repeatable queries; only the drag-end commit mutates.
//!
//! The rendering/input layer is an external collaborator: it feeds
//! pointer positions, reads slot and card state back, and draws. The
//! engine holds no window, image, or event-loop machinery.
//!
//! ## Modules
//!
//! - `core`: card identities, geometry, deterministic RNG, errors
//! - `slots`: slot containers, placement policies, the table aggregate
//! - `rules`: the `Ruleset` trait plus the Yukon and Klondike rulesets
//! - `drag`: hit-testing, drag resolution, the move executor
//! - `game`: the `Game` facade driving it all
//!
//! ## Quick Start
//!
//! ```
//! use rust_patience::{Game, Point};
//!
//! let mut game = Game::yukon().unwrap();
//! game.new_game(Some(42)).unwrap();
//!
//! // Pick up whatever sits under the pointer, preview, and drop.
//! if let Some(start) = game.start_drag(Point::new(60.0, 200.0)) {
//!     let _preview = game.update_drag(Point::new(400.0, 200.0));
//!     let outcome = game.end_drag(Point::new(400.0, 200.0)).unwrap();
//!     println!("{} cards: {}", start.cards.len(), outcome);
//! }
//! ```

pub mod core;
pub mod drag;
pub mod game;
pub mod rules;
pub mod slots;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Color, EngineError, GameRng, Layout, Point, Rank, Rect, Size, Suit, Vec2,
};

pub use crate::slots::{EmptyRule, PlacementPolicy, RejectReason, Slot, SlotId, SlotKind, Table};

pub use crate::rules::{ColumnPlan, DealPlan, Klondike, Ruleset, Yukon};

pub use crate::drag::{
    attempt_move, hit_test, pick_up, resolve_target, CardGroup, DragState, Hit, MoveOutcome,
};

pub use crate::game::{DragStart, Game};
