//! Drag interaction: hit-testing, target resolution, move execution.
//!
//! The resolver half is pure and runs on every pointer event; the
//! executor half mutates and runs once, at drag end.

pub mod executor;
pub mod resolver;

pub use executor::{attempt_move, MoveOutcome};
pub use resolver::{hit_test, pick_up, resolve_target, CardGroup, DragState, Hit};
