//! Core engine types: card identities, geometry, RNG, errors.
//!
//! Everything in this module is ruleset-agnostic. Rulesets configure the
//! slot layer on top of these building blocks.

pub mod card;
pub mod error;
pub mod geom;
pub mod rng;

pub use card::{Card, CardId, Color, Rank, Suit};
pub use error::EngineError;
pub use geom::{Layout, Point, Rect, Size, Vec2};
pub use rng::GameRng;
