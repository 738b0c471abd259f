//! Placement policies: per-slot acceptance predicates.
//!
//! A policy decides whether a dragged group may land on a slot, given the
//! slot's current top card. Policies are pure: the resolver probes many
//! candidate slots per pointer event and nothing may mutate under it.
//!
//! Rulesets pick the policy for each slot at table-construction time; the
//! slot itself only stores and invokes it.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank, Suit};

/// What an empty tableau slot accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyRule {
    /// Any face-up card or run. The permissive Yukon variation.
    Any,
    /// Only a group headed by a King. The classic rule.
    KingOnly,
}

/// Why a drop was refused.
///
/// Rejections are expected, frequent, and non-fatal; the UI surfaces them
/// as snap-back feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Group head does not continue the target's sequence.
    WrongRank,
    /// Group head matches the target top's color.
    WrongColor,
    /// Card belongs to a different suit than the foundation.
    WrongSuit,
    /// Target top card is face down.
    NotFaceUp,
    /// Slot is at capacity.
    SlotFull,
    /// Target takes one card at a time.
    SingleCardOnly,
    /// Slot never accepts dropped cards.
    NotAccepting,
    /// Nothing was dragged.
    EmptyGroup,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            RejectReason::WrongRank => "wrong rank",
            RejectReason::WrongColor => "wrong color",
            RejectReason::WrongSuit => "wrong suit",
            RejectReason::NotFaceUp => "target is face down",
            RejectReason::SlotFull => "slot is full",
            RejectReason::SingleCardOnly => "single cards only",
            RejectReason::NotAccepting => "slot does not accept drops",
            RejectReason::EmptyGroup => "empty drag group",
        };
        f.write_str(reason)
    }
}

/// Acceptance predicate for a slot, fixed at table construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementPolicy {
    /// Never accepts dropped cards. Stock and waste piles; the deal
    /// reaches them through internal operations instead.
    Sealed,
    /// One suit, ascending from the Ace, one card at a time.
    FoundationSuit { suit: Suit },
    /// Descending rank, alternating color runs.
    TableauRun { empty: EmptyRule },
}

impl PlacementPolicy {
    /// Check a dragged group against this policy and the slot's top card.
    ///
    /// `group` is ordered bottom-to-top as it would land; `top` is the
    /// current top card of the target slot. The group's own internal run
    /// validity is the resolver's concern at drag start, not checked here.
    pub fn check(&self, group: &[&Card], top: Option<&Card>) -> Result<(), RejectReason> {
        let head = *group.first().ok_or(RejectReason::EmptyGroup)?;

        match *self {
            PlacementPolicy::Sealed => Err(RejectReason::NotAccepting),

            PlacementPolicy::FoundationSuit { suit } => {
                if group.len() != 1 {
                    return Err(RejectReason::SingleCardOnly);
                }
                if head.suit != suit {
                    return Err(RejectReason::WrongSuit);
                }
                match top {
                    None => {
                        if head.rank == Rank::Ace {
                            Ok(())
                        } else {
                            Err(RejectReason::WrongRank)
                        }
                    }
                    Some(top) => {
                        if top.rank.is_below(head.rank) {
                            Ok(())
                        } else {
                            Err(RejectReason::WrongRank)
                        }
                    }
                }
            }

            PlacementPolicy::TableauRun { empty } => match top {
                None => match empty {
                    EmptyRule::Any => Ok(()),
                    EmptyRule::KingOnly => {
                        if head.rank == Rank::King {
                            Ok(())
                        } else {
                            Err(RejectReason::WrongRank)
                        }
                    }
                },
                Some(top) => {
                    if !top.face_up {
                        return Err(RejectReason::NotFaceUp);
                    }
                    if !head.rank.is_below(top.rank) {
                        return Err(RejectReason::WrongRank);
                    }
                    if head.color() == top.color() {
                        return Err(RejectReason::WrongColor);
                    }
                    Ok(())
                }
            },
        }
    }

    /// Boolean view of [`check`](Self::check).
    #[must_use]
    pub fn accepts(&self, group: &[&Card], top: Option<&Card>) -> bool {
        self.check(group, top).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn up(rank: Rank, suit: Suit) -> Card {
        let mut card = Card::new(rank, suit);
        card.flip_to(true);
        card
    }

    #[test]
    fn test_sealed_refuses_everything() {
        let policy = PlacementPolicy::Sealed;
        let ace = up(Rank::Ace, Suit::Spades);
        assert_eq!(policy.check(&[&ace], None), Err(RejectReason::NotAccepting));
    }

    #[test]
    fn test_tableau_descending_alternating() {
        let policy = PlacementPolicy::TableauRun {
            empty: EmptyRule::Any,
        };

        let red_six = up(Rank::Six, Suit::Hearts);
        let black_seven = up(Rank::Seven, Suit::Spades);
        let red_seven = up(Rank::Seven, Suit::Diamonds);
        let black_five = up(Rank::Five, Suit::Clubs);

        assert_eq!(policy.check(&[&red_six], Some(&black_seven)), Ok(()));
        assert_eq!(
            policy.check(&[&red_six], Some(&red_seven)),
            Err(RejectReason::WrongColor)
        );
        assert_eq!(
            policy.check(&[&red_six], Some(&black_five)),
            Err(RejectReason::WrongRank)
        );
    }

    #[test]
    fn test_tableau_face_down_top() {
        let policy = PlacementPolicy::TableauRun {
            empty: EmptyRule::Any,
        };
        let red_six = up(Rank::Six, Suit::Hearts);
        let hidden_seven = Card::new(Rank::Seven, Suit::Spades);

        assert_eq!(
            policy.check(&[&red_six], Some(&hidden_seven)),
            Err(RejectReason::NotFaceUp)
        );
    }

    #[test]
    fn test_tableau_empty_rules() {
        let any = PlacementPolicy::TableauRun {
            empty: EmptyRule::Any,
        };
        let kings = PlacementPolicy::TableauRun {
            empty: EmptyRule::KingOnly,
        };

        let six = up(Rank::Six, Suit::Hearts);
        let king = up(Rank::King, Suit::Spades);

        assert_eq!(any.check(&[&six], None), Ok(()));
        assert_eq!(kings.check(&[&six], None), Err(RejectReason::WrongRank));
        assert_eq!(kings.check(&[&king], None), Ok(()));
    }

    #[test]
    fn test_foundation_ascending_one_suit() {
        let policy = PlacementPolicy::FoundationSuit { suit: Suit::Spades };

        let ace_spades = up(Rank::Ace, Suit::Spades);
        let two_spades = up(Rank::Two, Suit::Spades);
        let ace_hearts = up(Rank::Ace, Suit::Hearts);

        assert_eq!(policy.check(&[&ace_spades], None), Ok(()));
        assert_eq!(
            policy.check(&[&two_spades], None),
            Err(RejectReason::WrongRank)
        );
        assert_eq!(
            policy.check(&[&ace_hearts], None),
            Err(RejectReason::WrongSuit)
        );

        assert_eq!(policy.check(&[&two_spades], Some(&ace_spades)), Ok(()));
        assert_eq!(
            policy.check(&[&ace_spades], Some(&two_spades)),
            Err(RejectReason::WrongRank)
        );
    }

    #[test]
    fn test_foundation_single_card_only() {
        let policy = PlacementPolicy::FoundationSuit { suit: Suit::Spades };
        let ace = up(Rank::Ace, Suit::Spades);
        let two = up(Rank::Two, Suit::Spades);

        assert_eq!(
            policy.check(&[&ace, &two], None),
            Err(RejectReason::SingleCardOnly)
        );
    }

    #[test]
    fn test_check_is_pure() {
        let policy = PlacementPolicy::TableauRun {
            empty: EmptyRule::Any,
        };
        let red_six = up(Rank::Six, Suit::Hearts);
        let black_seven = up(Rank::Seven, Suit::Spades);

        for _ in 0..10 {
            assert_eq!(policy.check(&[&red_six], Some(&black_seven)), Ok(()));
        }
    }
}
