//! Card identities and face state.
//!
//! A standard deck holds 52 unique (rank, suit) identities. Identity is
//! immutable; the only mutable card state is whether it lies face up.
//!
//! ## Arena IDs
//!
//! Cards are addressed by `CardId`, a dense index into the table's card
//! arena. The id encodes the identity (`suit * 13 + rank - 1`), so lookups
//! by identity never search.
//!
//! ## Usage
//!
//! ```
//! use rust_patience::core::{Card, CardId, Rank, Suit, Color};
//!
//! let card = Card::new(Rank::Queen, Suit::Hearts);
//! assert_eq!(card.color(), Color::Red);
//! assert_eq!(card.id(), CardId::of(Rank::Queen, Suit::Hearts));
//! assert!(!card.face_up);
//! ```

use serde::{Deserialize, Serialize};

/// Card rank, Ace low through King.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, Ace = 1 through King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// True if `self` is exactly one rank below `other`.
    ///
    /// This is the adjacency test behind both tableau runs (descending)
    /// and foundation building (ascending).
    #[must_use]
    pub const fn is_below(self, other: Rank) -> bool {
        self.value() + 1 == other.value()
    }

    /// Full rank name ("Queen").
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    /// Short rank label: "A", "2".."10", "J", "Q", "K".
    #[must_use]
    pub fn short(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, in the deck's canonical order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Dense index 0..4 in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    /// Black for clubs and spades, red for diamonds and hearts.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    /// Full suit name ("Hearts").
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// Dense index of a card identity in the table arena.
///
/// Exactly `CardId::COUNT` ids exist; the id is derived from and
/// convertible back to the (rank, suit) identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Number of cards in a single deck.
    pub const COUNT: usize = 52;

    /// Id of the card with the given identity.
    #[must_use]
    pub const fn of(rank: Rank, suit: Suit) -> Self {
        Self((suit.index() * 13) as u8 + rank.value() - 1)
    }

    /// Raw arena index.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0 as usize
    }

    /// Rank encoded in this id.
    #[must_use]
    pub fn rank(self) -> Rank {
        Rank::ALL[(self.0 % 13) as usize]
    }

    /// Suit encoded in this id.
    #[must_use]
    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 / 13) as usize]
    }

    /// Iterate over every card id in arena order.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..Self::COUNT as u8).map(CardId)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank().short(), &self.suit().name()[..1])
    }
}

/// A playing card in the table arena.
///
/// Identity never changes; `face_up` does. Cards are created face down
/// and revealed by the deal or by play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Arena id of this card's identity.
    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::of(self.rank, self.suit)
    }

    /// Card color, from the suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Toggle face state.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Set face state explicitly.
    pub fn flip_to(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Face-down cards can never be dragged.
    #[must_use]
    pub const fn is_movable(&self) -> bool {
        self.face_up
    }

    /// Short two-part label ("Qh", "10s").
    #[must_use]
    pub fn short_name(&self) -> String {
        format!("{}{}", self.rank.short(), self.suit.name()[..1].to_lowercase())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}
