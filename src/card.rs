//! Card types for the 40-card Spanish deck.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Coins.
    Oros,
    /// Cups.
    Copas,
    /// Swords.
    Espadas,
    /// Clubs.
    Bastos,
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Oros, Self::Copas, Self::Espadas, Self::Bastos];

    /// Returns the lowercase Spanish name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Oros => "oros",
            Self::Copas => "copas",
            Self::Espadas => "espadas",
            Self::Bastos => "bastos",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank. The Spanish deck has no 8 or 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace.
    As,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Jack.
    Sota,
    /// Knight.
    Caballo,
    /// King.
    Rey,
}

impl Rank {
    /// All ranks, in deck-building order.
    pub const ALL: [Self; 10] = [
        Self::As,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Sota,
        Self::Caballo,
        Self::Rey,
    ];

    /// Returns the comparison value of the rank (1 to 10).
    ///
    /// The ordering is not the face order: the ace beats everything and the
    /// three beats every figure.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 1,
            Self::Four => 2,
            Self::Five => 3,
            Self::Six => 4,
            Self::Seven => 5,
            Self::Sota => 6,
            Self::Caballo => 7,
            Self::Rey => 8,
            Self::Three => 9,
            Self::As => 10,
        }
    }

    /// Returns the printed name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::As => "As",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Sota => "Sota",
            Self::Caballo => "Caballo",
            Self::Rey => "Rey",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the value used to compare this card against another.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank, self.suit)
    }
}

/// Number of cards in a Spanish deck.
pub const DECK_SIZE: usize = 40;
