//! Core card-related types: Card, Rank, Suit

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Single-character wire code (`H`, `D`, `C`, `S`).
    pub const fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

/// The ten ranks of the 40-card deck. There are no 8s, 9s or 10s; the
/// court cards take the values 8 (Q), 9 (J) and 10 (K).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Queen,
    Jack,
    King,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
    ];

    /// Capture value: A=1 … 7=7, Q=8, J=9, K=10.
    pub const fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Queen => 8,
            Rank::Jack => 9,
            Rank::King => 10,
        }
    }

    pub const fn code(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::King => 'K',
        }
    }
}

/// Immutable card identity. Equality and hashing follow the two-character
/// code, which is unique per card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// The 7 of Diamonds.
pub const HAYA: Card = Card {
    rank: Rank::Seven,
    suit: Suit::Diamonds,
};

/// The 7 of Clubs.
pub const DINARI: Card = Card {
    rank: Rank::Seven,
    suit: Suit::Clubs,
};

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Two-character wire code, e.g. `7D`.
    pub fn code(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.rank.code());
        s.push(self.suit.code());
        s
    }

    #[inline]
    pub fn is_haya(self) -> bool {
        self == HAYA
    }

    #[inline]
    pub fn is_dinari(self) -> bool {
        self == DINARI
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

// Note: Ord on Card is only for stable display sorting: suit order H<D<C<S
// then rank order. Capture logic works on values, never on this ordering.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sum of card values. Widened so arbitrary caller input cannot overflow.
pub fn cards_value(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.value())).sum()
}
