//! Card parsing from the two-character wire codes (e.g., "7D", "QS")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn invalid(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::InvalidCard, format!("Invalid card code: {s}"))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid(s));
        };
        let rank = match rank_ch {
            'A' => Rank::Ace,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            'Q' => Rank::Queen,
            'J' => Rank::Jack,
            'K' => Rank::King,
            _ => return Err(invalid(s)),
        };
        let suit = match suit_ch {
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            'S' => Suit::Spades,
            _ => return Err(invalid(s)),
        };
        Ok(Card { rank, suit })
    }
}

impl Card {
    /// Parse a wire code; fails with `InvalidCard` outside the 40-card set.
    pub fn from_code(code: &str) -> Result<Card, DomainError> {
        code.parse()
    }
}

/// Non-panicking helper to parse card tokens (e.g., "7D", "AS") into Card instances.
/// Returns Result<Vec<Card>, DomainError> if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
