//! Capture enumeration and play validation.
//!
//! A card captures either one table card of equal value or, only when no
//! such card exists, any set of two or more table cards whose values sum to
//! it. Capturing is mandatory when every card in hand can capture.

use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, Seat};
use crate::domain::{cards_value, Card};
use crate::errors::domain::{DomainError, ValidationKind};

/// A candidate play: the card and the table cards it takes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub captures: Vec<Card>,
}

impl Move {
    pub fn new(card: Card, captures: Vec<Card>) -> Self {
        Self { card, captures }
    }

    /// Play the card to the table without capturing.
    pub fn place(card: Card) -> Self {
        Self {
            card,
            captures: Vec::new(),
        }
    }

    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

pub fn has_single_match(card: Card, table: &[Card]) -> bool {
    table.iter().any(|t| t.value() == card.value())
}

/// Every capture set for `card`, in enumeration order.
///
/// Single-card matches come first in table order and suppress combinations
/// entirely. Otherwise combinations are listed by size, and lexicographically
/// by table position within a size.
pub fn find_captures(card: Card, table: &[Card]) -> Vec<Vec<Card>> {
    let target = card.value();
    let singles: Vec<Vec<Card>> = table
        .iter()
        .filter(|t| t.value() == target)
        .map(|t| vec![*t])
        .collect();
    if !singles.is_empty() {
        return singles;
    }

    let mut combos = Vec::new();
    let mut picked = Vec::with_capacity(table.len());
    collect_sums(table, 0, target, 0, &mut picked, &mut combos);
    // DFS yields lexicographic index order; a stable sort by size groups them.
    combos.sort_by_key(|c: &Vec<Card>| c.len());
    combos
}

fn collect_sums(
    table: &[Card],
    start: usize,
    target: u8,
    sum: u8,
    picked: &mut Vec<Card>,
    out: &mut Vec<Vec<Card>>,
) {
    for (i, card) in table.iter().enumerate().skip(start) {
        let next = sum + card.value();
        if next > target {
            continue;
        }
        picked.push(*card);
        if next == target {
            if picked.len() >= 2 {
                out.push(picked.clone());
            }
        } else {
            collect_sums(table, i + 1, target, next, picked, out);
        }
        picked.pop();
    }
}

pub fn can_capture(card: Card, table: &[Card]) -> bool {
    !find_captures(card, table).is_empty()
}

fn same_set(a: &[Card], b: &[Card]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

impl GameState {
    pub fn find_captures(&self, card: Card) -> Vec<Vec<Card>> {
        find_captures(card, &self.table)
    }

    /// True when at least one hand card has nothing to capture.
    pub fn has_non_capturing_card(&self, seat: Seat) -> bool {
        self.hand(seat).iter().any(|c| !can_capture(*c, &self.table))
    }

    /// Raw candidates: every capture set per hand card, then a plain
    /// placement for every hand card. Placements are filtered for legality
    /// by `validate_play`, not here.
    pub fn legal_moves(&self, seat: Seat) -> Vec<Move> {
        let hand = self.hand(seat);
        let mut moves: Vec<Move> = hand
            .iter()
            .flat_map(|card| {
                self.find_captures(*card)
                    .into_iter()
                    .map(move |set| Move::new(*card, set))
            })
            .collect();
        moves.extend(hand.iter().map(|card| Move::place(*card)));
        moves
    }

    /// Candidates that `validate_play` accepts for `seat`.
    pub fn playable_moves(&self, seat: Seat) -> Vec<Move> {
        self.legal_moves(seat)
            .into_iter()
            .filter(|m| self.validate_play(seat, m.card, &m.captures).is_ok())
            .collect()
    }

    pub fn validate_play(&self, seat: Seat, card: Card, captures: &[Card]) -> Result<(), DomainError> {
        if self.is_finished {
            return Err(DomainError::validation(
                ValidationKind::GameFinished,
                "The game is over",
            ));
        }
        if seat != self.current_player {
            return Err(DomainError::validation(
                ValidationKind::NotPlayersTurn,
                format!("Seat {seat} cannot act; seat {} is to play", self.current_player),
            ));
        }
        if !self.hand(seat).contains(&card) {
            return Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("{card} is not in seat {seat}'s hand"),
            ));
        }

        let possible = self.find_captures(card);

        if captures.is_empty() {
            if possible.is_empty() || self.has_non_capturing_card(seat) {
                return Ok(());
            }
            return Err(DomainError::validation(
                ValidationKind::CaptureMandatory,
                "Every card in hand can capture; a capture is mandatory",
            ));
        }

        if let Some(missing) = captures.iter().find(|c| !self.table.contains(c)) {
            return Err(DomainError::validation(
                ValidationKind::CardNotOnTable,
                format!("{missing} is not on the table"),
            ));
        }
        let total = cards_value(captures);
        if total != u32::from(card.value()) {
            return Err(DomainError::validation(
                ValidationKind::CaptureSumMismatch,
                format!(
                    "Captured cards sum to {total}, {card} is worth {}",
                    card.value()
                ),
            ));
        }
        if captures.len() > 1 && has_single_match(card, &self.table) {
            return Err(DomainError::validation(
                ValidationKind::ComboNotAllowed,
                format!("{card} has a single matching card; combinations are not allowed"),
            ));
        }
        if !possible.iter().any(|set| same_set(set, captures)) {
            return Err(DomainError::validation(
                ValidationKind::InvalidCaptureCombination,
                "Capture set is not a valid combination",
            ));
        }
        Ok(())
    }

    /// Move played on a seat's behalf: the first hand card placed without
    /// capturing, or its first capture set when placing is not allowed.
    pub fn fallback_move(&self, seat: Seat) -> Option<Move> {
        let card = *self.hand(seat).first()?;
        match self.validate_play(seat, card, &[]) {
            Ok(()) => Some(Move::place(card)),
            Err(DomainError::Validation(ValidationKind::CaptureMandatory, _)) => self
                .find_captures(card)
                .into_iter()
                .next()
                .map(|set| Move::new(card, set)),
            Err(_) => None,
        }
    }
}
